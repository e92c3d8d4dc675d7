//! Core result types: the response envelope shared by every endpoint.

use serde::Serialize;

/// Outcome reported by the service in the `status` field.
///
/// Serialises as the uppercase wire token (e.g. `"OK"`).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The call succeeded.
    Ok,
    /// The service rejected the call; see `status_info`.
    Error,
    /// The response carried no recognised status.
    #[default]
    Unset,
}

impl Status {
    /// Map a raw `status` value to a [`Status`]. Absent and unrecognised
    /// values are [`Status::Unset`].
    pub fn from_wire(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

/// Formats the status as its wire token.
impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Error => write!(f, "ERROR"),
            Status::Unset => write!(f, "UNSET"),
        }
    }
}

/// Parses the two tokens the service sends. `UNSET` is never sent and is
/// not accepted.
impl std::str::FromStr for Status {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Status::Ok),
            "ERROR" => Ok(Status::Error),
            _ => Err(format!("unknown status {:?}; expected one of: OK, ERROR", s)),
        }
    }
}

/// A parsed service response.
///
/// The envelope fields are common to every endpoint and are each optional
/// on their own: a missing `url` says nothing about `language`. `payload`
/// holds whatever the endpoint hook extracted; it is `()` for calls that
/// only need the envelope.
///
/// Built once by [`parse`](crate::parse) and handed to the caller. The
/// fields are public like the other wire types, but nothing in this crate
/// touches a response after `parse` returns it; treat it as read-only.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Response<P = ()> {
    pub status: Status,

    /// Human-readable detail, usually present only on errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_info: Option<String>,

    /// The service's terms-of-use notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Source URL echoed back for URL-based calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Detected language of the analyzed text (e.g. `"english"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Echoed or extracted input text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Endpoint-specific fields.
    pub payload: P,
}

impl<P> Response<P> {
    /// `true` when the service reported [`Status::Ok`].
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_wire() {
        assert_eq!(Status::from_wire(Some("OK")), Status::Ok);
        assert_eq!(Status::from_wire(Some("ERROR")), Status::Error);
        assert_eq!(Status::from_wire(None), Status::Unset);
    }

    #[test]
    fn unrecognised_status_is_unset() {
        assert_eq!(Status::from_wire(Some("ok")), Status::Unset);
        assert_eq!(Status::from_wire(Some("PENDING")), Status::Unset);
        assert_eq!(Status::from_wire(Some("UNSET")), Status::Unset);
        assert_eq!(Status::from_wire(Some("")), Status::Unset);
    }

    #[test]
    fn status_display_matches_wire() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Error.to_string(), "ERROR");
        assert_eq!("ERROR".parse::<Status>(), Ok(Status::Error));
    }

    #[test]
    fn status_serialises_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), r#""OK""#);
        assert_eq!(serde_json::to_string(&Status::Unset).unwrap(), r#""UNSET""#);
    }

    #[test]
    fn default_response_is_empty() {
        let r: Response = Response::default();
        assert_eq!(r.status, Status::Unset);
        assert!(r.status_info.is_none());
        assert!(r.usage.is_none());
        assert!(r.url.is_none());
        assert!(r.language.is_none());
        assert!(r.text.is_none());
        assert!(!r.is_ok());
    }

    #[test]
    fn absent_fields_are_not_serialised() {
        let r: Response = Response {
            status: Status::Ok,
            language: Some("english".into()),
            ..Response::default()
        };
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"status":"OK","language":"english","payload":null}"#
        );
    }
}
