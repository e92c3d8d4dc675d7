//! Envelope parsing and the per-endpoint extension point.
//!
//! [`parse`] is a single pass over a raw response body:
//!
//! 1. Build a [`Document`] with [`parse_document`] (never fails).
//! 2. Copy the envelope fields listed in [`keys`] into a [`Response`].
//! 3. Map `status` onto [`Status`].
//! 4. Hand the document and the partially filled response to the
//!    [`Endpoint`] hook.
//!
//! The document is dropped when `parse` returns; only the typed response
//! outlives the call.

use tracing::debug;

use crate::json::{get_string, parse_document, Document};
use crate::types::{Response, Status};

/// Wire names of the envelope fields.
pub mod keys {
    pub const STATUS: &str = "status";
    pub const STATUS_INFO: &str = "statusInfo";
    /// Older API revisions spell `statusInfo` in snake case.
    pub const STATUS_INFO_LEGACY: &str = "status_info";
    pub const USAGE: &str = "usage";
    pub const URL: &str = "url";
    pub const LANGUAGE: &str = "language";
    pub const TEXT: &str = "text";
}

/// Extracts endpoint-specific fields once the envelope has been read.
///
/// Implementations should use the tolerant accessors in [`crate::json`] so a
/// missing or mis-shaped field leaves the payload at its default instead of
/// aborting the parse.
pub trait Endpoint {
    /// What this endpoint adds on top of the envelope.
    type Payload: Default;

    /// Fill `response.payload` (and, if needed, adjust envelope fields)
    /// from `doc`.
    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>);
}

/// An endpoint with no fields beyond the envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelope;

impl Endpoint for Envelope {
    type Payload = ();

    fn populate(&self, _doc: &Document, _response: &mut Response) {}
}

/// Parse a raw response body into a typed [`Response`].
///
/// Never fails: absent or malformed input produces a response with every
/// field unset and [`Status::Unset`]. Deterministic for identical input.
///
/// ```rust
/// use alchemy_api::{parse, Envelope, Status};
///
/// let r = parse(&Envelope, r#"{"status":"OK","language":"english"}"#);
/// assert_eq!(r.status, Status::Ok);
/// assert_eq!(r.language.as_deref(), Some("english"));
///
/// let r = parse(&Envelope, "{");
/// assert_eq!(r.status, Status::Unset);
/// ```
pub fn parse<'a, E>(endpoint: &E, raw: impl Into<Option<&'a str>>) -> Response<E::Payload>
where
    E: Endpoint + ?Sized,
{
    let doc = parse_document(raw);

    let status_raw = get_string(&doc, keys::STATUS);
    let status = Status::from_wire(status_raw.as_deref());
    if let (Some(raw), Status::Unset) = (&status_raw, status) {
        debug!(status = %raw, "unrecognised status token; treating as unset");
    }

    let mut response = Response {
        status,
        status_info: get_string(&doc, keys::STATUS_INFO)
            .or_else(|| get_string(&doc, keys::STATUS_INFO_LEGACY)),
        usage: get_string(&doc, keys::USAGE),
        url: get_string(&doc, keys::URL),
        language: get_string(&doc, keys::LANGUAGE),
        text: get_string(&doc, keys::TEXT),
        payload: E::Payload::default(),
    };

    endpoint.populate(&doc, &mut response);
    response
}
