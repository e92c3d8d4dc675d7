//! Language detection. The language name itself is an envelope field; this
//! hook reads the reference codes and links that accompany it.

use serde::Serialize;

use crate::json::{get_string, Document};
use crate::parser::Endpoint;
use crate::types::Response;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LanguageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_639_1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_639_2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_639_3: Option<String>,

    /// Ethnologue reference URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnologue: Option<String>,

    /// Free-form estimate, e.g. `"309-400 million"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_speakers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
}

/// `TextGetLanguage` / `URLGetLanguage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetection;

impl Endpoint for LanguageDetection {
    type Payload = LanguageInfo;

    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>) {
        response.payload = LanguageInfo {
            iso_639_1: get_string(doc, "iso-639-1"),
            iso_639_2: get_string(doc, "iso-639-2"),
            iso_639_3: get_string(doc, "iso-639-3"),
            ethnologue: get_string(doc, "ethnologue"),
            native_speakers: get_string(doc, "native-speakers"),
            wikipedia: get_string(doc, "wikipedia"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn codes_and_links() {
        let r = parse(
            &LanguageDetection,
            r#"{"status":"OK","language":"english","iso-639-1":"en","iso-639-2":"eng",
                "iso-639-3":"eng","ethnologue":"http://www.ethnologue.com/show_language.asp?code=eng",
                "native-speakers":"309-400 million","wikipedia":"http://en.wikipedia.org/wiki/English_language"}"#,
        );
        assert_eq!(r.language.as_deref(), Some("english"));
        assert_eq!(r.payload.iso_639_1.as_deref(), Some("en"));
        assert_eq!(r.payload.iso_639_3.as_deref(), Some("eng"));
        assert_eq!(r.payload.native_speakers.as_deref(), Some("309-400 million"));
    }

    #[test]
    fn missing_codes_stay_unset() {
        let r = parse(&LanguageDetection, r#"{"status":"OK","language":"latin"}"#);
        assert_eq!(r.payload, LanguageInfo::default());
    }
}
