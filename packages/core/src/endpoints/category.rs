//! Text categorization.

use serde::Serialize;

use crate::json::{get_double, get_string, Document};
use crate::parser::Endpoint;
use crate::types::Response;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Category {
    /// Category name, e.g. `"arts_entertainment"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Confidence in `[0.0, 1.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// `TextGetCategory` / `URLGetCategory`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCategory;

impl Endpoint for TextCategory {
    type Payload = Category;

    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>) {
        response.payload = Category {
            category: get_string(doc, "category"),
            score: get_double(doc, "score"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn category_and_string_score() {
        let r = parse(
            &TextCategory,
            r#"{"status":"OK","category":"culture_politics","score":"0.741"}"#,
        );
        assert_eq!(r.payload.category.as_deref(), Some("culture_politics"));
        assert_eq!(r.payload.score, Some(0.741));
    }

    #[test]
    fn unknown_category() {
        let r = parse(&TextCategory, r#"{"status":"OK","category":"unknown"}"#);
        assert_eq!(r.payload.category.as_deref(), Some("unknown"));
        assert_eq!(r.payload.score, None);
    }
}
