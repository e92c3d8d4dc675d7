//! Ranked keyword extraction — `keywords[]`.

use serde::Serialize;

use crate::json::{get_double, get_string, Document};
use crate::parser::Endpoint;
use crate::types::Response;

use super::objects;
use super::sentiment::{read_sentiment, Sentiment, SENTIMENT_KEY};

/// One extracted keyword.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Keyword {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Relevance in `[0.0, 1.0]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,

    /// Present only when the call asked for keyword sentiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// `TextGetRankedKeywords` / `URLGetRankedKeywords`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedKeywords;

impl Endpoint for RankedKeywords {
    type Payload = Vec<Keyword>;

    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>) {
        response.payload = objects(doc, "keywords")
            .map(|item| Keyword {
                text: get_string(item, "text"),
                relevance: get_double(item, "relevance"),
                sentiment: read_sentiment(item, SENTIMENT_KEY),
            })
            .collect();
    }
}
