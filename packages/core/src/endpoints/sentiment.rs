//! Document-level sentiment — `docSentiment`.
//!
//! The [`Sentiment`] block also appears inside keyword and entity results,
//! so [`read_sentiment`] is shared with those hooks.

use serde::Serialize;

use crate::json::{get_boolean, get_double, get_object, get_string, Document};
use crate::parser::Endpoint;
use crate::types::Response;

/// Polarity of a sentiment result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(format!(
                "unknown sentiment {:?}; expected one of: positive, negative, neutral",
                s
            )),
        }
    }
}

/// A sentiment block: `{ "type": "positive", "score": "0.53", "mixed": "1" }`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Sentiment {
    /// `None` when `type` is absent or not one of the known labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<SentimentLabel>,

    /// Strength in `[-1.0, 1.0]`. Absent for neutral results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Whether the text carries both positive and negative sentiment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed: Option<bool>,
}

pub(crate) const SENTIMENT_KEY: &str = "sentiment";
const DOC_SENTIMENT_KEY: &str = "docSentiment";

/// Read a sentiment block nested under `key`, if there is one.
pub(crate) fn read_sentiment(doc: &Document, key: &str) -> Option<Sentiment> {
    let block = get_object(doc, key)?;
    Some(Sentiment {
        label: get_string(block, "type").and_then(|t| t.parse().ok()),
        score: get_double(block, "score"),
        mixed: get_boolean(block, "mixed"),
    })
}

/// `TextGetTextSentiment` / `URLGetTextSentiment`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSentiment;

impl Endpoint for TextSentiment {
    type Payload = Option<Sentiment>;

    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>) {
        response.payload = read_sentiment(doc, DOC_SENTIMENT_KEY);
    }
}
