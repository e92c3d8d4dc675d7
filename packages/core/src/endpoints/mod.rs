//! Endpoint hooks for the service's text-analytics calls.
//!
//! | Kind | Hook | Payload |
//! |------|------|---------|
//! | `envelope` | [`Envelope`](crate::Envelope) | `()` |
//! | `sentiment` | [`TextSentiment`] | `Option<`[`Sentiment`]`>` |
//! | `keywords` | [`RankedKeywords`] | `Vec<`[`Keyword`]`>` |
//! | `entities` | [`RankedEntities`] | `Vec<`[`Entity`]`>` |
//! | `language` | [`LanguageDetection`] | [`LanguageInfo`] |
//! | `category` | [`TextCategory`] | [`Category`] |
//!
//! Use the hook types with [`parse`] when the endpoint is known statically,
//! or [`EndpointKind::parse`] when it is chosen at runtime.

pub mod category;
pub mod entities;
pub mod keywords;
pub mod language;
pub mod sentiment;

pub use category::{Category, TextCategory};
pub use entities::{Disambiguation, Entity, RankedEntities};
pub use keywords::{Keyword, RankedKeywords};
pub use language::{LanguageDetection, LanguageInfo};
pub use sentiment::{Sentiment, SentimentLabel, TextSentiment};

use serde::Serialize;
use tracing::trace;

use crate::json::{get_array, get_object_at, Document};
use crate::parser::{parse, Envelope};
use crate::types::Response;

/// The object elements of the array under `key`, in wire order.
/// Anything else in the array is skipped.
pub(crate) fn objects<'d>(doc: &'d Document, key: &'d str) -> impl Iterator<Item = &'d Document> {
    let items = get_array(doc, key);
    (0..items.len()).filter_map(move |i| {
        let item = get_object_at(items, i);
        if item.is_none() {
            trace!(key, index = i, "skipping array element that is not an object");
        }
        item
    })
}

/// The endpoints this crate knows how to read, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Envelope,
    Sentiment,
    Keywords,
    Entities,
    Language,
    Category,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 6] = [
        EndpointKind::Envelope,
        EndpointKind::Sentiment,
        EndpointKind::Keywords,
        EndpointKind::Entities,
        EndpointKind::Language,
        EndpointKind::Category,
    ];

    /// Parse `raw` with this endpoint's hook.
    pub fn parse<'a>(self, raw: impl Into<Option<&'a str>>) -> Analysis {
        match self {
            EndpointKind::Envelope => Analysis::Envelope(parse(&Envelope, raw)),
            EndpointKind::Sentiment => Analysis::Sentiment(parse(&TextSentiment, raw)),
            EndpointKind::Keywords => Analysis::Keywords(parse(&RankedKeywords, raw)),
            EndpointKind::Entities => Analysis::Entities(parse(&RankedEntities, raw)),
            EndpointKind::Language => Analysis::Language(parse(&LanguageDetection, raw)),
            EndpointKind::Category => Analysis::Category(parse(&TextCategory, raw)),
        }
    }
}

/// Formats the kind as its lowercase name (e.g. `"keywords"`).
impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointKind::Envelope => write!(f, "envelope"),
            EndpointKind::Sentiment => write!(f, "sentiment"),
            EndpointKind::Keywords => write!(f, "keywords"),
            EndpointKind::Entities => write!(f, "entities"),
            EndpointKind::Language => write!(f, "language"),
            EndpointKind::Category => write!(f, "category"),
        }
    }
}

/// Parses an [`EndpointKind`] from its lowercase name.
///
/// Returns `Err` with a descriptive message if the name is not recognised.
impl std::str::FromStr for EndpointKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "envelope" => Ok(EndpointKind::Envelope),
            "sentiment" => Ok(EndpointKind::Sentiment),
            "keywords" => Ok(EndpointKind::Keywords),
            "entities" => Ok(EndpointKind::Entities),
            "language" => Ok(EndpointKind::Language),
            "category" => Ok(EndpointKind::Category),
            _ => Err(format!(
                "unknown endpoint {:?}; expected one of: \
                 envelope, sentiment, keywords, entities, language, category",
                s
            )),
        }
    }
}

/// A parsed response from an endpoint chosen at runtime.
///
/// Serialises as the inner [`Response`] with no variant tag.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Analysis {
    Envelope(Response),
    Sentiment(Response<Option<Sentiment>>),
    Keywords(Response<Vec<Keyword>>),
    Entities(Response<Vec<Entity>>),
    Language(Response<LanguageInfo>),
    Category(Response<Category>),
}

impl Analysis {
    /// Which endpoint produced this result.
    pub fn kind(&self) -> EndpointKind {
        match self {
            Analysis::Envelope(_) => EndpointKind::Envelope,
            Analysis::Sentiment(_) => EndpointKind::Sentiment,
            Analysis::Keywords(_) => EndpointKind::Keywords,
            Analysis::Entities(_) => EndpointKind::Entities,
            Analysis::Language(_) => EndpointKind::Language,
            Analysis::Category(_) => EndpointKind::Category,
        }
    }

    /// The envelope shared by every variant, without the payload.
    pub fn envelope(&self) -> Response {
        match self {
            Analysis::Envelope(r) => r.clone(),
            Analysis::Sentiment(r) => strip(r),
            Analysis::Keywords(r) => strip(r),
            Analysis::Entities(r) => strip(r),
            Analysis::Language(r) => strip(r),
            Analysis::Category(r) => strip(r),
        }
    }
}

fn strip<P>(r: &Response<P>) -> Response {
    Response {
        status: r.status,
        status_info: r.status_info.clone(),
        usage: r.usage.clone(),
        url: r.url.clone(),
        language: r.language.clone(),
        text: r.text.clone(),
        payload: (),
    }
}
