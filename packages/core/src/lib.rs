//! Client-side support for the AlchemyAPI text-analytics service.
//!
//! This crate covers the two pieces of a client that are pure logic: the
//! check run on caller text before a request is made, and the mapping of a
//! loosely typed JSON response body onto typed results. It has **no I/O**;
//! the host makes the HTTP call and passes the body in.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validation`] | Pre-request text check via [`validate_text`] |
//! | [`json`] | Tolerant accessors that degrade instead of failing |
//! | [`types`] | The [`Response`] envelope and [`Status`] |
//! | [`parser`] | [`parse`] and the [`Endpoint`] extension point |
//! | [`endpoints`] | Hooks for sentiment, keywords, entities, language, category |
//!
//! # Error policy
//!
//! Validation fails loudly with a [`ValidationError`]. Parsing never fails:
//! missing or mis-shaped data comes back as `None`, an empty list, or
//! [`Status::Unset`], and an unparseable body is read as an empty object.
//!
//! # Quick start
//!
//! ```rust
//! use alchemy_api::{parse, validate_text, RankedKeywords, Status};
//!
//! validate_text("Justice Salmon Chase and the impending civil war")
//!     .expect("text should be long enough");
//!
//! // The host performs the HTTP call; here is a saved body.
//! let body = r#"{
//!     "status": "OK",
//!     "language": "english",
//!     "keywords": [{ "text": "civil war", "relevance": "0.98" }]
//! }"#;
//!
//! let response = parse(&RankedKeywords, body);
//! assert_eq!(response.status, Status::Ok);
//! assert_eq!(response.payload[0].text.as_deref(), Some("civil war"));
//! ```

pub mod endpoints;
pub mod json;
pub mod parser;
pub mod types;
pub mod validation;

pub use endpoints::{
    Analysis, Category, Disambiguation, EndpointKind, Entity, Keyword, LanguageDetection,
    LanguageInfo, RankedEntities, RankedKeywords, Sentiment, SentimentLabel, TextCategory,
    TextSentiment,
};
pub use json::Document;
pub use parser::{parse, Endpoint, Envelope};
pub use types::{Response, Status};
pub use validation::{validate_text, ValidationError, MIN_TEXT_LENGTH};
