//! Named entity extraction — `entities[]`.

use serde::Serialize;

use crate::json::{
    get_array, get_double, get_integer, get_object, get_string, get_string_at, Document,
};
use crate::parser::Endpoint;
use crate::types::Response;

use super::objects;
use super::sentiment::{read_sentiment, Sentiment, SENTIMENT_KEY};

/// One named entity found in the text.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Entity {
    /// Entity class, e.g. `"Person"` or `"City"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,

    /// Number of mentions in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguated: Option<Disambiguation>,
}

/// Linked-data identity for an entity the service could resolve.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Disambiguation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Finer classes, e.g. `["Politician", "Lawyer"]`. Empty when absent.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbpedia: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freebase: Option<String>,
}

fn read_disambiguation(entity: &Document) -> Option<Disambiguation> {
    let block = get_object(entity, "disambiguated")?;
    let sub_types = get_array(block, "subType");
    Some(Disambiguation {
        name: get_string(block, "name"),
        sub_types: (0..sub_types.len())
            .filter_map(|i| get_string_at(sub_types, i))
            .collect(),
        website: get_string(block, "website"),
        dbpedia: get_string(block, "dbpedia"),
        freebase: get_string(block, "freebase"),
    })
}

/// `TextGetRankedNamedEntities` / `URLGetRankedNamedEntities`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedEntities;

impl Endpoint for RankedEntities {
    type Payload = Vec<Entity>;

    fn populate(&self, doc: &Document, response: &mut Response<Self::Payload>) {
        response.payload = objects(doc, "entities")
            .map(|item| Entity {
                entity_type: get_string(item, "type"),
                text: get_string(item, "text"),
                relevance: get_double(item, "relevance"),
                count: get_integer(item, "count"),
                sentiment: read_sentiment(item, SENTIMENT_KEY),
                disambiguated: read_disambiguation(item),
            })
            .collect();
    }
}
