//! Endpoint hooks against representative service responses.

use alchemy_api::{
    parse, Analysis, EndpointKind, RankedEntities, RankedKeywords, SentimentLabel, Status,
    TextSentiment,
};

const KEYWORDS_WITH_SENTIMENT: &str = r#"{
    "status": "OK",
    "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use: http://www.alchemyapi.com/company/terms.html",
    "url": "http://www.bartleby.com/124/pres32.html",
    "language": "english",
    "keywords": [
        { "text": "civil war", "relevance": "0.975", "sentiment": { "type": "negative", "score": "-0.47", "mixed": "1" } },
        { "text": "impending civil war", "relevance": "0.812", "sentiment": { "type": "neutral" } },
        { "text": "Justice Salmon Chase", "relevance": "0.611", "sentiment": { "type": "positive", "score": "0.23" } }
    ]
}"#;

#[test]
fn keywords_with_nested_sentiment() {
    let r = parse(&RankedKeywords, KEYWORDS_WITH_SENTIMENT);
    assert_eq!(r.status, Status::Ok);
    assert_eq!(r.url.as_deref(), Some("http://www.bartleby.com/124/pres32.html"));

    let texts: Vec<_> = r.payload.iter().filter_map(|k| k.text.as_deref()).collect();
    assert_eq!(texts, ["civil war", "impending civil war", "Justice Salmon Chase"]);

    let first = r.payload[0].sentiment.as_ref().unwrap();
    assert_eq!(first.label, Some(SentimentLabel::Negative));
    assert_eq!(first.score, Some(-0.47));
    assert_eq!(first.mixed, Some(true));

    let second = r.payload[1].sentiment.as_ref().unwrap();
    assert_eq!(second.label, Some(SentimentLabel::Neutral));
    assert_eq!(second.score, None);
}

#[test]
fn sentiment_mixed_flag_spellings() {
    for (mixed, expected) in [(r#""1""#, true), (r#""yes""#, true), ("true", true), (r#""0""#, false), ("{}", false)] {
        let raw = format!(r#"{{"docSentiment":{{"type":"positive","mixed":{mixed}}}}}"#);
        let r = parse(&TextSentiment, raw.as_str());
        assert_eq!(r.payload.unwrap().mixed, Some(expected), "{mixed}");
    }
}

#[test]
fn entities_tolerate_partial_records() {
    let r = parse(
        &RankedEntities,
        r#"{"status":"OK","entities":[
            {"type":"Person","text":"Lincoln","count":"two"},
            {"type":"Company","text":"IBM","relevance":"high","disambiguated":[]}
        ]}"#,
    );
    assert_eq!(r.payload.len(), 2);
    assert_eq!(r.payload[0].count, None);
    assert_eq!(r.payload[1].relevance, None);
    assert!(r.payload[1].disambiguated.is_none());
}

#[test]
fn runtime_dispatch_matches_static_parse() {
    match EndpointKind::Keywords.parse(KEYWORDS_WITH_SENTIMENT) {
        Analysis::Keywords(r) => assert_eq!(r, parse(&RankedKeywords, KEYWORDS_WITH_SENTIMENT)),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn error_body_yields_empty_payloads() {
    let raw = r#"{"status":"ERROR","statusInfo":"invalid-api-key"}"#;
    for kind in EndpointKind::ALL {
        let a = kind.parse(raw);
        assert_eq!(a.envelope().status, Status::Error, "{kind}");
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["statusInfo"], serde_json::Value::Null, "{kind}");
        assert_eq!(v["status_info"], "invalid-api-key", "{kind}");
    }
}
