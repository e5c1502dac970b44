use serde_json::{json, Value};
use tagcloud_core::TagCloud;

/// JSON description of a rendered cloud, written next to the HTML on request.
pub fn build_manifest(cloud: &TagCloud, source: &str) -> Value {
    json!({
        "source": source,
        "requested": cloud.requested,
        "selected": cloud.len(),
        "total_words": cloud.total_words,
        "distinct_words": cloud.distinct_words,
        "words": cloud.entries.iter().map(|e| {
            json!({
                "word": e.word,
                "count": e.count,
                "font_size": e.font_size.value()
            })
        }).collect::<Vec<_>>()
    })
}

pub fn manifest_to_string(manifest: &Value) -> String {
    let mut text =
        serde_json::to_string_pretty(manifest).unwrap_or_else(|_| manifest.to_string());
    text.push('\n');
    text
}
