use assert_cmd::Command;
use serde_json::{json, Value};

pub fn dlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dlog").unwrap();
    cmd.env_remove("DLOG_PARSER");
    cmd
}

/// Boundary section fixture: a time heading plus an optional tag block
pub fn boundary(time: &str, tags: &[&str]) -> Value {
    let mut children = vec![json!({
        "tag": "heading",
        "level": 2,
        "children": [{ "tag": "str", "text": time }]
    })];
    if !tags.is_empty() {
        let mut tokens = Vec::new();
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                tokens.push(json!({ "tag": "soft_break" }));
            }
            tokens.push(json!({ "tag": "str", "text": tag }));
        }
        children.push(json!({
            "tag": "bullet_list",
            "tight": true,
            "style": "-",
            "children": [{ "tag": "para", "children": tokens }]
        }));
    }
    json!({
        "tag": "section",
        "attributes": { "id": time.replace(':', "-") },
        "children": children
    })
}

/// Day section fixture: a date heading plus its boundaries
pub fn day(id: &str, boundaries: Vec<Value>) -> Value {
    let mut children = vec![json!({
        "tag": "heading",
        "level": 1,
        "children": [{ "tag": "str", "text": id }]
    })];
    children.extend(boundaries);
    json!({
        "tag": "section",
        "attributes": { "id": id },
        "children": children
    })
}

/// Document fixture wrapping day sections
pub fn doc(days: Vec<Value>) -> Value {
    json!({
        "tag": "doc",
        "references": {},
        "footnotes": {},
        "children": days
    })
}
