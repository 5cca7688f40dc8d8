//! Typed document tree and the conversion from the parser's generic AST
//!
//! The external djot parser hands back an untyped JSON tree where every node
//! carries a `tag` discriminant. This module converts that tree, depth-first
//! and order-preserving, into a closed set of typed node kinds. Conversion is
//! purely structural: no text is trimmed, normalized, or validated here.

use crate::error::{DlogError, Result};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Root of a typed document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub children: Vec<Block>,
    /// Link reference table, passed through uninterpreted
    pub references: Value,
    /// Footnote table, passed through uninterpreted
    pub footnotes: Value,
}

/// Block-level node
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Section(Section),
    Heading(Heading),
    /// A tolerated-but-uninterpreted block kind (currently `bullet_list`),
    /// carrying its original generic payload
    Opaque(Value),
}

/// A section grouping, keyed by its attribute map
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Block>,
}

/// A heading with inline content
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub children: Vec<Inline>,
}

/// Inline-level node
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    SoftBreak,
}

impl Document {
    /// Type a generic parsed tree rooted at a `doc` node.
    pub fn from_value(value: &Value) -> Result<Document> {
        let tag = tag_of(value, "root")?;
        if tag != "doc" {
            return Err(DlogError::Shape {
                context: format!("root: expected `doc` node, found `{}`", tag),
            });
        }

        Ok(Document {
            children: classify_children(value, "doc")?,
            references: value.get("references").cloned().unwrap_or(Value::Null),
            footnotes: value.get("footnotes").cloned().unwrap_or(Value::Null),
        })
    }

    /// Re-serialize into the generic representation the parser produces.
    pub fn to_value(&self) -> Value {
        json!({
            "tag": "doc",
            "references": self.references,
            "footnotes": self.footnotes,
            "children": self.children.iter().map(Block::to_value).collect::<Vec<_>>(),
        })
    }
}

impl Block {
    pub fn to_value(&self) -> Value {
        match self {
            Block::Section(section) => json!({
                "tag": "section",
                "attributes": section.attributes,
                "children": section.children.iter().map(Block::to_value).collect::<Vec<_>>(),
            }),
            Block::Heading(heading) => json!({
                "tag": "heading",
                "level": heading.level,
                "children": heading.children.iter().map(Inline::to_value).collect::<Vec<_>>(),
            }),
            Block::Opaque(payload) => payload.clone(),
        }
    }
}

impl Inline {
    pub fn to_value(&self) -> Value {
        match self {
            Inline::Text(text) => json!({ "tag": "str", "text": text }),
            Inline::SoftBreak => json!({ "tag": "soft_break" }),
        }
    }
}

/// Type one generic node in block position.
pub fn classify_block(value: &Value) -> Result<Block> {
    match tag_of(value, "block")? {
        "section" => Ok(Block::Section(Section {
            attributes: attributes_of(value)?,
            children: classify_children(value, "section")?,
        })),
        "heading" => {
            let level = value
                .get("level")
                .and_then(Value::as_u64)
                .and_then(|l| u8::try_from(l).ok())
                .ok_or_else(|| DlogError::Shape {
                    context: "heading: missing or invalid `level` field".to_string(),
                })?;
            let children = raw_children(value, "heading")?
                .iter()
                .map(classify_inline)
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::Heading(Heading { level, children }))
        }
        "bullet_list" => Ok(Block::Opaque(value.clone())),
        tag @ ("str" | "soft_break") => Err(DlogError::Shape {
            context: format!("block position: found inline node `{}`", tag),
        }),
        tag => Err(DlogError::UnknownTag(tag.to_string())),
    }
}

/// Type one generic node in inline position.
pub fn classify_inline(value: &Value) -> Result<Inline> {
    match tag_of(value, "inline")? {
        "str" => {
            let text = value
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| DlogError::Shape {
                    context: "str: missing `text` field".to_string(),
                })?;
            Ok(Inline::Text(text.to_string()))
        }
        "soft_break" => Ok(Inline::SoftBreak),
        tag @ ("doc" | "section" | "heading" | "bullet_list") => Err(DlogError::Shape {
            context: format!("inline position: found block node `{}`", tag),
        }),
        tag => Err(DlogError::UnknownTag(tag.to_string())),
    }
}

/// Read the `children` array of a generic node.
pub(crate) fn raw_children<'a>(value: &'a Value, context: &str) -> Result<&'a [Value]> {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| DlogError::Shape {
            context: format!("{}: missing `children` array", context),
        })
}

fn classify_children(value: &Value, context: &str) -> Result<Vec<Block>> {
    raw_children(value, context)?
        .iter()
        .map(classify_block)
        .collect()
}

fn tag_of<'a>(value: &'a Value, context: &str) -> Result<&'a str> {
    value
        .get("tag")
        .and_then(Value::as_str)
        .ok_or_else(|| DlogError::Shape {
            context: format!("{}: node has no `tag` field", context),
        })
}

fn attributes_of(value: &Value) -> Result<BTreeMap<String, String>> {
    let Some(attributes) = value.get("attributes") else {
        return Ok(BTreeMap::new());
    };
    let map = attributes.as_object().ok_or_else(|| DlogError::Shape {
        context: "section: `attributes` is not an object".to_string(),
    })?;

    map.iter()
        .map(|(key, val)| {
            let val = val.as_str().ok_or_else(|| DlogError::Shape {
                context: format!("section: attribute `{}` is not a string", key),
            })?;
            Ok((key.clone(), val.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Value {
        json!({
            "tag": "doc",
            "references": {},
            "footnotes": {},
            "children": [
                {
                    "tag": "section",
                    "attributes": { "id": "2023-12-03" },
                    "children": [
                        {
                            "tag": "heading",
                            "level": 1,
                            "children": [{ "tag": "str", "text": "2023-12-03" }]
                        },
                        {
                            "tag": "bullet_list",
                            "tight": true,
                            "style": "-",
                            "children": []
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_typing_a_document() {
        let doc = Document::from_value(&sample_doc()).unwrap();

        assert_eq!(doc.children.len(), 1);
        let Block::Section(section) = &doc.children[0] else {
            panic!("expected section");
        };
        assert_eq!(section.attributes["id"], "2023-12-03");
        assert!(matches!(&section.children[0], Block::Heading(h) if h.level == 1));
        assert!(matches!(&section.children[1], Block::Opaque(_)));
    }

    #[test]
    fn test_root_must_be_doc() {
        let err = Document::from_value(&json!({ "tag": "section", "children": [] })).unwrap_err();
        assert!(matches!(err, DlogError::Shape { .. }));
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let value = json!({
            "tag": "doc",
            "children": [{ "tag": "thematic_break" }]
        });
        let err = Document::from_value(&value).unwrap_err();
        assert!(matches!(err, DlogError::UnknownTag(tag) if tag == "thematic_break"));
    }

    #[test]
    fn test_missing_tag_field_is_shape_error() {
        let err = classify_block(&json!({ "children": [] })).unwrap_err();
        assert!(matches!(err, DlogError::Shape { .. }));
    }

    #[test]
    fn test_inline_in_block_position() {
        let err = classify_block(&json!({ "tag": "str", "text": "x" })).unwrap_err();
        assert!(matches!(err, DlogError::Shape { .. }));
    }

    #[test]
    fn test_heading_requires_level() {
        let err = classify_block(&json!({ "tag": "heading", "children": [] })).unwrap_err();
        assert!(matches!(err, DlogError::Shape { .. }));
    }

    #[test]
    fn test_child_order_preserved() {
        let value = json!({
            "tag": "heading",
            "level": 2,
            "children": [
                { "tag": "str", "text": "a" },
                { "tag": "soft_break" },
                { "tag": "str", "text": "b" }
            ]
        });
        let Block::Heading(heading) = classify_block(&value).unwrap() else {
            panic!("expected heading");
        };
        assert_eq!(
            heading.children,
            vec![
                Inline::Text("a".to_string()),
                Inline::SoftBreak,
                Inline::Text("b".to_string())
            ]
        );
    }

    #[test]
    fn test_opaque_keeps_payload() {
        let value = json!({ "tag": "bullet_list", "tight": true, "children": [] });
        let Block::Opaque(payload) = classify_block(&value).unwrap() else {
            panic!("expected opaque block");
        };
        assert_eq!(payload, value);
    }

    #[test]
    fn test_typing_is_idempotent() {
        let doc = Document::from_value(&sample_doc()).unwrap();
        let retyped = Document::from_value(&doc.to_value()).unwrap();
        assert_eq!(doc, retyped);
    }

    #[test]
    fn test_missing_attributes_default_to_empty() {
        let Block::Section(section) =
            classify_block(&json!({ "tag": "section", "children": [] })).unwrap()
        else {
            panic!("expected section");
        };
        assert!(section.attributes.is_empty());
    }
}
