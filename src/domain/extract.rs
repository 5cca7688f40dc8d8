//! Log extraction from a typed document
//!
//! Every top-level section is one calendar day: its `id` attribute is the
//! ISO date, its first child is the day heading, and the remaining children
//! are boundary sections whose leading heading is a time of day. Consecutive
//! boundaries pair up as (open, close) interval candidates; a boundary that
//! carries a tag block opens an entry, one without closes the previous
//! interval only.
//!
//! Extraction is strict: a bad date, a bad time, a broken tag list, or an
//! unexpected shape aborts the whole run. The single leniency is the skip
//! rule for tag-less boundary pairs.

use crate::domain::ast::{self, Block, Document, Inline, Section};
use crate::domain::log::{Day, Entry, TagPath};
use crate::error::{DlogError, Result};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;

/// Extract the work log, one `Day` per top-level section in document order.
pub fn extract(doc: &Document) -> Result<Vec<Day>> {
    doc.children.iter().map(day_from_section).collect()
}

fn day_from_section(block: &Block) -> Result<Day> {
    let Block::Section(section) = block else {
        return Err(DlogError::Shape {
            context: "top level: expected a day section".to_string(),
        });
    };

    let id = section.attributes.get("id").ok_or_else(|| DlogError::InvalidDate {
        section: "(missing id)".to_string(),
    })?;
    let date =
        NaiveDate::parse_from_str(id, "%Y-%m-%d").map_err(|_| DlogError::InvalidDate {
            section: id.clone(),
        })?;

    // Skip the day heading, then pair each element with its successor.
    // Pairs overlap: a boundary closes one candidate pair and opens the next.
    let body = section.children.get(1..).unwrap_or_default();
    let mut entries = Vec::new();
    for (pair, window) in body.windows(2).enumerate() {
        if let Some(entry) = entry_from_pair(id, pair, &window[0], &window[1])? {
            entries.push(entry);
        }
    }

    Ok(Day { date, entries })
}

/// Build an entry from one candidate pair, or `None` under the skip rule.
fn entry_from_pair(
    section_id: &str,
    pair: usize,
    start: &Block,
    end: &Block,
) -> Result<Option<Entry>> {
    let start = boundary(start, section_id, pair)?;

    // Skip rule: a boundary with only its time heading opens nothing. It can
    // still close the preceding interval, so this is not an error. The end
    // node is not looked at for a skipped pair.
    if start.children.len() == 1 {
        return Ok(None);
    }

    let tags = tag_paths(start, section_id, pair)?;
    let start_time = boundary_time(start, section_id, pair)?;
    let end = boundary(end, section_id, pair)?;

    Ok(Some(Entry {
        start: start_time,
        end: boundary_time(end, section_id, pair)?,
        tags,
    }))
}

fn boundary<'a>(block: &'a Block, section_id: &str, pair: usize) -> Result<&'a Section> {
    match block {
        Block::Section(section) => Ok(section),
        _ => Err(DlogError::Shape {
            context: format!(
                "section {}, pair {}: boundary is not a section",
                section_id, pair
            ),
        }),
    }
}

/// Read a boundary's time: the text of the first inline of its leading heading.
fn boundary_time(boundary: &Section, section_id: &str, pair: usize) -> Result<NaiveTime> {
    let heading = match boundary.children.first() {
        Some(Block::Heading(heading)) => heading,
        _ => {
            return Err(DlogError::Shape {
                context: format!(
                    "section {}, pair {}: boundary has no leading heading",
                    section_id, pair
                ),
            })
        }
    };
    let token = match heading.children.first() {
        Some(Inline::Text(text)) => text,
        _ => {
            return Err(DlogError::Shape {
                context: format!(
                    "section {}, pair {}: time heading has no text",
                    section_id, pair
                ),
            })
        }
    };

    NaiveTime::parse_from_str(token, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(token, "%H:%M"))
        .map_err(|_| DlogError::TimeParse {
            section: section_id.to_string(),
            pair,
            token: token.clone(),
        })
}

/// Read the tag block of an opening boundary into a set of tag paths.
///
/// The tag block is an opaque list node; its first child's children are the
/// flat alternating sequence of tag tokens and soft breaks. The inlines are
/// typed on demand here, not during document typing.
fn tag_paths(start: &Section, section_id: &str, pair: usize) -> Result<BTreeSet<TagPath>> {
    let payload = match start.children.get(1) {
        Some(Block::Opaque(payload)) => payload,
        _ => {
            return Err(DlogError::Shape {
                context: format!(
                    "section {}, pair {}: expected a tag block after the time heading",
                    section_id, pair
                ),
            })
        }
    };

    let context = format!("section {}, pair {}: tag block", section_id, pair);
    let item = ast::raw_children(payload, &context)?
        .first()
        .ok_or_else(|| DlogError::Shape {
            context: format!("{}: empty", context),
        })?;
    let tokens = ast::raw_children(item, &context)?
        .iter()
        .map(ast::classify_inline)
        .collect::<Result<Vec<_>>>()?;

    TagTokens::new(&tokens, section_id, pair).collect()
}

/// Validating iterator over a tag-token sequence.
///
/// Even positions must be text tokens (each yielding one tag path), odd
/// positions must be soft breaks; the first violation ends iteration with
/// `MalformedTagList`.
struct TagTokens<'a> {
    tokens: &'a [Inline],
    position: usize,
    section_id: &'a str,
    pair: usize,
}

impl<'a> TagTokens<'a> {
    fn new(tokens: &'a [Inline], section_id: &'a str, pair: usize) -> Self {
        TagTokens {
            tokens,
            position: 0,
            section_id,
            pair,
        }
    }
}

impl Iterator for TagTokens<'_> {
    type Item = Result<TagPath>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(token) = self.tokens.get(self.position) {
            let position = self.position;
            self.position += 1;
            match (token, position % 2 == 0) {
                (Inline::Text(text), true) => return Some(Ok(TagPath::parse(text))),
                (Inline::SoftBreak, false) => continue,
                _ => {
                    return Some(Err(DlogError::MalformedTagList {
                        section: self.section_id.to_string(),
                        pair: self.pair,
                        position,
                    }))
                }
            }
        }
        None
    }
}
