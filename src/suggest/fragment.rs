//! Suggestion fragment parsing
//!
//! The suggest endpoint answers with an HTML fragment meant to be swapped
//! into the dropdown container. Every element whose class list contains
//! `autocomplete-item` contributes one suggestion; its text content (tags
//! stripped, basic entities decoded, surrounding template whitespace
//! trimmed) becomes the display text. Document order is preserved.
//!
//! This is a scanner for well-formed server fragments, not a general HTML
//! parser: unknown entities pass through verbatim and a truncated tag ends
//! the scan.

use memchr::memchr;

use super::suggest_state::SuggestionItem;

const ITEM_CLASS: &str = "autocomplete-item";

/// Elements that never take a closing tag
const VOID_ELEMENTS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "wbr"];

#[derive(Debug, PartialEq, Eq)]
enum TagKind {
    /// Opening tag that expects a matching close
    Open,
    /// Opening tag with no content (void element or `/>`)
    OpenVoid,
    Close,
    /// Comment, doctype, processing instruction
    Skip,
}

struct Tag<'a> {
    kind: TagKind,
    /// Attribute section of an opening tag
    attrs: &'a str,
    /// Byte offset just past the closing `>`
    end: usize,
}

/// Extract the suggestion items from a fragment.
pub fn parse_items(fragment: &str) -> Vec<SuggestionItem> {
    let bytes = fragment.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let Some(tag) = read_tag(fragment, pos + offset) else {
            break;
        };
        pos = tag.end;
        if tag.kind == TagKind::Open && has_item_class(tag.attrs) {
            let (text, after) = collect_text(fragment, tag.end);
            let text = text.trim();
            if !text.is_empty() {
                items.push(SuggestionItem::new(text));
            }
            pos = after;
        }
    }

    items
}

/// Parse the tag starting at `start` (which points at `<`).
fn read_tag(fragment: &str, start: usize) -> Option<Tag<'_>> {
    let rest = &fragment[start..];

    if rest.starts_with("<!--") {
        let end = rest.find("-->").map(|i| start + i + 3)?;
        return Some(Tag {
            kind: TagKind::Skip,
            attrs: "",
            end,
        });
    }

    let close = memchr(b'>', rest.as_bytes())?;
    let end = start + close + 1;
    let inner = &rest[1..close];

    if inner.starts_with('/') {
        return Some(Tag {
            kind: TagKind::Close,
            attrs: "",
            end,
        });
    }
    if inner.starts_with('!') || inner.starts_with('?') {
        return Some(Tag {
            kind: TagKind::Skip,
            attrs: "",
            end,
        });
    }

    let name_end = inner
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(inner.len());
    let name = inner[..name_end].trim_end_matches('/');
    let attrs = &inner[name_end..];

    let void = inner.ends_with('/') || VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str());
    Some(Tag {
        kind: if void { TagKind::OpenVoid } else { TagKind::Open },
        attrs,
        end,
    })
}

/// Does the attribute section carry a class list containing the item class?
fn has_item_class(attrs: &str) -> bool {
    let mut rest = attrs;
    while let Some(idx) = rest.find("class") {
        let at_word_start = idx == 0 || rest.as_bytes()[idx - 1].is_ascii_whitespace();
        let after = rest[idx + 5..].trim_start();
        if at_word_start && let Some(value) = after.strip_prefix('=') {
            let value = value.trim_start();
            let mut chars = value.chars();
            if let Some(quote @ ('"' | '\'')) = chars.next()
                && let Some(end) = value[1..].find(quote)
            {
                return value[1..1 + end]
                    .split_ascii_whitespace()
                    .any(|class| class == ITEM_CLASS);
            }
            return false;
        }
        rest = &rest[idx + 5..];
    }
    false
}

/// Collect the text content from just past an item's opening tag to its
/// matching close. Returns the text and the offset past the closing tag.
fn collect_text(fragment: &str, mut pos: usize) -> (String, usize) {
    let bytes = fragment.as_bytes();
    let mut depth = 1usize;
    let mut text = String::new();

    while depth > 0 {
        let Some(offset) = memchr(b'<', &bytes[pos..]) else {
            // Unterminated item: take what we have
            text.push_str(&fragment[pos..]);
            pos = fragment.len();
            break;
        };
        text.push_str(&fragment[pos..pos + offset]);
        let Some(tag) = read_tag(fragment, pos + offset) else {
            pos = fragment.len();
            break;
        };
        match tag.kind {
            TagKind::Open => depth += 1,
            TagKind::Close => depth -= 1,
            TagKind::OpenVoid | TagKind::Skip => {}
        }
        pos = tag.end;
    }

    (decode_entities(&text), pos)
}

/// Decode the handful of entities server templates actually emit.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        // An entity is at most a few bytes; anything longer is plain text
        match rest.find(';').filter(|end| *end < 8) {
            Some(end) => {
                let entity = &rest[..=end];
                match entity {
                    "&amp;" => out.push('&'),
                    "&lt;" => out.push('<'),
                    "&gt;" => out.push('>'),
                    "&quot;" => out.push('"'),
                    "&#39;" | "&apos;" => out.push('\''),
                    "&nbsp;" => out.push(' '),
                    _ => out.push_str(entity),
                }
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod fragment_tests;
