/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Small helpers for scraping the semi-structured markup the site returns.
//!
//! The responses are a mix of XML envelopes and HTML fragments with no schema,
//! so these helpers stay deliberately forgiving: tag names are matched without
//! regard to case, attribute quoting may be double, single or absent, and
//! `CDATA` sections are unwrapped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

static CDATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid cdata regex"));

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/=`]+))"#,
    )
    .expect("valid attribute regex")
});

static NUMERIC_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([xX][0-9a-fA-F]+|[0-9]+);").expect("valid entity regex"));

/// Returns the raw inner markup of the first match of an element regex
///
/// The regex must capture the element content in group 1.
pub fn first_inner<'a>(element: &Regex, doc: &'a str) -> Option<&'a str> {
    element
        .captures(doc)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

/// Returns the raw inner markup of every match of an element regex, in document order
pub fn all_inner<'a>(element: &Regex, doc: &'a str) -> Vec<&'a str> {
    element
        .captures_iter(doc)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .collect()
}

/// Decodes the predefined XML entities and numeric character references
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let numeric = NUMERIC_ENTITY_RE.replace_all(text, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });
    numeric
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Removes every tag, keeping only the text between them
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").into_owned()
}

/// Text content of an XML element: tags dropped, entities decoded, CDATA kept verbatim
pub fn xml_text(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut last = 0;
    for caps in CDATA_RE.captures_iter(inner) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        out.push_str(&decode_entities(&strip_tags(&inner[last..whole.start])));
        out.push_str(caps.get(1).map_or("", |m| m.as_str()));
        last = whole.end;
    }
    out.push_str(&decode_entities(&strip_tags(&inner[last..])));
    out
}

/// Content of an element that carries escaped markup
///
/// CDATA wrappers are removed and entities decoded, but tags are kept so the
/// embedded fragment can be scraped in turn.
pub fn markup_text(inner: &str) -> String {
    // CDATA content is literal, only the surrounding text is escaped
    let mut out = String::with_capacity(inner.len());
    let mut last = 0;
    for caps in CDATA_RE.captures_iter(inner) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        out.push_str(&decode_entities(&inner[last..whole.start]));
        out.push_str(caps.get(1).map_or("", |m| m.as_str()));
        last = whole.end;
    }
    out.push_str(&decode_entities(&inner[last..]));
    out
}

/// Parses the attributes of a tag body such as ` name="a" value='1' checked`
///
/// Names are lowercased, values entity-decoded. Valueless attributes are skipped.
pub fn parse_attributes(tag_body: &str) -> HashMap<String, String> {
    ATTR_RE
        .captures_iter(tag_body)
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            (name, decode_entities(value))
        })
        .collect()
}

/// Returns the text between `start` and the next `end` following it
pub fn slice_between<'a>(haystack: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = haystack.find(start)? + start.len();
    let len = haystack[from..].find(end)?;
    Some(&haystack[from..from + len])
}

/// Returns the fragment from the first `open` up to and including the next `close`
pub fn slice_enclosing<'a>(haystack: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let from = haystack.find(open)?;
    let len = haystack[from..].find(close)? + close.len();
    Some(&haystack[from..from + len])
}
