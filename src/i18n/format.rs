// SPDX-License-Identifier: MPL-2.0
//! Recursive `[[..]]` template substitution.
//!
//! Message strings mark substitution points with `[[key]]` (named),
//! `[[0]]` (indexed), or the empty form `[[]]` (positional, consumed
//! left to right). A replacement value may itself contain placeholders;
//! those are resolved on the following pass, up to a fixed depth.
//!
//! Substitution never fails. A placeholder whose key the dictionary
//! does not define stays in the output verbatim, so a stray `[[foo]]`
//! in rendered text is the worst possible outcome.

use std::collections::HashMap;

/// Substitution stops once this many passes have run, even if the
/// working message still contains resolvable placeholders. Guards
/// against cyclic replacement values expanding forever.
const MAX_DEPTH: u32 = 10;

/// Replacement values for [`format`]: an ordered sequence consumed by
/// positional placeholders, or a map consulted by key.
///
/// Numeric keys and sequence indices collapse to the same lookup:
/// `[[1]]` reads element 1 of a sequence, and the empty form `[[]]`
/// reads the `"0"`, `"1"`, ... entries of a map.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatDict {
    Seq(Vec<String>),
    Map(HashMap<String, String>),
}

impl FormatDict {
    /// Builds a positional dictionary.
    pub fn seq<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FormatDict::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a named dictionary from `(key, value)` pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        FormatDict::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    fn by_index(&self, index: usize) -> Option<&str> {
        match self {
            FormatDict::Seq(items) => items.get(index).map(String::as_str),
            FormatDict::Map(entries) => entries.get(&index.to_string()).map(String::as_str),
        }
    }

    fn by_name(&self, name: &str) -> Option<&str> {
        match self {
            // A sequence defines no named entries.
            FormatDict::Seq(_) => None,
            FormatDict::Map(entries) => entries.get(name).map(String::as_str),
        }
    }
}

/// Substitutes every resolvable placeholder in `message`.
///
/// Placeholders are processed in the order they appear. Each resolved
/// value replaces the first remaining occurrence of its placeholder as
/// a string literal, so a value containing placeholder-like text is
/// inserted verbatim and only picked up by the next pass.
pub fn format(message: &str, dict: &FormatDict) -> String {
    format_at_depth(message, dict, 0)
}

fn format_at_depth(message: &str, dict: &FormatDict, depth: u32) -> String {
    let placeholders = scan(message);
    if placeholders.is_empty() {
        return message.to_string();
    }

    let mut replaced = message.to_string();
    // Advances only for the empty form, never for named placeholders.
    let mut positional = 0usize;

    for token in placeholders {
        if token == "[[]]" {
            if let Some(value) = dict.by_index(positional) {
                replaced = replaced.replacen(token, value, 1);
            }
            positional += 1;
        } else {
            let label = &token[2..token.len() - 2];
            let value = match label.parse::<usize>() {
                Ok(index) => dict.by_index(index),
                Err(_) => dict.by_name(label),
            };
            if let Some(value) = value {
                replaced = replaced.replacen(token, value, 1);
            }
        }
    }

    if depth > MAX_DEPTH {
        replaced
    } else {
        format_at_depth(&replaced, dict, depth + 1)
    }
}

/// Finds every placeholder token, non-overlapping, left to right.
///
/// The grammar is `[[` + zero or more of {ASCII alphanumerics, `_`,
/// `:`, `.`} + `]]`. Anything else between the delimiters fails the
/// match and the text stays literal.
fn scan(message: &str) -> Vec<&str> {
    let bytes = message.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'[' && bytes[i + 1] == b'[' {
            let mut j = i + 2;
            while j < bytes.len() && is_label_byte(bytes[j]) {
                j += 1;
            }
            if j + 1 < bytes.len() && bytes[j] == b']' && bytes[j + 1] == b']' {
                // Delimiters and label are ASCII, so these offsets sit
                // on character boundaries.
                tokens.push(&message[i..j + 2]);
                i = j + 2;
                continue;
            }
        }
        i += 1;
    }

    tokens
}

fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b':' || byte == b'.'
}
