use crate::error::AppError;
use crate::match_data::minute::MatchMinute;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// A single minute entry as it appears in an export list: either a bare
/// number or text such as `"45+2"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MinuteToken {
    Number(u32),
    Text(String),
}

impl MinuteToken {
    pub fn to_minute(&self) -> Result<MatchMinute, AppError> {
        match self {
            MinuteToken::Number(minute) => Ok(MatchMinute::from(*minute)),
            MinuteToken::Text(text) => text.parse(),
        }
    }
}

impl From<&str> for MinuteToken {
    fn from(text: &str) -> Self {
        MinuteToken::Text(text.to_string())
    }
}

impl From<u32> for MinuteToken {
    fn from(minute: u32) -> Self {
        MinuteToken::Number(minute)
    }
}

/// Per-side list of event minutes as found in a raw match record.
///
/// Exports mix missing values, empty strings, list literals like
/// `"['12', '45+2']"` and real arrays in the same column. Every shape is
/// normalized here so the counting code only ever sees minute tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawList {
    /// Missing value (`null`, absent field or a textual `nan`)
    #[default]
    Absent,
    /// `""`, `"[]"` or an empty array
    EmptyList,
    /// Textual list literal
    Serialized(String),
    /// Already-split list of tokens
    Native(Vec<MinuteToken>),
}

impl RawList {
    /// Classifies raw text from an export cell.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "[]" {
            RawList::EmptyList
        } else if trimmed.eq_ignore_ascii_case("nan") {
            RawList::Absent
        } else {
            RawList::Serialized(text.to_string())
        }
    }

    pub fn from_tokens(tokens: Vec<MinuteToken>) -> Self {
        if tokens.is_empty() {
            RawList::EmptyList
        } else {
            RawList::Native(tokens)
        }
    }

    /// Returns the raw minute tokens. Missing and empty inputs yield none.
    pub fn tokens(&self) -> Result<Vec<MinuteToken>, AppError> {
        match self {
            RawList::Absent | RawList::EmptyList => Ok(Vec::new()),
            RawList::Native(tokens) => Ok(tokens.clone()),
            RawList::Serialized(text) => parse_list_literal(text),
        }
    }

    /// Parses every token into a [`MatchMinute`], in input order.
    pub fn minutes(&self) -> Result<Vec<MatchMinute>, AppError> {
        self.tokens()?.iter().map(MinuteToken::to_minute).collect()
    }

    /// Number of entries, treating anything unreadable as an empty list.
    /// Used for card and goal tallies where a broken cell should not abort
    /// the whole record.
    pub fn item_count_lenient(&self) -> u32 {
        match self.tokens() {
            Ok(tokens) => tokens.len() as u32,
            Err(e) => {
                debug!("Counting unreadable list as empty: {e}");
                0
            }
        }
    }
}

/// Splits a bracketed list literal into text tokens. Items are comma
/// separated; one trailing comma is accepted. Commas and brackets inside a
/// quoted item belong to the item.
fn parse_list_literal(text: &str) -> Result<Vec<MinuteToken>, AppError> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| AppError::list_parse(text, "expected a bracketed list"))?;

    let mut items = split_items(text, inner)?;

    if items.len() == 1 && items[0].is_empty() {
        return Ok(Vec::new());
    }
    if items.last().is_some_and(|last| last.is_empty()) {
        items.pop();
    }
    if items.iter().any(|item| item.is_empty()) {
        return Err(AppError::list_parse(text, "empty list item"));
    }

    Ok(items.into_iter().map(MinuteToken::from).collect())
}

fn split_items<'a>(text: &str, inner: &'a str) -> Result<Vec<&'a str>, AppError> {
    let mut items = Vec::new();
    let mut open_quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match open_quote {
            Some(quote) if c == quote => open_quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => open_quote = Some(c),
                '[' | ']' => {
                    return Err(AppError::list_parse(text, "nested lists are not supported"));
                }
                ',' => {
                    items.push(inner[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    if open_quote.is_some() {
        return Err(AppError::list_parse(text, "unterminated quote"));
    }
    items.push(inner[start..].trim());
    Ok(items)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListRepr {
    Native(Vec<MinuteToken>),
    Text(String),
}

impl<'de> Deserialize<'de> for RawList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawListRepr>::deserialize(deserializer)? {
            None => RawList::Absent,
            Some(RawListRepr::Native(tokens)) => RawList::from_tokens(tokens),
            Some(RawListRepr::Text(text)) => RawList::from_text(&text),
        })
    }
}
