//! Data model for a composer work-list.
//!
//! These structures capture one catalogue entry per CSV row, validated
//! once at load time so the formatters and renderer never have to deal
//! with malformed input.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A catalogue number: decimal digits plus an optional single-letter
/// suffix (e.g. "12a" for an alternative version of work 12).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueNumber {
    /// Numeric part of the identifier
    pub number: u32,
    /// Optional literal suffix, appended verbatim when formatting
    pub suffix: Option<char>,
}

static CATALOGUE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([A-Za-z]?)$").expect("valid catalogue id regex"));

impl CatalogueNumber {
    /// Parse a catalogue identifier from its CSV text form.
    ///
    /// The identifier must be decimal digits optionally followed by one
    /// letter; anything else is a fatal malformed-input error.
    pub fn parse(id: &str) -> Result<Self, String> {
        let caps = CATALOGUE_ID_RE
            .captures(id.trim())
            .ok_or_else(|| format!("Malformed catalogue number: '{id}'"))?;
        let number: u32 = caps[1]
            .parse()
            .map_err(|e| format!("Catalogue number '{id}' out of range: {e}"))?;
        let suffix = caps[2].chars().next();
        Ok(Self { number, suffix })
    }
}

/// Composition date: either a proper calendar date or free text such as
/// a year range or "c. 1780".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkDate {
    /// A parsed calendar date, rendered as YYYY-MM-DD
    Calendar(NaiveDate),
    /// Free text, passed through unchanged
    Text(String),
}

impl WorkDate {
    /// Interpret the CSV date field. ISO dates become `Calendar`;
    /// everything else is kept verbatim as `Text`.
    pub fn from_csv(value: &str) -> Self {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => WorkDate::Calendar(date),
            Err(_) => WorkDate::Text(value.to_string()),
        }
    }
}

/// One catalogue entry, validated and ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    /// Catalogue number (e.g. MH number)
    pub catalogue: CatalogueNumber,
    /// Display title, used when no IMSLP page is linked
    pub title: String,
    /// IMSLP work-page key; `None` means no link is generated
    pub title_imslp: Option<String>,
    /// Per-work override of the composer used in the link
    pub composer_imslp: Option<String>,
    /// Principal key of the work (may contain "-flat" / "-sharp")
    pub key: String,
    /// Date of composition or arrangement
    pub date: WorkDate,
    /// Genre label as used by IMSLP's categorization
    pub genre: String,
    /// Free-text annotation; `None` renders as an empty cell
    pub notes: Option<String>,
}

/// An IMSLP composer identifier ("Last, First") split into the pieces
/// the `LinkWorkN` template expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub last_name: String,
    pub first_name: String,
}

impl Composer {
    /// Split an IMSLP composer identifier on the first ", ". An
    /// identifier without a comma becomes a bare last name.
    pub fn from_imslp_id(id: &str) -> Self {
        match id.split_once(", ") {
            Some((last, first)) => Self {
                last_name: last.trim().to_string(),
                first_name: first.trim().to_string(),
            },
            None => Self {
                last_name: id.trim().to_string(),
                first_name: String::new(),
            },
        }
    }
}

/// Per-list configuration loaded from `lists/<name>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default composer identifier for work-page links
    pub composer_imslp: String,
    /// Literal markup placed at the top of the document, including the
    /// table opening and column headers
    pub page_header: String,
}

impl ListConfig {
    /// The list-level default composer for links.
    pub fn default_composer(&self) -> Composer {
        Composer::from_imslp_id(&self.composer_imslp)
    }
}
