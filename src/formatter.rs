//! Per-field formatters — convert validated Work fields into wiki
//! markup cell content.
//!
//! All formatters are pure: they never touch the filesystem and they
//! cannot fail, because the catalogue loader has already validated
//! every field they consume.

use crate::model::{CatalogueNumber, Composer, ListConfig, Work, WorkDate};

/// Padding template rendered as two leading zeros.
const PAD_TWO_ZEROS: &str = "{{Hs|00}}";
/// Padding template rendered as one leading zero.
const PAD_ONE_ZERO: &str = "{{Hs|0}}";

/// Format a catalogue number with leading-zero padding templates.
///
/// Numbers below 10 get a two-zero pad, numbers below 100 a one-zero
/// pad; anything from 100 upward (including four-digit numbers) is
/// rendered as-is. The suffix letter is appended verbatim.
pub fn format_catalogue_number(n: &CatalogueNumber) -> String {
    let suffix = n.suffix.map(String::from).unwrap_or_default();
    if n.number < 10 {
        format!("{PAD_TWO_ZEROS}{}{suffix}", n.number)
    } else if n.number < 100 {
        format!("{PAD_ONE_ZERO}{}{suffix}", n.number)
    } else {
        format!("{}{suffix}", n.number)
    }
}

/// Convert "-flat" / "-sharp" spellings into accidental templates.
/// Everything else passes through unchanged.
pub fn format_key(key: &str) -> String {
    key.replace("-flat", "{{flat}}").replace("-sharp", "{{sharp}}")
}

/// Format a date: calendar dates as ISO 8601, free text verbatim.
pub fn format_date(date: &WorkDate) -> String {
    match date {
        WorkDate::Calendar(d) => d.format("%Y-%m-%d").to_string(),
        WorkDate::Text(s) => s.clone(),
    }
}

/// Format the title cell: a `LinkWorkN` template when an IMSLP page key
/// is available, the plain display title otherwise. When a link is
/// produced the display title is discarded; IMSLP shows the linked
/// work's canonical title instead.
pub fn format_title(title_imslp: Option<&str>, title: &str, composer: &Composer) -> String {
    match title_imslp {
        Some(page) => format!(
            "{{{{LinkWorkN|{page}||{}|{}|0}}}}",
            composer.last_name, composer.first_name
        ),
        None => title.to_string(),
    }
}

/// Resolve the composer used for a work's link: the per-work override
/// when present, the list default otherwise.
pub fn resolve_composer(work: &Work, config: &ListConfig) -> Composer {
    match &work.composer_imslp {
        Some(id) => Composer::from_imslp_id(id),
        None => config.default_composer(),
    }
}
