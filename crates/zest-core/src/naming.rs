//! Spec identity derived from directory names.
//!
//! A spec id is `YYYYMMDD-<slug>`. Nothing about a spec's name is stored;
//! it is recomputed from the id every time.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

static ID_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn id_prefix_re() -> &'static Regex {
    ID_PREFIX_RE.get_or_init(|| Regex::new(r"^\d{8}-").unwrap())
}

/// True if `name` carries the 8-digit date prefix of a spec directory.
pub fn is_spec_id(name: &str) -> bool {
    id_prefix_re().is_match(name)
}

/// `YYYYMMDD` form of a calendar date.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYY-MM-DD` form of a calendar date, used for the `{date}` placeholder.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Build a spec id from a date and a caller-supplied slug. The slug is used as-is.
pub fn make_id(date: NaiveDate, slug: &str) -> String {
    format!("{}-{slug}", compact_date(date))
}

/// Strip the date prefix: `20260224-init-project` -> `init-project`.
pub fn slug_of(id: &str) -> &str {
    match id_prefix_re().find(id) {
        Some(m) => &id[m.end()..],
        None => id,
    }
}

/// Title-case each hyphen-separated word of the slug: `init-project` -> `Init Project`.
///
/// Only the first character of each word changes; the rest is kept verbatim.
pub fn display_name(id: &str) -> String {
    slug_of(id)
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
