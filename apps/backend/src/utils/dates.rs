//! Calendar dates on the wire.
//!
//! Dates of birth are rendered `YYYY-MM-DD` and accepted either that way
//! or as `DD.MM.YYYY`.

use serde::Serializer;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const ISO: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DOTTED: &[FormatItem<'static>] = format_description!("[day].[month].[year]");

pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    let raw = raw.trim();
    Date::parse(raw, ISO).or_else(|_| Date::parse(raw, DOTTED))
}

pub fn format_date(date: Date) -> String {
    // ISO calendar dates within time's default range always format.
    date.format(ISO).unwrap_or_else(|_| date.to_string())
}

/// `serialize_with` helper for optional dates.
pub fn serialize_opt_date<S: Serializer>(date: &Option<Date>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => s.serialize_str(&format_date(*date)),
        None => s.serialize_none(),
    }
}
