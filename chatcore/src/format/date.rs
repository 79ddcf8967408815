//! Calendar date rendering for `createdAt` timestamps.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Render a timestamp as an en-US calendar date (`M/D/YYYY`).
///
/// RFC 3339 timestamps use the date in their own offset. A bare
/// `YYYY-MM-DD` is accepted as-is. Anything else is returned verbatim so
/// the user still sees what the backend sent.
#[must_use]
pub fn calendar_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date = OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(trimmed, format_description!("[year]-[month]-[day]")));

    match date {
        Ok(date) => format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        Err(_) => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_timestamp_renders_month_day_year() {
        assert_eq!(calendar_date("2024-01-15T10:30:00Z"), "1/15/2024");
    }

    #[test]
    fn offset_timestamp_keeps_its_own_date() {
        assert_eq!(calendar_date("2023-12-31T23:30:00-05:00"), "12/31/2023");
    }

    #[test]
    fn bare_date_is_accepted() {
        assert_eq!(calendar_date("2022-07-04"), "7/4/2022");
    }

    #[test]
    fn unparseable_value_is_returned_verbatim() {
        assert_eq!(calendar_date("last tuesday"), "last tuesday");
    }
}
