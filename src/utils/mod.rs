use chrono::{DateTime, Datelike, FixedOffset};

/// Left-pad a number with zeroes to the given width.
pub fn lead_zero(value: u32, width: usize) -> String {
    let mut out = value.to_string();
    while out.len() < width {
        out.insert(0, '0');
    }
    out
}

/// MM/DD/YYYY with zero-padded month and day.
pub fn format_date(month: u32, day: u32, year: i32) -> String {
    format!("{}/{}/{}", lead_zero(month, 2), lead_zero(day, 2), year)
}

/// Parse an ISO date-time string and reformat it as MM/DD/YYYY. Returns the
/// input unchanged when it does not parse, so a malformed provider value
/// still renders as something.
pub fn format_birthday(iso: &str) -> String {
    match DateTime::<FixedOffset>::parse_from_rfc3339(iso) {
        Ok(date) => format_date(date.month(), date.day(), date.year()),
        Err(_) => iso.to_string(),
    }
}

/// Case-insensitive substring containment, the filter's matching rule.
/// An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_zero_pads_below_width_only() {
        assert_eq!(lead_zero(7, 2), "07");
        assert_eq!(lead_zero(31, 2), "31");
        assert_eq!(lead_zero(123, 2), "123");
    }

    #[test]
    fn format_birthday_falls_back_on_garbage() {
        assert_eq!(format_birthday("not-a-date"), "not-a-date");
    }
}
