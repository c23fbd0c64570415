use chrono::NaiveDate;
use std::fmt;

// "-YYYY-MM-DD"
const DATE_SUFFIX_LEN: usize = 11;

/// Typed form of a feed identifier.
///
/// Recurring occurrences are rendered as `{activity_id}-{YYYY-MM-DD}`, special events as their own id.
/// Parsing is a heuristic: any id ending in a valid `-YYYY-MM-DD` is read as a recurring occurrence,
/// so an activity id that itself ends in a date cannot be told apart. Callers fall back to a special
/// event lookup when the activity part does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventRef {
    Recurring { activity_id: String, date: NaiveDate },
    Special { id: String },
}

impl EventRef {
    pub fn recurring(activity_id: impl Into<String>, date: NaiveDate) -> Self {
        EventRef::Recurring { activity_id: activity_id.into(), date }
    }

    pub fn special(id: impl Into<String>) -> Self {
        EventRef::Special { id: id.into() }
    }

    pub fn parse(display_id: &str) -> Self {
        match split_date_suffix(display_id) {
            Some((activity_id, date)) => EventRef::recurring(activity_id, date),
            None => EventRef::special(display_id),
        }
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventRef::Recurring { activity_id, date } => {
                write!(f, "{}-{}", activity_id, date.format("%Y-%m-%d"))
            }
            EventRef::Special { id } => f.write_str(id),
        }
    }
}

fn split_date_suffix(display_id: &str) -> Option<(&str, NaiveDate)> {
    if display_id.len() <= DATE_SUFFIX_LEN {
        return None;
    }
    let split_at = display_id.len() - DATE_SUFFIX_LEN;
    if !display_id.is_char_boundary(split_at) {
        return None;
    }
    let (prefix, suffix) = display_id.split_at(split_at);
    let date_part = suffix.strip_prefix('-')?;

    let shape_ok = date_part.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    Some((prefix, date))
}
