use chrono::Weekday;
use phf::phf_map;

use crate::error::{Error, ErrorKind, Result};
use crate::month::weekday_order;

/// Month and weekday names of one locale, indexed from January / Monday.
#[derive(Debug)]
pub struct Names {
    pub months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
}

static NAMES: phf::Map<&'static str, Names> = phf_map! {
    "de" => Names {
        months: [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli",
            "August", "September", "Oktober", "November", "Dezember",
        ],
        weekdays: [
            "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag",
            "Samstag", "Sonntag",
        ],
        weekdays_short: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    },
    "en" => Names {
        months: [
            "January", "February", "March", "April", "May", "June", "July",
            "August", "September", "October", "November", "December",
        ],
        weekdays: [
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
            "Saturday", "Sunday",
        ],
        weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    },
};

impl Names {
    pub fn month(&self, month: u32) -> &'static str {
        self.months[month as usize - 1]
    }

    pub fn weekday(&self, day: Weekday) -> &'static str {
        self.weekdays[day.num_days_from_monday() as usize]
    }

    pub fn weekday_short(&self, day: Weekday) -> &'static str {
        self.weekdays_short[day.num_days_from_monday() as usize]
    }

    /// Weekday header labels, rotated to start at `first`.
    pub fn header(&self, first: Weekday) -> [&'static str; 7] {
        let mut header = [""; 7];
        for (cell, day) in header.iter_mut().zip(weekday_order(first).iter()) {
            *cell = self.weekday_short(*day);
        }
        header
    }
}

/// Look up the name table for a locale token such as `de`, `en` or `de_DE`.
///
/// Only the language part of the token is significant; territory and
/// encoding suffixes (`de_CH.UTF-8`) are ignored.
pub fn names(token: &str) -> Result<&'static Names> {
    let language = token
        .split(|c| c == '_' || c == '-' || c == '.')
        .next()
        .unwrap_or(token)
        .to_lowercase();

    NAMES.get(language.as_str()).ok_or_else(|| {
        Error::new(
            ErrorKind::UnknownLocale,
            &format!("no name table for locale '{}'", token),
        )
    })
}
