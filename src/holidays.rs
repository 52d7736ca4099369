use chrono::{Datelike, Duration};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::easter::compute_easter;

/// Color category of a day, resolved to an actual style by the sheet
/// writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Holiday,
    Observance,
    Weekend,
}

/// A holiday on the same date each year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedHoliday {
    pub label: String,
    pub month: u32,
    pub day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A holiday at a fixed day offset from Easter Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EasterHoliday {
    pub label: String,
    pub offset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl FixedHoliday {
    pub fn new(label: &str, month: u32, day: u32, category: Option<Category>) -> Self {
        FixedHoliday {
            label: label.to_owned(),
            month,
            day,
            category,
        }
    }
}

impl EasterHoliday {
    pub fn new(label: &str, offset: i64, category: Option<Category>) -> Self {
        EasterHoliday {
            label: label.to_owned(),
            offset,
            category,
        }
    }
}

/// The holiday tables for one region. Swapping the set in the config
/// changes the regional variant without touching any code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidaySet {
    pub fixed: Vec<FixedHoliday>,
    pub easter: Vec<EasterHoliday>,
}

static SWISS: Lazy<HolidaySet> = Lazy::new(|| HolidaySet {
    fixed: vec![
        FixedHoliday::new("Neujahrstag", 1, 1, Some(Category::Holiday)),
        FixedHoliday::new("Berchtoldstag", 1, 2, Some(Category::Holiday)),
        FixedHoliday::new("Drei Könige", 1, 6, None),
        FixedHoliday::new("Tag der Arbeit", 5, 1, Some(Category::Holiday)),
        FixedHoliday::new("Bundesfeiertag", 8, 1, Some(Category::Holiday)),
        FixedHoliday::new("Heiligabend", 12, 24, None),
        FixedHoliday::new("Weihnachten", 12, 25, Some(Category::Holiday)),
        FixedHoliday::new("Stephanstag", 12, 26, Some(Category::Holiday)),
        FixedHoliday::new("Silvester", 12, 31, Some(Category::Holiday)),
    ],
    easter: vec![
        EasterHoliday::new("Gründonnerstag", -3, Some(Category::Observance)),
        EasterHoliday::new("Karfreitag", -2, Some(Category::Holiday)),
        EasterHoliday::new("Ostersonntag", 0, Some(Category::Holiday)),
        EasterHoliday::new("Ostermontag", 1, Some(Category::Holiday)),
        EasterHoliday::new("Auffahrt", 39, Some(Category::Holiday)),
        EasterHoliday::new("Pfingsten", 49, Some(Category::Holiday)),
        EasterHoliday::new("Pfingstmontag", 50, Some(Category::Holiday)),
    ],
});

impl Default for HolidaySet {
    fn default() -> HolidaySet {
        SWISS.clone()
    }
}

/// One entry of the resolved schedule for a concrete year.
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayEntry {
    pub label: String,
    pub month: u32,
    pub day: u32,
    pub category: Option<Category>,
}

/// Resolve both holiday tables to concrete dates of `year`.
///
/// Fixed entries come first, Easter-relative entries after them, each in
/// table order. Entries falling on the same day are all kept.
pub fn build_schedule(year: i32, set: &HolidaySet) -> Vec<HolidayEntry> {
    let easter_sunday = compute_easter(year);

    let fixed = set.fixed.iter().map(|holiday| HolidayEntry {
        label: holiday.label.clone(),
        month: holiday.month,
        day: holiday.day,
        category: holiday.category,
    });

    let movable = set.easter.iter().map(|holiday| {
        let date = easter_sunday + Duration::days(holiday.offset);
        HolidayEntry {
            label: holiday.label.clone(),
            month: date.month(),
            day: date.day(),
            category: holiday.category,
        }
    });

    fixed.chain(movable).collect()
}
