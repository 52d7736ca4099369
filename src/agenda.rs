use chrono::Weekday;

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::holidays::{build_schedule, Category, HolidayEntry};
use crate::month::{self, MonthSheet};

/// Resolved schedule and layout convention for one year.
///
/// Produces one independently owned [`MonthSheet`] per month; the twelve
/// months share no state beyond the schedule they are populated from.
#[derive(Debug)]
pub struct Agenda {
    year: i32,
    first_weekday: Weekday,
    schedule: Vec<HolidayEntry>,
}

impl Agenda {
    pub fn from_config(config: &Config, year: i32) -> Result<Agenda> {
        if !(month::MIN_YEAR..=month::MAX_YEAR).contains(&year) {
            return Err(Error::new(
                ErrorKind::InvalidMonth,
                &format!("year {} is not supported", year),
            ));
        }

        Ok(Agenda {
            year,
            first_weekday: config.first_weekday,
            schedule: build_schedule(year, &config.holidays),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn schedule(&self) -> &[HolidayEntry] {
        &self.schedule
    }

    /// Build the populated sheet of one month: weekend coloring first,
    /// then the holiday entries of that month.
    pub fn sheet(&self, month: u32) -> Result<MonthSheet> {
        let mut sheet = MonthSheet::new(self.year, month, self.first_weekday)?;

        let order = sheet.weekday_order();

        // Highlight saturday and sunday. Days 29..=31 do not exist in
        // every month; those probes report DayNotInMonth and are skipped.
        for day in 1..=31 {
            let w_day = match sheet.lookup(day) {
                Ok((_, w_day)) => w_day,
                Err(ref e) if e.is_day_not_in_month() => continue,
                Err(e) => return Err(e),
            };

            if matches!(order[w_day], Weekday::Sat | Weekday::Sun) {
                sheet.set_color(day, Category::Weekend)?;
            }
        }

        for entry in self.schedule.iter().filter(|e| e.month == month) {
            sheet.add_event(entry.day, &entry.label)?;
            if let Some(category) = entry.category {
                sheet.set_color(entry.day, category)?;
            }
        }

        Ok(sheet)
    }

    /// The twelve sheets of the year in month order.
    pub fn sheets(&self) -> impl Iterator<Item = Result<MonthSheet>> + '_ {
        (1..=12).map(move |month| self.sheet(month))
    }
}
