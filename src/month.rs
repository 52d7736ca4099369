use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;

use crate::error::{Error, ErrorKind, Result};
use crate::holidays::Category;

pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

/// Cell value for squares that belong to the previous or next month.
pub const NO_DAY: u32 = 0;

pub fn days_of_month(year: i32, month: u32) -> Option<u32> {
    let this = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;

    Some(next.signed_duration_since(this).num_days() as u32)
}

/// The seven weekdays in display order for the given first day of the week.
pub fn weekday_order(first: Weekday) -> [Weekday; 7] {
    let mut order = [first; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Week-by-day grid of one month plus its per-day annotations.
///
/// The grid is a sequence of 4 to 6 weeks of 7 cells each; cells outside
/// the month hold [`NO_DAY`]. Events and colors are kept in two grids of
/// the same shape: event labels accumulate in call order, a color written
/// later replaces an earlier one.
#[derive(Debug)]
pub struct MonthSheet {
    year: i32,
    month: u32,
    first_weekday: Weekday,
    weeks: Vec<[u32; 7]>,
    events: Vec<[Vec<String>; 7]>,
    colors: Vec<[Option<Category>; 7]>,
}

impl MonthSheet {
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> Result<MonthSheet> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(Error::new(
                ErrorKind::InvalidMonth,
                &format!("'{}-{}' is not a supported month", year, month),
            ));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::from(ErrorKind::InvalidMonth))?;
        let days = days_of_month(year, month).ok_or_else(|| Error::from(ErrorKind::InvalidMonth))?;

        let offset = (first.weekday().num_days_from_monday() + 7
            - first_weekday.num_days_from_monday())
            % 7;

        let cells = std::iter::repeat(NO_DAY)
            .take(offset as usize)
            .chain(1..=days);
        let grouped = cells.chunks(7);
        let weeks: Vec<[u32; 7]> = grouped
            .into_iter()
            .map(|chunk| {
                let mut week = [NO_DAY; 7];
                for (cell, day) in week.iter_mut().zip(chunk) {
                    *cell = day;
                }
                week
            })
            .collect();

        let events = weeks.iter().map(|_| Default::default()).collect();
        let colors = weeks.iter().map(|_| [None; 7]).collect();

        Ok(MonthSheet {
            year,
            month,
            first_weekday,
            weeks,
            events,
            colors,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn weeks(&self) -> &[[u32; 7]] {
        &self.weeks
    }

    pub fn events(&self) -> &[[Vec<String>; 7]] {
        &self.events
    }

    pub fn colors(&self) -> &[[Option<Category>; 7]] {
        &self.colors
    }

    pub fn weekday_order(&self) -> [Weekday; 7] {
        weekday_order(self.first_weekday)
    }

    /// The 2-d index of the day in the grid.
    ///
    /// Shared day resolution behind both mutators; a day number without a
    /// cell in this month reports [`ErrorKind::DayNotInMonth`].
    pub fn lookup(&self, day: u32) -> Result<(usize, usize)> {
        if day == NO_DAY {
            return Err(self.no_such_day(day));
        }

        self.weeks
            .iter()
            .enumerate()
            .find_map(|(week, cells)| cells.iter().position(|&d| d == day).map(|i| (week, i)))
            .ok_or_else(|| self.no_such_day(day))
    }

    /// Add an event label for the specified day.
    pub fn add_event(&mut self, day: u32, label: &str) -> Result<()> {
        let (week, w_day) = self.lookup(day)?;
        self.events[week][w_day].push(label.to_owned());
        Ok(())
    }

    /// Set the color category of the specified day, replacing any earlier one.
    pub fn set_color(&mut self, day: u32, category: Category) -> Result<()> {
        let (week, w_day) = self.lookup(day)?;
        self.colors[week][w_day] = Some(category);
        Ok(())
    }

    fn no_such_day(&self, day: u32) -> Error {
        Error::new(
            ErrorKind::DayNotInMonth,
            &format!(
                "there is no day {} in {}-{:02}",
                day, self.year, self.month
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2025_layout() {
        // January 1st 2025 is a Wednesday
        let sheet = MonthSheet::new(2025, 1, Weekday::Mon).unwrap();

        assert_eq!(sheet.weeks().len(), 5);
        assert_eq!(sheet.weeks()[0], [0, 0, 1, 2, 3, 4, 5]);
        assert_eq!(sheet.weeks()[4], [27, 28, 29, 30, 31, 0, 0]);
    }

    #[test]
    fn sunday_first_layout() {
        let sheet = MonthSheet::new(2025, 1, Weekday::Sun).unwrap();

        assert_eq!(sheet.weeks()[0], [0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn day_numbers_are_exhaustive() {
        for month in 1..=12 {
            let sheet = MonthSheet::new(2025, month, Weekday::Mon).unwrap();
            let days: Vec<u32> = sheet
                .weeks()
                .iter()
                .flatten()
                .copied()
                .filter(|&d| d != NO_DAY)
                .collect();
            let expected: Vec<u32> = (1..=days_of_month(2025, month).unwrap()).collect();

            assert_eq!(days, expected, "month {}", month);
        }
    }

    #[test]
    fn week_count_varies_with_month() {
        // February 2021 starts on a Monday and has 28 days
        assert_eq!(MonthSheet::new(2021, 2, Weekday::Mon).unwrap().weeks().len(), 4);
        assert_eq!(MonthSheet::new(2025, 1, Weekday::Mon).unwrap().weeks().len(), 5);
        // August 2021 starts on a Sunday and has 31 days
        assert_eq!(MonthSheet::new(2021, 8, Weekday::Mon).unwrap().weeks().len(), 6);
    }

    #[test]
    fn events_accumulate_in_call_order() {
        let mut sheet = MonthSheet::new(2025, 4, Weekday::Mon).unwrap();
        sheet.add_event(20, "Ostersonntag").unwrap();
        sheet.add_event(20, "Geburtstag").unwrap();

        let (week, w_day) = sheet.lookup(20).unwrap();
        assert_eq!(sheet.events()[week][w_day], ["Ostersonntag", "Geburtstag"]);
    }

    #[test]
    fn last_color_wins() {
        let mut sheet = MonthSheet::new(2025, 4, Weekday::Mon).unwrap();
        sheet.set_color(20, Category::Weekend).unwrap();
        sheet.set_color(20, Category::Holiday).unwrap();

        let (week, w_day) = sheet.lookup(20).unwrap();
        assert_eq!(sheet.colors()[week][w_day], Some(Category::Holiday));
    }

    #[test]
    fn lookup_is_stable() {
        let sheet = MonthSheet::new(2025, 1, Weekday::Mon).unwrap();
        assert_eq!(sheet.lookup(15).unwrap(), sheet.lookup(15).unwrap());
        assert_eq!(sheet.lookup(1).unwrap(), (0, 2));
    }

    #[test]
    fn missing_days_are_reported() {
        let mut sheet = MonthSheet::new(2025, 4, Weekday::Mon).unwrap();

        // April has 30 days
        let err = sheet.add_event(31, "nope").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DayNotInMonth));

        let err = sheet.set_color(31, Category::Holiday).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DayNotInMonth));

        // the sentinel value never resolves to a cell
        assert!(sheet.lookup(0).unwrap_err().is_day_not_in_month());
        assert!(sheet.lookup(32).unwrap_err().is_day_not_in_month());
    }

    #[test]
    fn bad_construction_parameters() {
        assert!(matches!(
            MonthSheet::new(2025, 0, Weekday::Mon).unwrap_err().kind,
            ErrorKind::InvalidMonth
        ));
        assert!(matches!(
            MonthSheet::new(2025, 13, Weekday::Mon).unwrap_err().kind,
            ErrorKind::InvalidMonth
        ));
        assert!(matches!(
            MonthSheet::new(1500, 1, Weekday::Mon).unwrap_err().kind,
            ErrorKind::InvalidMonth
        ));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(2024, 2), Some(29));
        assert_eq!(days_of_month(2025, 2), Some(28));
        assert_eq!(days_of_month(2025, 12), Some(31));
        assert_eq!(days_of_month(2025, 13), None);
    }

    #[test]
    fn weekday_ordering() {
        assert_eq!(
            weekday_order(Weekday::Mon),
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun
            ]
        );
        let sunday_first = weekday_order(Weekday::Sun);
        assert_eq!(sunday_first[0], Weekday::Sun);
        assert_eq!(sunday_first[6], Weekday::Sat);
    }
}
