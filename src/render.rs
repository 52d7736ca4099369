use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::holidays::Category;
use crate::locale::Names;
use crate::month::{MonthSheet, NO_DAY};

const CELL_WIDTH: usize = 4;

fn marker(category: Option<Category>) -> char {
    match category {
        Some(Category::Holiday) => '*',
        Some(Category::Observance) => '+',
        Some(Category::Weekend) => '.',
        None => ' ',
    }
}

/// Write one month sheet as plain text: a centered title, the weekday
/// header in the sheet's ordering, the week rows with a category marker
/// behind each day number, and the day's event labels below the grid.
pub fn write_month<W: Write>(sheet: &MonthSheet, names: &Names, out: &mut W) -> Result<()> {
    let title = format!("{} {}", names.month(sheet.month()), sheet.year());
    writeln!(out, "{:^width$}", title, width = 7 * CELL_WIDTH)?;

    for label in names.header(sheet.first_weekday()).iter() {
        write!(out, "{:>3} ", label)?;
    }
    writeln!(out)?;

    for (week, cells) in sheet.weeks().iter().enumerate() {
        for (w_day, &day) in cells.iter().enumerate() {
            if day == NO_DAY {
                write!(out, "{:width$}", "", width = CELL_WIDTH)?;
            } else {
                write!(out, "{:>3}{}", day, marker(sheet.colors()[week][w_day]))?;
            }
        }
        writeln!(out)?;
    }

    for (week, cells) in sheet.weeks().iter().enumerate() {
        for (w_day, &day) in cells.iter().enumerate() {
            let labels = &sheet.events()[week][w_day];
            if !labels.is_empty() {
                writeln!(out, "{:>3}  {}", day, labels.iter().join(", "))?;
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::Agenda;
    use crate::config::Config;
    use crate::locale;

    fn render(year: i32, month: u32) -> String {
        let agenda = Agenda::from_config(&Config::default(), year).unwrap();
        let sheet = agenda.sheet(month).unwrap();
        let mut buf = Vec::new();
        write_month(&sheet, locale::names("de").unwrap(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sheet_has_title_and_header() {
        let text = render(2025, 1);

        assert!(text.contains("Januar 2025"));
        assert!(text.contains(" Mo  Di  Mi  Do  Fr  Sa  So"));
    }

    #[test]
    fn days_carry_their_markers() {
        let text = render(2025, 1);

        // the first weekend of January 2025
        assert!(text.contains("4."));
        assert!(text.contains("5."));
        // New Year's Day is a holiday
        assert!(text.contains("1*"));
    }

    #[test]
    fn event_labels_are_listed() {
        let text = render(2025, 4);

        assert!(text.contains(" 18  Karfreitag"));
        assert!(text.contains(" 20  Ostersonntag"));
    }

    #[test]
    fn stacked_labels_are_joined() {
        let agenda = Agenda::from_config(&Config::default(), 2025).unwrap();
        let mut sheet = agenda.sheet(4).unwrap();
        sheet.add_event(20, "Geburtstag").unwrap();

        let mut buf = Vec::new();
        write_month(&sheet, locale::names("de").unwrap(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains(" 20  Ostersonntag, Geburtstag"));
    }
}
