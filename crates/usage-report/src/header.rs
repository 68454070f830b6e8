//! Page header block and page number stamps

use crate::constants::{
    A4_HEIGHT_MM, CELL_MARGIN, FONT_SIZE, GENERATED_AT_Y, PAGE_NUMBER_Y, PERIOD_FONT_SIZE,
    PERIOD_Y, RUNNING_TOTAL_Y, TITLE_FONT_SIZE, TITLE_Y, mm_to_pt,
};
use crate::options::ReportOptions;
use crate::surface::DrawingSurface;
use crate::types::{FontStyle, PageIndex, Point, ReportError, Result};
use chrono::{DateTime, Locale, TimeZone, Timelike};
use std::fmt::Display;

/// Pattern of the "generated at" timestamp, e.g.
/// `jueves, 5 de marzo de 2020 a las 03:04:05`. The es_ES locale has no
/// `%p` strings, so the meridiem is appended separately.
const GENERATED_AT_FORMAT: &str = "%A, %-d de %B de %Y a las %I:%M:%S";

/// Spanish 12-hour clock markers
fn meridiem(hour: u32) -> &'static str {
    if hour < 12 { "a. m." } else { "p. m." }
}

/// Text lines of the header block on page 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub period: String,
    pub generated_at: String,
}

impl ReportHeader {
    /// Header for the report of `month`/`year`, generated at `at`
    pub fn for_period<Tz>(
        options: &ReportOptions,
        year: i32,
        month: u32,
        at: &DateTime<Tz>,
    ) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Ok(Self {
            title: options.title.clone(),
            period: period_label(year, month, &options.month_names)?,
            generated_at: generated_at_label(&options.generated_at_label, at),
        })
    }
}

/// Report period label, e.g. `Enero 2020`
pub fn period_label(year: i32, month: u32, month_names: &[String]) -> Result<String> {
    let name = month
        .checked_sub(1)
        .and_then(|idx| month_names.get(idx as usize))
        .ok_or(ReportError::InvalidMonth(month))?;
    Ok(format!("{} {}", name, year))
}

/// "Generated at" line with a Spanish timestamp
pub fn generated_at_label<Tz>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{} {}",
        prefix,
        at.format_localized(GENERATED_AT_FORMAT, Locale::es_ES),
        meridiem(at.hour())
    )
}

/// X coordinate of the page number: the middle of the rotated page
fn page_number_x() -> f32 {
    mm_to_pt(A4_HEIGHT_MM) / 2.0
}

/// Stamp page numbers on every page and the header block on page 1.
pub fn write_page_headers(surface: &mut impl DrawingSurface, header: &ReportHeader) -> Result<()> {
    let mut page = PageIndex::FIRST;
    while page.number() <= surface.page_count() {
        surface.open_page(page)?;
        surface.place_text(
            Point::new(page_number_x(), PAGE_NUMBER_Y),
            FontStyle::Bold,
            FONT_SIZE,
            &page.to_string(),
        )?;

        if page.is_first() {
            surface.place_text(
                Point::new(CELL_MARGIN, TITLE_Y),
                FontStyle::Bold,
                TITLE_FONT_SIZE,
                &header.title,
            )?;
            surface.place_text(
                Point::new(CELL_MARGIN, PERIOD_Y),
                FontStyle::Bold,
                PERIOD_FONT_SIZE,
                &header.period,
            )?;
            surface.place_text(
                Point::new(CELL_MARGIN, GENERATED_AT_Y),
                FontStyle::Bold,
                FONT_SIZE,
                &header.generated_at,
            )?;
        }

        surface.close_page()?;
        page = page.next();
    }
    Ok(())
}

/// Add the running total line to page 1, after every row has been drawn.
pub fn stamp_running_total(surface: &mut impl DrawingSurface, line: &str) -> Result<()> {
    surface.open_page(PageIndex::FIRST)?;
    surface.place_text(
        Point::new(CELL_MARGIN, RUNNING_TOTAL_Y),
        FontStyle::Bold,
        FONT_SIZE,
        line,
    )?;
    surface.close_page()
}
