use rust_decimal::Decimal;
use serde::Serialize;

use crate::summary::FlexSettings;

/// The values one summary row evaluates to.
///
/// Mirrors the sheet formulas so the workbook can carry cached results and
/// the numbers can be checked without a spreadsheet engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlexHours {
    pub actual_hours: Decimal,
    pub flex_minutes_per_week: Decimal,
    pub flex_hours_per_week: Decimal,
    pub flex_hours_per_year: Decimal,
    pub period1_weeks: Decimal,
    pub period1_hours_per_week: Decimal,
    pub period2_weeks: Decimal,
    pub period2_hours_per_week: Decimal,
    pub variance: Decimal,
}

impl FlexHours {
    /// `actual_hours` must be non-negative; ROUNDUP and ROUNDDOWN are then
    /// plain ceiling and truncation. `None` when a step leaves the decimal
    /// range.
    pub fn compute(actual_hours: Decimal, settings: &FlexSettings) -> Option<Self> {
        let weeks = settings.week_count;

        let flex_minutes_per_week = actual_hours.checked_mul(settings.minute_reduction)?;
        let flex_hours_per_week = flex_minutes_per_week.checked_div(settings.lesson_minutes)?;
        // Same value as per_week * weeks, without the rounding of the quotient
        let flex_hours_per_year = flex_minutes_per_week
            .checked_mul(weeks)?
            .checked_div(settings.lesson_minutes)?;

        let period1_hours_per_week = flex_hours_per_week.ceil();
        let period2_hours_per_week = flex_hours_per_week.trunc();
        let period1_weeks = flex_hours_per_year
            .checked_sub(period2_hours_per_week.checked_mul(weeks)?)?
            .trunc();
        let period2_weeks = weeks.checked_sub(period1_weeks)?;

        let covered = period1_weeks
            .checked_mul(period1_hours_per_week)?
            .checked_add(period2_weeks.checked_mul(period2_hours_per_week)?)?;
        let variance = flex_hours_per_year.checked_sub(covered)?;

        Some(Self {
            actual_hours,
            flex_minutes_per_week,
            flex_hours_per_week,
            flex_hours_per_year,
            period1_weeks,
            period1_hours_per_week,
            period2_weeks,
            period2_hours_per_week,
            variance,
        })
    }
}
