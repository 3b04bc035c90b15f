use crate::utils::dates::{iso_date_format, month_end, month_start, parse_year_month};
use crate::utils::error::Result;
use chrono::{Datelike, Months, NaiveDate};

/// Date range presets offered in the UI, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangePreset {
    AllAvailable,
    LastTwelveMonths,
    PreviousYear,
    Custom,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 4] = [
        DateRangePreset::AllAvailable,
        DateRangePreset::LastTwelveMonths,
        DateRangePreset::PreviousYear,
        DateRangePreset::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::AllAvailable => "All available",
            DateRangePreset::LastTwelveMonths => "Last 12 months",
            DateRangePreset::PreviousYear => "Previous year",
            DateRangePreset::Custom => "Custom",
        }
    }
}

/// Tracks the selected preset and the concrete start/end bounds derived from
/// it. For the custom preset both bounds are resolved to concrete dates as
/// soon as it is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeState {
    pub preset_index: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRangeState {
    pub fn selected_preset(&self) -> DateRangePreset {
        DateRangePreset::ALL
            .get(self.preset_index)
            .copied()
            .unwrap_or(DateRangePreset::AllAvailable)
    }

    /// Activates a preset, resolving relative offsets against `today`.
    /// The custom preset keeps whatever bounds already exist and only seeds
    /// them (end = today, start = end - 24 months) when still untouched.
    pub fn select_preset(&mut self, index: usize, today: NaiveDate) {
        let Some(preset) = DateRangePreset::ALL.get(index).copied() else {
            return;
        };
        self.preset_index = index;
        match preset {
            DateRangePreset::AllAvailable => {
                self.start = None;
                self.end = None;
            }
            DateRangePreset::LastTwelveMonths => {
                self.start = today.checked_sub_months(Months::new(12));
                self.end = Some(today);
            }
            DateRangePreset::PreviousYear => {
                let year = today.year() - 1;
                self.start = NaiveDate::from_ymd_opt(year, 1, 1);
                self.end = NaiveDate::from_ymd_opt(year, 12, 31);
            }
            DateRangePreset::Custom => {
                if self.end.is_none() {
                    self.end = Some(today);
                }
                if self.start.is_none() {
                    self.start = self.end.and_then(|d| d.checked_sub_months(Months::new(24)));
                }
            }
        }
    }

    pub fn set_start(&mut self, date: NaiveDate) {
        self.start = Some(date);
    }

    pub fn set_end(&mut self, date: NaiveDate) {
        self.end = Some(date);
    }

    /// Sets the start bound from a "yyyy-MM" string, snapping to the first
    /// day of that month.
    pub fn set_start_month(&mut self, year_month: &str) -> Result<()> {
        let date = parse_year_month(year_month)?;
        self.start = Some(month_start(date));
        Ok(())
    }

    /// Sets the end bound from a "yyyy-MM" string, snapping to the last day
    /// of that month.
    pub fn set_end_month(&mut self, year_month: &str) -> Result<()> {
        let date = parse_year_month(year_month)?;
        self.end = Some(month_end(date));
        Ok(())
    }

    pub fn start_text(&self) -> String {
        self.start.map(iso_date_format).unwrap_or_default()
    }

    pub fn end_text(&self) -> String {
        self.end.map(iso_date_format).unwrap_or_default()
    }
}
