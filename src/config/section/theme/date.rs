//! `[theme.date]` display settings.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Order of date components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    #[serde(rename = "MM-DD-YYYY")]
    MonthDayYear,
    #[serde(rename = "DD-MM-YYYY")]
    DayMonthYear,
    /// `June 15 2024`
    #[serde(rename = "MONTH DAY YYYY")]
    MonthNameDayYear,
    /// `15 June 2024`
    #[serde(rename = "DAY MONTH YYYY")]
    DayMonthNameYear,
}

/// Separator between numeric components. Ignored by the month-name formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSeparator {
    #[default]
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "/")]
    Slash,
}

impl DateSeparator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Dash => "-",
            Self::Slash => "/",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub date_format: DateFormat,
    pub date_separator: DateSeparator,
    /// Show the date to the right of the post title in lists.
    pub date_on_right: bool,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            date_separator: DateSeparator::default(),
            date_on_right: true,
        }
    }
}

impl DateConfig {
    /// Render `date` for display.
    pub fn format(&self, date: &DateTimeUtc) -> String {
        let sep = self.date_separator.as_str();
        let (y, m, d) = (date.year, date.month, date.day);
        match self.date_format {
            DateFormat::YearMonthDay => format!("{y:04}{sep}{m:02}{sep}{d:02}"),
            DateFormat::MonthDayYear => format!("{m:02}{sep}{d:02}{sep}{y:04}"),
            DateFormat::DayMonthYear => format!("{d:02}{sep}{m:02}{sep}{y:04}"),
            DateFormat::MonthNameDayYear => format!("{} {d} {y}", date.month_name()),
            DateFormat::DayMonthNameYear => format!("{d} {} {y}", date.month_name()),
        }
    }
}
