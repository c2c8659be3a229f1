//! Growth series output structures

use super::rates::MONTHS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// Resolution of a growth series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// One row per month, periods numbered from 1
    Monthly,
    /// One row per year, periods numbered from 0 (the starting principal)
    Annual,
}

/// A single row of a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Period index (month from 1, or year from 0 for annual series)
    pub period: u32,

    /// Contribution made in this period
    pub contribution: f64,

    /// Cumulative amount contributed up to and including this period
    pub total_invested: f64,

    /// Cumulative grown value at the end of this period
    pub value: f64,
}

/// Ordered per-period projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub frequency: Frequency,
    pub rows: Vec<GrowthRow>,
}

impl GrowthSeries {
    pub fn with_capacity(frequency: Frequency, capacity: usize) -> Self {
        Self {
            frequency,
            rows: Vec::with_capacity(capacity),
        }
    }

    /// Append a row
    pub fn push(&mut self, row: GrowthRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&GrowthRow> {
        self.rows.last()
    }

    pub fn final_value(&self) -> f64 {
        self.rows.last().map(|r| r.value).unwrap_or(0.0)
    }

    pub fn total_invested(&self) -> f64 {
        self.rows.last().map(|r| r.total_invested).unwrap_or(0.0)
    }

    pub fn wealth_gained(&self) -> f64 {
        self.final_value() - self.total_invested()
    }

    /// Gain as a percentage of the amount invested (0 when nothing was invested)
    pub fn returns_pct(&self) -> f64 {
        returns_pct(self.wealth_gained(), self.total_invested())
    }

    /// Headline figures for the whole series
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            periods: self.rows.len() as u32,
            total_invested: self.total_invested(),
            final_value: self.final_value(),
            wealth_gained: self.wealth_gained(),
            returns_pct: self.returns_pct(),
        }
    }

    /// Year-end snapshot of the series
    ///
    /// Monthly series keep the rows closing each year; annual series keep
    /// every row.
    pub fn yearly(&self) -> Vec<YearlyRow> {
        self.rows
            .iter()
            .filter_map(|row| {
                let year = match self.frequency {
                    Frequency::Monthly if row.period % MONTHS_PER_YEAR == 0 => {
                        row.period / MONTHS_PER_YEAR
                    }
                    Frequency::Monthly => return None,
                    Frequency::Annual => row.period,
                };
                let wealth_gained = row.value - row.total_invested;
                Some(YearlyRow {
                    year,
                    total_invested: row.total_invested,
                    value: row.value,
                    wealth_gained,
                    returns_pct: returns_pct(wealth_gained, row.total_invested),
                })
            })
            .collect()
    }
}

fn returns_pct(gain: f64, invested: f64) -> f64 {
    if invested > 0.0 {
        gain / invested * 100.0
    } else {
        0.0
    }
}

/// Summary statistics for a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub periods: u32,
    pub total_invested: f64,
    pub final_value: f64,
    pub wealth_gained: f64,
    pub returns_pct: f64,
}

/// Year-end breakdown row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub total_invested: f64,
    pub value: f64,
    pub wealth_gained: f64,
    pub returns_pct: f64,
}
