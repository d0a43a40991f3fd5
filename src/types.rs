use serde::{Deserialize, Serialize};
use std::fmt;

/// Months covered by a forecast sweep, in the order they are produced.
pub const MONTHS: std::ops::RangeInclusive<u32> = 1..=12;

/// Quality grade as encoded in the training data (1 = lowest, 3 = best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Low = 1,
    Standard = 2,
    Best = 3,
}

impl Grade {
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Standard, Self::Best]
    }

    pub fn encoded(self) -> u8 {
        self as u8
    }
}

impl Default for Grade {
    fn default() -> Self {
        Self::Best
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Standard),
            3 => Ok(Self::Best),
            other => Err(format!("Grade must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.encoded()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded())
    }
}

/// How much of the district dimension the comparison sweep fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonScope {
    /// Every month for every district.
    #[default]
    AllMonths,
    /// Only the month picked in the query.
    SelectedMonth,
}

/// One complete, validated user submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub district: String,
    pub commodity: String,
    pub grade: Grade,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: u32,
    pub price: f64,
}

/// Twelve independent month predictions for one district/commodity/grade/year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub district: String,
    pub commodity: String,
    pub grade: Grade,
    pub year: i32,
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn price_at(&self, month: u32) -> Option<f64> {
        self.points.iter().find(|p| p.month == month).map(|p| p.price)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub district: String,
    pub month: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub commodity: String,
    pub grade: Grade,
    pub year: i32,
    pub scope: ComparisonScope,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn price_for(&self, district: &str, month: u32) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.district == district && r.month == month)
            .map(|r| r.price)
    }

    pub fn rows_for_district<'a>(&'a self, district: &'a str) -> impl Iterator<Item = &'a ComparisonRow> + 'a {
        self.rows.iter().filter(move |r| r.district == district)
    }
}

/// One district's price within a single-month view of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparisonEntry {
    pub district: String,
    pub price: f64,
    pub is_highest: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparison {
    pub month: u32,
    pub max_price: Option<f64>,
    /// Sorted by price, highest first.
    pub entries: Vec<MonthComparisonEntry>,
}

impl MonthComparison {
    pub fn highest_districts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_highest)
            .map(|e| e.district.as_str())
            .collect()
    }
}

/// Everything the results screen renders for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub query: QueryState,
    pub price: f64,
    pub forecast: ForecastSeries,
    pub comparison: ComparisonTable,
}
