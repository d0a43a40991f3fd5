use crate::error::{ForecastError, Result};
use std::collections::HashMap;
use std::path::Path;

pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const DAY_COLUMN: &str = "Day";
pub const GRADE_COLUMN: &str = "Grade_Encoded";
pub const DISTRICT_PREFIX: &str = "District_";
pub const COMMODITY_PREFIX: &str = "Commodity_";

/// Which one-hot group an indicator column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorGroup {
    District,
    Commodity,
}

impl IndicatorGroup {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::District => DISTRICT_PREFIX,
            Self::Commodity => COMMODITY_PREFIX,
        }
    }

    pub fn column_name(&self, category: &str) -> String {
        format!("{}{}", self.prefix(), category)
    }
}

/// Ordered column layout the model was trained against.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    year_idx: usize,
    month_idx: usize,
    day_idx: usize,
    grade_idx: usize,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(ForecastError::Artifact(format!(
                    "Duplicate feature column '{}'",
                    name
                )));
            }
        }

        let scalar = |name: &str| {
            index.get(name).copied().ok_or_else(|| {
                ForecastError::Artifact(format!("Feature schema is missing column '{}'", name))
            })
        };

        let year_idx = scalar(YEAR_COLUMN)?;
        let month_idx = scalar(MONTH_COLUMN)?;
        let day_idx = scalar(DAY_COLUMN)?;
        let grade_idx = scalar(GRADE_COLUMN)?;

        Ok(Self {
            columns,
            index,
            year_idx,
            month_idx,
            day_idx,
            grade_idx,
        })
    }

    /// Schema used when the real feature list could not be loaded.
    pub fn fallback() -> Self {
        let columns = [
            YEAR_COLUMN,
            MONTH_COLUMN,
            DAY_COLUMN,
            GRADE_COLUMN,
            "District_Pune",
            "Commodity_Wheat",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            columns,
            index: [
                (YEAR_COLUMN, 0),
                (MONTH_COLUMN, 1),
                (DAY_COLUMN, 2),
                (GRADE_COLUMN, 3),
                ("District_Pune", 4),
                ("Commodity_Wheat", 5),
            ]
            .iter()
            .map(|(name, i)| (name.to_string(), *i))
            .collect(),
            year_idx: 0,
            month_idx: 1,
            day_idx: 2,
            grade_idx: 3,
        }
    }

    /// Load a JSON array of column names.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let columns: Vec<String> = serde_json::from_str(contents)?;
        Self::new(columns)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn indicator_position(&self, group: IndicatorGroup, category: &str) -> Option<usize> {
        self.position(&group.column_name(category))
    }

    pub fn year_position(&self) -> usize {
        self.year_idx
    }

    pub fn month_position(&self) -> usize {
        self.month_idx
    }

    pub fn day_position(&self) -> usize {
        self.day_idx
    }

    pub fn grade_position(&self) -> usize {
        self.grade_idx
    }

    /// Positions of every indicator column in `group`, in schema order.
    pub fn indicator_positions(&self, group: IndicatorGroup) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(group.prefix()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Category names that have an indicator column, in schema order.
    pub fn categories(&self, group: IndicatorGroup) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|name| name.strip_prefix(group.prefix()))
            .map(|s| s.to_string())
            .collect()
    }
}
