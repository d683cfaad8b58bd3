use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

pub const SAMPLE_SIZE: usize = 3;

pub const MIN_BINS: usize = 5;
pub const MAX_BINS: usize = 100;
const DEFAULT_BINS: usize = 30;

/// Number of equal-width histogram intervals, always within `[5, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BinCount(usize);

impl BinCount {
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BinCount {
    fn default() -> Self {
        BinCount(DEFAULT_BINS)
    }
}

impl TryFrom<usize> for BinCount {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if (MIN_BINS..=MAX_BINS).contains(&value) {
            Ok(BinCount(value))
        } else {
            Err(format!(
                "bin count must be between {} and {}, got {}",
                MIN_BINS, MAX_BINS, value
            ))
        }
    }
}

impl From<BinCount> for usize {
    fn from(bins: BinCount) -> Self {
        bins.0
    }
}

impl fmt::Display for BinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub row_count: usize,
    pub column_count: usize,
    pub missing_values: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub data_type: String,
    pub valid_count: usize,
    pub missing_count: usize,
    pub unique_count: usize,
    pub sample_values: SmallVec<[serde_json::Value; SAMPLE_SIZE]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// Seven-number summary of one numeric column. Everything but `count` and
/// `missing` is absent when the column holds no values; `std` additionally
/// needs two values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bin_count: BinCount,
    pub total: usize,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scatter {
    pub x: String,
    pub y: String,
    pub points: Vec<(f64, f64)>,
    pub trend_line: Option<TrendLine>,
}
