use serde::{Deserialize, Serialize};

use crate::services::table::{
    ColumnSummary, DataPreview, DescriptiveStats, Histogram, Overview, Scatter,
};

fn default_true() -> bool {
    true
}

/// Section toggles and widget selections for one analysis pass.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeOptions {
    #[serde(default = "default_true")]
    pub show_overview: bool,
    #[serde(default = "default_true")]
    pub show_stats: bool,
    #[serde(default = "default_true")]
    pub show_viz: bool,
    pub column: Option<String>,
    pub bins: Option<usize>,
    pub x: Option<String>,
    pub y: Option<String>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            show_overview: true,
            show_stats: true,
            show_viz: true,
            column: None,
            bins: None,
            x: None,
            y: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub overview: Overview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<DescriptiveStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualizations: Option<Visualizations>,
    pub numeric_columns: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DetailsSection {
    pub preview: DataPreview,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Visualizations {
    Available {
        distribution: Histogram,
        correlation: Scatter,
    },
    Unavailable {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureGlossary {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: Vec<FeatureInfo>,
}
