use polars::prelude::DataFrame;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{AnalysisReport, AnalyzeOptions, DetailsSection, Visualizations};
use crate::services::table::{
    correlation, distribution, overview, statistics, utils::numeric_column_names, BinCount,
};

pub const NO_NUMERIC_COLUMNS: &str = "no numeric columns available";

/// Runs one full analysis pass over a loaded table.
pub struct DatasetAnalyzer {
    preview_rows: usize,
    default_bins: BinCount,
}

impl DatasetAnalyzer {
    pub fn new(config: &Config) -> Self {
        Self {
            preview_rows: config.preview_rows,
            default_bins: config.default_bins,
        }
    }

    pub fn analyze(&self, df: &DataFrame, options: &AnalyzeOptions) -> Result<AnalysisReport, AppError> {
        let start = std::time::Instant::now();
        let numeric_columns = numeric_column_names(df);
        tracing::info!(
            "Analyzing table: {} rows, {} columns, {} numeric",
            df.height(),
            df.width(),
            numeric_columns.len()
        );

        let details = if options.show_overview {
            Some(DetailsSection {
                preview: overview::preview(df, self.preview_rows)?,
                columns: overview::column_summaries(df)?,
            })
        } else {
            None
        };

        let statistics = if options.show_stats && !numeric_columns.is_empty() {
            Some(statistics::describe(df)?)
        } else {
            None
        };

        let visualizations = if options.show_viz {
            Some(self.visualize(df, &numeric_columns, options)?)
        } else {
            None
        };

        tracing::info!("Analysis completed in {:?}", start.elapsed());

        Ok(AnalysisReport {
            overview: overview::overview(df),
            details,
            statistics,
            visualizations,
            numeric_columns,
        })
    }

    fn visualize(
        &self,
        df: &DataFrame,
        numeric_columns: &[String],
        options: &AnalyzeOptions,
    ) -> Result<Visualizations, AppError> {
        let (first, second) = match numeric_columns {
            [] => {
                tracing::info!("Skipping visualizations: {}", NO_NUMERIC_COLUMNS);
                return Ok(Visualizations::Unavailable {
                    message: NO_NUMERIC_COLUMNS.to_string(),
                });
            }
            [only] => (only, only),
            [first, second, ..] => (first, second),
        };

        let bins = match options.bins {
            Some(raw) => BinCount::try_from(raw).map_err(AppError::InvalidInput)?,
            None => self.default_bins,
        };
        let column = options.column.as_deref().unwrap_or(first);
        let x = options.x.as_deref().unwrap_or(first);
        let y = options.y.as_deref().unwrap_or(second);

        Ok(Visualizations::Available {
            distribution: distribution::histogram(df, column, bins)?,
            correlation: correlation::scatter(df, x, y)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::table::loader::table_from_csv;

    const VOICE_CSV: &str = "name,MDVP:Fo(Hz),MDVP:Fhi(Hz),NHR,status\n\
        phon_R01_S01_1,119.992,157.302,0.02211,1\n\
        phon_R01_S01_2,122.4,148.65,0.01929,1\n\
        phon_R01_S01_3,116.682,131.111,,1\n\
        phon_R01_S07_1,197.076,206.896,0.00339,0\n";

    fn analyzer() -> DatasetAnalyzer {
        DatasetAnalyzer::new(&Config::default())
    }

    #[test]
    fn test_full_report_with_defaults() {
        let df = table_from_csv(VOICE_CSV);
        let report = analyzer().analyze(&df, &AnalyzeOptions::default()).unwrap();

        assert_eq!(report.overview.row_count, 4);
        assert_eq!(report.overview.column_count, 5);
        assert_eq!(report.overview.missing_values, 1);
        assert_eq!(report.numeric_columns.len(), 4);
        assert_eq!(report.statistics.as_ref().unwrap().len(), 4);

        let details = report.details.unwrap();
        assert_eq!(details.columns.len(), 5);
        assert_eq!(details.preview.rows.len(), 4);

        match report.visualizations.unwrap() {
            Visualizations::Available { distribution, correlation } => {
                assert_eq!(distribution.column, "MDVP:Fo(Hz)");
                assert_eq!(distribution.bin_count.get(), 30);
                assert_eq!(distribution.total, 4);
                assert_eq!(correlation.x, "MDVP:Fo(Hz)");
                assert_eq!(correlation.y, "MDVP:Fhi(Hz)");
                assert!(correlation.trend_line.is_some());
            }
            other => panic!("expected visualizations, got {:?}", other),
        }
    }

    #[test]
    fn test_selections_are_honored() {
        let df = table_from_csv(VOICE_CSV);
        let options = AnalyzeOptions {
            column: Some("NHR".to_string()),
            bins: Some(5),
            x: Some("NHR".to_string()),
            y: Some("status".to_string()),
            ..AnalyzeOptions::default()
        };
        let report = analyzer().analyze(&df, &options).unwrap();
        match report.visualizations.unwrap() {
            Visualizations::Available { distribution, correlation } => {
                assert_eq!(distribution.bins.len(), 5);
                assert_eq!(distribution.total, 3);
                assert_eq!(correlation.points.len(), 3);
            }
            other => panic!("expected visualizations, got {:?}", other),
        }
    }

    #[test]
    fn test_hidden_sections_are_omitted() {
        let df = table_from_csv(VOICE_CSV);
        let options = AnalyzeOptions {
            show_overview: false,
            show_stats: false,
            show_viz: false,
            ..AnalyzeOptions::default()
        };
        let report = analyzer().analyze(&df, &options).unwrap();
        assert!(report.details.is_none());
        assert!(report.statistics.is_none());
        assert!(report.visualizations.is_none());
        assert_eq!(report.overview.row_count, 4);
    }

    #[test]
    fn test_no_numeric_columns_is_not_an_error() {
        let df = table_from_csv("name,site\nS1,A\nS2,B\n");
        let report = analyzer().analyze(&df, &AnalyzeOptions::default()).unwrap();
        assert!(report.statistics.is_none());
        match report.visualizations.unwrap() {
            Visualizations::Unavailable { message } => assert_eq!(message, NO_NUMERIC_COLUMNS),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_single_numeric_column_plots_against_itself() {
        let df = table_from_csv("name,fo\nS1,1.0\nS2,2.0\nS3,4.0\n");
        let report = analyzer().analyze(&df, &AnalyzeOptions::default()).unwrap();
        match report.visualizations.unwrap() {
            Visualizations::Available { correlation, .. } => {
                assert_eq!(correlation.x, "fo");
                assert_eq!(correlation.y, "fo");
            }
            other => panic!("expected visualizations, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_bin_count_is_invalid_input() {
        let df = table_from_csv(VOICE_CSV);
        let options = AnalyzeOptions { bins: Some(101), ..AnalyzeOptions::default() };
        assert!(matches!(
            analyzer().analyze(&df, &options),
            Err(AppError::InvalidInput(_))
        ));
    }
}
