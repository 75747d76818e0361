use std::fmt;

use crate::domain::analysis::entities::{AnalysisResult, RecommendationStatus};

/// Display-ready projection of an [`AnalysisResult`]. Holds no logic beyond
/// formatting: the status comes straight from the recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub status: RecommendationStatus,
    pub headline: &'static str,
    pub total_score: f64,
    pub target_score: f64,
    pub percentage: f64,
    /// Progress bar fill, clamped to `0..=100`.
    pub progress: f64,
    pub deficiency_category: String,
    pub rows: Vec<BreakdownRow>,
    pub message: String,
    pub food_suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub source: String,
    pub item: String,
    pub portion: String,
    pub total_api: f64,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let status = result.recommendation.status;
        let headline = match status {
            RecommendationStatus::TargetMet => "Target Met",
            RecommendationStatus::Deficient => "Deficiency Detected",
        };

        Self {
            status,
            headline,
            total_score: result.total_score,
            target_score: result.target_score,
            percentage: result.percentage,
            progress: result.percentage.clamp(0.0, 100.0),
            deficiency_category: result.deficiency_category.clone(),
            rows: result
                .breakdown
                .iter()
                .map(|item| BreakdownRow {
                    source: item.source.clone(),
                    item: item.item.clone(),
                    portion: item.portion.clone(),
                    total_api: item.total_api,
                })
                .collect(),
            message: result.recommendation.message.clone(),
            food_suggestion: result
                .recommendation
                .food_suggestion
                .clone()
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.headline, self.status.as_str())?;
        writeln!(
            f,
            "Total API: {} / {} ({}%)",
            self.total_score, self.target_score, self.percentage
        )?;
        writeln!(f, "Deficiency: {}", self.deficiency_category)?;

        for row in &self.rows {
            writeln!(
                f,
                "  - {} ({}, {}): {}",
                row.item, row.source, row.portion, row.total_api
            )?;
        }

        writeln!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.food_suggestion {
            writeln!(f, "Try adding: {}", suggestion)?;
        }

        Ok(())
    }
}
