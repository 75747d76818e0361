use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Share of the target below which a meal counts as deficient.
pub const DEFICIENCY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_score: f64,
    pub target_score: f64,
    /// Share of the target met, as reported by the model. May exceed 100.
    pub percentage: f64,
    pub deficiency_category: String,
    pub breakdown: Vec<ApiBreakdownItem>,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiBreakdownItem {
    pub source: String,
    pub item: String,
    pub portion: String,
    #[serde(rename = "totalAPI")]
    pub total_api: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub status: RecommendationStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    TargetMet,
    Deficient,
}

impl RecommendationStatus {
    /// Status the scoring rubric prescribes for the given scores.
    pub fn for_scores(total_score: f64, target_score: f64) -> Self {
        if total_score < target_score * DEFICIENCY_THRESHOLD {
            RecommendationStatus::Deficient
        } else {
            RecommendationStatus::TargetMet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::TargetMet => "TARGET_MET",
            RecommendationStatus::Deficient => "DEFICIENT",
        }
    }
}

impl AnalysisResult {
    /// `round(100 * total / target)`, or `None` when the target is not positive.
    pub fn expected_percentage(&self) -> Option<f64> {
        if self.target_score > 0.0 {
            Some((100.0 * self.total_score / self.target_score).round())
        } else {
            None
        }
    }

    pub fn is_percentage_consistent(&self) -> bool {
        self.expected_percentage()
            .is_none_or(|expected| (expected - self.percentage).abs() <= 1.0)
    }

    pub fn is_status_consistent(&self) -> bool {
        RecommendationStatus::for_scores(self.total_score, self.target_score)
            == self.recommendation.status
    }
}
