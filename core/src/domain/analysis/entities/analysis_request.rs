use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_input::entities::FoodInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub inputs: Vec<FoodInput>,
    pub activity_goal: String,
}
