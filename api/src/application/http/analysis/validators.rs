use antiox_core::domain::{analysis::entities::AnalysisRequest, food_input::entities::FoodInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing inputs or activityGoal";

/// Body of `POST /api/analysis`. Both fields are optional at the serde level
/// so that a missing one is reported as a `400` instead of a decode failure.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisRequest {
    #[validate(required(message = "Missing inputs or activityGoal"))]
    pub inputs: Option<Vec<FoodInput>>,

    #[validate(
        required(message = "Missing inputs or activityGoal"),
        length(min = 1, message = "Missing inputs or activityGoal")
    )]
    pub activity_goal: Option<String>,
}

impl TryFrom<CreateAnalysisRequest> for AnalysisRequest {
    type Error = &'static str;

    fn try_from(body: CreateAnalysisRequest) -> Result<Self, Self::Error> {
        match (body.inputs, body.activity_goal) {
            (Some(inputs), Some(activity_goal)) if !activity_goal.is_empty() => Ok(Self {
                inputs,
                activity_goal,
            }),
            _ => Err(MISSING_FIELDS_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateAnalysisRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_goal_fails_validation() {
        let body = parse(r#"{"inputs": []}"#);
        assert!(body.validate().is_err());
        assert_eq!(AnalysisRequest::try_from(body), Err(MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_empty_goal_fails_validation() {
        let body = parse(r#"{"inputs": [], "activityGoal": ""}"#);
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_empty_inputs_list_is_accepted() {
        let body = parse(r#"{"inputs": [], "activityGoal": "yoga"}"#);
        assert!(body.validate().is_ok());

        let request = AnalysisRequest::try_from(body).unwrap();
        assert!(request.inputs.is_empty());
        assert_eq!(request.activity_goal, "yoga");
    }
}
