use crate::domain::{
    analysis::entities::{AnalysisRequest, ClientError},
    food_input::entities::{FoodInput, FoodInputError, InputKind, image_data_url},
};

pub const MISSING_INPUTS_MESSAGE: &str = "Please add at least one food input.";
pub const MISSING_GOAL_MESSAGE: &str = "Please specify your activity/lifestyle goal.";

/// Client-side meal description: the ordered food inputs and the activity goal.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    inputs: Vec<FoodInput>,
    activity_goal: String,
    max_inputs: Option<usize>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_inputs(max_inputs: usize) -> Self {
        Self {
            max_inputs: Some(max_inputs),
            ..Self::default()
        }
    }

    pub fn inputs(&self) -> &[FoodInput] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn activity_goal(&self) -> &str {
        &self.activity_goal
    }

    pub fn set_activity_goal(&mut self, goal: impl Into<String>) {
        self.activity_goal = goal.into();
    }

    /// Appends a text entry. Returns `Ok(None)` and leaves the list untouched
    /// when `name` is blank.
    pub fn add_text_input(
        &mut self,
        name: &str,
        portion: Option<&str>,
    ) -> Result<Option<&FoodInput>, FoodInputError> {
        if name.trim().is_empty() {
            return Ok(None);
        }

        let input = FoodInput::text(name.to_string(), portion.map(str::to_string));
        self.push(input).map(Some)
    }

    pub fn add_image_input(&mut self, base64: String) -> Result<&FoodInput, FoodInputError> {
        self.push(FoodInput::image(InputKind::Image, base64))
    }

    /// Appends a picked image file, encoded as a data URI.
    pub fn add_image_file(&mut self, bytes: &[u8]) -> Result<&FoodInput, FoodInputError> {
        let data_url = image_data_url(bytes)?;
        self.add_image_input(data_url)
    }

    pub fn add_camera_input(&mut self, base64: String) -> Result<&FoodInput, FoodInputError> {
        self.push(FoodInput::image(InputKind::Camera, base64))
    }

    pub fn remove_input(&mut self, id: &str) -> bool {
        let before = self.inputs.len();
        self.inputs.retain(|input| input.id != id);
        self.inputs.len() != before
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    /// Validates the preconditions of an analysis call and snapshots the
    /// current state into a request body.
    pub fn build_request(&self) -> Result<AnalysisRequest, ClientError> {
        if self.inputs.is_empty() {
            return Err(ClientError::Validation(MISSING_INPUTS_MESSAGE.to_string()));
        }

        if self.activity_goal.trim().is_empty() {
            return Err(ClientError::Validation(MISSING_GOAL_MESSAGE.to_string()));
        }

        Ok(AnalysisRequest {
            inputs: self.inputs.clone(),
            activity_goal: self.activity_goal.clone(),
        })
    }

    fn push(&mut self, input: FoodInput) -> Result<&FoodInput, FoodInputError> {
        if let Some(max) = self.max_inputs
            && self.inputs.len() >= max
        {
            return Err(FoodInputError::TooManyInputs { max });
        }

        self.inputs.push(input);
        Ok(&self.inputs[self.inputs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_input_is_ignored() {
        let mut collector = InputCollector::new();

        assert_eq!(collector.add_text_input("", None), Ok(None));
        assert_eq!(collector.add_text_input("   ", Some("100")), Ok(None));
        assert!(collector.is_empty());
    }

    #[test]
    fn test_length_and_order_after_mixed_operations() {
        let mut collector = InputCollector::new();

        let first = collector
            .add_text_input("Blueberries", Some("150"))
            .unwrap()
            .unwrap()
            .id
            .clone();
        let second = collector
            .add_image_input("data:image/jpeg;base64,AAAA".to_string())
            .unwrap()
            .id
            .clone();
        let third = collector
            .add_camera_input("data:image/jpeg;base64,BBBB".to_string())
            .unwrap()
            .id
            .clone();
        collector.add_text_input("Dark chocolate", None).unwrap();

        assert!(collector.remove_input(&second));
        assert!(!collector.remove_input(&second));
        assert!(!collector.remove_input("missing"));

        assert_eq!(collector.len(), 3);
        let ids: Vec<&str> = collector.inputs().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids[0], first);
        assert_eq!(ids[1], third);
        assert_eq!(collector.inputs()[2].value, "Dark chocolate");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut collector = InputCollector::new();
        for _ in 0..50 {
            collector.add_text_input("Spinach", None).unwrap();
        }

        let mut ids: Vec<&str> = collector.inputs().iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_image_input_is_not_validated() {
        let mut collector = InputCollector::new();
        let input = collector.add_image_input(String::new()).unwrap();

        assert_eq!(input.kind, InputKind::Image);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_image_file_becomes_data_uri_input() {
        let mut collector = InputCollector::new();
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

        let input = collector.add_image_file(&jpeg).unwrap();

        assert_eq!(input.kind, InputKind::Image);
        assert!(input.value.starts_with("data:image/jpeg;base64,"));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_unrecognised_image_file_is_rejected() {
        let mut collector = InputCollector::new();

        assert!(matches!(
            collector.add_image_file(b"plain text"),
            Err(FoodInputError::UnsupportedImage(_))
        ));
        assert!(collector.is_empty());
    }

    #[test]
    fn test_max_inputs_is_enforced() {
        let mut collector = InputCollector::with_max_inputs(1);
        collector.add_text_input("Kale", None).unwrap();

        assert_eq!(
            collector.add_image_input("AAAA".to_string()).unwrap_err(),
            FoodInputError::TooManyInputs { max: 1 }
        );
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_build_request_requires_inputs() {
        let mut collector = InputCollector::new();
        collector.set_activity_goal("marathon training");

        assert_eq!(
            collector.build_request().unwrap_err(),
            ClientError::Validation(MISSING_INPUTS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_build_request_requires_goal() {
        let mut collector = InputCollector::new();
        collector.add_text_input("Kale", None).unwrap();

        collector.set_activity_goal("   ");
        assert_eq!(
            collector.build_request().unwrap_err(),
            ClientError::Validation(MISSING_GOAL_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_build_request_snapshots_state() {
        let mut collector = InputCollector::new();
        collector.add_text_input("Kale", Some("80")).unwrap();
        collector.set_activity_goal("office work");

        let request = collector.build_request().unwrap();
        collector.clear();

        assert_eq!(request.inputs.len(), 1);
        assert_eq!(request.inputs[0].portion.as_deref(), Some("80"));
        assert_eq!(request.activity_goal, "office work");
    }
}
