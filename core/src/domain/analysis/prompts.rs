use crate::domain::{
    analysis::{entities::AnalysisRequest, value_objects::PromptPart},
    food_input::entities::InputKind,
};

pub const SYSTEM_INSTRUCTION: &str = r#"
You are an advanced **Antioxidant Nutritional Expert Assistant**.
Your goal is to calculate the **API (Antioxidant Protection Index)** score (0-100 scale per item, normalized to a daily target) based on user inputs.

**API Definition:** standardized score representing comprehensive antioxidant density (ORAC, vitamin, polyphenol).

**Rules:**
1. **Analyze** all provided text and images (food photos or nutrition labels).
2. **Estimate** portions if not provided (visual estimation).
3. **Calculate** API per item and Total API.
4. **Determine Target** based on the user's stated Activity/Lifestyle Goal.
5. **Logic:** If Total API < 80% of Target, status is DEFICIENT. Otherwise status is TARGET_MET.

**Output:**
Return strictly JSON.
"#;

const UNKNOWN_PORTION: &str = "Unknown";

/// Builds the user turn: the goal first, then one segment per input in order.
/// Images are sent inline and followed by an instruction line.
pub fn build_prompt_parts(request: &AnalysisRequest) -> Vec<PromptPart> {
    let mut parts = Vec::with_capacity(1 + request.inputs.len() * 2);

    parts.push(PromptPart::text(format!(
        "User Activity/Lifestyle Goal: {}",
        request.activity_goal
    )));

    for (index, input) in request.inputs.iter().enumerate() {
        let position = index + 1;

        match input.kind {
            InputKind::Text => {
                let portion = input
                    .portion
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .unwrap_or(UNKNOWN_PORTION);

                parts.push(PromptPart::text(format!(
                    "Input {position} (Text): Food: {}, Portion: {portion}",
                    input.value
                )));
            }
            InputKind::Image | InputKind::Camera => {
                parts.push(PromptPart::jpeg(input.image_payload()));
                parts.push(PromptPart::text(format!(
                    "Input {position} (Image): Analyze this image for food content or nutrition labels."
                )));
            }
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_input::entities::FoodInput;

    fn request(inputs: Vec<FoodInput>) -> AnalysisRequest {
        AnalysisRequest {
            inputs,
            activity_goal: "marathon training".to_string(),
        }
    }

    #[test]
    fn test_goal_comes_first() {
        let parts = build_prompt_parts(&request(vec![]));
        assert_eq!(
            parts,
            vec![PromptPart::text(
                "User Activity/Lifestyle Goal: marathon training"
            )]
        );
    }

    #[test]
    fn test_text_input_with_and_without_portion() {
        let parts = build_prompt_parts(&request(vec![
            FoodInput::text("Blueberries".to_string(), Some("150".to_string())),
            FoodInput::text("Green tea".to_string(), None),
        ]));

        assert_eq!(
            parts[1],
            PromptPart::text("Input 1 (Text): Food: Blueberries, Portion: 150")
        );
        assert_eq!(
            parts[2],
            PromptPart::text("Input 2 (Text): Food: Green tea, Portion: Unknown")
        );
    }

    #[test]
    fn test_image_inputs_are_inlined_and_annotated() {
        let parts = build_prompt_parts(&request(vec![
            FoodInput::text("Kale".to_string(), None),
            FoodInput::image(InputKind::Image, "data:image/png;base64,QUJD".to_string()),
            FoodInput::image(InputKind::Camera, "REVG".to_string()),
        ]));

        assert_eq!(parts.len(), 6);
        assert_eq!(parts[2], PromptPart::jpeg("QUJD"));
        assert_eq!(
            parts[3],
            PromptPart::text(
                "Input 2 (Image): Analyze this image for food content or nutrition labels."
            )
        );
        assert_eq!(parts[4], PromptPart::jpeg("REVG"));
        assert!(matches!(&parts[5], PromptPart::Text(t) if t.starts_with("Input 3 (Image)")));
    }
}
