use serde_json::json;

/// Returns the JSON schema the model must follow for an analysis result
pub fn get_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "totalScore": {
                "type": "number",
                "description": "The calculated Grand Total API Score."
            },
            "targetScore": {
                "type": "number",
                "description": "The calculated Target API based on user activity."
            },
            "percentage": {
                "type": "number",
                "description": "Percentage of target met (0-100)."
            },
            "deficiencyCategory": {
                "type": "string",
                "description": "Primary antioxidant deficiency (e.g., 'Vitamin C', 'Polyphenols') or 'None'."
            },
            "breakdown": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "source": {
                            "type": "string",
                            "description": "Input source (e.g., 'Photo', 'Text', 'Label')."
                        },
                        "item": { "type": "string", "description": "Name of the food item." },
                        "portion": { "type": "string", "description": "Portion size in grams." },
                        "totalAPI": {
                            "type": "number",
                            "description": "API contribution of this item."
                        }
                    },
                    "required": ["source", "item", "portion", "totalAPI"]
                }
            },
            "recommendation": {
                "type": "object",
                "properties": {
                    "status": { "type": "string", "enum": ["TARGET_MET", "DEFICIENT"] },
                    "message": { "type": "string", "description": "Concise actionable advice." },
                    "foodSuggestion": {
                        "type": "string",
                        "description": "One specific high-efficiency food to fix the deficiency."
                    }
                },
                "required": ["status", "message"]
            }
        },
        "required": [
            "totalScore", "targetScore", "percentage",
            "deficiencyCategory", "breakdown", "recommendation"
        ]
    })
}
