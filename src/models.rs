//! Recipe API payloads.
//!
//! Only the fields the browser renders are typed; everything else the API
//! returns is kept in `extra` so nothing is lost on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResult {
    /// Build a result with no extra fields.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            extra: Map::new(),
        }
    }
}

/// Body of `GET /recipes/complexSearch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single instruction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub step: String,
}

/// An ordered set of steps. Recipes may carry several; only the first is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Body of `GET /recipes/{id}/information`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    /// HTML-bearing summary as returned by the API
    #[serde(default)]
    pub summary: String,
    #[serde(rename = "analyzedInstructions", default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Steps of the first instruction group, in the order received.
    pub fn first_steps(&self) -> &[Step] {
        self.analyzed_instructions
            .first()
            .map(|group| group.steps.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_keeps_order_and_extra_fields() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"id": 1, "title": "Pasta", "image": "https://img/1.jpg", "imageType": "jpg"},
                {"id": 2, "title": "Soup", "image": "https://img/2.jpg"}
            ],
            "offset": 0,
            "number": 10,
            "totalResults": 2
        }))
        .unwrap();

        let ids: Vec<u64> = response.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(response.results[0].extra.get("imageType"), Some(&json!("jpg")));
        assert!(response.results[1].extra.is_empty());
    }

    #[test]
    fn test_search_response_without_results_is_empty() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_recipe_first_steps() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 7,
            "title": "Spaghetti",
            "summary": "<b>Good</b>",
            "analyzedInstructions": [
                {"name": "", "steps": [
                    {"number": 1, "step": "Boil water", "ingredients": []},
                    {"number": 2, "step": "Add pasta"}
                ]},
                {"name": "Sauce", "steps": [{"number": 1, "step": "Simmer"}]}
            ]
        }))
        .unwrap();

        let steps = recipe.first_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], Step { number: 1, step: "Boil water".to_string() });
        assert_eq!(steps[1], Step { number: 2, step: "Add pasta".to_string() });
    }

    #[test]
    fn test_recipe_steps_not_resorted() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 3,
            "analyzedInstructions": [{"steps": [
                {"number": 2, "step": "second"},
                {"number": 1, "step": "first"}
            ]}]
        }))
        .unwrap();

        let numbers: Vec<u32> = recipe.first_steps().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_recipe_without_instructions() {
        let empty: Recipe =
            serde_json::from_value(json!({"id": 1, "analyzedInstructions": []})).unwrap();
        assert!(empty.first_steps().is_empty());

        let missing: Recipe = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(missing.first_steps().is_empty());
        assert_eq!(missing.summary, "");
    }
}
