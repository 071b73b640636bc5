//! Groq model-listing response types

use serde::Deserialize;

/// Response of `GET /openai/v1/models`
///
/// A missing `data` field deserializes as an empty catalog; lookups in an
/// empty catalog simply find nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub data: Vec<ModelDescriptor>,
}

/// One model entry in the catalog; only the id matters here
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
}

impl ModelCatalog {
    /// Whether the catalog contains a model with the given wire id
    pub fn contains(&self, id: &str) -> bool {
        self.data.iter().any(|model| model.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let catalog: ModelCatalog = serde_json::from_value(serde_json::json!({
            "data": [
                { "id": "whisper-large-v3", "object": "model", "owned_by": "OpenAI" },
                { "id": "llama-3.3-70b-versatile", "object": "model", "owned_by": "Meta" }
            ]
        }))
        .unwrap();

        assert!(catalog.contains("whisper-large-v3"));
        assert!(!catalog.contains("whisper-large-v3-turbo"));
    }

    #[test]
    fn test_empty_catalog_contains_nothing() {
        let catalog: ModelCatalog =
            serde_json::from_value(serde_json::json!({ "data": [] })).unwrap();
        assert!(!catalog.contains("whisper-large-v3"));
    }

    #[test]
    fn test_missing_data_field_is_empty() {
        let catalog: ModelCatalog = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(catalog.data.is_empty());
    }
}
