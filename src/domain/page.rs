use serde::{Deserialize, Serialize};

/// Paged listing envelope as emitted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_metadata_defaults_to_zero() {
        let page: Page<String> = serde_json::from_str(r#"{"content":["a"]}"#).unwrap();
        assert_eq!(page.content, vec!["a".to_string()]);
        assert_eq!(page.total_elements, 0);
    }
}
