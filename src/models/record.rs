// file: src/models/record.rs
// description: search-index record serialized into the exported feed
// reference: https://serde.rs/field-attrs.html

use serde::{Deserialize, Serialize};

/// One search-index entry per clause.
///
/// Field names on the wire are part of the search engine's contract, so they
/// are pinned with `serde(rename)` rather than derived from the Rust names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Decimal concatenation of `document_number` and `point`.
    #[serde(rename = "objectID")]
    pub id: u64,

    pub section: String,

    pub chapter: String,

    pub title: String,

    #[serde(rename = "paragraph")]
    pub document_number: u32,

    pub point: u32,

    pub combinations: Vec<String>,

    pub examples: Vec<String>,

    pub text: String,

    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> IndexRecord {
        IndexRecord {
            id: 51,
            section: "General".to_string(),
            chapter: "II".to_string(),
            title: "§5. Speed, #1".to_string(),
            document_number: 5,
            point: 1,
            combinations: vec!["carefully".to_string()],
            examples: vec!["schools".to_string()],
            text: "Drive carefully near schools.".to_string(),
            link: "https://pravilna.by/rules/5/#p1".to_string(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "chapter",
                "combinations",
                "examples",
                "link",
                "objectID",
                "paragraph",
                "point",
                "section",
                "text",
                "title",
            ]
        );
        assert_eq!(object["objectID"], Value::from(51));
        assert_eq!(object["paragraph"], Value::from(5));
    }

    #[test]
    fn test_empty_entities_serialize_as_arrays() {
        let mut record = sample();
        record.combinations.clear();
        record.examples.clear();

        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["combinations"], Value::Array(vec![]));
        assert_eq!(value["examples"], Value::Array(vec![]));
    }
}
