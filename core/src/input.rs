use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The document handed to the mapper. Fields other than `flag` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapperInput {
    #[serde(default)]
    pub flag: Option<IndexMap<String, Value>>,
}

impl MapperInput {
    pub fn flag_values(&self) -> impl Iterator<Item = &Value> {
        self.flag.iter().flat_map(|flag| flag.values())
    }

    pub fn flag_len(&self) -> usize {
        self.flag.as_ref().map_or(0, IndexMap::len)
    }
}

/// Flag values of an untyped document.
///
/// Objects contribute their values and arrays their elements. A missing,
/// null or scalar `flag`, or a document that is not an object, has none.
pub(crate) fn loose_flag_values(input: &Value) -> Vec<&Value> {
    match input.get("flag") {
        Some(Value::Object(map)) => map.values().collect(),
        Some(Value::Array(items)) => items.iter().collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_flag_deserializes_to_none() {
        let input: MapperInput = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(input.flag, None);
        assert_eq!(input.flag_len(), 0);
        assert_eq!(input.flag_values().count(), 0);
    }

    #[test]
    fn null_flag_deserializes_to_none() {
        let input: MapperInput = serde_json::from_value(json!({ "flag": null })).unwrap();
        assert_eq!(input.flag, None);
    }

    #[test]
    fn loose_values_follow_flag_shape() {
        assert_eq!(loose_flag_values(&json!({ "flag": { "a": "red" } })).len(), 1);
        assert_eq!(loose_flag_values(&json!({ "flag": ["red", "red"] })).len(), 2);
        assert!(loose_flag_values(&json!({ "flag": "red" })).is_empty());
        assert!(loose_flag_values(&json!({ "flag": 0 })).is_empty());
        assert!(loose_flag_values(&json!({ "flag": false })).is_empty());
        assert!(loose_flag_values(&json!([{ "flag": { "a": "red" } }])).is_empty());
        assert!(loose_flag_values(&Value::Null).is_empty());
    }
}
