use serde_json::Value;

/// Extract a value from a JSON document by a dot/bracket path expression.
///
/// The `$.` prefix is optional; segments are separated by `.` and a segment
/// may carry an array index, e.g. `data[0].name`. Missing properties,
/// out-of-range indices, bad indices, and malformed JSON all yield `None`,
/// never an error. Objects and arrays come back as their raw JSON text;
/// scalars keep their natural type.
pub fn extract(json: &str, path: &str) -> Option<Value> {
    let root: Value = serde_json::from_str(json).ok()?;
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return scalar_of(&root);
    }
    extract_value(&root, path)
}

fn extract_value(value: &Value, path: &str) -> Option<Value> {
    let (segment, rest) = match path.split_once('.') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    };

    let next = match segment.find('[') {
        Some(open) => {
            let close = segment.find(']')?;
            let index: usize = segment.get(open + 1..close)?.parse().ok()?;
            value.get(&segment[..open])?.as_array()?.get(index)?
        }
        None => value.get(segment)?,
    };

    match rest {
        Some(rest) => extract_value(next, rest),
        None => scalar_of(next),
    }
}

fn scalar_of(value: &Value) -> Option<Value> {
    match value {
        // JSON null and "not found" are indistinguishable by design.
        Value::Null => None,
        Value::Object(_) | Value::Array(_) => Some(Value::String(value.to_string())),
        scalar => Some(scalar.clone()),
    }
}

/// The string form a value takes when substituted into a template or
/// compared by a conditional rule.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_nested_property() {
        let json = r#"{"user":{"id":123}}"#;
        assert_eq!(extract(json, "$.user.id"), Some(json!(123)));
        // Same value on every call: extraction is pure.
        assert_eq!(extract(json, "$.user.id"), Some(json!(123)));
    }

    #[test]
    fn prefix_is_optional() {
        let json = r#"{"user":{"name":"ada"}}"#;
        assert_eq!(extract(json, "user.name"), Some(json!("ada")));
        assert_eq!(extract(json, "$.user.name"), Some(json!("ada")));
    }

    #[test]
    fn indexes_into_arrays() {
        let json = r#"{"data":[{"name":"a"},{"name":"b"}]}"#;
        assert_eq!(extract(json, "$.data[1].name"), Some(json!("b")));
        assert_eq!(extract(json, "$.data[0].name"), Some(json!("a")));
    }

    #[test]
    fn out_of_range_index_is_none() {
        let json = r#"{"data":[1,2]}"#;
        assert_eq!(extract(json, "$.data[5]"), None);
    }

    #[test]
    fn non_numeric_index_is_none() {
        let json = r#"{"data":[1,2]}"#;
        assert_eq!(extract(json, "$.data[x]"), None);
    }

    #[test]
    fn missing_property_is_none() {
        assert_eq!(extract(r#"{"a":1}"#, "$.b"), None);
        assert_eq!(extract(r#"{"a":{"b":1}}"#, "$.a.c"), None);
    }

    #[test]
    fn malformed_json_is_none() {
        assert_eq!(extract("not json at all", "$.a"), None);
        assert_eq!(extract("", "$.a"), None);
    }

    #[test]
    fn explicit_null_is_none() {
        assert_eq!(extract(r#"{"a":null}"#, "$.a"), None);
    }

    #[test]
    fn scalars_keep_their_type() {
        assert_eq!(extract(r#"{"n":3.5}"#, "$.n"), Some(json!(3.5)));
        assert_eq!(extract(r#"{"b":true}"#, "$.b"), Some(json!(true)));
        assert_eq!(extract(r#"{"s":"x"}"#, "$.s"), Some(json!("x")));
    }

    #[test]
    fn containers_come_back_as_raw_text() {
        let json = r#"{"user":{"id":1}}"#;
        assert_eq!(extract(json, "$.user"), Some(json!(r#"{"id":1}"#)));
        assert_eq!(
            extract(r#"{"xs":[1,2]}"#, "$.xs"),
            Some(json!("[1,2]"))
        );
    }

    #[test]
    fn root_path_returns_whole_document() {
        assert_eq!(extract(r#"{"a":1}"#, "$"), Some(json!(r#"{"a":1}"#)));
    }

    #[test]
    fn value_text_renders_without_quotes() {
        assert_eq!(value_text(&json!("plain")), "plain");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
