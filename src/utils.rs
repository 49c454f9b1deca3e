//! Text and value helpers shared by the pipeline stages and the exporter.

use serde_json::Value;

/// Borrow a JSON value as text when it is a string.
///
/// Numbers, booleans, null, arrays, and objects are treated as non-textual.
pub fn value_as_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Render a JSON value as a flat CSV cell.
///
/// Null renders empty, booleans as `True`/`False`, `{"$oid": x}` as `x`, and
/// remaining arrays/objects as compact JSON.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => match (map.len(), map.get("$oid")) {
            (1, Some(Value::String(oid))) => oid.clone(),
            _ => value.to_string(),
        },
        Value::Array(_) => value.to_string(),
    }
}

/// Count whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive literal substring test.
///
/// `needle_lower` must already be lower-cased.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_as_text_only_accepts_strings() {
        assert_eq!(value_as_text(&json!("isi")), Some("isi"));
        assert_eq!(value_as_text(&json!(3)), None);
        assert_eq!(value_as_text(&Value::Null), None);
        assert_eq!(value_as_text(&json!(["a"])), None);
    }

    #[test]
    fn value_to_cell_renders_store_values() {
        assert_eq!(value_to_cell(&Value::Null), "");
        assert_eq!(value_to_cell(&json!(true)), "True");
        assert_eq!(value_to_cell(&json!(false)), "False");
        assert_eq!(value_to_cell(&json!(12)), "12");
        assert_eq!(value_to_cell(&json!(1.5)), "1.5");
        assert_eq!(
            value_to_cell(&json!({"$oid": "65a1f0c2e4b0a1b2c3d4e5f6"})),
            "65a1f0c2e4b0a1b2c3d4e5f6"
        );
        assert_eq!(value_to_cell(&json!({"k": 1})), r#"{"k":1}"#);
        assert_eq!(value_to_cell(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("satu dua\ttiga\n\nempat"), 4);
        assert_eq!(word_count("  leading and trailing  "), 3);
    }

    #[test]
    fn contains_lowercase_ignores_case() {
        assert!(contains_lowercase("Nyeri PANGGUL kronis", "panggul"));
        assert!(!contains_lowercase("Nyeri punggung", "panggul"));
    }

    #[test]
    fn normalize_inline_whitespace_collapses_runs() {
        let input = "Alpha\n\n  Beta\tGamma";
        assert_eq!(normalize_inline_whitespace(input), "Alpha Beta Gamma");
    }

    #[test]
    fn truncate_chars_marks_cut() {
        assert_eq!(truncate_chars("pendek", 10), "pendek");
        assert_eq!(truncate_chars("panjang sekali", 5), "panj…");
    }
}
