use serde_json::Value;

/// Upper-cases the first character, e.g. `mouse` -> `Mouse`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character, e.g. `Mouse` -> `mouse`.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Like [`capitalize`], but any non-string JSON value yields `""`.
pub fn capitalize_value(value: &Value) -> String {
    value.as_str().map(capitalize).unwrap_or_default()
}

/// Like [`decapitalize`], but any non-string JSON value yields `""`.
pub fn decapitalize_value(value: &Value) -> String {
    value.as_str().map(decapitalize).unwrap_or_default()
}
