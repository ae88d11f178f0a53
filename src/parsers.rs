use html_escape::decode_html_entities;
use std::collections::HashSet;

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// True when `class_attr` carries every token in `required`, compared as
/// whole whitespace-delimited tokens ("border" never matches "borders").
pub fn has_all_classes(class_attr: &str, required: &[&str]) -> bool {
    let tokens: HashSet<&str> = class_attr.split_whitespace().collect();
    required.iter().all(|class| tokens.contains(class))
}
