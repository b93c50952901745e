//! Search suggestions and trending queries.

use chowk_commerce::catalog::Record;
use std::collections::BTreeSet;

const MAX_SUGGESTIONS: usize = 6;

/// Static related-term table keyed by query substrings.
const RELATED_TERMS: &[(&str, &[&str])] = &[
    ("coffee", &["tea", "caf\u{e9}", "espresso", "latte"]),
    ("medicine", &["pharmacy", "drugs", "health", "medical"]),
    ("cake", &["bakery", "birthday", "dessert", "sweet"]),
    ("phone", &["mobile", "smartphone", "electronics", "gadgets"]),
    ("food", &["groceries", "restaurant", "caf\u{e9}", "snacks"]),
    ("grocery", &["vegetables", "fruits", "milk", "bread"]),
];

/// Build follow-up suggestions from what a search actually found.
pub fn for_results(query: &str, records: &[Record]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if records.iter().any(|r| matches!(r, Record::Store(_))) {
        suggestions.push(format!("{query} stores"));
    }
    if records.iter().any(|r| matches!(r, Record::Product(_))) {
        suggestions.push(format!("{query} products"));
    }
    if records.iter().any(|r| matches!(r, Record::Deal(_))) {
        suggestions.push(format!("{query} deals"));
    }

    // One "in <category>" refinement per matched category, sorted for
    // deterministic output.
    let categories: BTreeSet<&str> = records.iter().map(|r| r.category().as_str()).collect();
    for category in categories {
        suggestions.push(format!("{query} in {category}"));
    }

    suggestions.extend(related_terms(query));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Terms related to the query, from the static table.
pub fn related_terms(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    RELATED_TERMS
        .iter()
        .filter(|(key, _)| query.contains(key))
        .flat_map(|(_, terms)| terms.iter().map(|t| t.to_string()))
        .collect()
}

/// Popular queries shown before the shopper types anything.
pub fn trending() -> Vec<String> {
    [
        "Fresh vegetables",
        "Coffee delivery",
        "Birthday cake",
        "Pharmacy 24/7",
        "Mobile accessories",
        "Grocery deals",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
