//! Relevance scoring for free-text queries.
//!
//! Scores are used only to order results; filtering is the predicate's
//! job. The bonuses are additive and deliberately compound: an exact
//! field match also starts with, contains every token of, and contains
//! each token of the query, so a single-token exact match on one field
//! earns 100 + 80 + 60 + 20 = 260 before the rating boost. That
//! compounding is the documented contract, not an accident to fix.

use crate::catalog::Record;
use std::cmp::Ordering;

const EXACT_BONUS: f64 = 100.0;
const PREFIX_BONUS: f64 = 80.0;
const ALL_TOKENS_BONUS: f64 = 60.0;
const PER_TOKEN_BONUS: f64 = 20.0;

/// Score a record against a non-empty, trimmed, lower-cased query.
///
/// Each of the record's relevance fields is scored independently; a
/// flat `rating * 2` boost is added once per record at the end.
pub fn score(record: &Record, query: &str) -> f64 {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let mut total = 0.0;

    for field in record.relevance_fields() {
        let field = field.to_lowercase();

        if field == query {
            total += EXACT_BONUS;
        }
        if field.starts_with(query) {
            total += PREFIX_BONUS;
        }
        if !tokens.is_empty() && tokens.iter().all(|t| field.contains(t)) {
            total += ALL_TOKENS_BONUS;
        }
        for token in &tokens {
            if field.contains(token) {
                total += PER_TOKEN_BONUS;
            }
        }
    }

    if let Some(rating) = record.rating() {
        total += rating * 2.0;
    }

    total
}

/// Order scored records: score descending, then rating descending, then
/// name ascending (case-insensitive).
pub fn cmp_scored(a: &(Record, f64), b: &(Record, f64)) -> Ordering {
    b.1.total_cmp(&a.1)
        .then_with(|| {
            let ra = a.0.rating().unwrap_or(0.0);
            let rb = b.0.rating().unwrap_or(0.0);
            rb.total_cmp(&ra)
        })
        .then_with(|| a.0.name().to_lowercase().cmp(&b.0.name().to_lowercase()))
}

/// Score and order a collection by relevance.
pub fn rank(records: Vec<Record>, query: &str) -> Vec<Record> {
    let mut scored: Vec<(Record, f64)> = records
        .into_iter()
        .map(|record| {
            let s = score(&record, query);
            (record, s)
        })
        .collect();
    scored.sort_by(cmp_scored);
    scored.into_iter().map(|(record, _)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Store};
    use crate::ids::StoreId;
    use chrono::Utc;

    fn store(name: &str, category: Category, description: &str, rating: f64) -> Record {
        Record::Store(Store {
            id: StoreId::generate(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            distance: "250m".to_string(),
            rating,
            review_count: 10,
            is_open: true,
            closes_at: "10:00 PM".to_string(),
            has_offers: false,
            delivery_time: "15 min".to_string(),
            phone: String::new(),
            address: String::new(),
            location: "Noida".to_string(),
            products: Vec::new(),
            keywords: Vec::new(),
            image: String::new(),
            created_at: Utc::now(),
        })
    }

    #[test]
    fn test_exact_match_compounds_all_bonuses() {
        // Exact name match also fires starts-with, all-tokens and
        // per-token: 100 + 80 + 60 + 20 = 260, plus rating 4.5 * 2 = 9.
        let record = store("Vegan", Category::Bakery, "Plant based", 4.5);
        assert_eq!(score(&record, "vegan"), 269.0);
    }

    #[test]
    fn test_substring_scores() {
        // "fresh vegetables": contains "veg" as the only token
        // -> all-tokens 60 + per-token 20 = 80 on the name field;
        // description "Fresh vegetables and fruits" adds another 80;
        // rating 4.5 doubles to 9. Total 169.
        let fresh = store(
            "Fresh Vegetables",
            Category::Groceries,
            "Fresh vegetables and fruits",
            4.5,
        );
        assert_eq!(score(&fresh, "veg"), 169.0);

        // "vegan bakery" starts with "veg": 80 + 60 + 20 = 160 on the
        // name; category "Bakery" matches nothing for "veg"; rating 4.0
        // doubles to 8. Total 168.
        let vegan = store("Vegan Bakery", Category::Bakery, "Plant based cakes", 4.0);
        assert_eq!(score(&vegan, "veg"), 168.0);

        // Both match the substring filter; the scorer ranks them.
        assert!(score(&fresh, "veg") > score(&vegan, "veg"));
    }

    #[test]
    fn test_multi_token_accumulates_across_fields() {
        // Query "fresh market": name "Fresh Market" is exact
        // (100 + 80 + 60 + 2 * 20 = 280), description contains both
        // tokens (60 + 2 * 20 = 100); rating 4.0 -> 8. Total 388.
        let record = store(
            "Fresh Market",
            Category::Groceries,
            "the freshest market in town",
            4.0,
        );
        assert_eq!(score(&record, "fresh market"), 388.0);
    }

    #[test]
    fn test_exact_beats_partial() {
        let exact = store("Chai Point", Category::Cafe, "Tea and snacks", 4.0);
        let partial = store("Mumbai Chaiwala", Category::Cafe, "Roadside tea", 4.0);
        assert!(score(&exact, "chai point") > score(&partial, "chai point"));
    }

    #[test]
    fn test_rank_tie_breaks_on_rating_then_name() {
        // Identical textual match, different ratings.
        let low = store("Daily Needs", Category::Groceries, "essentials", 4.0);
        let high = store("Daily Needs", Category::Groceries, "essentials", 4.9);
        let ranked = rank(vec![low, high], "daily");
        assert_eq!(ranked[0].rating(), Some(4.9));

        // Identical score and rating: lexicographic name ascending.
        let b = store("Beta Mart", Category::Groceries, "shop", 4.0);
        let a = store("Alpha Mart", Category::Groceries, "shop", 4.0);
        let ranked = rank(vec![b, a], "mart");
        assert_eq!(ranked[0].name(), "Alpha Mart");
    }
}
