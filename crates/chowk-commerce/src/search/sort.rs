//! Sort strategy selection.

use crate::catalog::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The collection a query runs over. Determines the default sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    /// Deal listings.
    Deals,
    /// Store listings.
    Stores,
    /// Mixed free-text search results.
    Search,
}

impl CollectionKind {
    /// The default sort for this collection.
    pub fn default_sort(&self) -> SortKey {
        match self {
            CollectionKind::Deals => SortKey::Discount,
            CollectionKind::Stores => SortKey::Distance,
            CollectionKind::Search => SortKey::Relevance,
        }
    }
}

/// A total order over the filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Discount percentage descending, then newest first.
    Discount,
    /// Effective price ascending.
    PriceLow,
    /// Effective price descending.
    PriceHigh,
    /// Rating descending, then review count descending.
    Rating,
    /// Deal end time ascending.
    EndingSoon,
    /// Creation time descending.
    Newest,
    /// Numeric distance ascending.
    Distance,
    /// Case-insensitive name ascending.
    Name,
    /// Relevance score descending (search only).
    Relevance,
}

impl SortKey {
    /// Parse a sort key, falling back to `default` for unknown values.
    pub fn parse(s: &str, default: SortKey) -> SortKey {
        match s.trim() {
            "discount" => SortKey::Discount,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "ending-soon" => SortKey::EndingSoon,
            "newest" => SortKey::Newest,
            "distance" => SortKey::Distance,
            "name" => SortKey::Name,
            "relevance" => SortKey::Relevance,
            _ => default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Discount => "discount",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::EndingSoon => "ending-soon",
            SortKey::Newest => "newest",
            SortKey::Distance => "distance",
            SortKey::Name => "name",
            SortKey::Relevance => "relevance",
        }
    }
}

/// Sort records in place by the given key.
///
/// Uses `Vec::sort_by`, which is stable: equal-key records retain their
/// relative input order. [`SortKey::Relevance`] is handled by the
/// relevance module and is a no-op here.
pub fn sort_records(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::Discount => records.sort_by(|a, b| {
            cmp_opt_desc(a.discount(), b.discount())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        }),
        SortKey::PriceLow => {
            records.sort_by(|a, b| cmp_opt_asc(a.effective_price(), b.effective_price()))
        }
        SortKey::PriceHigh => {
            records.sort_by(|a, b| cmp_opt_desc(a.effective_price(), b.effective_price()))
        }
        SortKey::Rating => records.sort_by(|a, b| {
            cmp_f64_desc(a.rating(), b.rating())
                .then_with(|| cmp_opt_desc(a.review_count(), b.review_count()))
        }),
        SortKey::EndingSoon => records.sort_by(|a, b| cmp_opt_asc(a.end_time(), b.end_time())),
        SortKey::Newest => records.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortKey::Distance => {
            records.sort_by(|a, b| cmp_f64_asc(a.distance_value(), b.distance_value()))
        }
        SortKey::Name => {
            records.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        }
        SortKey::Relevance => {}
    }
}

// Missing values sort last in every direction.

fn cmp_opt_asc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_opt_desc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_f64_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_f64_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Deal};
    use crate::money::Money;
    use chrono::{Duration, Utc};

    fn deal(id: &str, original: f64, discounted: f64) -> Deal {
        Deal::new(
            id,
            format!("Deal {id}"),
            "Store",
            Category::Groceries,
            Money::from_rupees(original),
            Money::from_rupees(discounted),
            Utc::now() + Duration::hours(24),
        )
        .unwrap()
    }

    #[test]
    fn test_discount_ordering() {
        // Discounts 10%, 50%, 30% must come back as 50%, 30%, 10%.
        let mut records: Vec<Record> = vec![
            deal("a", 100.0, 90.0).into(),
            deal("b", 100.0, 50.0).into(),
            deal("c", 100.0, 70.0).into(),
        ];
        sort_records(&mut records, SortKey::Discount);
        let discounts: Vec<u8> = records.iter().filter_map(|r| r.discount()).collect();
        assert_eq!(discounts, vec![50, 30, 10]);
    }

    #[test]
    fn test_price_ordering() {
        let mut records: Vec<Record> = vec![
            deal("a", 400.0, 300.0).into(),
            deal("b", 200.0, 100.0).into(),
            deal("c", 300.0, 200.0).into(),
        ];
        sort_records(&mut records, SortKey::PriceLow);
        let prices: Vec<f64> = records
            .iter()
            .filter_map(|r| r.effective_price())
            .map(|p| p.rupees())
            .collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);

        sort_records(&mut records, SortKey::PriceHigh);
        let prices: Vec<f64> = records
            .iter()
            .filter_map(|r| r.effective_price())
            .map(|p| p.rupees())
            .collect();
        assert_eq!(prices, vec![300.0, 200.0, 100.0]);
    }

    #[test]
    fn test_rating_breaks_ties_on_review_count() {
        let mut records: Vec<Record> = vec![
            deal("few", 100.0, 50.0).with_rating(4.5).with_review_count(10).into(),
            deal("many", 100.0, 50.0).with_rating(4.5).with_review_count(99).into(),
        ];
        sort_records(&mut records, SortKey::Rating);
        assert_eq!(records[0].id_str(), "many");
    }

    #[test]
    fn test_ending_soon() {
        let now = Utc::now();
        let mut soon = deal("soon", 100.0, 50.0);
        soon.end_time = now + Duration::hours(1);
        let mut later = deal("later", 100.0, 50.0);
        later.end_time = now + Duration::hours(48);

        let mut records: Vec<Record> = vec![later.into(), soon.into()];
        sort_records(&mut records, SortKey::EndingSoon);
        assert_eq!(records[0].id_str(), "soon");
    }

    #[test]
    fn test_name_ordering_case_insensitive() {
        let mut a = deal("a", 100.0, 50.0);
        a.title = "apple pie".to_string();
        let mut b = deal("b", 100.0, 50.0);
        b.title = "Banana Bread".to_string();

        let mut records: Vec<Record> = vec![b.into(), a.into()];
        sort_records(&mut records, SortKey::Name);
        assert_eq!(records[0].name(), "apple pie");
    }

    #[test]
    fn test_stability_on_equal_keys() {
        // Equal discount: relative input order is preserved when the
        // secondary key (created_at) also ties.
        let now = Utc::now();
        let mut first = deal("first", 100.0, 50.0);
        first.created_at = now;
        let mut second = deal("second", 100.0, 50.0);
        second.created_at = now;

        let mut records: Vec<Record> = vec![first.into(), second.into()];
        sort_records(&mut records, SortKey::Discount);
        assert_eq!(records[0].id_str(), "first");
        assert_eq!(records[1].id_str(), "second");

        // Re-sorting an already sorted slice changes nothing.
        sort_records(&mut records, SortKey::Discount);
        assert_eq!(records[0].id_str(), "first");
    }

    #[test]
    fn test_parse_falls_back_on_unknown() {
        assert_eq!(SortKey::parse("discount", SortKey::Newest), SortKey::Discount);
        assert_eq!(SortKey::parse("price-low", SortKey::Newest), SortKey::PriceLow);
        assert_eq!(
            SortKey::parse("bogus", CollectionKind::Deals.default_sort()),
            SortKey::Discount
        );
        assert_eq!(
            SortKey::parse("", CollectionKind::Stores.default_sort()),
            SortKey::Distance
        );
    }

    #[test]
    fn test_collection_defaults() {
        assert_eq!(CollectionKind::Deals.default_sort(), SortKey::Discount);
        assert_eq!(CollectionKind::Stores.default_sort(), SortKey::Distance);
        assert_eq!(CollectionKind::Search.default_sort(), SortKey::Relevance);
    }
}
