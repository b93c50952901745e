//! Filter criteria and predicate building.

use crate::catalog::Record;
use crate::money::Money;
use chrono::{DateTime, Utc};

/// User-supplied filter criteria.
///
/// Every field is independently optional; `None` means "no constraint".
/// Active constraints combine with logical AND. Deals additionally must
/// be active (unexpired and in stock) regardless of criteria — that
/// check is not user-controlled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
    /// Case-insensitive substring over name/title, description, category
    /// and vendor name. Stored trimmed and lower-cased.
    pub search: Option<String>,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<Money>,
    /// Inclusive lower bound on the discount percentage.
    pub min_discount: Option<u8>,
    /// Inclusive lower bound on the rating.
    pub min_rating: Option<f64>,
    /// Keep only records that are currently open (stores).
    pub open_only: bool,
    /// Case-insensitive substring match on the city.
    pub location: Option<String>,
}

impl FilterCriteria {
    /// Set the category, treating blank and `"All"` as absent.
    pub fn with_category(mut self, category: &str) -> Self {
        let category = category.trim();
        if !category.is_empty() && category != "All" {
            self.category = Some(category.to_string());
        }
        self
    }

    /// Set the free-text query, treating blank as absent.
    ///
    /// Blank must not become "match everything via empty substring";
    /// it means no search constraint at all.
    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim();
        if !search.is_empty() {
            self.search = Some(search.to_lowercase());
        }
        self
    }

    /// Set the location, treating blank and `"all"` as absent.
    pub fn with_location(mut self, location: &str) -> Self {
        let location = location.trim();
        if !location.is_empty() && !location.eq_ignore_ascii_case("all") {
            self.location = Some(location.to_string());
        }
        self
    }

    /// Evaluate the conjunction of all active constraints against a record.
    pub fn matches(&self, record: &Record, now: DateTime<Utc>) -> bool {
        // Mandatory: expired or out-of-stock deals never match.
        if !record.is_active(now) {
            return false;
        }

        if let Some(category) = &self.category {
            if record.category().as_str() != category {
                return false;
            }
        }

        if let Some(query) = &self.search {
            let hit = record
                .search_haystacks()
                .iter()
                .any(|field| field.to_lowercase().contains(query));
            if !hit {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let Some(price) = record.effective_price() else {
                return false;
            };
            if let Some(min) = self.min_price {
                if price < min {
                    return false;
                }
            }
            if let Some(max) = self.max_price {
                if price > max {
                    return false;
                }
            }
        }

        if let Some(min_discount) = self.min_discount {
            match record.discount() {
                Some(discount) if discount >= min_discount => {}
                _ => return false,
            }
        }

        if let Some(min_rating) = self.min_rating {
            match record.rating() {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }

        // Records without an open/closed notion pass through.
        if self.open_only && record.is_open() == Some(false) {
            return false;
        }

        if let Some(location) = &self.location {
            if let Some(record_location) = record.location() {
                if !record_location
                    .to_lowercase()
                    .contains(&location.to_lowercase())
                {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Deal};
    use chrono::Duration;

    fn deal() -> Deal {
        Deal::new(
            "d1",
            "50% Off Fresh Vegetables",
            "Fresh Market",
            Category::Groceries,
            Money::from_rupees(200.0),
            Money::from_rupees(100.0),
            Utc::now() + Duration::hours(24),
        )
        .unwrap()
        .with_description("Half price on all leafy greens")
        .with_rating(4.8)
        .with_location("Mumbai")
    }

    fn record() -> Record {
        Record::from(deal())
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&record(), Utc::now()));
    }

    #[test]
    fn test_expired_deal_never_matches() {
        let now = Utc::now();
        let mut d = deal();
        d.end_time = now - Duration::minutes(5);
        // No user criteria at all; the active check still applies.
        assert!(!FilterCriteria::default().matches(&Record::from(d), now));
    }

    #[test]
    fn test_out_of_stock_deal_never_matches() {
        let mut d = deal();
        d.in_stock = false;
        assert!(!FilterCriteria::default().matches(&Record::from(d), Utc::now()));
    }

    #[test]
    fn test_category_exact_match() {
        let now = Utc::now();
        let criteria = FilterCriteria::default().with_category("Groceries");
        assert!(criteria.matches(&record(), now));

        // Exact means case-sensitive and not substring.
        let criteria = FilterCriteria::default().with_category("groceries");
        assert!(!criteria.matches(&record(), now));

        let criteria = FilterCriteria::default().with_category("Grocer");
        assert!(!criteria.matches(&record(), now));
    }

    #[test]
    fn test_all_and_blank_category_mean_no_constraint() {
        assert_eq!(FilterCriteria::default().with_category("All").category, None);
        assert_eq!(FilterCriteria::default().with_category("  ").category, None);
    }

    #[test]
    fn test_search_substring_case_insensitive() {
        let now = Utc::now();
        let criteria = FilterCriteria::default().with_search("VEG");
        assert!(criteria.matches(&record(), now));

        let criteria = FilterCriteria::default().with_search("fresh market");
        assert!(criteria.matches(&record(), now), "vendor name is searchable");

        let criteria = FilterCriteria::default().with_search("leafy");
        assert!(criteria.matches(&record(), now), "description is searchable");

        let criteria = FilterCriteria::default().with_search("pharmacy");
        assert!(!criteria.matches(&record(), now));
    }

    #[test]
    fn test_blank_search_is_absent() {
        let criteria = FilterCriteria::default().with_search("   ");
        assert_eq!(criteria.search, None);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let now = Utc::now();
        let mut criteria = FilterCriteria::default();
        criteria.min_price = Some(Money::from_rupees(100.0));
        criteria.max_price = Some(Money::from_rupees(100.0));
        assert!(criteria.matches(&record(), now));

        criteria.min_price = Some(Money::from_rupees(100.01));
        assert!(!criteria.matches(&record(), now));
    }

    #[test]
    fn test_min_discount_and_rating() {
        let now = Utc::now();
        let mut criteria = FilterCriteria::default();
        criteria.min_discount = Some(50);
        assert!(criteria.matches(&record(), now));
        criteria.min_discount = Some(51);
        assert!(!criteria.matches(&record(), now));

        let mut criteria = FilterCriteria::default();
        criteria.min_rating = Some(4.8);
        assert!(criteria.matches(&record(), now));
        criteria.min_rating = Some(4.9);
        assert!(!criteria.matches(&record(), now));
    }

    #[test]
    fn test_location_substring_case_insensitive() {
        let now = Utc::now();
        let criteria = FilterCriteria::default().with_location("mum");
        assert!(criteria.matches(&record(), now));

        let criteria = FilterCriteria::default().with_location("Delhi");
        assert!(!criteria.matches(&record(), now));

        // "all" disables the location constraint.
        let criteria = FilterCriteria::default().with_location("all");
        assert_eq!(criteria.location, None);
    }

    #[test]
    fn test_conjunction_law() {
        // A record satisfying all but one criterion is excluded.
        let now = Utc::now();
        let mut criteria = FilterCriteria::default()
            .with_category("Groceries")
            .with_search("veg")
            .with_location("Mumbai");
        criteria.min_discount = Some(40);
        assert!(criteria.matches(&record(), now));

        let mut failing = criteria.clone();
        failing.category = Some("Pharmacy".to_string());
        assert!(!failing.matches(&record(), now));

        let mut failing = criteria.clone();
        failing.search = Some("cake".to_string());
        assert!(!failing.matches(&record(), now));

        let mut failing = criteria.clone();
        failing.min_discount = Some(90);
        assert!(!failing.matches(&record(), now));

        let mut failing = criteria;
        failing.location = Some("Delhi".to_string());
        assert!(!failing.matches(&record(), now));
    }
}
