//! Seed catalog: the neighbourhood the server boots with.

use crate::state::InMemorySource;
use chowk_commerce::catalog::{Category, Deal, Product, Store};
use chowk_commerce::ids::{ProductId, StoreId};
use chowk_commerce::money::Money;
use chowk_commerce::CommerceError;
use chrono::{Duration, Utc};

/// Build the in-memory catalog source from the seed fixtures.
pub fn seed_source() -> Result<InMemorySource, CommerceError> {
    Ok(InMemorySource::new(seed_deals()?, seed_stores(), seed_products()))
}

fn seed_deals() -> Result<Vec<Deal>, CommerceError> {
    let now = Utc::now();
    let deals = vec![
        Deal::new(
            "d1",
            "50% Off Fresh Vegetables",
            "Fresh Market",
            Category::Groceries,
            Money::from_rupees(200.0),
            Money::from_rupees(100.0),
            now + Duration::hours(24),
        )?
        .with_description("Half price on the day's vegetable stock")
        .with_image("\u{1f96c}")
        .with_rating(4.8)
        .with_review_count(45)
        .with_distance_km(0.25)
        .with_featured(true),
        Deal::new(
            "d2",
            "Buy 2 Get 1 Free Medicines",
            "MedPlus Pharmacy",
            Category::Pharmacy,
            Money::from_rupees(300.0),
            Money::from_rupees(200.0),
            now + Duration::hours(48),
        )?
        .with_description("Three packs for the price of two on generic medicines")
        .with_image("\u{1f48a}")
        .with_rating(4.9)
        .with_review_count(67)
        .with_distance_km(0.32),
        Deal::new(
            "d3",
            "Birthday Cake Special",
            "Sweet Delights",
            Category::Bakery,
            Money::from_rupees(500.0),
            Money::from_rupees(350.0),
            now + Duration::hours(12),
        )?
        .with_description("Custom half-kilo birthday cakes at a flat discount")
        .with_image("\u{1f382}")
        .with_rating(4.7)
        .with_review_count(23)
        .with_distance_km(0.18),
    ];
    Ok(deals)
}

struct StoreSeed {
    id: &'static str,
    name: &'static str,
    category: Category,
    distance: &'static str,
    rating: f64,
    closes_at: &'static str,
    has_offers: bool,
    image: &'static str,
    delivery_time: &'static str,
    phone: &'static str,
    address: &'static str,
    description: &'static str,
    review_count: u32,
    products: &'static [&'static str],
    keywords: &'static [&'static str],
}

fn seed_stores() -> Vec<Store> {
    let seeds = [
        StoreSeed {
            id: "s1",
            name: "Fresh Market",
            category: Category::Groceries,
            distance: "250m",
            rating: 4.8,
            closes_at: "10:00 PM",
            has_offers: true,
            image: "\u{1f96c}",
            delivery_time: "15 min",
            phone: "+91 98765 43210",
            address: "Shop No. 45, Sector 21, Noida, UP 201301",
            description: "Fresh vegetables, fruits, and daily essentials",
            review_count: 248,
            products: &["Vegetables", "Fruits", "Dairy", "Snacks", "Beverages"],
            keywords: &["fresh", "organic", "vegetables", "fruits", "groceries"],
        },
        StoreSeed {
            id: "s2",
            name: "MedPlus Pharmacy",
            category: Category::Pharmacy,
            distance: "320m",
            rating: 4.9,
            closes_at: "11:00 PM",
            has_offers: false,
            image: "\u{1f48a}",
            delivery_time: "10 min",
            phone: "+91 98765 43211",
            address: "Shop No. 12, Sector 21, Noida, UP 201301",
            description: "Medicines, health products, and wellness items",
            review_count: 189,
            products: &["Medicines", "Vitamins", "First Aid", "Health Supplements", "Baby Care"],
            keywords: &["medicine", "pharmacy", "health", "medical", "drugs"],
        },
        StoreSeed {
            id: "s3",
            name: "Sweet Delights",
            category: Category::Bakery,
            distance: "180m",
            rating: 4.7,
            closes_at: "9:30 PM",
            has_offers: true,
            image: "\u{1f9c1}",
            delivery_time: "12 min",
            phone: "+91 98765 43212",
            address: "Shop No. 78, Sector 21, Noida, UP 201301",
            description: "Fresh baked goods, cakes, and pastries",
            review_count: 156,
            products: &["Cakes", "Pastries", "Bread", "Cookies", "Custom Cakes"],
            keywords: &["bakery", "cake", "bread", "pastry", "sweet", "birthday"],
        },
        StoreSeed {
            id: "s4",
            name: "Green Caf\u{e9}",
            category: Category::Cafe,
            distance: "290m",
            rating: 4.6,
            closes_at: "11:30 PM",
            has_offers: true,
            image: "\u{2615}",
            delivery_time: "18 min",
            phone: "+91 98765 43214",
            address: "Shop No. 56, Sector 21, Noida, UP 201301",
            description: "Coffee, snacks, and light meals",
            review_count: 134,
            products: &["Coffee", "Tea", "Sandwiches", "Snacks", "Desserts"],
            keywords: &["coffee", "cafe", "tea", "snacks", "wifi", "study"],
        },
        StoreSeed {
            id: "s5",
            name: "Tech Hub Electronics",
            category: Category::Electronics,
            distance: "450m",
            rating: 4.3,
            closes_at: "9:00 PM",
            has_offers: true,
            image: "\u{1f4f1}",
            delivery_time: "30 min",
            phone: "+91 98765 43216",
            address: "Shop No. 101, Sector 21, Noida, UP 201301",
            description: "Mobile phones, accessories, and gadgets",
            review_count: 92,
            products: &["Mobile Phones", "Laptops", "Accessories", "Gaming", "Audio"],
            keywords: &["mobile", "phone", "laptop", "electronics", "gadgets", "tech"],
        },
    ];

    let now = Utc::now();
    seeds
        .into_iter()
        .map(|seed| Store {
            id: StoreId::new(seed.id),
            name: seed.name.to_string(),
            category: seed.category,
            description: seed.description.to_string(),
            distance: seed.distance.to_string(),
            rating: seed.rating,
            review_count: seed.review_count,
            is_open: true,
            closes_at: seed.closes_at.to_string(),
            has_offers: seed.has_offers,
            delivery_time: seed.delivery_time.to_string(),
            phone: seed.phone.to_string(),
            address: seed.address.to_string(),
            location: "Noida".to_string(),
            products: seed.products.iter().map(|p| p.to_string()).collect(),
            keywords: seed.keywords.iter().map(|k| k.to_string()).collect(),
            image: seed.image.to_string(),
            created_at: now,
        })
        .collect()
}

fn seed_products() -> Vec<Product> {
    let seeds: [(&str, &str, Category, f64, &str, &str, &str); 15] = [
        ("p1", "Fresh Tomatoes", Category::Groceries, 40.0, "s1", "Fresh Market", "\u{1f345}"),
        ("p2", "Organic Bananas", Category::Groceries, 60.0, "s1", "Fresh Market", "\u{1f34c}"),
        ("p3", "Milk 1L", Category::Groceries, 50.0, "s1", "Fresh Market", "\u{1f95b}"),
        ("p4", "Paracetamol", Category::Pharmacy, 25.0, "s2", "MedPlus Pharmacy", "\u{1f48a}"),
        ("p5", "Vitamin C Tablets", Category::Pharmacy, 120.0, "s2", "MedPlus Pharmacy", "\u{1f31f}"),
        ("p6", "Hand Sanitizer", Category::Pharmacy, 80.0, "s2", "MedPlus Pharmacy", "\u{1f9f4}"),
        ("p7", "Chocolate Cake", Category::Bakery, 350.0, "s3", "Sweet Delights", "\u{1f382}"),
        ("p8", "Croissant", Category::Bakery, 45.0, "s3", "Sweet Delights", "\u{1f950}"),
        ("p9", "Whole Wheat Bread", Category::Bakery, 35.0, "s3", "Sweet Delights", "\u{1f35e}"),
        ("p10", "Cappuccino", Category::Cafe, 120.0, "s4", "Green Caf\u{e9}", "\u{2615}"),
        ("p11", "Club Sandwich", Category::Cafe, 180.0, "s4", "Green Caf\u{e9}", "\u{1f96a}"),
        ("p12", "Green Tea", Category::Cafe, 80.0, "s4", "Green Caf\u{e9}", "\u{1f375}"),
        ("p13", "iPhone 15", Category::Electronics, 79999.0, "s5", "Tech Hub Electronics", "\u{1f4f1}"),
        ("p14", "Wireless Earbuds", Category::Electronics, 2999.0, "s5", "Tech Hub Electronics", "\u{1f3a7}"),
        ("p15", "Power Bank", Category::Electronics, 1299.0, "s5", "Tech Hub Electronics", "\u{1f50b}"),
    ];

    let now = Utc::now();
    seeds
        .into_iter()
        .map(|(id, name, category, price, store_id, store_name, image)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            price: Money::from_rupees(price),
            store_id: StoreId::new(store_id),
            store_name: store_name.to_string(),
            in_stock: true,
            image: image.to_string(),
            created_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CatalogSource;

    #[tokio::test]
    async fn test_seed_catalog_shape() {
        let source = seed_source().unwrap();
        assert_eq!(source.deals().await.unwrap().len(), 3);
        assert_eq!(source.stores().await.unwrap().len(), 5);
        assert_eq!(source.products().await.unwrap().len(), 15);
    }

    #[test]
    fn test_seed_deals_all_active() {
        let now = Utc::now();
        for deal in seed_deals().unwrap() {
            assert!(deal.is_active(now), "{} should be active at boot", deal.id);
        }
    }

    #[test]
    fn test_derived_discounts_match_pricing() {
        let deals = seed_deals().unwrap();
        let discounts: Vec<u8> = deals.iter().map(|d| d.discount).collect();
        assert_eq!(discounts, vec![50, 33, 30]);
        assert!(deals[0].featured);
    }

    #[test]
    fn test_products_reference_seed_stores() {
        let store_ids: Vec<String> = seed_stores()
            .iter()
            .map(|s| s.id.as_str().to_string())
            .collect();
        for product in seed_products() {
            assert!(store_ids.contains(&product.store_id.as_str().to_string()));
        }
    }
}
