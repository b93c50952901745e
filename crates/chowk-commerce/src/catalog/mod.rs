//! Catalog module.
//!
//! Contains the store, product and deal record types and the tagged
//! [`Record`] union the query pipeline operates over.

mod category;
mod deal;
mod product;
mod record;
mod store;

pub use category::Category;
pub use deal::Deal;
pub use product::Product;
pub use record::Record;
pub use store::Store;
