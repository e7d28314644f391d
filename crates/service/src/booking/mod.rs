//! Booking operations: the service catalog and the order workflow.

pub mod catalog;
pub mod orders;
pub mod store;

pub use catalog::Catalog;
pub use orders::Orders;
pub use store::{CatalogStore, OrderStore};

use crate::storage::Record;

impl Record for models::Service {
    fn id(&self) -> i64 { self.id }
}

impl Record for models::Order {
    fn id(&self) -> i64 { self.id }
}
