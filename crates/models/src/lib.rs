pub mod errors;
pub mod order;
pub mod service;

pub use order::{NewOrder, Order, OrderStatus};
pub use service::{NewService, Service, ServicePatch};
