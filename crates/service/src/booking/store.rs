use async_trait::async_trait;
use models::{NewOrder, NewService, Order, OrderStatus, Service, ServicePatch};

use crate::errors::ServiceError;

/// Trait abstraction for the service catalog (CRUD of bookable services).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list(&self) -> Vec<Service>;
    async fn get(&self, id: i64) -> Option<Service>;
    async fn create(&self, input: NewService) -> Result<Service, ServiceError>;
    async fn update(&self, id: i64, patch: ServicePatch) -> Result<Service, ServiceError>;
    async fn delete(&self, id: i64) -> Result<i64, ServiceError>;
}

/// Trait abstraction for order storage (list/create/status updates).
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list(&self) -> Vec<Order>;
    async fn get(&self, id: i64) -> Option<Order>;
    async fn create(&self, input: NewOrder) -> Result<Order, ServiceError>;
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, ServiceError>;
}
