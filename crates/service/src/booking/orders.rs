use std::sync::Arc;

use chrono::Utc;
use models::{NewOrder, Order, OrderStatus};
use tracing::debug;

use crate::booking::catalog::Catalog;
use crate::booking::store::OrderStore;
use crate::errors::ServiceError;
use crate::storage::{seed, MemTable, StoreLatency};

/// Stamped on new orders until bookings are tied to an authenticated session.
pub const PLACEHOLDER_USER_ID: i64 = 1;

/// In-memory order store.
///
/// Creating an order resolves the referenced service through the catalog and
/// copies its name into the order as a point-in-time snapshot: later renames
/// or deletes of the service never rewrite existing orders.
#[derive(Clone)]
pub struct Orders {
    table: MemTable<Order>,
    catalog: Arc<Catalog>,
    latency: StoreLatency,
}

impl Orders {
    /// Order store seeded with the stock orders.
    pub fn new(catalog: Arc<Catalog>, latency: StoreLatency) -> Arc<Self> {
        Self::with_rows(seed::orders(), catalog, latency)
    }

    /// Order store seeded with the given rows.
    pub fn with_rows(rows: Vec<Order>, catalog: Arc<Catalog>, latency: StoreLatency) -> Arc<Self> {
        Arc::new(Self { table: MemTable::new(rows), catalog, latency })
    }

    /// Snapshot of all orders.
    pub async fn list(&self) -> Vec<Order> {
        self.latency.before_list().await;
        self.table.list().await
    }

    pub async fn get(&self, id: i64) -> Option<Order> {
        self.table.get(id).await
    }

    /// Book a service. Fails with NotFound (and leaves the order table
    /// untouched) when the referenced service does not exist.
    pub async fn create(&self, input: NewOrder) -> Result<Order, ServiceError> {
        input.validate()?;
        self.latency.before_mutate().await;
        let service = self
            .catalog
            .get(input.service_id)
            .await
            .ok_or_else(|| ServiceError::not_found("service"))?;
        let created = self
            .table
            .insert_with_id(|id| Order {
                id,
                service_id: input.service_id,
                service_name: service.name,
                user_id: PLACEHOLDER_USER_ID,
                date: input.date,
                status: OrderStatus::New,
                created_at: Utc::now(),
                notes: input.notes,
            })
            .await;
        debug!(id = created.id, service_id = created.service_id, "order stored");
        Ok(created)
    }

    /// Replace the order's status. Completed and cancelled orders are
    /// terminal: any further update is rejected with InvalidTransition.
    /// Between non-terminal states every move is allowed.
    pub async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, ServiceError> {
        self.latency.before_mutate().await;
        self.table
            .update_row(id, "order", |row| {
                if row.status.is_terminal() {
                    return Err(ServiceError::InvalidTransition { from: row.status, to: status });
                }
                row.status = status;
                Ok(())
            })
            .await
    }
}

#[async_trait::async_trait]
impl OrderStore for Orders {
    async fn list(&self) -> Vec<Order> { self.list().await }
    async fn get(&self, id: i64) -> Option<Order> { self.get(id).await }
    async fn create(&self, input: NewOrder) -> Result<Order, ServiceError> { self.create(input).await }
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, ServiceError> { self.update_status(id, status).await }
}
