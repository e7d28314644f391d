use std::sync::Arc;

use models::{NewService, Service, ServicePatch};
use tracing::debug;

use crate::booking::store::CatalogStore;
use crate::errors::ServiceError;
use crate::storage::{seed, MemTable, StoreLatency};

/// In-memory service catalog.
///
/// Ids are assigned as `max(existing) + 1` under the table's write lock;
/// lists are snapshots decoupled from the live table.
#[derive(Clone)]
pub struct Catalog {
    table: MemTable<Service>,
    latency: StoreLatency,
}

impl Catalog {
    /// Catalog seeded with the stock service records.
    pub fn new(latency: StoreLatency) -> Arc<Self> {
        Self::with_rows(seed::services(), latency)
    }

    /// Catalog seeded with the given rows (tests use this for custom seeds).
    pub fn with_rows(rows: Vec<Service>, latency: StoreLatency) -> Arc<Self> {
        Arc::new(Self { table: MemTable::new(rows), latency })
    }

    /// Snapshot of all services.
    pub async fn list(&self) -> Vec<Service> {
        self.latency.before_list().await;
        self.table.list().await
    }

    /// Lookup by id; no simulated delay, also used internally by the order
    /// store to resolve bookings.
    pub async fn get(&self, id: i64) -> Option<Service> {
        self.table.get(id).await
    }

    /// Validate, assign the next id and append.
    pub async fn create(&self, input: NewService) -> Result<Service, ServiceError> {
        input.validate()?;
        self.latency.before_mutate().await;
        let created = self
            .table
            .insert_with_id(|id| Service {
                id,
                name: input.name,
                price: input.price,
                img: input.img,
                duration: input.duration,
                description: input.description,
            })
            .await;
        debug!(id = created.id, "service stored");
        Ok(created)
    }

    /// Merge the patch into the matching record; absent fields keep their
    /// stored values.
    pub async fn update(&self, id: i64, patch: ServicePatch) -> Result<Service, ServiceError> {
        patch.validate()?;
        self.latency.before_mutate().await;
        self.table
            .update_row(id, "service", |row| {
                row.apply(patch);
                Ok(())
            })
            .await
    }

    /// Remove the matching record and return its id. Orders referencing the
    /// service keep their denormalized `service_name`; there is no cascade.
    pub async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        self.latency.before_mutate().await;
        if self.table.remove(id).await {
            debug!(id, "service removed");
            Ok(id)
        } else {
            Err(ServiceError::not_found("service"))
        }
    }
}

#[async_trait::async_trait]
impl CatalogStore for Catalog {
    async fn list(&self) -> Vec<Service> { self.list().await }
    async fn get(&self, id: i64) -> Option<Service> { self.get(id).await }
    async fn create(&self, input: NewService) -> Result<Service, ServiceError> { self.create(input).await }
    async fn update(&self, id: i64, patch: ServicePatch) -> Result<Service, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: i64) -> Result<i64, ServiceError> { self.delete(id).await }
}
