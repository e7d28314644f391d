use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// A row with an integer primary id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

/// Generic in-memory table guarded by an `RwLock`.
///
/// The single writer lock serializes mutations, and id assignment happens
/// inside the same critical section as the append: `insert_with_id` computes
/// `max(existing) + 1` (1 when empty) and hands it to the row constructor,
/// so concurrent creates can never observe the same next id.
///
/// Reads return owned clones: a listed snapshot is decoupled from the live
/// table and never changes under the caller.
#[derive(Clone)]
pub struct MemTable<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> MemTable<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(seed)) }
    }

    /// Snapshot of all rows in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let rows = self.inner.read().await;
        rows.clone()
    }

    /// Find a row by id.
    pub async fn get(&self, id: i64) -> Option<T> {
        let rows = self.inner.read().await;
        rows.iter().find(|r| r.id() == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Allocate the next id and append the row built from it, atomically.
    pub async fn insert_with_id<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let mut rows = self.inner.write().await;
        let next_id = rows.iter().map(Record::id).max().unwrap_or(0) + 1;
        let row = build(next_id);
        rows.push(row.clone());
        row
    }

    /// Mutate the row with the given id under the write lock and return a
    /// clone of its new state. `entity` names the row kind for the NotFound
    /// message.
    pub async fn update_row<F>(&self, id: i64, entity: &str, mutate: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut T) -> Result<(), ServiceError>,
    {
        let mut rows = self.inner.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(entity))?;
        mutate(row)?;
        Ok(row.clone())
    }

    /// Remove the row with the given id; returns whether it existed.
    pub async fn remove(&self, id: i64) -> bool {
        let mut rows = self.inner.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        rows.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    impl Record for Row {
        fn id(&self) -> i64 { self.id }
    }

    fn row(id: i64, label: &str) -> Row {
        Row { id, label: label.into() }
    }

    #[tokio::test]
    async fn ids_continue_from_seed_max() {
        let table = MemTable::new(vec![row(1, "a"), row(5, "b")]);
        let created = table.insert_with_id(|id| row(id, "c")).await;
        assert_eq!(created.id, 6);
        assert_eq!(table.len().await, 3);
    }

    #[tokio::test]
    async fn empty_table_starts_at_one() {
        let table: MemTable<Row> = MemTable::new(vec![]);
        let created = table.insert_with_id(|id| row(id, "first")).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_never_collide() {
        let table: MemTable<Row> = MemTable::new(vec![]);
        let mut handles = Vec::new();
        for _ in 0..32 {
            let t = table.clone();
            handles.push(tokio::spawn(async move {
                t.insert_with_id(|id| row(id, "r")).await.id
            }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.expect("join"));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[tokio::test]
    async fn update_row_not_found() {
        let table = MemTable::new(vec![row(1, "a")]);
        let err = table.update_row(9, "row", |_| Ok(())).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn snapshot_is_decoupled_from_live_table() {
        let table = MemTable::new(vec![row(1, "a")]);
        let snapshot = table.list().await;
        table.insert_with_id(|id| row(id, "b")).await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(table.len().await, 2);
    }

    #[tokio::test]
    async fn remove_reports_existence() {
        let table = MemTable::new(vec![row(1, "a")]);
        assert!(table.remove(1).await);
        assert!(!table.remove(1).await);
        assert!(table.is_empty().await);
    }
}
