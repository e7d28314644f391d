use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const MAX_NOTES_LEN: usize = 300;

/// Order workflow states. `Completed` and `Cancelled` are terminal: once an
/// order reaches either, further status updates are rejected by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    InProgress,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked appointment.
///
/// `service_name` is a point-in-time copy taken when the order is created:
/// renaming or deleting the service later never rewrites existing orders.
/// `date` is the requested appointment time, `created_at` the booking time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Booking input; id, service_name, user_id, status and created_at are
/// filled in by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub service_id: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewOrder {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(ModelError::Validation(format!(
                    "notes must be at most {} characters",
                    MAX_NOTES_LEN
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&OrderStatus::InProgress).unwrap(), "\"in_progress\"");
        let s: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(s, OrderStatus::Cancelled);
    }

    #[test]
    fn terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
        assert!(!OrderStatus::InProgress.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn notes_length_capped() {
        let order = NewOrder {
            service_id: 1,
            date: Utc::now(),
            notes: Some("x".repeat(MAX_NOTES_LEN + 1)),
        };
        assert!(order.validate().is_err());

        let order = NewOrder {
            service_id: 1,
            date: Utc::now(),
            notes: Some("x".repeat(MAX_NOTES_LEN)),
        };
        assert!(order.validate().is_ok());
    }
}
