use chrono::{DateTime, TimeZone, Utc};
use models::{Order, OrderStatus, Service};

/// Fixed records the store starts with, standing in for persisted data.

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().expect("valid seed timestamp")
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "Oil change".into(),
            price: 1500.0,
            img: "/oil.png".into(),
            duration: 30,
            description: Some("Engine oil and oil filter replacement".into()),
        },
        Service {
            id: 2,
            name: "Engine diagnostics".into(),
            price: 2500.0,
            img: "/engine_diagnostics.png".into(),
            duration: 60,
            description: Some("Full computer diagnostics of the engine".into()),
        },
        Service {
            id: 3,
            name: "Brake pad replacement".into(),
            price: 3500.0,
            img: "/brakes.png".into(),
            duration: 90,
            description: Some("Front and rear brake pad replacement".into()),
        },
        Service {
            id: 4,
            name: "Tire service".into(),
            price: 2000.0,
            img: "/tire_service.png".into(),
            duration: 45,
            description: Some("Wheel removal, mounting and balancing".into()),
        },
        Service {
            id: 5,
            name: "Battery replacement".into(),
            price: 4000.0,
            img: "/battery_replacement.png".into(),
            duration: 30,
            description: Some("Starter battery replacement".into()),
        },
        Service {
            id: 6,
            name: "Cooling system flush".into(),
            price: 1800.0,
            img: "/cooling_system.png".into(),
            duration: 60,
            description: Some("Coolant flush and refill".into()),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            service_id: 1,
            service_name: "Oil change".into(),
            user_id: 1,
            date: ts(2024, 1, 15, 10, 0),
            status: OrderStatus::New,
            created_at: ts(2024, 1, 10, 12, 0),
            notes: None,
        },
        Order {
            id: 2,
            service_id: 2,
            service_name: "Engine diagnostics".into(),
            user_id: 1,
            date: ts(2024, 1, 20, 14, 0),
            status: OrderStatus::InProgress,
            created_at: ts(2024, 1, 12, 10, 0),
            notes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_dense() {
        let services = services();
        assert_eq!(services.len(), 6);
        for (i, s) in services.iter().enumerate() {
            assert_eq!(s.id, i as i64 + 1);
        }

        let orders = orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::New);
        assert_eq!(orders[1].status, OrderStatus::InProgress);
    }

    #[test]
    fn seed_orders_reference_seed_services() {
        let services = services();
        for o in orders() {
            let svc = services.iter().find(|s| s.id == o.service_id).expect("service exists");
            assert_eq!(svc.name, o.service_name);
        }
    }
}
