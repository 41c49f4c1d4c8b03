//! Deterministic sample data for the mock provider, tests, and benchmarks.
//!
//! Everything is generated relative to an injected `today` so tests can pin a
//! reference date and get identical data on every run.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::{DeliverySlot, MenuItem, Order, OrderStatus};

const CUSTOMERS: [&str; 8] = [
    "A. Okafor",
    "L. Fontaine",
    "M. Szabo",
    "R. Petrov",
    "J. Lindqvist",
    "S. Tanaka",
    "C. Moreau",
    "T. Nwosu",
];

const COURIERS: [&str; 4] = ["Dana", "Miko", "Priya", "Jules"];

/// Orders spread over the 21 days up to and including `today`
pub fn sample_orders(today: NaiveDate) -> Vec<Order> {
    (0..48)
        .map(|i| {
            let age_days = (i * 5) % 21;
            let placed = today - Duration::days(age_days as i64);
            let status = status_for(i, age_days);
            Order {
                id: 1000 + i as i64,
                customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                placed,
                item_count: 1 + (i % 4) as u32,
                total_cents: 850 + (i as i64 * 325) % 4200,
                status,
            }
        })
        .collect()
}

// Recent orders are still moving through the kitchen, older ones are settled.
fn status_for(i: usize, age_days: usize) -> OrderStatus {
    if age_days > 1 {
        if i % 11 == 0 {
            OrderStatus::Cancelled
        } else {
            OrderStatus::Delivered
        }
    } else {
        match i % 5 {
            0 => OrderStatus::Placed,
            1 => OrderStatus::Accepted,
            2 => OrderStatus::Preparing,
            3 => OrderStatus::Ready,
            _ => OrderStatus::OutForDelivery,
        }
    }
}

pub fn sample_menu() -> Vec<MenuItem> {
    let raw: [(&str, &str, i64); 12] = [
        ("Sourdough Focaccia", "Starters", 450),
        ("Burrata & Blood Orange", "Starters", 980),
        ("Charred Leek Soup", "Starters", 720),
        ("Tagliatelle al Ragu", "Mains", 1650),
        ("Roast Cauliflower Steak", "Mains", 1400),
        ("Sea Bream, Fennel, Caper", "Mains", 2150),
        ("Smash Burger", "Mains", 1250),
        ("Bitter Greens Salad", "Sides", 550),
        ("Rosemary Fries", "Sides", 480),
        ("Basque Cheesecake", "Desserts", 780),
        ("Affogato", "Desserts", 520),
        ("Chocolate Tart", "Desserts", 690),
    ];

    raw.iter()
        .enumerate()
        .map(|(i, (name, category, price_cents))| MenuItem {
            id: 100 + i as i64,
            name: name.to_string(),
            category: category.to_string(),
            price_cents: *price_cents,
            // One item per category cycle starts 86'd
            available: i % 7 != 3,
        })
        .collect()
}

/// Two delivery windows per day over the 21 days up to and including `today`
pub fn sample_slots(today: NaiveDate) -> Vec<DeliverySlot> {
    let mut slots = Vec::new();
    for back in 0..21i64 {
        let date = today - Duration::days(back);
        for (j, window) in ["11:00-13:00", "18:00-21:00"].iter().enumerate() {
            let seed = (date.day() as usize + j) % COURIERS.len();
            slots.push(DeliverySlot {
                id: back * 2 + j as i64 + 1,
                date,
                window: window.to_string(),
                courier: COURIERS[seed].to_string(),
                capacity: 6,
                booked: ((date.day() as u32 * (j as u32 + 3)) % 7).min(6),
            });
        }
    }
    slots
}
