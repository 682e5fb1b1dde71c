//! Record shapes written to the fixture files.
//!
//! Field order and names are the wire format: one compact JSON object per
//! line, keys in declaration order.

use mart_config::EventKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::M, Gender::F, Gender::Other];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub country: String,
    pub age: u32,
    pub gender: Gender,
    /// ISO-8601 local timestamp without offset, e.g. `2025-03-14T00:00:00`.
    pub registration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub category: String,
    pub price: f64,
    pub brand: String,
    pub name: String,
}

/// A behavioural event. `user_id` and `item_id` are lookup keys into the
/// generated pools, not owned records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub user_id: String,
    pub item_id: String,
    pub event_type: EventKind,
    /// Unix epoch seconds.
    pub ts: i64,
    pub props: EventProps,
}

/// Kind-specific attributes. Serialises as a flat object; kinds without
/// attributes produce `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventProps {
    /// Purchase price after noise. May be negative.
    Purchase { price: f64 },
    View { duration: u32 },
    AddToCart { quantity: u32 },
    Empty {},
}

pub fn user_id(index: usize) -> String {
    format!("user_{index:06}")
}

pub fn item_id(index: usize) -> String {
    format!("item_{index:06}")
}

pub fn event_id(index: usize) -> String {
    format!("event_{index:08}")
}
