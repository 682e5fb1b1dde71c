use std::fmt;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range used for every bounded random draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Behavioural event kinds. The kind alone decides which `props` an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    View,
    Click,
    AddToCart,
    Purchase,
    RemoveFromCart,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::View,
        EventKind::Click,
        EventKind::AddToCart,
        EventKind::Purchase,
        EventKind::RemoveFromCart,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::View => "view",
            EventKind::Click => "click",
            EventKind::AddToCart => "add_to_cart",
            EventKind::Purchase => "purchase",
            EventKind::RemoveFromCart => "remove_from_cart",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one generation run.
///
/// `Default` carries the fixed constants of the NimbusMegaMart fixture set;
/// tests override individual fields to shrink the run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub num_users: usize,
    pub num_items: usize,
    pub num_events: usize,
    /// Start of the event window. Registration dates are counted back from here.
    pub start: NaiveDateTime,
    /// End of the event window (inclusive).
    pub end: NaiveDateTime,
    pub countries: Vec<String>,
    pub categories: Vec<String>,
    pub event_kinds: Vec<EventKind>,
    pub age: Bounds<u32>,
    /// Users register up to this many whole days before `start`.
    pub registration_lookback_days: i64,
    pub price: Bounds<f64>,
    /// Brands are named `Brand_1` .. `Brand_{brand_count}`.
    pub brand_count: u32,
    pub view_duration_secs: Bounds<u32>,
    pub cart_quantity: Bounds<u32>,
    /// Purchase price multipliers, drawn uniformly. Repeats act as weights.
    pub purchase_multipliers: Vec<f64>,
    /// Directory receiving `users.jsonl`, `items.jsonl` and `events.jsonl`.
    pub out_dir: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            num_users: 1000,
            num_items: 200,
            num_events: 50_000,
            start: midnight(2025, 8, 1),
            end: midnight(2025, 8, 31),
            countries: ["US", "CA", "GB", "DE", "FR", "JP", "AU", "BR", "IN", "CN"]
                .into_iter()
                .map(String::from)
                .collect(),
            categories: [
                "electronics",
                "clothing",
                "books",
                "home",
                "sports",
                "beauty",
                "toys",
                "food",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            event_kinds: EventKind::ALL.to_vec(),
            age: Bounds::new(18, 70),
            registration_lookback_days: 365,
            price: Bounds::new(5.0, 500.0),
            brand_count: 50,
            view_duration_secs: Bounds::new(1, 300),
            cart_quantity: Bounds::new(1, 5),
            purchase_multipliers: vec![1.0, 1.0, 1.0, 1.0, -0.1, 0.9, 1.1],
            out_dir: PathBuf::from("data"),
        }
    }
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl GenConfig {
    /// Length of the event window in whole seconds.
    pub fn window_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Reject parameter combinations the generators cannot draw from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end < self.start {
            return Err(ConfigError::InvertedWindow {
                start: self.start,
                end: self.end,
            });
        }
        if self.countries.is_empty() {
            return Err(ConfigError::EmptyChoices("countries"));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyChoices("categories"));
        }
        if self.event_kinds.is_empty() {
            return Err(ConfigError::EmptyChoices("event_kinds"));
        }
        if self.purchase_multipliers.is_empty() {
            return Err(ConfigError::EmptyChoices("purchase_multipliers"));
        }
        if self.brand_count == 0 {
            return Err(ConfigError::EmptyChoices("brand_count"));
        }
        if !self.age.is_ordered() {
            return Err(ConfigError::InvertedBounds("age"));
        }
        if !self.view_duration_secs.is_ordered() {
            return Err(ConfigError::InvertedBounds("view_duration_secs"));
        }
        if !self.cart_quantity.is_ordered() {
            return Err(ConfigError::InvertedBounds("cart_quantity"));
        }
        if !self.price.min.is_finite() || !self.price.max.is_finite() || !self.price.is_ordered()
        {
            return Err(ConfigError::InvertedBounds("price"));
        }
        if self.registration_lookback_days < 0 {
            return Err(ConfigError::InvertedBounds("registration_lookback_days"));
        }
        if let Some(bad) = self
            .purchase_multipliers
            .iter()
            .find(|m| !m.is_finite())
        {
            return Err(ConfigError::NonFiniteMultiplier(*bad));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("event window ends ({end}) before it starts ({start})")]
    InvertedWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("no choices configured for '{0}'")]
    EmptyChoices(&'static str),
    #[error("bounds for '{0}' are inverted or not finite")]
    InvertedBounds(&'static str),
    #[error("purchase multiplier {0} is not finite")]
    NonFiniteMultiplier(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixture_constants() {
        let cfg = GenConfig::default();
        assert_eq!(cfg.num_users, 1000);
        assert_eq!(cfg.num_items, 200);
        assert_eq!(cfg.num_events, 50_000);
        assert_eq!(cfg.countries.len(), 10);
        assert_eq!(cfg.categories.len(), 8);
        assert_eq!(cfg.event_kinds.len(), 5);
        assert_eq!(cfg.start.to_string(), "2025-08-01 00:00:00");
        assert_eq!(cfg.end.to_string(), "2025-08-31 00:00:00");
        assert_eq!(cfg.out_dir, PathBuf::from("data"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn window_is_thirty_days() {
        assert_eq!(GenConfig::default().window_seconds(), 30 * 24 * 3600);
    }

    #[test]
    fn multiplier_table_weights_unmodified_price() {
        let cfg = GenConfig::default();
        let unmodified = cfg
            .purchase_multipliers
            .iter()
            .filter(|m| **m == 1.0)
            .count();
        assert_eq!(unmodified, 4);
        assert_eq!(cfg.purchase_multipliers.len(), 7);
        assert!(cfg.purchase_multipliers.contains(&-0.1));
    }

    #[test]
    fn inverted_window_rejected() {
        let cfg = GenConfig {
            start: midnight(2025, 9, 1),
            ..GenConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn empty_enumeration_rejected() {
        let cfg = GenConfig {
            categories: Vec::new(),
            ..GenConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyChoices("categories")));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let cfg = GenConfig {
            age: Bounds::new(70, 18),
            ..GenConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvertedBounds("age")));

        let cfg = GenConfig {
            price: Bounds::new(f64::NAN, 10.0),
            ..GenConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvertedBounds("price")));
    }

    #[test]
    fn event_kind_wire_names() {
        let names: Vec<&str> = EventKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["view", "click", "add_to_cart", "purchase", "remove_from_cart"]
        );
        for kind in EventKind::ALL {
            let encoded = serde_json::to_string(&kind).unwrap();
            assert_eq!(encoded, format!("\"{kind}\""));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let age = Bounds::new(20u32, 30);
        assert!(age.contains(&20));
        assert!(age.contains(&30));
        assert!(!age.contains(&19));
        assert!(!age.contains(&31));
    }
}
