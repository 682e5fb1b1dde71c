pub mod event_gen;
pub mod item_gen;
pub mod random;
pub mod user_gen;

use mart_config::ConfigError;

use crate::error::{DatagenError, DatagenResult};
use random::RandomSource;

pub use event_gen::generate_events;
pub use item_gen::generate_items;
pub use user_gen::generate_users;

/// Round to two decimal places, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform choice from a configured enumeration.
fn pick<'a, T>(
    rng: &mut RandomSource,
    choices: &'a [T],
    what: &'static str,
) -> DatagenResult<&'a T> {
    rng.choose(choices)
        .ok_or(DatagenError::Config(ConfigError::EmptyChoices(what)))
}
