use chrono::TimeDelta;
use mart_config::GenConfig;

use super::pick;
use super::random::RandomSource;
use crate::error::DatagenResult;
use crate::records::{Gender, User, user_id};

/// Naive ISO-8601, matching how registration dates appear in the fixtures.
const REGISTRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Generate `config.num_users` users with ids `user_000001` upward.
///
/// The config is validated first, so bad bounds surface as an error.
pub fn generate_users(config: &GenConfig, rng: &mut RandomSource) -> DatagenResult<Vec<User>> {
    config.validate()?;
    let mut users = Vec::with_capacity(config.num_users);

    for i in 1..=config.num_users {
        let country = pick(rng, &config.countries, "countries")?.clone();
        let age = rng.within(&config.age);
        let gender = *pick(rng, &Gender::ALL, "genders")?;
        let days_before = rng.int_inclusive(0, config.registration_lookback_days);
        let registered = config.start - TimeDelta::days(days_before);

        users.push(User {
            user_id: user_id(i),
            country,
            age,
            gender,
            registration_date: registered.format(REGISTRATION_FORMAT).to_string(),
        });
    }

    mg_debug!(gen, users = users.len(), "users generated");
    Ok(users)
}
