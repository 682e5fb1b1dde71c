use std::collections::HashMap;

use mart_config::{EventKind, GenConfig};

use super::random::RandomSource;
use super::{pick, round_cents};
use crate::error::{DatagenError, DatagenResult};
use crate::records::{Event, EventProps, Item, User, event_id};

/// Generate `config.num_events` events over the given pools.
///
/// Users, items and event kinds are drawn uniformly; timestamps are uniform
/// whole seconds over `[config.start, config.end]` (UTC). Purchase prices are
/// the item price times a multiplier from `config.purchase_multipliers`, so a
/// negative price is expected noise.
///
/// Both pools must be non-empty whenever at least one event is requested.
pub fn generate_events(
    config: &GenConfig,
    users: &[User],
    items: &[Item],
    rng: &mut RandomSource,
) -> DatagenResult<Vec<Event>> {
    config.validate()?;
    if config.num_events == 0 {
        return Ok(Vec::new());
    }
    if users.is_empty() {
        return Err(DatagenError::EmptyPool("user"));
    }
    if items.is_empty() {
        return Err(DatagenError::EmptyPool("item"));
    }

    let user_ids: Vec<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
    let item_ids: Vec<&str> = items.iter().map(|i| i.item_id.as_str()).collect();
    // First occurrence wins if an id is ever duplicated.
    let mut items_by_id: HashMap<&str, &Item> = HashMap::with_capacity(items.len());
    for item in items {
        items_by_id.entry(item.item_id.as_str()).or_insert(item);
    }

    let start = config.start.and_utc().timestamp();
    let window = config.window_seconds();
    let mut events = Vec::with_capacity(config.num_events);

    for i in 0..config.num_events {
        let ts = start + rng.int_inclusive(0, window);
        let user_id = *pick(rng, &user_ids, "users")?;
        let item_id = *pick(rng, &item_ids, "items")?;
        let kind = *pick(rng, &config.event_kinds, "event_kinds")?;
        let item = items_by_id
            .get(item_id)
            .ok_or(DatagenError::EmptyPool("item"))?;

        let props = match kind {
            EventKind::Purchase => {
                let multiplier = *pick(rng, &config.purchase_multipliers, "purchase_multipliers")?;
                EventProps::Purchase {
                    price: round_cents(item.price * multiplier),
                }
            }
            EventKind::View => EventProps::View {
                duration: rng.within(&config.view_duration_secs),
            },
            EventKind::AddToCart => EventProps::AddToCart {
                quantity: rng.within(&config.cart_quantity),
            },
            EventKind::Click | EventKind::RemoveFromCart => EventProps::Empty {},
        };

        events.push(Event {
            event_id: event_id(i),
            user_id: user_id.to_string(),
            item_id: item_id.to_string(),
            event_type: kind,
            ts,
            props,
        });
    }

    mg_debug!(
        gen,
        events = events.len(),
        users = users.len(),
        items = items.len(),
        "events generated"
    );
    Ok(events)
}
