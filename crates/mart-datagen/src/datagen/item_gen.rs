use mart_config::GenConfig;

use super::random::RandomSource;
use super::{pick, round_cents};
use crate::error::DatagenResult;
use crate::records::{Item, item_id};

/// Generate `config.num_items` items with ids `item_000001` upward.
pub fn generate_items(config: &GenConfig, rng: &mut RandomSource) -> DatagenResult<Vec<Item>> {
    config.validate()?;
    let mut items = Vec::with_capacity(config.num_items);

    for i in 1..=config.num_items {
        let category = pick(rng, &config.categories, "categories")?.clone();
        let price = round_cents(rng.float_inclusive(config.price.min, config.price.max));
        let brand = rng.int_inclusive(1, config.brand_count);

        items.push(Item {
            item_id: item_id(i),
            category,
            price,
            brand: format!("Brand_{brand}"),
            name: format!("Product {i}"),
        });
    }

    mg_debug!(gen, items = items.len(), "items generated");
    Ok(items)
}
