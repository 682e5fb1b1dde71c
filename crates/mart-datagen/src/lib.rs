#[macro_use]
mod log_macros;

pub mod datagen;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod tracing_init;
