//! Fixed generation sequence: users, items, then events, each written to
//! `<out_dir>/<name>.jsonl` before the next stage starts.

use std::io::Write;
use std::path::{Path, PathBuf};

use mart_config::GenConfig;

use crate::datagen::random::RandomSource;
use crate::datagen::{generate_events, generate_items, generate_users};
use crate::error::DatagenResult;
use crate::output::jsonl::write_jsonl;

pub const USERS_FILE: &str = "users.jsonl";
pub const ITEMS_FILE: &str = "items.jsonl";
pub const EVENTS_FILE: &str = "events.jsonl";

/// One written fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub path: PathBuf,
    pub records: usize,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub users: StageOutput,
    pub items: StageOutput,
    pub events: StageOutput,
}

impl RunSummary {
    pub fn stages(&self) -> [&StageOutput; 3] {
        [&self.users, &self.items, &self.events]
    }
}

/// Run every stage in order, printing progress lines to `progress`.
///
/// A failure aborts the run; files written by earlier stages are left as is.
/// Progress output is best-effort and never fails the run.
pub fn run<W: Write>(
    config: &GenConfig,
    rng: &mut RandomSource,
    progress: &mut W,
) -> DatagenResult<RunSummary> {
    config.validate()?;
    let out_dir = config.out_dir.as_path();

    writeln!(progress, "Generating sample data for NimbusMegaMart...").ok();
    mg_info!(
        sys,
        out_dir = %out_dir.display(),
        users = config.num_users,
        items = config.num_items,
        events = config.num_events,
        "generation started"
    );

    writeln!(progress, "Generating {} users...", config.num_users).ok();
    let users = generate_users(config, rng)?;
    let users_out = write_stage(&users, out_dir, USERS_FILE, "users", progress)?;

    writeln!(progress, "Generating {} items...", config.num_items).ok();
    let items = generate_items(config, rng)?;
    let items_out = write_stage(&items, out_dir, ITEMS_FILE, "items", progress)?;

    writeln!(progress, "Generating {} events...", config.num_events).ok();
    let events = generate_events(config, &users, &items, rng)?;
    let events_out = write_stage(&events, out_dir, EVENTS_FILE, "events", progress)?;

    let summary = RunSummary {
        users: users_out,
        items: items_out,
        events: events_out,
    };

    writeln!(progress, "Data generation complete!").ok();
    writeln!(progress, "Files created:").ok();
    for stage in summary.stages() {
        writeln!(
            progress,
            "  - {} ({} records)",
            stage.path.display(),
            stage.records
        )
        .ok();
    }
    mg_info!(sys, "generation complete");

    Ok(summary)
}

fn write_stage<T: serde::Serialize, W: Write>(
    records: &[T],
    out_dir: &Path,
    file_name: &str,
    label: &str,
    progress: &mut W,
) -> DatagenResult<StageOutput> {
    let path = out_dir.join(file_name);
    if path.exists() {
        mg_warn!(io, path = %path.display(), "overwriting existing output");
    }

    let records = write_jsonl(records, &path)?;
    writeln!(progress, "Wrote {records} {label} -> {}", path.display()).ok();
    mg_info!(gen, stage = label, records, path = %path.display(), "stage complete");

    Ok(StageOutput { path, records })
}
