use anyhow::{Context, Result};
use tracing::info;

use gemba_board::{load_config, load_records, recompute_statuses, BoardReport};

fn main() -> Result<()> {
    init_tracing();
    let cfg = load_config()?;
    info!("records = {}, category = {}", cfg.records_path.display(), cfg.category.label());

    let mut records = load_records(&cfg.records_path)?;
    info!("Loaded {} metric records", records.len());

    if cfg.recompute {
        records = recompute_statuses(&records);
    }

    let report = BoardReport::build(&cfg, &records);
    let summary = report.summary();
    info!(
        "Board summary: {} red days, {} yellow days, {} critical categories",
        summary.red_days, summary.yellow_days, summary.critical_categories
    );

    let out = serde_json::to_string_pretty(&report).context("serialize board report")?;
    println!("{}", out);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
