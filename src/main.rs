use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use zoo_keeper::{
    load_name_pool, read_arrival_lines, write_report, Config, ReportBuilder, RunContext,
    Species, VERSION,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_args(env::args().skip(1)).context("Invalid arguments")?;

    println!("🦁 Zoo Keeper v{} - Population Report", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load name pool
    let names = load_name_pool(&config.names_path)?;
    println!("✓ Loaded names for {} species", names.species_count());

    // 2. Read arrivals
    let lines = read_arrival_lines(&config.arrivals_path)?;
    println!("✓ Read {} arrival entries", lines.len());

    // 3. Build animals (aborts on the first bad line)
    let mut ctx = RunContext::new(names);
    let animals = ctx
        .process_lines(&lines)
        .context("Failed to process arrivals")?;
    println!("✓ Built {} animal records", animals.len());
    for species in Species::ALL {
        println!(
            "   {}: {} assigned, {} names left",
            species.habitat_name(),
            ctx.id_counters().count(species.prefix()),
            ctx.names().remaining(species.key())
        );
    }

    // 4. Render and write
    let report = ReportBuilder::from_animals(&animals).build();
    write_report(&config.report_path, &report.render())?;

    if let Some(json_path) = &config.json_path {
        let json = report.to_json().context("Failed to serialize population")?;
        write_report(json_path, &json)?;
        println!("✓ Population JSON written to {}", json_path.display());
    }

    println!(
        "Zoo population report written to {}",
        config.report_path.display()
    );

    Ok(())
}
