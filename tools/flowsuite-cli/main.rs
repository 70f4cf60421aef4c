use clap::Parser;
use flowsuite::prelude::*;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Assembles a master test collection from a request collection and a test suite
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the OpenAPI document (JSON or YAML)
    #[arg(long, env = "FLOWSUITE_SPEC")]
    spec: PathBuf,

    /// Path to the request collection generated from the OpenAPI document
    #[arg(long, env = "FLOWSUITE_COLLECTION")]
    collection: PathBuf,

    /// Path to the test suite specification (JSON or YAML)
    #[arg(long, env = "FLOWSUITE_SUITE")]
    suite: PathBuf,

    /// Directory the master collection is written to
    #[arg(short, long, env = "FLOWSUITE_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Suffix appended to request names to form their filenames
    #[arg(long, env = "FLOWSUITE_EXTENSION", default_value = ".bru")]
    extension: String,

    /// Also write the example-enriched request collection
    #[arg(long, env = "FLOWSUITE_EMIT_ENRICHED")]
    emit_enriched: bool,

    /// Log every resolved step and injected example
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli);
}

/// Honors `RUST_LOG` (default `info`); `--verbose` forces this crate to debug.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_module("flowsuite", LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let spec = load_api_specification(&cli.spec)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load API specification: {}", e)));
    let collection = load_collection(&cli.collection)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load request collection: {}", e)));
    let suite = load_suite(&cli.suite)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load test suite: {}", e)));
    let load_duration = load_start.elapsed();

    for duplicate in duplicate_names(&collection) {
        let folder = if duplicate.folder_path.is_empty() {
            "<root>"
        } else {
            duplicate.folder_path.as_str()
        };
        log::warn!(
            "Folder '{}' holds {} items named '{}'; lookups use the first one",
            folder,
            duplicate.count,
            duplicate.name
        );
    }

    // --- 2. Example Injection ---
    println!("\nInjecting request body examples...");
    let inject_start = Instant::now();
    let enriched = inject_examples(&spec, &collection);
    let inject_duration = inject_start.elapsed();
    println!(
        "  -> {} bodies injected, {} without example",
        enriched.report.injected.len(),
        enriched.report.missing.len()
    );

    if cli.emit_enriched {
        let enriched_path = cli.output_dir.join("enriched_collection.json");
        save_collection(&enriched_path, &enriched.collection)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write collection: {}", e)));
        println!("  -> Wrote enriched collection to '{}'", enriched_path.display());
    }

    // --- 3. Flow Assembly ---
    println!("\nAssembling test suite '{}'...", suite.name);
    let assemble_start = Instant::now();
    let assembler = Assembler::builder(&enriched.collection)
        .with_filename_extension(&cli.extension)
        .build();
    let assembly = assembler.assemble(&suite);
    let assemble_duration = assemble_start.elapsed();

    for flow in &assembly.master.items {
        println!("  -> Flow '{}' (seq {}): {} requests", flow.name, flow.seq, flow.items.len());
    }

    // --- 4. Output ---
    let master_path = master_path(&cli.output_dir, &suite.name);
    assembly
        .master
        .save(&master_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to write master collection: {}", e)));
    println!("\nWrote master collection to '{}'", master_path.display());

    // --- 5. Summary ---
    let report = &assembly.report;
    println!("\n--- Assembly Summary ---");
    println!("Flows:                {}", report.flows);
    println!("Resolved Requests:    {}", report.resolved);
    println!("Skipped Steps:        {}", report.skipped.len());
    for skipped in &report.skipped {
        println!(
            "  - {} #{} '{}' ({}): {}",
            skipped.flow_name, skipped.step_index, skipped.request_id, skipped.scope, skipped.error
        );
    }
    println!("Missing Examples:     {}", enriched.report.missing.len());

    println!("\n--- Performance Summary ---");
    println!("File Loading:         {:?}", load_duration);
    println!("Example Injection:    {:?}", inject_duration);
    println!("Flow Assembly:        {:?}", assemble_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_start.elapsed());
    println!();
}

/// `<output_dir>/<suite name>.json`, with path separators in the name replaced.
fn master_path(output_dir: &Path, suite_name: &str) -> PathBuf {
    let file_stem: String = suite_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    let file_stem = if file_stem.trim().is_empty() {
        "master_collection".to_string()
    } else {
        file_stem
    };
    output_dir.join(format!("{}.json", file_stem))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
