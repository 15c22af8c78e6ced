//! Contact-Finder main entry point
//!
//! This is the command-line interface for the Contact-Finder people search.

use anyhow::{Context, Result};
use clap::Parser;
use contact_finder::config::{load_config_with_hash, Config};
use contact_finder::input::{batch_companies, load_companies, parse_titles};
use contact_finder::output::{export_results, print_statistics, write_exports, RunStatistics};
use contact_finder::pipeline::{BarReporter, ContactAssembler, LogReporter, ProgressReporter};
use contact_finder::search::{build_http_client, ApolloClient};
use contact_finder::verify::{MillionVerifierClient, RateGate};
use contact_finder::InputError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Contact-Finder: find people by company and title, then verify their work email
///
/// Reads company websites from a CSV file, searches people holding the given
/// job titles at those companies, guesses and verifies their email addresses,
/// and writes all results plus verified-only results as CSV.
#[derive(Parser, Debug)]
#[command(name = "contact-finder")]
#[command(version = "1.0.0")]
#[command(about = "Find people by company and title, then verify their work email", long_about = None)]
struct Cli {
    /// CSV file with a `company_web_url` or `comp_web_url` column
    #[arg(short, long, value_name = "CSV")]
    input: PathBuf,

    /// Job titles, comma or newline separated
    #[arg(short, long, required_unless_present = "titles_file")]
    titles: Option<String>,

    /// File holding job titles, comma or newline separated
    #[arg(long, value_name = "FILE", conflicts_with = "titles")]
    titles_file: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the CSV exports (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// People-search API key
    #[arg(long, env = "APOLLO_API_KEY", hide_env_values = true)]
    search_key: Option<String>,

    /// Mailbox-verification API key
    #[arg(long, env = "MV_API_KEY", hide_env_values = true)]
    verify_key: Option<String>,

    /// Load inputs and show what would be searched without calling any API
    #[arg(long)]
    dry_run: bool,

    /// Log progress lines instead of drawing a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        None => Config::default(),
    };

    let companies = load_companies(&cli.input)
        .with_context(|| format!("Failed to load companies from {}", cli.input.display()))?;

    let raw_titles = match (&cli.titles, &cli.titles_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read titles from {}", path.display()))?,
        (None, None) => String::new(),
    };
    let titles = parse_titles(&raw_titles);
    if titles.is_empty() {
        return Err(InputError::NoTitles.into());
    }

    println!(
        "Found {} companies and {} titles.",
        companies.len(),
        titles.len()
    );

    if cli.dry_run {
        handle_dry_run(&config, &cli, &companies, &titles);
        return Ok(());
    }

    handle_run(&config, &cli, &companies, &titles).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_finder=info,warn"),
            1 => EnvFilter::new("contact_finder=debug,info"),
            2 => EnvFilter::new("contact_finder=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be searched
fn handle_dry_run(config: &Config, cli: &Cli, companies: &[String], titles: &[String]) {
    let batches = batch_companies(companies, config.search.batch_size);
    let sent_titles = titles.len().min(config.search.max_titles);

    println!("=== Contact-Finder Dry Run ===\n");

    println!("Search:");
    println!("  Endpoint: {}", config.search.endpoint);
    println!(
        "  Batches: {} ({} companies each)",
        batches.len(),
        config.search.batch_size
    );
    println!("  Titles sent: {} of {}", sent_titles, titles.len());

    println!("\nVerification:");
    println!("  Endpoint: {}", config.verification.endpoint);
    println!("  Timeout: {}s", config.verification.timeout_secs);
    println!("  Delay between attempts: {}ms", config.verification.delay_ms);

    match config
        .credentials
        .resolve(cli.search_key.as_deref(), cli.verify_key.as_deref())
    {
        Ok(_) => println!("\n✓ API keys present"),
        Err(e) => println!("\n✗ {}", e),
    }

    println!("✓ Would send {} search requests", batches.len());
}

/// Handles the main search-and-verify run
async fn handle_run(
    config: &Config,
    cli: &Cli,
    companies: &[String],
    titles: &[String],
) -> Result<()> {
    let (search_key, verify_key) = config
        .credentials
        .resolve(cli.search_key.as_deref(), cli.verify_key.as_deref())?;

    let client = build_http_client().context("Failed to build HTTP client")?;
    let search = ApolloClient::new(client.clone(), &config.search, search_key);
    let verifier = MillionVerifierClient::new(
        client,
        &config.verification,
        verify_key,
        RateGate::from_millis(config.verification.delay_ms),
    );

    let assembler = ContactAssembler::new(
        Box::new(search),
        Box::new(verifier),
        config.search.batch_size,
        config.search.max_titles,
    );

    let bar = if cli.no_progress || cli.quiet {
        None
    } else {
        Some(BarReporter::new().context("Failed to set progress bar template")?)
    };
    let reporter: &dyn ProgressReporter = match &bar {
        Some(bar) => bar,
        None => &LogReporter,
    };

    let mut outcome = assembler.run(companies, titles, reporter).await;

    if let Some(bar) = &bar {
        bar.finish(&format!("Processed {} batches", outcome.batches_total));
    }

    if outcome.records.is_empty() {
        println!("No people found for the given companies and titles.");
        return Ok(());
    }

    let records = std::mem::take(&mut outcome.records);
    let exported = export_results(records).context("Failed to serialize results")?;

    let directory = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let written = write_exports(&exported, &directory, &config.output)
        .with_context(|| format!("Failed to write results to {}", directory.display()))?;

    let stats = RunStatistics::new(&outcome, &exported);
    print_statistics(&stats);

    println!();
    println!("✓ All results: {}", written.all_results.display());
    match &written.verified {
        Some(path) => println!("✓ Verified only: {}", path.display()),
        None => println!("No verified emails found"),
    }

    Ok(())
}
