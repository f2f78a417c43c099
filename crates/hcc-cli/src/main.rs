//! `hcc-check`: standalone connectivity check for the HCC Compression
//! Advisor.
//!
//! Exercises the configuration, the TLS artifacts, the catalog database
//! gateway, and the analysis service, printing pass/fail per check. Exits 0
//! only when every check passes, so it can gate a dashboard start script.

use clap::Parser;

mod checks;

#[derive(Debug, Parser)]
#[command(
    name = "hcc-check",
    version,
    about = "HCC Compression Advisor connectivity check"
)]
struct Cli {
    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Skip the database check
    #[arg(long)]
    skip_db: bool,

    /// Skip the API check
    #[arg(long)]
    skip_api: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("hcc-check error: {error:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<bool> {
    init_tracing(cli.quiet, cli.verbose)?;

    let config = hcc_config::HccConfig::load_with_dotenv()?;

    println!("HCC Compression Advisor: connectivity check");

    let problems = config.validate();
    if !problems.is_empty() {
        println!("\nConfiguration problems:");
        for problem in &problems {
            println!("  - {problem}");
        }
    }

    let mut results: Vec<(&str, bool)> = vec![("TLS artifacts", checks::tls_artifacts(&config.tls))];

    if cli.skip_db {
        println!("\nDatabase check skipped");
    } else {
        let database = config.database.clone();
        let passed = tokio::task::spawn_blocking(move || checks::database(&database)).await?;
        results.push(("Database connection", passed));
    }

    if cli.skip_api {
        println!("\nAPI check skipped");
    } else {
        results.push(("API connection", checks::api(&config.api).await));
    }

    println!("\nSummary:");
    for (name, passed) in &results {
        println!("  {} {name}", if *passed { "✓" } else { "✗" });
    }

    let all_passed = results.iter().all(|(_, passed)| *passed);
    if all_passed {
        println!("\nAll checks passed.");
    } else {
        println!("\nSome checks failed; fix the issues above before starting the dashboard.");
    }
    Ok(all_passed)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HCC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
