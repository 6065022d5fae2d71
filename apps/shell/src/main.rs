//! Headless driver for the simulated STK push gateway and the course matcher.

use anyhow::Context;
use clap::{Parser, Subcommand};
use edupath::Platform;
use edupath::domain::config::AppConfig;
use edupath::features::matching::GradeSheet;
use edupath::kernel::config::load_config;
use edupath::kernel::haptics::Haptics;
use edupath_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "edupath", version, about = "EDU PATH gateway and matcher tools")]
struct Cli {
    /// Log to the console at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Simulated gateway latency, overriding the configured value.
    #[arg(long, global = true, value_name = "MS")]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sends a simulated STK push and waits for the checkout handle.
    Initiate {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        amount: u32,
        #[arg(long)]
        name: String,
    },
    /// Prints freshly generated transaction codes.
    Otp {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Matches a grade sheet such as `eng=A-,mat=B+,...` against the catalog.
    Match {
        #[arg(long)]
        grades: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[edupath_runtime::main(cooperative)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = if cli.verbose {
        Some(Logger::builder().name(env!("CARGO_PKG_NAME")).level(LevelFilter::DEBUG).init()?)
    } else {
        None
    };

    let mut config: AppConfig = load_config(None::<&str>).context("Failed to load configuration")?;
    if let Some(latency_ms) = cli.latency_ms {
        config.payment.latency_ms = latency_ms;
    }
    let platform = edupath::init(config, Haptics::disabled())?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Initiate { phone, amount, name } => {
            initiate(&platform, &mut out, &phone, amount, &name).await
        },
        Command::Otp { count } => otp(&platform, &mut out, count),
        Command::Match { grades, json } => match_grades(&platform, &mut out, &grades, json),
    }
}

async fn initiate(
    platform: &Platform,
    out: &mut impl Write,
    phone: &str,
    amount: u32,
    name: &str,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let pending = platform.payments.gateway.initiate_stk_push(phone, amount, name)?;
    tracing::debug!(msisdn = %pending.msisdn().masked(), amount, "STK push sent");

    let request = pending.await;
    let elapsed = started.elapsed();

    writeln!(out, "{}", serde_json::to_string(&request)?)?;
    writeln!(out, "elapsed_ms={}", elapsed.as_millis())?;
    Ok(())
}

fn otp(platform: &Platform, out: &mut impl Write, count: usize) -> anyhow::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", platform.payments.gateway.generate_transaction_otp())?;
    }
    Ok(())
}

fn match_grades(
    platform: &Platform,
    out: &mut impl Write,
    grades: &str,
    json: bool,
) -> anyhow::Result<()> {
    let sheet: GradeSheet = grades.parse()?;
    let report = platform.matching.catalog.assess(&sheet)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Mean grade {} ({} / 84 points)", report.mean_grade, report.aggregate)?;
    if report.matches.is_empty() {
        writeln!(out, "No course cutoff is met")?;
    }
    for entry in &report.matches {
        writeln!(
            out,
            "{:<12} {:>7.3} {:>+8.3}  {} - {}",
            entry.course_code, entry.weight, entry.margin, entry.course_name, entry.university
        )?;
    }
    Ok(())
}
