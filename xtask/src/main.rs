use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graphwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benches and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["collections_benchmark", "graph_benchmark"];

const REPORT_PATH: &str = "benchmark_results/report.md";

/// The part of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
    median: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean and median time per iteration, in nanoseconds.
struct Timing {
    mean_ns: f64,
    median_ns: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        bail!("Failed to compile benchmarks");
    }

    for &bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", bench, "--"]);
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd.status().with_context(|| format!("failed to run bench {bench}"))?;
        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: bench {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# graphwalk Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Median | Ops/s |")?;
    writeln!(file, "|---|---|---|---|")?;
    for (workload, timing) in &results {
        writeln!(
            file,
            "| {} | {} | {} | {} |",
            workload,
            format_time(timing.mean_ns),
            format_time(timing.median_ns),
            format_rate(1e9 / timing.mean_ns)
        )?;
    }

    println!("Report with {} workloads written to {}", results.len(), report_path.display());
    Ok(())
}

/// Walks `dir` for `<workload>/new/estimates.json`, keyed by the workload's
/// path below the criterion root.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, Timing>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("report") {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("new") {
            collect_results(root, &path, results)?;
            continue;
        }

        let estimates_path = path.join("estimates.json");
        let Ok(content) = fs::read_to_string(&estimates_path) else {
            continue;
        };
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", estimates_path.display()))?;
        if estimates.mean.point_estimate <= 0.0 {
            continue;
        }

        let workload = dir
            .strip_prefix(root)
            .unwrap_or(dir)
            .to_string_lossy()
            .replace('\\', "/");
        results.insert(
            workload,
            Timing {
                mean_ns: estimates.mean.point_estimate,
                median_ns: estimates.median.point_estimate,
            },
        );
    }
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
