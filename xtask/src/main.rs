use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ugraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Save results under this criterion baseline name
        #[arg(long)]
        save_baseline: Option<String>,

        /// Add a column comparing against a previously saved baseline
        #[arg(long)]
        compare: Option<String>,
    },
}

const BENCHES: &[&str] = &["graph_benchmark", "dijkstra_benchmark"];

const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// The slice of criterion's `estimates.json` the report reads.
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
    median: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            save_baseline,
            compare,
        } => {
            if !report_only {
                run_benchmarks(quick, save_baseline.as_deref())?;
            }
            let baseline = save_baseline.as_deref().unwrap_or("new");
            generate_report(baseline, compare.as_deref())?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, save_baseline: Option<&str>) -> Result<()> {
    println!("Compiling benchmarks...");
    let mut build = Command::new("cargo");
    build.args(["build", "--release", "-p", "ugraph", "--benches"]);
    let status = build.status().context("failed to invoke cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.args(["bench", "-p", "ugraph", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if let Some(name) = save_baseline {
            cmd.arg("--save-baseline").arg(name);
        }
        if quick {
            cmd.arg("--measurement-time").arg("0.5");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench {bench}"))?;
        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report(baseline: &str, compare: Option<&str>) -> Result<()> {
    println!("\n>>> Generating report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let current = collect_estimates(criterion_dir, baseline)?;
    if current.is_empty() {
        eprintln!("No estimates found for baseline '{baseline}'");
        return Ok(());
    }
    let previous = match compare {
        Some(name) => collect_estimates(criterion_dir, name)?,
        None => BTreeMap::new(),
    };

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;

    writeln!(file, "# ugraph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "Baseline: `{baseline}`")?;
    writeln!(file)?;

    write!(file, "| Benchmark | Mean | Median | Ops/s |")?;
    if let Some(name) = compare {
        write!(file, " vs {name} |")?;
    }
    writeln!(file)?;
    write!(file, "|---|---|---|---|")?;
    if compare.is_some() {
        write!(file, "---|")?;
    }
    writeln!(file)?;

    for (id, estimates) in &current {
        let mean = estimates.mean.point_estimate;
        write!(
            file,
            "| {} | {} | {} | {} |",
            id,
            format_time(mean),
            format_time(estimates.median.point_estimate),
            format_ops(1e9 / mean)
        )?;
        if compare.is_some() {
            match previous.get(id) {
                Some(old) => {
                    let change = (mean / old.mean.point_estimate - 1.0) * 100.0;
                    write!(file, " {change:+.1}% |")?;
                }
                None => write!(file, " N/A |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks the criterion output and reads every `<id>/<baseline>/estimates.json`.
///
/// Benchmark ids are the directory path relative to the criterion root, so
/// grouped benchmarks show up as `group/parameter`.
fn collect_estimates(root: &Path, baseline: &str) -> Result<BTreeMap<String, Estimates>> {
    let mut results = BTreeMap::new();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }

            let estimates_path = path.join(baseline).join("estimates.json");
            if estimates_path.is_file() {
                let content = fs::read_to_string(&estimates_path)
                    .with_context(|| format!("failed to read {}", estimates_path.display()))?;
                let estimates: Estimates = serde_json::from_str(&content)
                    .with_context(|| format!("malformed {}", estimates_path.display()))?;
                let id = path
                    .strip_prefix(root)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .replace('\\', "/");
                results.insert(id, estimates);
            }
            pending.push(path);
        }
    }

    Ok(results)
}

fn format_time(ns: f64) -> String {
    if ns >= 1e9 {
        format!("{:.2} s", ns / 1e9)
    } else if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
