//! Counting Sort Benchmark Driver
//!
//! Compares the bounded-integer counting sorts against Rust's pdqsort
//! (pattern-defeating quicksort) on random data:
//! - **std unstable sort**: O(n log n) comparison baseline
//! - **Counting sort**: O(n + k), single-threaded
//! - **Parallel counting sort**: O(n + k), counting phase spread over rayon
//!
//! Usage: `seqkit [array_size] [bound] [--benchmark]`
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for sort internals.

use std::error::Error;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::Rng;

use seqkit::counting_sort::{self, is_sorted};
use seqkit::parallel_sort;

/// Default array size for benchmarking
const DEFAULT_ARRAY_SIZE: usize = 1 << 20; // 1 million elements

/// Default exclusive upper bound on generated values
const DEFAULT_BOUND: usize = 1 << 16;

/// Array sizes swept by `--benchmark`
const BENCHMARK_SIZES: [usize; 7] = [
    1 << 10, // 1K
    1 << 12, // 4K
    1 << 14, // 16K
    1 << 16, // 64K
    1 << 18, // 256K
    1 << 20, // 1M
    1 << 22, // 4M
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Counting Sort Benchmark");
    println!("=======================\n");

    let args: Vec<String> = std::env::args().collect();
    let array_size = parse_arg(&args, 1, "array size", DEFAULT_ARRAY_SIZE);
    let bound = parse_arg(&args, 2, "bound", DEFAULT_BOUND).max(1);

    println!(
        "Array size: {} elements ({} MB), values in [0, {})",
        array_size,
        array_size * 4 / 1_000_000,
        bound
    );
    info!("rayon worker threads: {}", rayon::current_num_threads());

    println!("\nGenerating random data...");
    let data = generate_random_data(array_size, bound);

    // Baseline
    println!("\n--- std::sort_unstable (pdqsort) ---");
    let mut std_data = data.clone();
    let std_start = Instant::now();
    std_data.sort_unstable();
    let std_duration = std_start.elapsed();
    println!("std sort time: {:.3} ms", millis(std_duration));

    println!("\n--- Counting Sort ---");
    let start = Instant::now();
    let counted = counting_sort::sort(&data, bound)?;
    let counting_duration = start.elapsed();
    println!("Counting sort time: {:.3} ms", millis(counting_duration));
    report_verification("Counting sort", &counted, &std_data);

    println!("\n--- Parallel Counting Sort (rayon) ---");
    let start = Instant::now();
    let par_counted = parallel_sort::par_sort(&data, bound)?;
    let parallel_duration = start.elapsed();
    println!(
        "Parallel counting sort time: {:.3} ms",
        millis(parallel_duration)
    );
    report_verification("Parallel counting sort", &par_counted, &std_data);

    println!("\n--- Performance Comparison ---");
    print_speedup("Counting vs std", std_duration, counting_duration);
    print_speedup("Parallel counting vs std", std_duration, parallel_duration);
    print_speedup(
        "Parallel counting vs counting",
        counting_duration,
        parallel_duration,
    );

    if args.iter().skip(1).any(|arg| arg == "--benchmark") {
        run_benchmark(bound)?;
    }

    Ok(())
}

/// Parse the positional argument at `index`, falling back to `default`.
fn parse_arg(args: &[String], index: usize, name: &str, default: usize) -> usize {
    match args.get(index) {
        Some(raw) if raw.starts_with("--") => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid {} '{}', using default {}", name, raw, default);
            default
        }),
        None => default,
    }
}

/// Generate random test data in `[0, bound)`
fn generate_random_data(size: usize, bound: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    let upper = u32::try_from(bound).unwrap_or(u32::MAX);
    (0..size).map(|_| rng.gen_range(0..upper)).collect()
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn report_verification(label: &str, sorted: &[u32], expected: &[u32]) {
    if !is_sorted(sorted) {
        println!("ERROR: {} failed verification!", label);
    } else if sorted != expected {
        println!("WARNING: {} results differ from std sort!", label);
    } else {
        println!("{} verified: OK", label);
    }
}

fn print_speedup(label: &str, baseline: Duration, candidate: Duration) {
    let speedup = baseline.as_secs_f64() / candidate.as_secs_f64();
    if speedup > 1.0 {
        println!("{}: {:.2}x faster", label, speedup);
    } else {
        println!("{}: {:.2}x slower", label, 1.0 / speedup);
    }
}

/// Run benchmarks across multiple array sizes
fn run_benchmark(bound: usize) -> Result<(), Box<dyn Error>> {
    println!("\n\n====================================");
    println!("Running comprehensive benchmark...");
    println!("====================================\n");

    println!(
        "{:>12} | {:>12} | {:>14} | {:>14} | {:>12} | {:>12}",
        "Size", "std (ms)", "Counting (ms)", "Parallel (ms)", "Count/std", "Par/std"
    );
    println!(
        "{:-<12}-+-{:-<12}-+-{:-<14}-+-{:-<14}-+-{:-<12}-+-{:-<12}",
        "", "", "", "", "", ""
    );

    for &size in &BENCHMARK_SIZES {
        let data = generate_random_data(size, bound);

        let mut std_data = data.clone();
        let start = Instant::now();
        std_data.sort_unstable();
        let std_ms = millis(start.elapsed());

        let start = Instant::now();
        let counted = counting_sort::sort(&data, bound)?;
        let counting_ms = millis(start.elapsed());

        let start = Instant::now();
        let par_counted = parallel_sort::par_sort(&data, bound)?;
        let parallel_ms = millis(start.elapsed());

        if counted != std_data || par_counted != std_data {
            warn!("size {}: sorted output differs from std sort", size);
        }

        println!(
            "{:>12} | {:>12.3} | {:>14.3} | {:>14.3} | {:>11.2}x | {:>11.2}x",
            size,
            std_ms,
            counting_ms,
            parallel_ms,
            std_ms / counting_ms,
            std_ms / parallel_ms
        );
    }

    println!("\nNote: Speedup > 1.0x means the counting sort is faster than std");
    Ok(())
}
