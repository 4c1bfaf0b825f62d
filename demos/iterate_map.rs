/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Runs every variant outside of criterion and prints its average latency.
//!
//! Run with: cargo run --release --example iterate_map [config.json]
//!
//! Each fork builds a fresh case.  Every iteration, warm-up or measured, resets the dataset and
//! then times a single call of the variant.

use anyhow::{Context, Result};
use log::{debug, info};
use map_iter_bench::{BenchmarkCase, Checksum, HarnessConfig, Variant};
use std::hint::black_box;
use std::time::{Duration, Instant};

struct VariantReport {
    variant: Variant,
    checksum: Checksum,
    total: Duration,
    samples: u32,
}

impl VariantReport {
    fn average(&self) -> Duration {
        self.total / self.samples.max(1)
    }
}

fn load_config() -> Result<HarnessConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read configuration file {}", path))?;

            HarnessConfig::from_json_str(&json)
                .with_context(|| format!("invalid configuration file {}", path))?
        }
        None => HarnessConfig::default(),
    };

    Ok(config.ci_scaled())
}

fn run_fork(config: &HarnessConfig, reports: &mut [VariantReport]) -> Result<()> {
    let mut case = BenchmarkCase::with_config(config);

    case.verify_all()?;

    for report in reports.iter_mut() {
        for _ in 0..config.warm_up_iterations {
            case.reset();
            black_box(case.measure(report.variant));
        }

        for _ in 0..config.measurement_iterations {
            case.reset();

            let start = Instant::now();
            report.checksum = black_box(case.measure(report.variant));
            report.total += start.elapsed();
            report.samples += 1;
        }

        debug!("{} accumulated {} samples", report.variant, report.samples);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;

    info!(
        "{} entries, {} warm-up and {} measured iterations, {} fork(s)",
        config.dataset_size, config.warm_up_iterations, config.measurement_iterations, config.forks
    );

    let mut reports: Vec<VariantReport> = config
        .variants
        .iter()
        .map(|&variant| VariantReport {
            variant,
            checksum: Checksum::ZERO,
            total: Duration::ZERO,
            samples: 0,
        })
        .collect();

    for fork in 1..=config.forks {
        info!("fork {}/{}", fork, config.forks);

        run_fork(&config, &mut reports)?;
    }

    let unit = config.time_unit;

    println!("{:<4} {:<26} {:>12} {:>14}", "#", "variant", "checksum", format!("avg ({})", unit));

    for report in &reports {
        println!(
            "{:<4} {:<26} {:>12} {:>14.3}",
            report.variant.number(),
            report.variant.name(),
            report.checksum,
            unit.convert(report.average())
        );
    }

    Ok(())
}
