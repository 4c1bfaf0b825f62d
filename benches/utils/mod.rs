/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use criterion::BenchmarkGroup;
use criterion::measurement::WallTime;
use map_iter_bench::{BenchmarkCase, HarnessConfig, Variant};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// The harness configuration, shortened when running on CI.
pub fn harness_config() -> HarnessConfig {
    let _ = env_logger::builder().is_test(true).try_init();

    HarnessConfig::default().ci_scaled()
}

/// Applies the warm-up and measurement settings of `config` to `group`.
///
/// Each configured iteration is given one second, and criterion needs a non-zero warm-up time.
pub fn configure(group: &mut BenchmarkGroup<'_, WallTime>, config: &HarnessConfig) {
    let seconds = |iterations: u32| Duration::from_secs(u64::from(iterations.max(1)));

    group
        .warm_up_time(seconds(config.warm_up_iterations))
        .measurement_time(seconds(config.measurement_iterations));
}

#[allow(dead_code)]
pub trait ResetBenchmarkGroup {
    /// Benchmarks `variant`, resetting `case` before every measured call.  The reset itself is
    /// not part of the measured time.
    fn bench_variant_with_reset(&mut self, case: &mut BenchmarkCase, variant: Variant);
}

impl ResetBenchmarkGroup for BenchmarkGroup<'_, WallTime> {
    fn bench_variant_with_reset(&mut self, case: &mut BenchmarkCase, variant: Variant) {
        self.bench_function(variant.name(), |b| {
            b.iter_custom(|iter_count| {
                let mut total = Duration::ZERO;

                for _ in 0..iter_count {
                    case.reset();

                    let start = Instant::now();
                    black_box(case.measure(black_box(variant)));
                    total += start.elapsed();
                }

                total
            });
        });
    }
}
