// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the dispenser chain.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single dispense latency
//! - Amount and chain-length scaling
//! - Batch throughput, sequential and parallel over one shared chain

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dispenser_demo_rs::{Amount, DispenserChain};
use rayon::prelude::*;

// =============================================================================
// Single Dispense Benchmarks
// =============================================================================

fn bench_single_dispense(c: &mut Criterion) {
    let chain = DispenserChain::standard();
    c.bench_function("single_dispense", |b| {
        b.iter(|| chain.dispense(black_box(Amount(2970))))
    });
}

fn bench_assembly(c: &mut Criterion) {
    c.bench_function("chain_assembly", |b| {
        b.iter(|| DispenserChain::new(black_box([1000u64, 500, 100, 20])).unwrap())
    });
}

// =============================================================================
// Scaling Benchmarks
// =============================================================================

fn bench_amount_scaling(c: &mut Criterion) {
    let chain = DispenserChain::standard();
    let mut group = c.benchmark_group("amount_scaling");

    for amount in [100u64, 10_000, 1_000_000, 100_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(amount), amount, |b, &amount| {
            b.iter(|| chain.dispense(black_box(Amount(amount))))
        });
    }
    group.finish();
}

fn bench_chain_length_scaling(c: &mut Criterion) {
    let denominations = [5_000u64, 2_000, 1_000, 500, 200, 100, 50, 20, 10, 5, 2, 1];
    let mut group = c.benchmark_group("chain_length");

    for len in [1usize, 4, 8, 12].iter() {
        let chain = DispenserChain::new(denominations[..*len].iter().copied()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &chain, |b, chain| {
            b.iter(|| chain.dispense(black_box(Amount(987_650))))
        });
    }
    group.finish();
}

// =============================================================================
// Batch Throughput Benchmarks
// =============================================================================

fn bench_batch_throughput(c: &mut Criterion) {
    let chain = DispenserChain::standard();
    let amounts: Vec<Amount> = (0..10_000u64).map(|i| Amount(i * 10)).collect();

    let mut group = c.benchmark_group("batch_throughput");
    group.throughput(Throughput::Elements(amounts.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            for &amount in &amounts {
                black_box(chain.dispense(amount));
            }
        })
    });

    // One immutable chain shared by every worker thread
    group.bench_function("parallel", |b| {
        b.iter(|| {
            amounts.par_iter().for_each(|&amount| {
                black_box(chain.dispense(amount));
            })
        })
    });

    group.finish();
}

criterion_group!(single, bench_single_dispense, bench_assembly,);

criterion_group!(scaling, bench_amount_scaling, bench_chain_length_scaling,);

criterion_group!(throughput, bench_batch_throughput,);

criterion_main!(single, scaling, throughput);
