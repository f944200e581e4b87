/*!
 * Simulation Benchmarks
 * Throughput of every policy across workload sizes
 */

use cpu_sched_sim::{simulate, Policy, ProcessRecord, SimulationRequest};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Seeded staggered workload so runs are comparable
fn create_workload(count: usize) -> Vec<ProcessRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut arrival = 0;
    (0..count)
        .map(|i| {
            arrival += rng.gen_range(0..4);
            ProcessRecord::new(
                format!("P{}", i),
                arrival,
                rng.gen_range(1..=20),
                rng.gen_range(0..8),
            )
        })
        .collect()
}

fn benchmark_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for size in [10, 100, 1000].iter() {
        let records = create_workload(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.as_str(), size), size, |b, _| {
                b.iter(|| {
                    let result = simulate(black_box(&records), policy, Some(4)).unwrap();
                    black_box(result);
                });
            });
        }
    }

    group.finish();
}

fn benchmark_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");
    let records = create_workload(500);

    // Smaller quanta mean more slices and more queue churn
    for quantum in [1, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(quantum), quantum, |b, &q| {
            b.iter(|| {
                let result = simulate(black_box(&records), Policy::RoundRobin, Some(q)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn benchmark_request_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_decoding");

    for size in [10, 1000].iter() {
        let json = SimulationRequest::new(Policy::SjfPreemptive, create_workload(*size))
            .to_json()
            .unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_with_input(BenchmarkId::new("from_json", size), size, |b, _| {
            b.iter(|| {
                let request = SimulationRequest::from_json(black_box(&json)).unwrap();
                black_box(request);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_policies,
    benchmark_round_robin_quantum,
    benchmark_request_decoding
);
criterion_main!(benches);
