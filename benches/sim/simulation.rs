use std::time::Duration;

use criterion::{criterion_group, Criterion};
use falling_sand::sim::data::render_buffer::Cell;
use falling_sand::sim::data::simulation::{Simulation, SimulationBuilder};

/// The default simulation for benchmarking
fn get_simulation() -> Simulation {
    SimulationBuilder::new()
        .grid_size(128, 128)
        .seed(42)
        .demo_columns(true)
        .build()
}

fn bench_step(c: &mut Criterion) {
    let mut simulation = get_simulation();
    c.bench_function("step", |b| {
        b.iter(|| {
            simulation.step(Duration::from_millis(16));
        })
    });
}

fn bench_sync_to_render_buffer(c: &mut Criterion) {
    let simulation = get_simulation();
    let mut buffer = vec![Cell::default(); 128 * 128];
    c.bench_function("sync_to_render_buffer", |b| {
        b.iter(|| {
            simulation.sync_to_render_buffer(&mut buffer).unwrap();
        })
    });
}

criterion_group!(benches, bench_step, bench_sync_to_render_buffer);
