//! # Wheel velocity solver benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use sim_lib::kin::{self, Jacobian, Params, WheelConfig, WheelSet};

fn solver_benchmark(c: &mut Criterion) {
    // ---- Build the wheel configuration and Jacobian ----

    let params = Params::default();

    let config = WheelConfig::new(
        params.angles_deg(WheelSet::Extended),
        params.wheel_radius_m,
        params.wheel_width_m,
        params.platform_radius_m,
    )
    .unwrap();

    let jacobian = Jacobian::build(&config);

    // Bench the Jacobian construction
    c.bench_function("Jacobian::build", |b| b.iter(|| Jacobian::build(&config)));

    // Bench the full per-frame computation
    c.bench_function("kin::solve", |b| {
        let body_vel = kin::to_body_frame(0.75, 120.0, 30.0);
        b.iter(|| kin::solve(&jacobian, &body_vel, 0.5))
    });
}

criterion_group!(benches, solver_benchmark);
criterion_main!(benches);
