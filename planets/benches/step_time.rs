use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planets::scenario::init_ring;
use planets::{SandboxConfig, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn bench_step_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_time");
    group.sample_size(50);

    for count in [8usize, 64, 256] {
        let mut world = World::new(&SandboxConfig::default()).unwrap();
        init_ring(&mut world, count, &mut StdRng::seed_from_u64(1)).unwrap();
        world.toggle_time();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| world.step_time(1.0 / 60.0, 10))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step_time);
criterion_main!(benches);
