use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kart::{KartInput, KartTuningProfile, LocomotionController};
use physics::{GroundPlane, SimBody, Vec3, GRAVITY};

fn bench_controller_tick(c: &mut Criterion) {
    let body = SimBody::sphere(Vec3::new(0.0, 0.5, 0.0), 0.5, 10.0);
    let mut kart = LocomotionController::with_tuning(body, KartTuningProfile::arcade());
    let input = KartInput::new(0.4, 0.0, 1.0, 0.0, false, true, false);

    c.bench_function("controller_step", |b| {
        b.iter(|| {
            kart.step(black_box(input));
            kart.body_mut().clear_commands();
        });
    });

    let mut ground = GroundPlane::new(0.0);
    let tag = ground.tag.clone();
    c.bench_function("controller_tick_with_ground", |b| {
        b.iter(|| {
            if ground.step(kart.body_mut(), 0.5).is_some() {
                kart.notify_ground_contact_stay(&tag);
            }
            kart.step(black_box(input));
            kart.body_mut().integrate(0.02, GRAVITY);
        });
    });
}

criterion_group!(benches, bench_controller_tick);
criterion_main!(benches);
