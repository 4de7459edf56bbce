use physics::{SimBody, Vec3, GRAVITY};

#[test]
fn sphere_free_fall_tracks_analytic() {
    let mut body = SimBody::sphere(Vec3::new(0.0, 10.0, 0.0), 0.5, 1.0);
    let dt = 0.01_f32;
    let steps = 100;
    for _ in 0..steps {
        body.integrate(dt, GRAVITY);
    }

    // h = h0 - g t^2 / 2, loosened for semi-implicit Euler and damping
    #[allow(clippy::cast_precision_loss)]
    let t = dt * steps as f32;
    let expected = 10.0 - 0.5 * 9.81 * t * t;
    let diff = (body.pos.y - expected).abs();
    assert!(diff < 0.15, "diff={diff}");
    assert!(body.vel.y < -9.0);
}
