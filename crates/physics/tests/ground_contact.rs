use physics::{
    BodyCommand, ContactPhase, ForceMode, GroundPlane, RigidBody, SimBody, Tag, Vec3, GRAVITY,
};

const DT: f32 = 0.02;
const RADIUS: f32 = 0.5;

fn drop_until_contact(ground: &mut GroundPlane, body: &mut SimBody) -> usize {
    for tick in 0..500 {
        if ground.step(body, RADIUS) == Some(ContactPhase::Begin) {
            return tick;
        }
        body.integrate(DT, GRAVITY);
    }
    panic!("body never reached the ground");
}

#[test]
fn dropped_sphere_lands_and_rests() {
    let mut ground = GroundPlane::new(0.0);
    let mut body = SimBody::sphere(Vec3::new(0.0, 3.0, 0.0), RADIUS, 10.0);

    let tick = drop_until_contact(&mut ground, &mut body);
    assert!(tick > 0);
    assert!(body.pos.y >= RADIUS - 1e-4);
    assert!(body.vel.y >= 0.0, "approaching velocity must be removed");

    for _ in 0..100 {
        body.integrate(DT, GRAVITY);
        assert_eq!(ground.step(&mut body, RADIUS), Some(ContactPhase::Stay));
    }
    assert!((body.pos.y - RADIUS).abs() < 0.02);
}

#[test]
fn impulse_off_the_ground_ends_contact() {
    let mut ground = GroundPlane::new(0.0);
    let mut body = SimBody::sphere(Vec3::new(0.0, RADIUS, 0.0), RADIUS, 2.0);
    assert_eq!(ground.step(&mut body, RADIUS), Some(ContactPhase::Begin));

    body.add_force(Vec3::new(0.0, 20.0, 0.0), ForceMode::Impulse);
    assert_eq!(
        body.commands(),
        &[BodyCommand::Force {
            force: Vec3::new(0.0, 20.0, 0.0),
            mode: ForceMode::Impulse,
        }]
    );
    body.integrate(DT, GRAVITY);
    assert_eq!(ground.step(&mut body, RADIUS), Some(ContactPhase::End));
    body.integrate(DT, GRAVITY);
    assert_eq!(ground.step(&mut body, RADIUS), None);
}

#[test]
fn friction_slows_sliding_body() {
    let mut ground = GroundPlane::new(0.0);
    let mut body = SimBody::sphere(Vec3::new(0.0, RADIUS, 0.0), RADIUS, 1.0)
        .with_velocity(Vec3::new(3.0, 0.0, 0.0));
    for _ in 0..50 {
        ground.step(&mut body, RADIUS);
        body.integrate(DT, GRAVITY);
    }
    assert!(body.vel.x < 3.0);
    assert!(body.vel.x > 0.0);
}

#[test]
fn ground_event_carries_plane_tag() {
    let ground = GroundPlane::new(1.0).with_tag(Tag::from_static("pitch"));
    let contact = ground.detect(Vec3::new(2.0, 1.3, -1.0), RADIUS).unwrap();
    let event = ground.event(&contact);
    assert_eq!(event.other, "pitch");
    assert_eq!(event.first_point(), Some(Vec3::new(2.0, 1.0, -1.0)));
    assert_eq!(event.average_normal(), Some(Vec3::Y));
}
