use kart::{
    Bounce, ContactResponder, JumpAction, KartInput, KartTuningProfile, LocomotionController,
};
use physics::{BodyCommand, ForceMode, SimBody, Tag, Vec3};

const DT: f32 = 0.02;

fn grounded_kart() -> LocomotionController<SimBody> {
    LocomotionController::with_tuning(
        SimBody::new(Vec3::new(0.0, 0.5, 0.0), 10.0, 1.0),
        KartTuningProfile::default(),
    )
}

fn impulses(kart: &LocomotionController<SimBody>) -> Vec<Vec3> {
    kart.body()
        .commands()
        .iter()
        .filter_map(|c| match *c {
            BodyCommand::Force {
                force,
                mode: ForceMode::Impulse,
            } => Some(force),
            _ => None,
        })
        .collect()
}

#[test]
fn out_of_range_input_matches_clamped_input() {
    let cases = [
        (
            KartInput::new(4.0, -3.0, 2.0, -1.0, true, false, false),
            KartInput::new(1.0, -1.0, 1.0, 0.0, true, false, false),
        ),
        (
            KartInput::new(-9.0, 9.0, -5.0, 7.0, false, true, true),
            KartInput::new(-1.0, 1.0, 0.0, 1.0, false, true, true),
        ),
    ];

    for (raw, clamped) in cases {
        for airborne in [false, true] {
            let mut a = grounded_kart();
            let mut b = grounded_kart();
            if airborne {
                a.notify_ground_contact_end(&Tag::GROUND);
                b.notify_ground_contact_end(&Tag::GROUND);
            }
            a.step(raw);
            b.step(clamped);
            assert_eq!(a.body().commands(), b.body().commands());
            assert_eq!(a.state(), b.state());
        }
    }
}

#[test]
fn landing_restores_jump_charge() {
    let mut kart = grounded_kart();
    kart.notify_ground_contact_end(&Tag::GROUND);
    kart.step(KartInput::default().with_jump(true));
    assert!(!kart.has_second_jump());

    kart.notify_ground_contact_begin(&Tag::GROUND);
    kart.step(KartInput::default());
    assert!(kart.has_second_jump());
    assert!(kart.is_grounded());
    assert_eq!(kart.landings(), 1);
}

#[test]
fn second_jump_is_consumed_exactly_once() {
    let mut kart = grounded_kart();

    kart.step(KartInput::default().with_jump(true));
    assert!(matches!(kart.last_jump(), JumpAction::Ground(_)));
    assert_eq!(impulses(&kart), vec![Vec3::new(0.0, 200.0, 0.0)]);
    kart.body_mut().clear_commands();

    kart.notify_ground_contact_end(&Tag::GROUND);
    kart.step(KartInput::default().with_jump(true));
    assert!(matches!(kart.last_jump(), JumpAction::Air(_)));
    assert_eq!(impulses(&kart).len(), 1);
    assert!(!kart.has_second_jump());
    kart.body_mut().clear_commands();

    kart.step(KartInput::default().with_jump(true));
    assert_eq!(kart.last_jump(), JumpAction::None);
    assert!(impulses(&kart).is_empty());
}

#[test]
fn no_control_gate_blocks_everything() {
    let mut kart = grounded_kart();
    kart.notify_ground_contact_end(&Tag::GROUND);
    kart.set_control(false);
    let before = kart.state().clone();

    for input in [
        KartInput::new(1.0, 1.0, 1.0, 0.0, true, true, true),
        KartInput::new(-5.0, 0.0, 3.0, 2.0, true, false, false),
        KartInput::throttle(0.5),
    ] {
        kart.step(input);
    }

    assert!(kart.body().commands().is_empty());
    assert_eq!(kart.state(), &before);
    assert_eq!(kart.airborne_time(), 0.0);
}

#[test]
fn empty_impact_does_not_touch_the_body() {
    let responder = ContactResponder::default();
    let mut body = SimBody::new(Vec3::ZERO, 1.0, 1.0).with_velocity(Vec3::new(1.0, 2.0, 3.0));
    let outcome = responder.on_impact(std::iter::empty(), &Tag::WALL, Some(&mut body));
    assert_eq!(outcome, Bounce::NoContacts);
    assert_eq!(body.vel, Vec3::new(1.0, 2.0, 3.0));
    assert!(body.commands().is_empty());
}

#[test]
fn non_ground_tags_do_not_change_grounding() {
    let mut kart = grounded_kart();
    kart.notify_ground_contact_end(&Tag::WALL);
    assert!(kart.is_grounded());

    kart.notify_ground_contact_end(&Tag::GROUND);
    kart.notify_ground_contact_begin(&Tag::WALL);
    assert!(!kart.is_grounded());
    assert_eq!(kart.landings(), 0);
}

#[test]
fn airborne_timer_accumulates_and_resets_on_landing() {
    let mut kart = grounded_kart();
    kart.notify_ground_contact_end(&Tag::GROUND);

    let ticks = 25;
    for _ in 0..ticks {
        kart.step(KartInput::default());
    }
    #[allow(clippy::cast_precision_loss)]
    let expected = ticks as f32 * DT;
    assert!((kart.airborne_time() - expected).abs() < 1e-4);

    kart.notify_ground_contact_begin(&Tag::GROUND);
    kart.step(KartInput::default());
    assert_eq!(kart.airborne_time(), 0.0);
}

#[test]
fn grounded_throttle_and_jump_end_to_end() {
    let mut kart = grounded_kart();
    kart.step(KartInput::new(0.0, 0.0, 1.0, 0.0, true, false, false));

    let commands = kart.body().commands();
    assert!(commands.contains(&BodyCommand::Force {
        force: Vec3::new(0.0, 0.0, 12.5 * DT),
        mode: ForceMode::VelocityChange,
    }));
    assert!(commands.contains(&BodyCommand::Force {
        force: Vec3::new(0.0, 200.0, 0.0),
        mode: ForceMode::Impulse,
    }));
    assert!(kart.is_grounded());
    assert!(kart.has_second_jump());
}
