use kart::{ControllerSettings, KartInput, KartTuningProfile};
use runtime::{DriveScript, DriveSession};

fn session() -> DriveSession {
    let tuning = KartTuningProfile {
        jump_force: 50.0,
        ..Default::default()
    };
    DriveSession::new(tuning, ControllerSettings::default())
}

#[test]
fn demo_script_hops_and_lands() {
    let mut session = session();
    let script = DriveScript::demo();
    for tick in 0..script.len() {
        session.tick(script.input_at(tick));
    }
    let t = session.telemetry();
    assert_eq!(t.tick, script.len());
    assert!(t.grounded);
    assert!(t.second_jump);
    assert!(t.landings >= 1);
    assert!(t.position.z > 1.0, "kart should have driven forward: {:?}", t.position);
}

#[test]
fn retune_keeps_the_body_and_air_state() {
    let mut session = session();
    session.tick(KartInput::default());
    session.tick(KartInput::default().with_jump(true));
    for _ in 0..3 {
        session.tick(KartInput::default());
    }
    session.tick(KartInput::default().with_jump(true));
    let before = session.telemetry();
    let airborne_time = session.kart().airborne_time();
    assert!(!before.grounded);
    assert!(!before.second_jump);
    assert!(airborne_time > 0.0);

    let tuning = KartTuningProfile {
        forward_speed: 30.0,
        jump_force: 50.0,
        ..Default::default()
    };
    session.retune(tuning.clone());

    let after = session.telemetry();
    assert_eq!(after.position, before.position);
    assert!(!after.grounded);
    assert!(!after.second_jump, "retuning must not refill the air jump");
    assert_eq!(after.landings, before.landings);
    assert_eq!(session.kart().airborne_time(), airborne_time);
    assert_eq!(session.kart().tuning(), &tuning);

    session.tick(KartInput::default().with_jump(true));
    assert_eq!(session.kart().last_jump(), kart::JumpAction::None);
}
