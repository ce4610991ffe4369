//! End-to-end alarm scenarios.

use tripwire::alarm::{
    AlarmConfig, AlarmEvent, AlarmPolicy, Notice, Recorder, SharedSystem, System,
};

fn setup(policy: AlarmPolicy) -> (System, Recorder) {
    let recorder = Recorder::new();
    let system = System::new(AlarmConfig::new("1234").with_policy(policy), recorder.clone());
    (system, recorder)
}

#[test]
fn breach_then_reset_round_trip() {
    let (mut system, recorder) = setup(AlarmPolicy::classic());

    system.breach();
    assert!(system.state().is_disarmed());
    assert!(recorder.is_empty());

    system.arm();
    assert_eq!(recorder.drain(), vec![Notice::SystemArmed]);

    system.breach();
    assert_eq!(recorder.drain(), vec![Notice::AlarmSounded]);

    system.reset("1234");
    assert_eq!(
        recorder.messages(),
        vec!["Code accepted", "Alarm stopped", "System disarmed"]
    );
    assert!(system.state().is_disarmed());
}

#[test]
fn classic_script() {
    let (mut system, recorder) = setup(AlarmPolicy::classic());

    system.breach();
    system.panic();
    system.arm();
    system.breach();
    system.reset("1234");
    system.arm();
    system.disarm("0000");
    system.disarm("1234");

    assert!(system.state().is_disarmed());
    assert_eq!(
        recorder.messages(),
        vec![
            "System armed",
            "Alarm sounded",
            "Code accepted",
            "Alarm stopped",
            "System disarmed",
            "System armed",
            "Invalid code",
            "Code accepted",
            "System disarmed",
        ]
    );
}

#[test]
fn four_wrong_codes_escalate() {
    let (mut system, recorder) = setup(AlarmPolicy::default());
    system.arm();
    recorder.drain();

    for code in ["0000", "1111", "2222"] {
        system.disarm(code);
        assert!(system.state().is_armed());
    }
    system.disarm("3333");

    assert!(system.state().is_alarm());
    assert_eq!(
        recorder.messages(),
        vec![
            "Invalid code",
            "Invalid code",
            "Invalid code",
            "Invalid code",
            "Administrator informed",
            "Alarm sounded",
        ]
    );
}

#[test]
fn correct_code_before_limit_disarms() {
    let (mut system, recorder) = setup(AlarmPolicy::default());
    system.arm();
    system.disarm("0000");
    system.disarm("1111");
    system.disarm("2222");
    system.disarm("1234");

    assert!(system.state().is_disarmed());
    assert!(!recorder.notices().contains(&Notice::AdministratorInformed));
}

#[test]
fn breach_in_alarm_is_a_no_op() {
    let (mut system, recorder) = setup(AlarmPolicy::default());
    system.arm();
    system.breach();
    recorder.drain();

    system.breach();

    assert!(system.state().is_alarm());
    assert!(recorder.is_empty());
}

#[test]
fn panic_from_disarmed_depends_on_policy() {
    let (mut changed, recorder) = setup(AlarmPolicy::default());
    changed.panic();
    assert!(changed.state().is_alarm());
    assert_eq!(recorder.notices(), vec![Notice::AlarmSounded]);

    let (mut classic, recorder) = setup(AlarmPolicy::classic());
    classic.panic();
    assert!(classic.state().is_disarmed());
    assert!(recorder.is_empty());
}

#[test]
fn wrong_reset_code_keeps_alarm_sounding() {
    let (mut system, recorder) = setup(AlarmPolicy::default());
    system.panic();
    recorder.drain();

    system.reset("4321");

    assert!(system.state().is_alarm());
    assert_eq!(recorder.notices(), vec![Notice::InvalidCode]);
}

#[test]
fn script_from_json_drives_shared_system() {
    let config = AlarmConfig::from_json(r#"{ "code": "2468" }"#).unwrap();
    let events: Vec<AlarmEvent> = serde_json::from_str(
        r#"[
            { "event": "arm" },
            { "event": "breach" },
            { "event": "reset", "code": "2468" }
        ]"#,
    )
    .unwrap();

    let recorder = Recorder::new();
    let shared = SharedSystem::new(config, recorder.clone());
    let outcomes: Vec<bool> = events
        .into_iter()
        .map(|event| shared.handle(event).unwrap().is_transition())
        .collect();

    assert_eq!(outcomes, vec![true, true, true]);
    assert!(shared.state().unwrap().is_disarmed());
    assert_eq!(recorder.notices().last(), Some(&Notice::SystemDisarmed));
}
