use super::*;

fn session() -> TransitionSession {
    TransitionSession::new(SessionId(1), "/about".to_string(), Millis(1_000), vec![])
}

#[test]
fn linear_lifecycle() {
    let tl = Timeline::canonical();
    let mut s = session();
    assert_eq!(s.phase, SessionPhase::Created);
    assert!(s.is_live());

    s.start(&tl);
    assert_eq!(s.phase, SessionPhase::Running(Phase::Cover));
    assert!(s.advance_past(0, &tl));
    assert_eq!(s.phase, SessionPhase::Running(Phase::Hold));
    assert!(s.advance_past(1, &tl));
    assert_eq!(s.phase, SessionPhase::Running(Phase::Reveal));
    assert!(s.advance_past(2, &tl));
    assert_eq!(s.phase, SessionPhase::Completed);
    assert!(!s.active);
    assert!(!s.advance_past(2, &tl));
}

#[test]
fn boundaries_never_move_backwards() {
    let tl = Timeline::canonical();
    let mut s = session();
    s.start(&tl);
    s.advance_past(0, &tl);
    s.advance_past(1, &tl);
    assert!(!s.advance_past(0, &tl));
    assert_eq!(s.phase, SessionPhase::Running(Phase::Reveal));
}

#[test]
fn elapsed_is_relative_to_start() {
    let s = session();
    assert_eq!(s.elapsed(Millis(1_250)), Millis(250));
    assert_eq!(s.elapsed(Millis(10)), Millis::ZERO);
}

#[test]
fn phase_serializes_with_tag() {
    let v = serde_json::to_value(SessionPhase::Running(Phase::Hold)).unwrap();
    assert_eq!(v, serde_json::json!({ "state": "running", "phase": "hold" }));
}
