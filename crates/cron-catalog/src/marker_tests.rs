use super::*;
use tempfile::tempdir;

#[test]
fn absent_marker_is_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cron.update");
    assert_eq!(check_marker(&path, 0).unwrap(), MarkerState::Unchanged);
}

#[test]
fn stale_mtime_is_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cron.update");
    std::fs::write(&path, "*").unwrap();
    let far_future = i64::MAX;
    assert_eq!(check_marker(&path, far_future).unwrap(), MarkerState::Unchanged);
}

#[test]
fn parses_force_arm_prefix() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cron.update");
    std::fs::write(&path, "alice\n!bob\n").unwrap();
    let state = check_marker(&path, 0).unwrap();
    match state {
        MarkerState::Changed(targets) => {
            assert_eq!(targets[0], MarkerTarget { name: "alice".to_string(), force_arm: false });
            assert_eq!(targets[1], MarkerTarget { name: "bob".to_string(), force_arm: true });
        }
        MarkerState::Unchanged => panic!("expected Changed"),
    }
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cron.update");
    std::fs::write(&path, "\nalice\n\n").unwrap();
    let state = check_marker(&path, 0).unwrap();
    match state {
        MarkerState::Changed(targets) => assert_eq!(targets.len(), 1),
        MarkerState::Unchanged => panic!("expected Changed"),
    }
}
