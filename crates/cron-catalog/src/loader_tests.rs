use super::*;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_simple_user_crontab() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(dir.path(), "alice", "0 3 * * * /usr/bin/backup\n");
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].owner, "alice");
    assert_eq!(files[0].entries.len(), 1);
}

#[test]
fn resolves_after_dependency_within_same_file() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(
        dir.path(),
        "alice",
        "ID=prep 0 3 * * * /bin/prep\nID=sync AFTER=prep 0 4 * * * /bin/sync\n",
    );
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    let file = &files[0];
    let sync = file.entries.iter().flatten().find(|e| e.id == "sync").unwrap();
    assert_eq!(sync.waiters.len(), 1);
    assert_eq!(sync.waiters[0].max_wait, 0);
    assert_eq!(sync.state, EntryState::Waiting);
}

#[test]
fn after_max_wait_suffix_is_carried_onto_the_waiter_edge() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(
        dir.path(),
        "alice",
        "ID=prep 0 3 * * * /bin/prep\nID=sync AFTER=prep/10m 0 4 * * * /bin/sync\n",
    );
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    let sync = files[0].entries.iter().flatten().find(|e| e.id == "sync").unwrap();
    assert_eq!(sync.waiters[0].max_wait, 10 * 60);
}

#[test]
fn unknown_after_target_is_ignored_not_fatal() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(dir.path(), "alice", "ID=sync AFTER=ghost 0 4 * * * /bin/sync\n");
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    let sync = files[0].entries.iter().flatten().find(|e| e.id == "sync").unwrap();
    assert!(sync.waiters.is_empty());
    assert_eq!(sync.state, EntryState::Idle);
}

#[test]
fn malformed_line_is_skipped_not_fatal_to_the_rest_of_the_file() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(
        dir.path(),
        "alice",
        "this is not a crontab line\n0 3 * * * /usr/bin/backup\n",
    );
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    assert_eq!(files[0].entries.len(), 1);
}

#[test]
fn a_file_that_exceeds_its_entry_ceiling_is_skipped_not_fatal_to_the_spool() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    let mut contents = String::new();
    for _ in 0..(USER_MAX_ENTRIES + 1) {
        contents.push_str("0 3 * * * /bin/true\n");
    }
    write_file(dir.path(), "alice", &contents);
    write_file(dir.path(), "bob", "0 3 * * * /bin/true\n");

    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].owner, "bob");
}

#[test]
fn root_owned_file_gets_higher_entry_ceiling() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    let mut contents = String::new();
    for _ in 0..(USER_MAX_ENTRIES + 1) {
        contents.push_str("0 3 * * * /bin/true\n");
    }
    write_file(dir.path(), "root", &contents);
    let files = load_spool(dir.path(), SpoolKind::User, 0, stamps.path()).unwrap();
    assert_eq!(files[0].entries.len(), USER_MAX_ENTRIES + 1);
}

#[test]
fn system_spool_requires_user_column() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(dir.path(), "crontab", "0 3 * * * root /usr/bin/backup\n");
    let files = load_spool(dir.path(), SpoolKind::System, 0, stamps.path()).unwrap();
    assert_eq!(
        split_owner_command(&files[0].entries[0].as_ref().unwrap().command).unwrap().0,
        "root"
    );
}

#[test]
fn a_period_entry_with_no_stamp_file_gets_a_fresh_delay_and_persists_it() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(dir.path(), "alice", "ID=sync FREQ=1h/10m @noauto /bin/sync\n");

    let files = load_spool(dir.path(), SpoolKind::User, 1_000, stamps.path()).unwrap();
    let sync = files[0].entries.iter().flatten().find(|e| e.id == "sync").unwrap();
    assert_eq!(sync.not_until, 1_000 + 10 * 60);

    let stamp = read_timestamp(stamps.path(), "alice", "sync").unwrap();
    assert_eq!(stamp, Some(TimestampRecord::NotUntil(1_000 + 10 * 60)));
}

#[test]
fn a_period_entry_resumes_from_its_persisted_last_ran() {
    let dir = tempdir().unwrap();
    let stamps = tempdir().unwrap();
    write_file(dir.path(), "alice", "ID=sync FREQ=1h/10m @noauto /bin/sync\n");
    write_timestamp(stamps.path(), "alice", "sync", TimestampRecord::RanAt(500)).unwrap();

    let files = load_spool(dir.path(), SpoolKind::User, 10_000, stamps.path()).unwrap();
    let sync = files[0].entries.iter().flatten().find(|e| e.id == "sync").unwrap();
    assert_eq!(sync.last_ran, 500);
    assert_eq!(sync.not_until, 500 + 60 * 60);
}
