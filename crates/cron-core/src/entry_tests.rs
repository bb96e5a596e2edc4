use super::*;

fn blank_entry(id: &str) -> CronEntry {
    CronEntry {
        id: EntryId::new(id),
        command: "true".to_string(),
        freq: Freq::ByFields,
        minutes: [false; 60],
        hours: [false; 24],
        mdays: [false; 32],
        months: [false; 12],
        dows: [0; 7],
        mday_is_wildcard: true,
        dow_is_wildcard: true,
        state: EntryState::Idle,
        last_ran: 0,
        not_until: 0,
        waiters: Vec::new(),
        notifiers: Vec::new(),
    }
}

#[test]
fn no_dependency_failure_with_no_waiters() {
    assert!(!blank_entry("a").any_dependency_failed());
}

#[test]
fn pending_or_cleared_waiters_are_not_a_failure() {
    let mut entry = blank_entry("b");
    entry.waiters.push(WaiterEdge { notifier_index: 0, flag: WaitFlag::Pending, max_wait: 0 });
    entry.waiters.push(WaiterEdge { notifier_index: 1, flag: WaitFlag::Cleared, max_wait: 0 });
    assert!(!entry.any_dependency_failed());
}

#[test]
fn detects_failed_dependency() {
    let mut entry = blank_entry("d");
    entry.waiters.push(WaiterEdge { notifier_index: 0, flag: WaitFlag::Failed(1), max_wait: 0 });
    assert!(entry.any_dependency_failed());
}
