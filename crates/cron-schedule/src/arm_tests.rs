use super::*;
use cron_core::entry::{WaitFlag, WaiterEdge};
use cron_core::id::EntryId;
use cron_core::CronFile;

fn period_entry(period: u32, not_until: i64) -> CronEntry {
    CronEntry {
        id: EntryId::new("p"),
        command: "true".to_string(),
        freq: Freq::Period { period, delay: period },
        minutes: [false; 60],
        hours: [false; 24],
        mdays: [false; 32],
        months: [false; 12],
        dows: [0; 7],
        mday_is_wildcard: true,
        dow_is_wildcard: true,
        state: EntryState::Idle,
        last_ran: 0,
        not_until,
        waiters: Vec::new(),
        notifiers: Vec::new(),
    }
}

fn file_of(entry: CronEntry) -> CronFile {
    let mut file = CronFile::new(std::path::PathBuf::from("/tmp/t"), "alice");
    file.push(entry);
    file
}

fn ctx() -> MinuteContext {
    MinuteContext { minute: 0, hour: 0, mday: 1, month0: 0, wday: 0, occurrence_bit: 0 }
}

#[test]
fn period_entry_arms_once_deadline_passes() {
    let file = file_of(period_entry(3600, 1_000));
    assert_eq!(arm_tick(&file, 0, &ctx(), 999), ArmDecision::Idle);
    assert_eq!(arm_tick(&file, 0, &ctx(), 1_000), ArmDecision::Arm);
}

#[test]
fn running_entry_is_never_rearmed() {
    let mut entry = period_entry(3600, 0);
    entry.state = EntryState::Running(42);
    let file = file_of(entry);
    assert_eq!(arm_tick(&file, 0, &ctx(), 1_000_000), ArmDecision::Idle);
}

#[test]
fn reboot_entries_never_arm_from_the_timer() {
    let mut entry = period_entry(0, 0);
    entry.freq = Freq::Reboot;
    let file = file_of(entry);
    assert_eq!(arm_tick(&file, 0, &ctx(), 1_000_000), ArmDecision::Idle);
}

#[test]
fn due_entry_with_pending_dependency_and_no_max_wait_always_waits() {
    let mut entry = period_entry(10, 0);
    entry.waiters.push(WaiterEdge { notifier_index: 0, flag: WaitFlag::Pending, max_wait: 0 });
    let file = file_of(entry);
    assert_eq!(arm_tick(&file, 0, &ctx(), 100), ArmDecision::Wait);
}

#[test]
fn due_entry_with_failed_dependency_is_skipped_not_waited() {
    let mut entry = period_entry(10, 0);
    entry.waiters.push(WaiterEdge { notifier_index: 0, flag: WaitFlag::Failed(1), max_wait: 0 });
    let file = file_of(entry);
    assert_eq!(arm_tick(&file, 0, &ctx(), 100), ArmDecision::Idle);
}

#[test]
fn noauto_entry_arms_once_dependencies_clear_outside_the_timer() {
    let mut entry = period_entry(0, 0);
    entry.freq = Freq::NoAuto;
    entry.waiters.push(WaiterEdge { notifier_index: 0, flag: WaitFlag::Cleared, max_wait: 0 });
    let file = file_of(entry);
    assert_eq!(arm_tick(&file, 0, &ctx(), 100), ArmDecision::Arm);
}

#[test]
fn pending_dependency_with_a_max_wait_arms_once_the_notifier_cant_make_it() {
    let mut waiter = period_entry(10, 0);
    waiter.waiters.push(WaiterEdge { notifier_index: 1, flag: WaitFlag::Pending, max_wait: 60 });
    let notifier = period_entry(3600, 10_000);

    let mut file = CronFile::new(std::path::PathBuf::from("/tmp/t"), "alice");
    file.push(waiter);
    file.push(notifier);

    // Notifier's not_until (10_000) is well past now (100) + max_wait (60):
    // the window-sweep gives up and arms the waiter anyway.
    assert_eq!(arm_tick(&file, 0, &ctx(), 100), ArmDecision::Arm);
}

#[test]
fn pending_dependency_with_a_max_wait_still_waits_if_the_notifier_is_due_soon() {
    let mut waiter = period_entry(10, 0);
    waiter.waiters.push(WaiterEdge { notifier_index: 1, flag: WaitFlag::Pending, max_wait: 600 });
    let notifier = period_entry(3600, 500);

    let mut file = CronFile::new(std::path::PathBuf::from("/tmp/t"), "alice");
    file.push(waiter);
    file.push(notifier);

    assert_eq!(arm_tick(&file, 0, &ctx(), 100), ArmDecision::Wait);
}
