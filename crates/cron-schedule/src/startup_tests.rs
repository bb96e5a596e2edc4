use super::*;
use cron_core::entry::CronEntry;
use cron_core::id::EntryId;

fn reboot_entry(id: &str) -> CronEntry {
    CronEntry {
        id: EntryId::new(id),
        command: "true".to_string(),
        freq: Freq::Reboot,
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
fn arms_reboot_entries_once() {
    let mut file = CronFile::new("/spool/alice".into(), "alice");
    file.push(reboot_entry("boot-task"));

    let armed = arm_startup_jobs(&mut file);
    assert_eq!(armed.len(), 1);
    assert_eq!(file.entries[0].as_ref().unwrap().state, EntryState::Armed);

    // second call is a no-op even though the entry is still Armed
    let rearmed = arm_startup_jobs(&mut file);
    assert!(rearmed.is_empty());
}

#[test]
fn non_reboot_entries_are_left_alone() {
    let mut file = CronFile::new("/spool/alice".into(), "alice");
    let mut entry = reboot_entry("fields");
    entry.freq = Freq::ByFields;
    file.push(entry);

    let armed = arm_startup_jobs(&mut file);
    assert!(armed.is_empty());
}
