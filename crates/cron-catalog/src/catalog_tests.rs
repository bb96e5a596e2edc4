use super::*;

#[test]
fn replace_or_insert_dedupes_by_path() {
    let mut catalog = Catalog::new();
    let a = CronFile::new("/spool/alice".into(), "alice");
    let idx1 = catalog.replace_or_insert(a.clone());
    let idx2 = catalog.replace_or_insert(a);
    assert_eq!(idx1, idx2);
    assert_eq!(catalog.files.len(), 1);
}

#[test]
fn mark_removed_tombstones_missing_files() {
    let mut catalog = Catalog::new();
    catalog.replace_or_insert(CronFile::new("/spool/alice".into(), "alice"));
    catalog.mark_removed(&[]);
    assert!(catalog.files[0].deleted);
}

#[test]
fn reap_dropped_only_removes_safe_files() {
    let mut catalog = Catalog::new();
    let mut file = CronFile::new("/spool/alice".into(), "alice");
    file.deleted = true;
    catalog.replace_or_insert(file);
    catalog.reap_dropped();
    assert!(catalog.files.is_empty());
}
