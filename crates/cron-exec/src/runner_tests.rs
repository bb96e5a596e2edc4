use super::*;
use tempfile::tempdir;

#[test]
fn reap_children_on_empty_list_is_a_noop() {
    let jobs: Vec<SpawnedJob> = Vec::new();
    let result = reap_children(&jobs, Path::new("/bin/true"));
    assert!(result.is_empty());
}

#[test]
fn spawn_job_rejects_when_tmp_dir_missing() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = spawn_job("id", "nobody", "true", &missing).unwrap_err();
    assert!(matches!(err, RunError::CaptureFile { .. }));
}
