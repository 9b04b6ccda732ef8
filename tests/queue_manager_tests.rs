use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wasatch_tools::config::QueueManagerConfig;
use wasatch_tools::queue::run_queue_manager;

//===============
// Test Helpers
//===============

struct Fixture {
    hosonsoft: TempDir,
    source: TempDir,
    destination: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            hosonsoft: TempDir::new().unwrap(),
            source: TempDir::new().unwrap(),
            destination: TempDir::new().unwrap(),
        };
        fs::create_dir(fixture.temp_root()).unwrap();
        fixture
    }

    fn temp_root(&self) -> std::path::PathBuf {
        self.hosonsoft.path().join("temp")
    }

    fn add_active_job(&self, name: &str) {
        let dir = self.temp_root().join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("page.xml"), "<page/>").unwrap();
    }

    fn add_empty_job(&self, name: &str) {
        fs::create_dir_all(self.temp_root().join(name)).unwrap();
    }

    fn add_source_file(&self, name: &str) {
        fs::write(self.source.path().join(name), "<job/>").unwrap();
    }

    fn config(&self, threshold: usize, limit: usize, clean_first: bool) -> QueueManagerConfig {
        QueueManagerConfig {
            source: self.source.path().display().to_string(),
            destination: self.destination.path().to_path_buf(),
            local_source: true,
            file_limit: limit,
            file_extension: "*.xml".to_string(),
            hosonsoft_path: self.hosonsoft.path().to_path_buf(),
            hosonsoft_threshold: threshold,
            clean_first,
            sftp: None,
        }
    }
}

fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

//===============
// End-to-end local runs
//===============

#[test]
fn admitted_run_moves_a_bounded_alphabetical_batch() {
    let fixture = Fixture::new();
    fixture.add_active_job("job-a");
    fixture.add_source_file("job1.xml");
    fixture.add_source_file("job2.xml");
    fixture.add_source_file("job3.xml");

    run_queue_manager(&fixture.config(2, 2, true)).expect("run failed");

    assert!(fixture.destination.path().join("job1.xml").exists());
    assert!(fixture.destination.path().join("job2.xml").exists());
    assert!(fixture.source.path().join("job3.xml").exists());
    assert_eq!(count_files(fixture.destination.path()), 2);
}

#[test]
fn denied_run_moves_nothing_and_still_succeeds() {
    let fixture = Fixture::new();
    fixture.add_active_job("job-a");
    fixture.add_active_job("job-b");
    fixture.add_active_job("job-c");
    fixture.add_source_file("job1.xml");

    run_queue_manager(&fixture.config(2, 5, true)).expect("run failed");

    assert!(fixture.source.path().join("job1.xml").exists());
    assert_eq!(count_files(fixture.destination.path()), 0);
}

#[test]
fn clean_first_removes_empty_job_folders() {
    let fixture = Fixture::new();
    fixture.add_active_job("job-a");
    fixture.add_empty_job("stale-1");
    fixture.add_empty_job("stale-2");
    fixture.add_source_file("job1.xml");

    run_queue_manager(&fixture.config(2, 5, true)).expect("run failed");

    assert!(!fixture.temp_root().join("stale-1").exists());
    assert!(!fixture.temp_root().join("stale-2").exists());
    assert!(fixture.temp_root().join("job-a").exists());
    assert!(fixture.destination.path().join("job1.xml").exists());
}

#[test]
fn empty_folders_do_not_count_against_the_threshold() {
    let fixture = Fixture::new();
    // Plenty of empty folders, zero active: must admit even without
    // cleanup.
    fixture.add_empty_job("stale-1");
    fixture.add_empty_job("stale-2");
    fixture.add_empty_job("stale-3");
    fixture.add_empty_job("stale-4");
    fixture.add_source_file("job1.xml");

    run_queue_manager(&fixture.config(2, 5, false)).expect("run failed");

    assert!(fixture.temp_root().join("stale-1").exists());
    assert!(fixture.destination.path().join("job1.xml").exists());
}

#[test]
fn missing_working_root_fails_the_run() {
    let fixture = Fixture::new();
    fs::remove_dir(fixture.temp_root()).unwrap();
    fixture.add_source_file("job1.xml");

    let result = run_queue_manager(&fixture.config(2, 5, true));

    assert!(result.is_err());
    assert!(fixture.source.path().join("job1.xml").exists());
}
