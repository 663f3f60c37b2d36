use std::env;

use anyhow::Result;
use rand::distr::{Alphanumeric, SampleString};

use commons_util_rs::io::files;
use commons_util_rs::io::{Processor, TrackedFile};

fn scratch_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 16)
}

#[test]
fn audit_log_grows_line_by_line() -> Result<()> {
    // SAFETY: tests in this binary do not depend on RUST_LOG concurrently.
    unsafe { env::set_var("RUST_LOG", "info") };
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let audit = TrackedFile::new(dir.path().join("audit.log"));

    audit.append("job started", true)?;
    audit.append("job finished", true)?;

    assert_eq!(audit.read().as_deref(), Some("job started\njob finished\n"));
    Ok(())
}

#[test]
fn staging_workflow_create_write_rename() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut staged = TrackedFile::new(dir.path().join("incoming").join(scratch_name()));
    staged.put_attribute("source", "sftp");

    assert!(staged.create());
    staged.write("payload")?;

    let accepted = staged.rename("accepted.json")?;
    assert!(accepted.exists());
    assert!(!staged.exists());
    assert_eq!(accepted.extension(), "json");
    assert_eq!(accepted.read().as_deref(), Some("payload"));

    // Attributes describe the handle they were put on.
    assert_eq!(staged.opt_attribute("source", "unknown"), "sftp");
    assert_eq!(accepted.opt_attribute("source", "unknown"), "unknown");
    Ok(())
}

#[test]
fn delete_and_create_resets_content() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(scratch_name());

    files::write_to_file(&path, "stale")?;
    assert!(files::delete_and_create(&path));
    assert_eq!(files::read_from_file(&path).as_deref(), Some(""));
    Ok(())
}

#[test]
fn a_processor_bridges_two_tracked_files() -> Result<()> {
    struct LineCounter;

    impl Processor<String, usize> for LineCounter {
        fn process(&self, input: &String) -> usize {
            input.lines().count()
        }
    }

    let dir = tempfile::tempdir()?;
    let report = TrackedFile::new(dir.path().join("report.txt"));
    report.write("a\nb\nc")?;

    let content = report.read().unwrap();
    let lines = LineCounter.process(&content);
    assert_eq!(lines, 3);

    let summary = TrackedFile::new(dir.path().join("summary.txt"));
    summary.write(&lines.to_string())?;
    assert_eq!(summary.read().as_deref(), Some("3"));
    Ok(())
}
