use std::fs;
use std::path::PathBuf;

use bibabrv::{AbbrevError, RunConfig, run};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const JOURNAL_LIST: &str = "\
# comment lines have no separator and are skipped
IEEE Transactions on Robotics=IEEE Trans. Robot.
IEEE Robotics & Automation Letters=IEEE Robot. Autom. Lett.
International Conference on Robotics and Automation=ICRA
Broken=line=here
";

const BIB: &str = r#"@string{ieee = "IEEE"}

@article{smith2020,
  title = {Legged Locomotion},
  journal = {IEEE Transactions on Robotics},
  year = {2020}
}

@article{doe2021,
  title = {Grasping},
  Journal={IEEE Robotics \& Automation Letters.},
  year = {2021}
}

@inproceedings{lee2022,
  title = {Mapping},
  booktitle = {Proceedings of Something Obscure},
  year = {2022}
}

@inproceedings{kim2023,
  title = {Planning},
  booktitle = {International Conference on Robotics and Automation},
  year = {2023}
}

@inproceedings{park2024,
  title = {Control},
  booktitle = {Proceedings of Something Obscure},
}
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("journal_list.txt"), JOURNAL_LIST).unwrap();
        fs::write(dir.path().join("refs.bib"), BIB).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self) -> RunConfig {
        RunConfig::new(
            Some(self.path("refs.bib")),
            Some(self.path("journal_list.txt")),
            None,
        )
        .unwrap()
    }
}

#[test]
fn test_run_writes_abbreviated_copy() {
    let fixture = Fixture::new();
    let report = run(&fixture.config()).unwrap();

    let output = fixture.path("refs_abrv.bib");
    let text = fs::read_to_string(&output).unwrap();
    let expected = BIB
        .replace(
            "journal = {IEEE Transactions on Robotics}",
            "journal = {IEEE Trans. Robot.}",
        )
        .replace(
            "Journal={IEEE Robotics \\& Automation Letters.}",
            "Journal = {IEEE Robot. Autom. Lett.}",
        )
        .replace(
            "booktitle = {International Conference on Robotics and Automation}",
            "booktitle = {ICRA}",
        );
    assert_eq!(text, expected);

    assert_eq!(report.total_entries, 6);
    assert_eq!(report.journal_fields, 2);
    assert_eq!(report.booktitle_fields, 3);
    assert_eq!(report.target_fields, 5);
    assert_eq!(report.modified, 3);
    assert_eq!(report.unmatched, vec!["Proceedings of Something Obscure"]);

    // input is left untouched
    assert_eq!(fs::read_to_string(fixture.path("refs.bib")).unwrap(), BIB);
}

#[test]
fn test_run_overwrites_previous_output() {
    let fixture = Fixture::new();
    fs::write(fixture.path("refs_abrv.bib"), "stale content from an earlier run").unwrap();

    run(&fixture.config()).unwrap();

    let text = fs::read_to_string(fixture.path("refs_abrv.bib")).unwrap();
    assert!(text.starts_with("@string{ieee = \"IEEE\"}"));
    assert!(!text.contains("stale"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let fixture = Fixture::new();
    let report = run(&fixture.config().with_dry_run(true)).unwrap();

    assert_eq!(report.modified, 3);
    assert!(!fixture.path("refs_abrv.bib").exists());
}

#[test]
fn test_explicit_output_path() {
    let fixture = Fixture::new();
    let config = RunConfig::new(
        Some(fixture.path("refs.bib")),
        Some(fixture.path("journal_list.txt")),
        Some(fixture.path("short.bib")),
    )
    .unwrap();

    run(&config).unwrap();

    assert!(fixture.path("short.bib").exists());
    assert!(!fixture.path("refs_abrv.bib").exists());
}

#[test]
fn test_missing_journal_list_aborts_without_output() {
    let fixture = Fixture::new();
    let config = RunConfig::new(
        Some(fixture.path("refs.bib")),
        Some(fixture.path("no_such_list.txt")),
        None,
    )
    .unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AbbrevError::Read { ref path, .. } if path.ends_with("no_such_list.txt")));
    assert!(!fixture.path("refs_abrv.bib").exists());
}

#[test]
fn test_missing_input_aborts_without_output() {
    let fixture = Fixture::new();
    let config = RunConfig::new(
        Some(fixture.path("missing.bib")),
        Some(fixture.path("journal_list.txt")),
        None,
    )
    .unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AbbrevError::Read { ref path, .. } if *path == fixture.path("missing.bib")));
    assert!(!fixture.path("missing_abrv.bib").exists());
}

#[test]
fn test_unwritable_output() {
    let fixture = Fixture::new();
    let config = RunConfig::new(
        Some(fixture.path("refs.bib")),
        Some(fixture.path("journal_list.txt")),
        Some(fixture.path("no_such_dir/out.bib")),
    )
    .unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AbbrevError::Write { .. }));
}
