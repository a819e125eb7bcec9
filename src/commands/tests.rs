//! Tests for the command layer.

use super::*;
use crate::cli::{CheckArgs, PathsArgs, ShowArgs};
use crate::config::CONFIG_FILE_NAME;
use crate::exit_codes;
use crate::loader::load_document;
use crate::overlay::OverlayFamily;
use crate::test_support::{DirGuard, write_file};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID: &str = r#"
model: echam
choose_lresume:
  true:
    namelist_changes: {runctl: {lresume: true}}
  false:
    namelist_changes: {runctl: {lresume: false}}
"#;

const CONFLICTING: &str = r#"
namelist_changes: {a: 1}
choose_lresume:
  true:
    namelist_changes: {a: 2}
"#;

fn check_args(paths: &[&str]) -> CheckArgs {
    CheckArgs {
        paths: paths.iter().map(PathBuf::from).collect(),
        config: None,
        json: false,
        fail_fast: false,
    }
}

// =========================================================================
// run_check / expand_inputs
// =========================================================================

#[test]
fn test_run_check_reports_each_document() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", VALID);
    write_file(dir.path(), "fesom.yml", CONFLICTING);
    let inputs = vec![
        dir.path().join("echam"),
        dir.path().join("fesom"),
        dir.path().join("missing"),
    ];

    let outcomes = run_check(&inputs, &Config::default(), &mut Vec::new());

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].passed());
    assert_eq!(outcomes[0].file, dir.path().join("echam.yaml"));
    assert!(matches!(
        outcomes[1].error,
        Some(LintError::OverlayConflict(_))
    ));
    assert!(matches!(
        outcomes[2].error,
        Some(LintError::FileNotFound { .. })
    ));
    assert_eq!(outcomes[2].file, dir.path().join("missing"));
}

#[test]
fn test_run_check_fail_fast_stops_early() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "bad.yaml", "a: 1\na: 2\n");
    write_file(dir.path(), "good.yaml", VALID);
    let config = Config {
        fail_fast: true,
        ..Default::default()
    };

    let outcomes = run_check(
        &[dir.path().join("bad"), dir.path().join("good")],
        &config,
        &mut Vec::new(),
    );

    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0].error, Some(LintError::DuplicateKey(_))));
}

#[test]
fn test_expand_inputs_walks_directories() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "configs/echam.yaml", VALID);
    write_file(dir.path(), "configs/old/echam.yaml", CONFLICTING);
    let config = Config {
        exclude: vec!["old/**".to_string()],
        ..Default::default()
    };

    let inputs = expand_inputs(
        &[dir.path().join("configs"), dir.path().join("standalone")],
        &config,
    )
    .unwrap();

    assert_eq!(
        inputs,
        vec![
            dir.path().join("configs/echam.yaml"),
            dir.path().join("standalone"),
        ]
    );
}

#[test]
fn test_render_json_report() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", VALID);
    write_file(dir.path(), "fesom.yaml", CONFLICTING);

    let outcomes = run_check(
        &[dir.path().join("echam"), dir.path().join("fesom")],
        &Config::default(),
        &mut Vec::new(),
    );
    let report = render_json(&outcomes);

    assert!(report["checked_at"].is_string());
    let documents = report["documents"].as_array().unwrap();
    assert_eq!(documents[0]["status"], "ok");
    assert_eq!(documents[1]["status"], "failed");
    assert_eq!(documents[1]["kind"], "overlay_conflict");
    assert!(
        documents[1]["message"]
            .as_str()
            .unwrap()
            .contains("fesom.yaml")
    );
}

// =========================================================================
// Commands run from a working directory
// =========================================================================

#[test]
#[serial]
fn test_cmd_check_passes_with_relative_paths() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", VALID);
    let _guard = DirGuard::new(dir.path());

    cmd_check(check_args(&["echam"])).unwrap();
}

#[test]
#[serial]
fn test_cmd_check_failure_uses_first_exit_code() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", VALID);
    write_file(dir.path(), "fesom.yaml", CONFLICTING);
    let _guard = DirGuard::new(dir.path());

    let err = cmd_check(check_args(&["missing", "fesom", "echam"])).unwrap_err();

    match err {
        LintError::CheckFailed {
            failed,
            total,
            exit_code,
        } => {
            assert_eq!(failed, 2);
            assert_eq!(total, 3);
            assert_eq!(exit_code, exit_codes::NOT_FOUND);
        }
        other => panic!("expected CheckFailed, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_cmd_check_reads_local_config() {
    let dir = TempDir::new().unwrap();
    // With `coupled` as the component key, each component is checked on
    // its own and the repeated `namelist_changes` is fine.
    write_file(dir.path(), CONFIG_FILE_NAME, "component_key: coupled\n");
    write_file(
        dir.path(),
        "setup.yaml",
        "coupled: {}\necham:\n  namelist_changes: {}\nfesom:\n  namelist_changes: {}\n",
    );
    let _guard = DirGuard::new(dir.path());

    cmd_check(check_args(&["setup"])).unwrap();
}

#[test]
#[serial]
fn test_cmd_check_rejects_bad_local_config() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), CONFIG_FILE_NAME, "extensions: []\n");
    write_file(dir.path(), "echam.yaml", VALID);
    let _guard = DirGuard::new(dir.path());

    let err = cmd_check(check_args(&["echam"])).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
#[serial]
fn test_cmd_paths_and_show_succeed() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", VALID);
    write_file(dir.path(), "fesom.yaml", CONFLICTING);
    let _guard = DirGuard::new(dir.path());

    // `paths` lists directives even when they conflict.
    cmd_paths(PathsArgs {
        path: PathBuf::from("fesom"),
        config: None,
    })
    .unwrap();

    cmd_show(ShowArgs {
        path: PathBuf::from("echam"),
        config: None,
    })
    .unwrap();

    let err = cmd_show(ShowArgs {
        path: PathBuf::from("fesom"),
        config: None,
    })
    .unwrap_err();
    assert!(matches!(err, LintError::OverlayConflict(_)));
}

// =========================================================================
// paths / show helpers
// =========================================================================

#[test]
fn test_list_directives() {
    let root = crate::loader::parse(
        "add_list: [1]\nchoose_mode:\n  a:\n    foo_changes: {}\nfoo_changes: {}\n",
    )
    .unwrap();

    let rows = list_directives(&root).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].family, OverlayFamily::Changes);
    assert_eq!(rows[0].path.dotted(), "choose_mode.a.foo_changes");
    assert_eq!(rows[0].line, 4);
    let split = rows[0].choose.as_ref().unwrap();
    assert_eq!(split.case, "a");
    assert!(rows[1].choose.is_none());
    assert_eq!(rows[2].family, OverlayFamily::Add);
    assert_eq!(rows[2].path.dotted(), "add_list");
}

#[test]
fn test_render_document_includes_provenance() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "echam.yaml", "model: echam\nlevels: 47\n");

    let doc = load_document(&dir.path().join("echam"), &Config::default(), &mut Vec::new())
        .unwrap();
    let rendered = render_document(&doc).unwrap();

    let expected = format!(
        "model: echam\nlevels: 47\ndebug_info:\n  loaded_from_file: {}\n",
        doc.path.display()
    );
    assert_eq!(rendered, expected);
}
