use std::fs;
use std::path::Path;

use tempfile::TempDir;
use whalelint_core::config::{LintConfig, OptionalCheck};
use whalelint_core::diagnostics::{Code, Severity};
use whalelint_core::dockerfile::{DocumentContext, LocalFs};
use whalelint_core::report::model::{Report, ToolInfo};
use whalelint_core::rules::{LintContext, Registry};

fn tool() -> ToolInfo {
    ToolInfo {
        name: "whalelint".into(),
        version: "0.1.0-test".into(),
        commit: None,
    }
}

/// Writes a Dockerfile (plus any context files) into a fresh directory.
fn workspace(dockerfile: &str, files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("Dockerfile"), dockerfile).expect("write Dockerfile");
    for file in files {
        let path = dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create context dir");
        }
        fs::write(path, "x").expect("write context file");
    }
    dir
}

fn lint_dir(dir: &Path, config: &LintConfig) -> Report {
    whalelint_core::lint_file(&dir.join("Dockerfile"), config, false, tool())
        .expect("lint should succeed")
}

fn lint(dockerfile: &str) -> Report {
    let dir = workspace(dockerfile, &[]);
    lint_dir(dir.path(), &LintConfig::default())
}

/// (code, line) pairs of a report, in recording order.
fn findings(report: &Report) -> Vec<(Code, usize)> {
    report
        .diagnostics
        .iter()
        .map(|d| (d.code, d.line))
        .collect()
}

#[test]
fn clean_document_has_no_findings() {
    let dir = workspace(
        "FROM python:3.12-slim\n\
         LABEL org.example.team.owner=\"platform\"\n\
         COPY requirements.txt app/ /srv/\n\
         RUN apt-get update && apt-get install -y --no-install-recommends git && rm -rf /var/lib/apt/lists/*\n\
         EXPOSE 8000/tcp\n\
         WORKDIR /srv\n\
         USER app\n\
         CMD [\"python\", \"-m\", \"app\"]\n",
        &["requirements.txt", "app/main.py"],
    );

    let report = lint_dir(dir.path(), &LintConfig::default());

    assert!(
        report.diagnostics.is_empty(),
        "expected no findings, got: {:?}",
        findings(&report)
    );
    assert_eq!(report.summary.exit_code, 0);
    assert_eq!(report.document.instruction_count, 8);
}

#[test]
fn every_instruction_is_checked_independently() {
    let report = lint(
        "FROM ubuntu:latest\n\
         MAINTAINER jane@example.com\n\
         ADD https://example.com/tool.tgz /opt/\n\
         EXPOSE 70000 53/sctp\n\
         LABEL maintainer=me com.docker.feature=x\n",
    );

    assert_eq!(
        findings(&report),
        vec![
            (Code::IMAGE_LATEST_TAG, 1),
            (Code::DEPRECATED_INSTRUCTION, 2),
            (Code::ADD_INSTEAD_OF_COPY, 3),
            (Code::ADD_REMOTE_URL, 3),
            (Code::EXPOSE_PORT_RANGE, 4),
            (Code::EXPOSE_PROTOCOL, 4),
            (Code::LABEL_NOT_NAMESPACED, 5),
            (Code::LABEL_RESERVED_NAMESPACE, 5),
        ]
    );
    assert!(!report.summary.blocking);
    assert_eq!(report.summary.exit_code, 0);
}

#[test]
fn malformed_instructions_do_not_stop_the_run() {
    let report = lint(
        "FROM ubuntu 22.04\n\
         EXPOSE http\n\
         LABEL dangling\n\
         MAINTAINER someone\n",
    );

    assert_eq!(
        findings(&report),
        vec![
            (Code::FROM_ARITY, 1),
            (Code::IMAGE_NO_TAG, 1),
            (Code::EXPOSE_INVALID_PORT, 2),
            (Code::LABEL_MALFORMED, 3),
            (Code::DEPRECATED_INSTRUCTION, 4),
        ]
    );
    assert!(report.summary.blocking);
    assert_eq!(report.summary.exit_code, 1);
}

#[test]
fn missing_copy_sources_resolve_against_document_directory() {
    let dir = workspace(
        "FROM alpine:3.19\nCOPY present.txt absent.txt nested/gone.txt /dst/\n",
        &["present.txt"],
    );

    let report = lint_dir(dir.path(), &LintConfig::default());

    let missing: Vec<&str> = report
        .diagnostics
        .iter()
        .filter(|d| d.code == Code::COPY_MISSING_SOURCE)
        .map(|d| d.keys["file"].as_str())
        .collect();
    assert_eq!(missing, vec!["absent.txt", "nested/gone.txt"]);
    assert!(report.diagnostics.iter().all(|d| d.line == 2));
}

#[test]
fn stage_copy_and_remote_documents_skip_path_checks() {
    let dir = workspace(
        "FROM golang:1.22 AS build\nFROM alpine:3.19\nCOPY --from=build /out/app /usr/bin/app\nCOPY missing.txt /srv/\n",
        &[],
    );

    let local = lint_dir(dir.path(), &LintConfig::default());
    assert_eq!(findings(&local), vec![(Code::COPY_MISSING_SOURCE, 4)]);

    let remote = whalelint_core::lint_file(
        &dir.path().join("Dockerfile"),
        &LintConfig::default(),
        true,
        tool(),
    )
    .unwrap();
    assert!(remote.diagnostics.is_empty());
    assert!(remote.document.remote);
}

#[test]
fn compound_run_checks_every_command() {
    let report = lint("RUN cd /tmp && apt-get install curl && cd / && apt-get upgrade\n");

    let codes: Vec<Code> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            Code::POINTLESS_COMMAND,
            Code::APT_INTERACTIVE_INSTALL,
            Code::APT_INSTALL_RECOMMENDS,
            Code::POINTLESS_COMMAND,
            Code::APT_UPGRADE,
        ]
    );
}

#[test]
fn continuation_lines_report_the_start_line() {
    let report =
        lint("FROM debian:12\n\nRUN apt-get update \\\n && apt-get install \\\n    curl\n");
    assert!(report.diagnostics.iter().all(|d| d.line == 3));
    assert_eq!(report.diagnostics.len(), 2);
}

#[test]
fn unknown_instructions_are_ignored() {
    let report =
        lint("FROM debian:12\nHEALTHCHECK CMD true\nSTOPSIGNAL SIGTERM\nONBUILD RUN cd /\n");
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.document.instruction_count, 4);
}

#[test]
fn optional_checks_follow_config() {
    let dir = workspace("FROM debian:12\nUSER root\nWORKDIR app\nLABEL org.Example.x=1\n", &[]);

    let default = lint_dir(dir.path(), &LintConfig::default());
    assert!(default.diagnostics.is_empty());

    let config = LintConfig::default()
        .enable(OptionalCheck::UserRoot)
        .enable(OptionalCheck::WorkdirRelative)
        .enable(OptionalCheck::LabelCharset);
    let strict = lint_dir(dir.path(), &config);
    assert_eq!(
        findings(&strict),
        vec![
            (Code::USER_ROOT, 2),
            (Code::WORKDIR_RELATIVE, 3),
            (Code::LABEL_CHARSET, 4),
        ]
    );
}

#[test]
fn threshold_controls_exit_code() {
    let dir = workspace("FROM ubuntu:latest\n", &[]);

    let default = lint_dir(dir.path(), &LintConfig::default());
    assert_eq!(default.summary.exit_code, 0);

    let strict = lint_dir(
        dir.path(),
        &LintConfig::default().with_threshold(Severity::Warning),
    );
    assert_eq!(strict.summary.exit_code, 1);
    assert_eq!(strict.summary.threshold, Severity::Warning);
}

#[test]
fn custom_pointless_commands_replace_defaults() {
    let dir = workspace("RUN sleep 5 && cd /\n", &[]);
    let config = LintConfig {
        pointless_commands: vec!["sleep".into()],
        ..LintConfig::default()
    };

    let report = lint_dir(dir.path(), &config);
    assert_eq!(findings(&report), vec![(Code::POINTLESS_COMMAND, 1)]);
    assert_eq!(report.diagnostics[0].keys["command"], "sleep");
}

#[test]
fn literal_quote_in_label_value_does_not_hide_later_labels() {
    let report = lint("LABEL org.example.size='5\" screen' maintainer=me\n");

    assert_eq!(findings(&report), vec![(Code::LABEL_NOT_NAMESPACED, 1)]);
    assert_eq!(report.diagnostics[0].keys["label"], "maintainer");
}

#[test]
fn apt_option_values_are_skipped() {
    let report = lint("RUN apt-get -o Acquire::Retries=3 install curl\n");

    assert_eq!(
        findings(&report),
        vec![
            (Code::APT_INTERACTIVE_INSTALL, 1),
            (Code::APT_INSTALL_RECOMMENDS, 1),
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let source = "FROM ubuntu\nADD http://x/y /z\nEXPOSE 1-70000/sctp\nLABEL a=b\nRUN ps && vim\n";
    let document = DocumentContext::new("/nowhere/Dockerfile");
    let config = LintConfig::default();

    let first = whalelint_core::lint_source(source, &document, &config, tool()).unwrap();
    let second = whalelint_core::lint_source(source, &document, &config, tool()).unwrap();

    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn empty_registry_records_nothing() {
    let document = DocumentContext::new("/nowhere/Dockerfile");
    let config = LintConfig::default();
    let registry = Registry::new();
    let ctx = LintContext::new(&document, &config, &registry, &LocalFs);

    let report = whalelint_core::lint_with("FROM ubuntu\nMAINTAINER x\n", &ctx, tool());
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.summary.exit_code, 0);
}

#[test]
fn missing_document_is_an_error() {
    let result = whalelint_core::lint_file(
        Path::new("/definitely/not/here/Dockerfile"),
        &LintConfig::default(),
        false,
        tool(),
    );
    assert!(result.is_err());
}
