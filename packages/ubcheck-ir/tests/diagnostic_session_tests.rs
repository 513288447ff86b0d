//! Diagnostic session: reporting output and self-test verification

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::TempDir;
use termcolor::Buffer;
use ubcheck_ir::features::diagnostics::{Reporter, SourceAnnotations, LEAD_IN};
use ubcheck_ir::features::instrumentation::CheckCollector;
use ubcheck_ir::shared::models::{SourceFrame, SourceLocationChain};
use ubcheck_ir::{report_violation, DiagnosticConfig, DiagnosticSession, LibcUbPass, UbCheckError};

fn chain_of(depth: u32) -> SourceLocationChain {
    let mut chain = SourceLocationChain::new(SourceFrame::new("/src", "f0.c", 1, 1));
    for i in 1..depth {
        chain.push_origin(SourceFrame::new("/src", format!("f{}.c", i), i * 10, 0));
    }
    chain
}

fn render(chain: &SourceLocationChain, message: &str, interactive: bool) -> String {
    let out = if interactive {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    let mut reporter = Reporter::new(out, interactive);
    reporter.emit_location(chain);
    reporter.emit_message(message);
    String::from_utf8(reporter.into_inner().into_inner()).unwrap()
}

#[test]
fn test_chain_frames_separated_then_lead_in() {
    for depth in 1..=4 {
        let out = render(&chain_of(depth), "div", false);
        let (location, message) = out.split_once(LEAD_IN).unwrap();
        assert_eq!(location.matches('\n').count() as u32, depth - 1);
        assert_eq!(message, "div\n");
    }
}

#[test]
fn test_interactive_output_differs_only_in_color() {
    let chain = chain_of(3);
    let plain = render(&chain, "abs", false);
    let colored = render(&chain, "abs", true);
    assert!(colored.contains('\x1b'));
    assert!(!plain.contains('\x1b'));
    assert_eq!(strip_ansi(&colored), plain);
}

#[test]
fn test_verify_prefix_match() {
    let mut session = DiagnosticSession::with_writer(
        &DiagnosticConfig::verifying("null pointer"),
        Buffer::no_color(),
        false,
    );
    session.report(&chain_of(1), "null pointer dereference");
    assert!(session.failures().is_empty());
    assert!(session.finish().is_ok());
}

#[test]
fn test_verify_prefix_mismatch_fails_finish() {
    let mut session = DiagnosticSession::with_writer(
        &DiagnosticConfig::verifying("null pointer"),
        Buffer::no_color(),
        false,
    );
    session.report(
        &SourceLocationChain::new(SourceFrame::new("/src", "t.c", 12, 5)),
        "division by zero",
    );
    assert_eq!(session.failures().len(), 1);

    match session.finish() {
        Err(UbCheckError::VerificationFailed { failures }) => {
            assert_eq!(failures[0].line, 12);
            assert_eq!(failures[0].column, 5);
            assert_eq!(failures[0].expected, "null pointer");
            assert_eq!(failures[0].actual, "division by zero");
        }
        other => panic!("expected verification failure, got {:?}", other),
    }
}

#[test]
fn test_verify_uses_innermost_frame() {
    let mut session =
        DiagnosticSession::with_writer(&DiagnosticConfig::verifying("abs"), Buffer::no_color(), false);
    session.report(&chain_of(3), "div");
    assert_eq!(session.failures()[0].line, 1);
    assert_eq!(session.failures()[0].column, 1);
}

#[test]
fn test_verify_against_source_annotations() {
    let dir = TempDir::new().unwrap();
    let mut f = std::fs::File::create(dir.path().join("t.c")).unwrap();
    writeln!(f, "int f(int x, int y) {{").unwrap();
    writeln!(f, "  int a = abs(x); // expected-bug: abs").unwrap();
    writeln!(f, "  return div(a, y).quot; // expected-bug: div").unwrap();
    writeln!(f, "}}").unwrap();

    let unit = UnitBuilder::new("t.c")
        .call_at("abs", vec![int_arg("x", 32)], "t.c", 2, 11)
        .call_at("div", vec![int_arg("a", 32), int_arg("y", 32)], "t.c", 3, 10)
        .build();
    let mut cursor = CheckCollector::new();
    LibcUbPass::default().run(&unit, &mut cursor);
    assert_eq!(cursor.len(), 3);

    let mut session = DiagnosticSession::with_writer(
        &DiagnosticConfig::verifying("expected-bug:"),
        Buffer::no_color(),
        false,
    )
    .with_expectations(Box::new(SourceAnnotations::with_root(dir.path())));
    for check in cursor.checks() {
        report_violation(&mut session, &unit, check);
    }
    assert!(session.finish().is_ok());
}

#[test]
fn test_annotation_mismatch_reports_line() {
    let dir = TempDir::new().unwrap();
    let mut f = std::fs::File::create(dir.path().join("t.c")).unwrap();
    writeln!(f, "  return labs(x); // expected-bug: llabs").unwrap();

    let unit = UnitBuilder::new("t.c")
        .call_at("labs", vec![int_arg("x", 64)], "t.c", 1, 10)
        .build();
    let mut cursor = CheckCollector::new();
    LibcUbPass::default().run(&unit, &mut cursor);

    let mut session = DiagnosticSession::with_writer(
        &DiagnosticConfig::verifying("expected-bug:"),
        Buffer::no_color(),
        false,
    )
    .with_expectations(Box::new(SourceAnnotations::with_root(dir.path())));
    report_violation(&mut session, &unit, &cursor.checks()[0]);

    let err = session.finish().unwrap_err();
    assert!(err.to_string().contains("1:10"), "{}", err);
}

#[test]
fn test_reporting_full_pipeline() {
    let unit = UnitBuilder::new("main.c")
        .call_at("abs", vec![int_arg("x", 32)], "main.c", 4, 9)
        .build();
    let mut cursor = CheckCollector::new();
    LibcUbPass::default().run(&unit, &mut cursor);

    let mut session =
        DiagnosticSession::with_writer(&DiagnosticConfig::reporting(), Buffer::no_color(), false);
    report_violation(&mut session, &unit, &cursor.checks()[0]);

    let DiagnosticSession::Reporting(reporter) = session else {
        panic!("expected reporting session");
    };
    let out = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
    assert_eq!(out, "/src/main.c:4:9: bug: abs\n");
}
