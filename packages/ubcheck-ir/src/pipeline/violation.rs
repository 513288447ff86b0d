//! Reporting a check that fired

use crate::features::diagnostics::DiagnosticSession;
use crate::features::instrumentation::InsertedCheck;
use crate::shared::models::{SourceFrame, SourceLocationChain, TranslationUnit};
use termcolor::WriteColor;

/// Report `check` through `session`: its resolved location, then its label
/// as the message.
pub fn report_violation<W: WriteColor>(
    session: &mut DiagnosticSession<W>,
    unit: &TranslationUnit,
    check: &InsertedCheck,
) {
    match check.point.and_then(|p| p.debug_loc) {
        Some(loc) => session.emit_debug_loc(&loc, unit.debug_info()),
        None => session.emit_location(&SourceLocationChain::new(SourceFrame::new(
            "",
            unit.name.clone(),
            0,
            0,
        ))),
    }
    session.emit_message(&check.label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticConfig;
    use crate::features::instrumentation::CheckCollector;
    use crate::pipeline::LibcUbPass;
    use crate::shared::models::{CallSite, DebugLoc, Instruction, Type, Value};
    use pretty_assertions::assert_eq;
    use termcolor::Buffer;

    #[test]
    fn test_report_inlined_check() {
        let mut unit = TranslationUnit::new("main.c");
        let abs = unit.declare("abs");
        let util = unit.debug_info_mut().add_scope("/src", "util.h");
        let main = unit.debug_info_mut().add_scope("/src", "main.c");
        let site = unit.debug_info_mut().add_inline_site(DebugLoc::new(main, 9, 12));
        unit.define(
            "main",
            vec![Instruction::call(CallSite::direct(
                abs,
                vec![Value::named("x", Type::int(32))],
            ))
            .with_debug_loc(DebugLoc::new(util, 3, 10).inlined_at(site))],
        );

        let mut cursor = CheckCollector::new();
        LibcUbPass::default().run(&unit, &mut cursor);

        let mut session =
            DiagnosticSession::with_writer(&DiagnosticConfig::reporting(), Buffer::no_color(), false);
        report_violation(&mut session, &unit, &cursor.checks()[0]);

        let DiagnosticSession::Reporting(reporter) = session else {
            panic!("expected reporting session");
        };
        let out = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
        assert_eq!(out, "/src/util.h:3:10:\n/src/main.c:9:12: bug: abs\n");
    }

    #[test]
    fn test_report_without_debug_loc_verifies_label() {
        let mut unit = TranslationUnit::new("main.c");
        let div = unit.declare("div");
        let n = Value::named("n", Type::int(32));
        unit.define(
            "main",
            vec![Instruction::call(CallSite::direct(div, vec![n.clone(), n]))],
        );
        let mut cursor = CheckCollector::new();
        LibcUbPass::default().run(&unit, &mut cursor);

        let mut session = DiagnosticSession::with_writer(
            &DiagnosticConfig::verifying("div"),
            Buffer::no_color(),
            false,
        );
        for check in cursor.checks() {
            report_violation(&mut session, &unit, check);
        }
        assert!(session.finish().is_ok());
    }
}
