//! Custom assertions for test verification

use ubcheck_ir::features::instrumentation::CheckCollector;

/// Assert the rendered conditions and labels, in insertion order
pub fn assert_checks(cursor: &CheckCollector, expected: &[(&str, &str)]) {
    let actual: Vec<(String, String)> = cursor
        .checks()
        .iter()
        .map(|c| (c.condition.to_string(), c.label.clone()))
        .collect();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(c, l)| (c.to_string(), l.to_string()))
        .collect();
    assert_eq!(actual, expected, "inserted checks differ");
}

/// Remove ANSI color escape sequences
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
