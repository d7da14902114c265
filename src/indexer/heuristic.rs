//! Line-based boundary rules for top-level Python functions
//!
//! This is a text heuristic, not a parser. A function starts at any line
//! beginning with `def ` and runs until the first following line that is
//! neither empty nor starts with a space, tab, or `)`. Existing extracted
//! datasets depend on these exact rules, so they must not be "improved".

/// Literal prefix that marks a definition line
pub const DEFINITION_PREFIX: &str = "def ";

/// Maximum block size in lines, definition line included
pub const DEFAULT_LOOKAHEAD_CAP: usize = 10_000;

/// Characters that keep a line inside the current function body
const CONTINUATION_CHARS: [char; 3] = [' ', '\t', ')'];

/// Turn `\r\n` and lone `\r` line endings into a single `\n` each
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split normalized text on `\n`, keeping the trailing empty line if any
pub fn split_lines(text: &str) -> Vec<String> {
    normalize_line_endings(text)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

pub fn is_definition_line(line: &str) -> bool {
    line.starts_with(DEFINITION_PREFIX)
}

/// Empty, or indented with space/tab, or a closing paren of a wrapped signature
pub fn is_continuation_line(line: &str) -> bool {
    line.is_empty() || line.starts_with(CONTINUATION_CHARS)
}

/// Collect the definition at `start` together with its body
///
/// The block holds at most `lookahead_cap` lines and ends before the first
/// line that fails [`is_continuation_line`].
pub fn collect_body<S: AsRef<str>>(lines: &[S], start: usize, lookahead_cap: usize) -> String {
    let end = start.saturating_add(lookahead_cap).min(lines.len());
    let following = lines.get(start + 1..end).unwrap_or(&[]);

    let mut block = vec![lines[start].as_ref()];
    block.extend(
        following
            .iter()
            .map(|line| line.as_ref())
            .take_while(|line| is_continuation_line(line)),
    );
    block.join("\n")
}

/// Name between `def ` and the first `(` of a definition line
///
/// Returns `None` when the line is not a definition or has no `(`. The name
/// is not trimmed and may be empty (`def (x):`).
pub fn function_name(definition_line: &str) -> Option<&str> {
    let rest = definition_line.strip_prefix(DEFINITION_PREFIX)?;
    rest.find('(').map(|paren| &rest[..paren])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_carriage_return_only_endings() {
        let lines = split_lines("def f():\r    return 1\rx = 2");
        assert_eq!(lines, vec!["def f():", "    return 1", "x = 2"]);
    }

    #[test]
    fn test_crlf_is_a_single_line_break() {
        let lines = split_lines("a\r\nb\r\n");
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_mixed_line_endings() {
        let lines = split_lines("a\r\nb\rc\nd\r\r\ne");
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e"]);
    }

    #[test]
    fn test_definition_line_requires_exact_prefix() {
        assert!(is_definition_line("def f():"));
        assert!(!is_definition_line("    def method(self):"));
        assert!(!is_definition_line("async def f():"));
        assert!(!is_definition_line("define = 1"));
        assert!(!is_definition_line("def\tf():"));
    }

    #[test]
    fn test_continuation_lines() {
        assert!(is_continuation_line(""));
        assert!(is_continuation_line("    return 1"));
        assert!(is_continuation_line("\treturn 1"));
        assert!(is_continuation_line(") -> int:"));
        assert!(!is_continuation_line("# comment"));
        assert!(!is_continuation_line("@decorator"));
        assert!(!is_continuation_line("x = 1"));
    }

    #[test]
    fn test_collect_body_stops_at_first_unindented_line() {
        let lines = ["def f():", "    a = 1", "", "    return a", "x = f()", "    y"];
        assert_eq!(
            collect_body(&lines, 0, DEFAULT_LOOKAHEAD_CAP),
            "def f():\n    a = 1\n\n    return a"
        );
    }

    #[test]
    fn test_collect_body_includes_wrapped_signature() {
        let lines = ["def f(", "    a,", "    b,", "):", "    return a + b"];
        assert_eq!(
            collect_body(&lines, 0, DEFAULT_LOOKAHEAD_CAP),
            "def f(\n    a,\n    b,\n):\n    return a + b"
        );
    }

    #[test]
    fn test_collect_body_cap_counts_definition_line() {
        let lines = ["def f():", "    1", "    2", "    3"];
        assert_eq!(collect_body(&lines, 0, 2), "def f():\n    1");
        assert_eq!(collect_body(&lines, 0, 1), "def f():");
        assert_eq!(collect_body(&lines, 0, 0), "def f():");
    }

    #[test]
    fn test_collect_body_at_last_line() {
        let lines = ["x = 1", "def f(): pass"];
        assert_eq!(collect_body(&lines, 1, DEFAULT_LOOKAHEAD_CAP), "def f(): pass");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("def f(x):"), Some("f"));
        assert_eq!(function_name("def  spaced (x):"), Some(" spaced "));
        assert_eq!(function_name("def (x):"), Some(""));
        assert_eq!(function_name("def broken"), None);
        assert_eq!(function_name("class A(B):"), None);
    }
}
