//! Classification of `tsc` diagnostic output.

use tsmith_core::Diagnostic;

/// Parse line-oriented `tsc` output into diagnostics.
///
/// The compiler's non-pretty format is
/// `<file>(<line>,<col>): error TS<code>: <message>` with a `warning`
/// variant. Lines carrying neither marker are passed through as notes
/// rather than dropped, so callers still see everything the compiler
/// printed. Blank lines are skipped.
pub fn parse_tsc_output(output: &str) -> Vec<Diagnostic> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Diagnostic {
    if line.contains("error TS") || line.contains(": error ") {
        Diagnostic::error(line)
    } else if line.contains("warning TS") || line.contains(": warning ") {
        Diagnostic::warning(line)
    } else {
        Diagnostic::note(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsmith_core::Severity;

    #[test]
    fn test_error_line_tagged() {
        let diags =
            parse_tsc_output("input.ts(2,3): error TS2322: Type 'string' is not assignable.");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Error);
        assert!(diags[0].message().contains("TS2322"));
    }

    #[test]
    fn test_warning_line_tagged() {
        let diags = parse_tsc_output("input.ts(1,1): warning TS6133: 'x' is declared but never used.");
        assert_eq!(diags[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_unclassified_lines_pass_through() {
        let diags = parse_tsc_output("Found 1 error in input.ts:2\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Note);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let output = "input.ts(2,3): error TS2322: bad\n\n   \nFound 1 error.\n";
        let diags = parse_tsc_output(output);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity(), Severity::Error);
        assert_eq!(diags[1].severity(), Severity::Note);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_tsc_output("").is_empty());
    }
}
