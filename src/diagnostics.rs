/// Terminal rendering of analysis diagnostics.
/// Produces an error code, a location, the message, and a source snippet
/// with a caret under the offending token.
use crate::analyzer::types::{Diagnostic, Found};

/// Color helpers for terminal output (ANSI escape codes).
fn paint(s: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, s)
    } else {
        s.to_string()
    }
}
fn color_bold_red(s: &str, color: bool) -> String {
    paint(s, "1;31", color)
}
fn color_bold_cyan(s: &str, color: bool) -> String {
    paint(s, "1;36", color)
}
fn color_dim(s: &str, color: bool) -> String {
    paint(s, "2", color)
}
fn color_gray(s: &str, color: bool) -> String {
    paint(s, "90", color)
}

/// Colorizes quoted names (e.g., variable names in single quotes).
fn colorize_quoted_names(input: &str, color: bool) -> String {
    if !color {
        return input.to_string();
    }
    let mut out = String::new();
    let mut in_quote = false;
    let mut buf = String::new();
    for ch in input.chars() {
        if ch == '\'' {
            if in_quote {
                out.push_str(&color_bold_cyan(&buf, color));
                out.push('\'');
                buf.clear();
                in_quote = false;
            } else {
                in_quote = true;
                out.push('\'');
            }
        } else if in_quote {
            buf.push(ch);
        } else {
            out.push(ch);
        }
    }
    if in_quote {
        // Unbalanced quote: flush raw content
        out.push_str(&buf);
    }
    out
}

/// Renders one source line with a gutter and a caret under `col`.
/// `line` and `col` are 1-based; out-of-range lines render nothing.
fn render_source_snippet(source: &str, line: usize, col: usize, color: bool) -> String {
    let Some(src_line) = line.checked_sub(1).and_then(|idx| source.lines().nth(idx)) else {
        return String::new();
    };

    let gutter = format!("{:>4} {} ", line, color_gray("|", color));
    let caret_idx = col.saturating_sub(1);
    let mut highlighted = String::new();
    for (i, ch) in src_line.chars().enumerate() {
        if i == caret_idx {
            highlighted.push_str(&color_bold_cyan(&ch.to_string(), color));
        } else {
            highlighted.push(ch);
        }
    }

    // digits + space + '|' + space
    let gutter_width = 4 + 1 + 1 + 1;
    format!(
        "{}{}\n{}{}\n",
        gutter,
        highlighted,
        " ".repeat(gutter_width + caret_idx),
        color_bold_red("^", color)
    )
}

/// Formats a diagnostic the way the CLI shows it.
///
/// ```text
/// error[E1003] main.minilang:2:1
/// Semantic Error: Variable 'y' not declared. at token: (IDENTIFIER, y)
///    2 | y = 1;
///        ^
/// ```
pub fn format_diagnostic(diag: &Diagnostic, source: &str, filename: &str, color: bool) -> String {
    let code = format!("error[{}]", diag.kind.code());
    let loc = match &diag.found {
        Found::Token { line, col, .. } => format!("{}:{}:{}", filename, line, col),
        Found::EndOfInput => format!("{}: end of input", filename),
    };

    let mut out = format!(
        "{} {}\n{}\n",
        color_bold_red(&code, color),
        color_dim(&loc, color),
        colorize_quoted_names(&diag.to_string(), color)
    );
    if let Some((line, col)) = diag.found.location() {
        out.push_str(&render_source_snippet(source, line, col, color));
    }
    out
}

/// Prints a diagnostic to stderr.
pub fn print_diagnostic(diag: &Diagnostic, source: &str, filename: &str, color: bool) {
    eprint!("{}", format_diagnostic(diag, source, filename, color));
}
