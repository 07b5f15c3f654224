//! terminal text helpers

const MARK_ON: &str = "\x1b[7m";
const MARK_OFF: &str = "\x1b[0m";

/// Wrap case-insensitive occurrences of `term` in ANSI reverse video,
/// the terminal stand-in for `<mark>`. Falls back to the plain text
/// when case folding changes byte offsets.
pub(crate) fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let folded_text = text.to_lowercase();
    let folded_term = term.to_lowercase();
    if folded_text.len() != text.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = 0;
    while let Some(pos) = folded_text[rest..].find(&folded_term) {
        let start = rest + pos;
        let end = start + folded_term.len();
        out.push_str(&text[rest..start]);
        out.push_str(MARK_ON);
        out.push_str(&text[start..end]);
        out.push_str(MARK_OFF);
        rest = end;
    }
    out.push_str(&text[rest..]);
    out
}
