//! Line terminator rewriting.
//!
//! Works on raw bytes: `\r` and `\n` are single bytes in UTF-8 and in every
//! ASCII-compatible encoding, so text need not be decoded first and
//! non-UTF-8 sources survive untouched apart from their terminators.

use crate::config::LineEndingMode;
use std::borrow::Cow;

/// Rewrite line terminators of `content` for `mode`.
///
/// - `Unchanged`: content is returned as-is.
/// - `Lf`: every `\r\n` (including `\r\r\n`) becomes `\n`; a lone `\r` is kept.
/// - `Crlf`: every `\n` not already preceded by `\r` becomes `\r\n`.
///
/// Both rewrites are idempotent.
pub fn normalize_line_endings(content: &[u8], mode: LineEndingMode) -> Cow<'_, [u8]> {
    match mode {
        LineEndingMode::Unchanged => Cow::Borrowed(content),
        LineEndingMode::Lf => to_lf(content),
        LineEndingMode::Crlf => to_crlf(content),
    }
}

fn to_lf(content: &[u8]) -> Cow<'_, [u8]> {
    if !content.windows(2).any(|w| w == b"\r\n") {
        return Cow::Borrowed(content);
    }

    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        if content[i] == b'\r' {
            let run_end = content[i..]
                .iter()
                .position(|&b| b != b'\r')
                .map_or(content.len(), |offset| i + offset);
            // A run of `\r` that ends a line is part of the terminator.
            if content.get(run_end) != Some(&b'\n') {
                out.extend_from_slice(&content[i..run_end]);
            }
            i = run_end;
        } else {
            out.push(content[i]);
            i += 1;
        }
    }
    Cow::Owned(out)
}

fn to_crlf(content: &[u8]) -> Cow<'_, [u8]> {
    let bare = content
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' && (i == 0 || content[i - 1] != b'\r'))
        .count();
    if bare == 0 {
        return Cow::Borrowed(content);
    }

    let mut out = Vec::with_capacity(content.len() + bare);
    let mut previous = None;
    for &byte in content {
        if byte == b'\n' && previous != Some(b'\r') {
            out.push(b'\r');
        }
        out.push(byte);
        previous = Some(byte);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lf(s: &str) -> Vec<u8> {
        normalize_line_endings(s.as_bytes(), LineEndingMode::Lf).into_owned()
    }

    fn crlf(s: &str) -> Vec<u8> {
        normalize_line_endings(s.as_bytes(), LineEndingMode::Crlf).into_owned()
    }

    #[test]
    fn crlf_expands_bare_newlines() {
        assert_eq!(crlf("a\nb\n"), b"a\r\nb\r\n");
    }

    #[test]
    fn crlf_leaves_existing_crlf_alone() {
        assert_eq!(crlf("a\r\nb\nc"), b"a\r\nb\r\nc");
        assert_eq!(crlf("\n\n"), b"\r\n\r\n");
    }

    #[test]
    fn lf_collapses_crlf() {
        assert_eq!(lf("a\r\nb\r\n"), b"a\nb\n");
    }

    #[test]
    fn lf_keeps_lone_carriage_return() {
        assert_eq!(lf("a\rb\r\n"), b"a\rb\n");
        assert_eq!(lf("a\r\r\n\r"), b"a\n\r");
    }

    #[test]
    fn unchanged_borrows_input() {
        let input = b"a\r\nb\n";
        let out = normalize_line_endings(input, LineEndingMode::Unchanged);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, input);
    }

    #[test]
    fn already_normalized_input_is_borrowed() {
        assert!(matches!(
            normalize_line_endings(b"a\nb\n", LineEndingMode::Lf),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            normalize_line_endings(b"a\r\nb\r\n", LineEndingMode::Crlf),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = ["", "a", "a\n", "a\r\n", "\r\n\n\r", "x\r\ny\nz\r\r\n", "\n\r\n\n"];
        for sample in samples {
            for mode in [LineEndingMode::Lf, LineEndingMode::Crlf] {
                let once = normalize_line_endings(sample.as_bytes(), mode).into_owned();
                let twice = normalize_line_endings(&once, mode).into_owned();
                assert_eq!(once, twice, "mode {} on {:?}", mode, sample);
            }
        }
    }

    #[test]
    fn non_utf8_bytes_survive() {
        let input = [0xff, b'\n', 0xfe];
        assert_eq!(
            normalize_line_endings(&input, LineEndingMode::Crlf).into_owned(),
            vec![0xff, b'\r', b'\n', 0xfe]
        );
    }
}
