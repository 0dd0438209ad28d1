// crates/crlfe-core/src/eol.rs
//
// Byte-level CRLF elimination. The buffer is an opaque byte stream; only
// the exact two-byte pair is interpreted, nothing is encoding-aware.

/// Legacy Windows line terminator.
pub const WINDOWS_LINE_ENDING: &[u8] = b"\r\n";

/// Target Unix line terminator.
pub const UNIX_LINE_ENDING: &[u8] = b"\n";

/// True if the buffer contains at least one CRLF pair.
pub fn contains_crlf(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|w| w == WINDOWS_LINE_ENDING)
}

/// Replace every non-overlapping CRLF with a single LF.
///
/// Returns `None` when no CRLF is present (the no-transformation case).
/// A lone CR or a lone LF is never altered; only the adjacent pair matches.
pub fn eliminate_crlf(bytes: &[u8]) -> Option<Vec<u8>> {
    if !contains_crlf(bytes) {
        return None;
    }
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            out.push(b'\n');
            i += 2;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_crlf_means_no_detection() {
        assert!(!contains_crlf(b"line1\nline2\n"));
        assert_eq!(eliminate_crlf(b"line1\nline2\n"), None);
        assert_eq!(eliminate_crlf(b""), None);
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = eliminate_crlf(b"a\r\nb\r\nc\r\n").expect("detected");
        assert_eq!(out, b"a\nb\nc\n");
    }

    #[test]
    fn output_shrinks_by_one_byte_per_pair() {
        let input = b"x\r\ny\r\nz";
        let out = eliminate_crlf(input).expect("detected");
        assert_eq!(out.len(), input.len() - 2);
    }

    #[test]
    fn lone_cr_and_lone_lf_are_preserved() {
        let out = eliminate_crlf(b"A\rB\nC\r\nD").expect("detected");
        assert_eq!(out, b"A\rB\nC\nD");
        assert_eq!(eliminate_crlf(b"A\rB\nC"), None);
    }

    #[test]
    fn idempotent_on_converted_content() {
        let once = eliminate_crlf(b"a\r\nb\r\n").expect("detected");
        assert_eq!(eliminate_crlf(&once), None);
    }

    #[test]
    fn cr_run_consumes_only_the_exact_pair() {
        // \r\r\n: the first CR is lone, the second forms the pair. The
        // single pass leaves a fresh \r\n behind, same as the original.
        let out = eliminate_crlf(b"a\r\r\nb").expect("detected");
        assert_eq!(out, b"a\r\nb");
        assert!(contains_crlf(&out));
    }

    #[test]
    fn non_text_bytes_pass_through() {
        let input = [0x00u8, 0xFF, b'\r', b'\n', 0x7F];
        let out = eliminate_crlf(&input).expect("detected");
        assert_eq!(out, [0x00, 0xFF, b'\n', 0x7F]);
    }
}
