use crate::lyrics::types::LyricLine;

/// Byte offset where lyric text begins, right after the closing bracket of a
/// `[MM:SS.CC]` tag. Doubles as the minimum length of a tagged line.
const TEXT_OFFSET: usize = 10;

/// Parse the full content of a lyric file into timestamped lines.
///
/// Lines that don't carry a time tag (metadata like `[ti:...]`, comments,
/// blanks) are silently skipped; that is how the format marks them as not
/// sung. The parser itself never fails: a file with no tagged lines parses
/// to an empty vec.
pub fn parse_lyric_file(content: &str) -> Vec<LyricLine> {
    content
        .lines()
        .filter(|line| is_tagged_line(line))
        .map(parse_lyric_line)
        .collect()
}

/// A line is a candidate lyric line iff it starts with `[`, is at least 10
/// bytes long, and has an ASCII digit right after the bracket. Metadata tags
/// like `[ar:...]` fail the digit check.
fn is_tagged_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= TEXT_OFFSET && bytes[0] == b'[' && bytes[1].is_ascii_digit()
}

/// Decode one `[MM:SS.CC]text` line. The time tag occupies fixed byte
/// offsets: minutes at 1..3, seconds at 4..6, fractional field at 7..9.
///
/// The two-digit fractional field contributes `CC * 10` milliseconds; the
/// `.lrc` files this parser targets are tuned to that scaling.
fn parse_lyric_line(line: &str) -> LyricLine {
    let minutes = time_field(line, 1..3);
    let seconds = time_field(line, 4..6);
    let frac = time_field(line, 7..9);

    LyricLine {
        time_ms: minutes * 60_000 + seconds * 1_000 + frac * 10,
        text: line.get(TEXT_OFFSET..).unwrap_or_default().to_string(),
    }
}

/// Numeric conversion with a "zero on error" policy: a field that is not a
/// non-negative number (or does not fall on a character boundary) degrades to
/// zero instead of invalidating the whole line.
fn time_field(line: &str, range: std::ops::Range<usize>) -> u64 {
    line.get(range)
        .and_then(|field| field.parse().ok())
        .unwrap_or(0)
}
