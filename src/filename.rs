// filename.rs - canonical, filesystem-safe query strings
//
// Track titles come straight out of player metadata and can contain anything;
// lyric files on disk cannot. Both sides of the lookup go through the same
// transformation so that a stored filename and a composed query compare equal.

use once_cell::sync::Lazy;
use regex::Regex;

static PATH_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\x00]").unwrap());
static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[:*?"<>|\\]"#).unwrap());
static DASH_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());
static EDGE_TRIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s\-.]+|[\s\-.]+$").unwrap());

/// Replace all forbidden or problematic filename characters with `-`.
///
/// Path separators and the null byte go first, then the characters that are
/// illegal on common platforms (`: * ? " < > | \`). Runs of the placeholder
/// collapse into a single one, and leading/trailing whitespace, dashes and
/// periods are trimmed. Applying the function twice yields the same result
/// as applying it once.
pub fn sanitize_filename(name: &str) -> String {
    let name = PATH_SEPARATORS.replace_all(name, "-");
    let name = ILLEGAL_CHARS.replace_all(&name, "-");
    let name = DASH_RUNS.replace_all(&name, "-");
    EDGE_TRIM.replace_all(&name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators_and_illegal_chars() {
        assert_eq!(sanitize_filename("AC/DC: Back?"), "AC-DC- Back");
        assert_eq!(sanitize_filename("a\\b|c<d>e"), "a-b-c-d-e");
        assert_eq!(sanitize_filename("nul\0byte"), "nul-byte");
    }

    #[test]
    fn collapses_placeholder_runs() {
        assert_eq!(sanitize_filename("a///b"), "a-b");
        assert_eq!(sanitize_filename("a--b---c"), "a-b-c");
        // A lone dash with spaces around it is not a run.
        assert_eq!(sanitize_filename("Eve - Night"), "Eve - Night");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(sanitize_filename("  .-Song-.  "), "Song");
        assert_eq!(sanitize_filename("...hidden"), "hidden");
        assert_eq!(sanitize_filename("/leading/slash/"), "leading-slash");
    }

    #[test]
    fn output_never_contains_forbidden_characters() {
        let nasty = [
            "a/b\\c:d*e?f\"g<h>i|j",
            "\0\0\0",
            "mix/of: everything? really|yes\\",
        ];
        for input in nasty {
            let out = sanitize_filename(input);
            assert!(
                !out.contains(['/', '\0', ':', '*', '?', '"', '<', '>', '|', '\\']),
                "forbidden character left in {out:?}"
            );
        }
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Eve - Night",
            "AC/DC: Back In Black",
            "  .-weird-.  ",
            "a///b\\\\c",
            "",
            "...",
            "plain title",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {input:?}");
        }
    }
}
