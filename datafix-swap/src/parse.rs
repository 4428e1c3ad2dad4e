use std::num::ParseIntError;

/// Parse a dimension line, ignoring leading encoding debris.
///
/// Every leading character that is neither an ASCII digit nor a sign is
/// dropped, then trailing whitespace. This covers a real U+FEFF as well as its
/// mojibake spellings (`п»ї`, `ï»¿`) left behind by lossy re-encoding.
pub fn parse_dimension(raw: &str) -> Result<i64, ParseIntError> {
    raw.trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '-' || c == '+'))
        .trim_end()
        .parse()
}
