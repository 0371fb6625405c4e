//! List-string parsing.

use jobs_model::EMPTY_LIST;

const SEPARATOR: &str = ", ";

/// Parses the textual list encoding used by the dataset, e.g.
/// `['Python', 'SQL']`.
///
/// Bracket and single-quote characters are stripped wherever they appear,
/// the remainder is split on `", "`, and each token is trimmed. Empty tokens
/// are discarded. Blank input and `[]` produce an empty list.
pub fn parse_list(value: &str) -> Vec<String> {
    if value.trim().is_empty() || value == EMPTY_LIST {
        return Vec::new();
    }
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect();
    stripped
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
