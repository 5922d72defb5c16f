/// Canonical form of a word: every whitespace character removed, then lowercased.
///
/// Used both for queries and for word list lines, so keys and queries always
/// agree.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
