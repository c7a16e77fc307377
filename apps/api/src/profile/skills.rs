/// Splits a comma-separated skill string into trimmed, lowercased, non-empty tokens.
///
/// Order is preserved and duplicates are kept. Malformed input only ever yields
/// fewer tokens.
pub fn parse_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}
