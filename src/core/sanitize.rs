// src/core/sanitize.rs

/// File-name stem for a player or team: whitespace removed, path separators
/// replaced. Everything else (dots, apostrophes, accents) is kept as-is.
///
/// `"L. James"` → `"L.James"`
pub fn file_stem(name: &str) -> String {
    let out: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    if out.is_empty() { s!("unnamed") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_spaces_keeps_punctuation() {
        assert_eq!(file_stem("L. James"), "L.James");
        assert_eq!(file_stem("D. O'Neale"), "D.O'Neale");
        assert_eq!(file_stem("N. Jokić"), "N.Jokić");
    }

    #[test]
    fn no_path_escapes() {
        assert_eq!(file_stem("a/b\\c"), "a_b_c");
        assert_eq!(file_stem("   "), "unnamed");
    }
}
