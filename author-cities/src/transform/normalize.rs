//! Author name normalization.
//!
//! Raw names in the EiP `author (normalized)` column are written first name
//! first ("Jean de la Fontaine"). They are turned into "Last, First" keys so
//! that the same author spelled with different spacing or doubt markers
//! aggregates under one name.
//!
//! # Rules
//!
//! 1. `(?)` and `?` markers are removed, then surrounding whitespace.
//! 2. A single word is returned unchanged.
//! 3. The first name particle found after the first word starts the last name:
//!    `"Jean de la Fontaine"` → `"de la Fontaine, Jean"`.
//! 4. Otherwise the final word is the last name: `"John Smith"` → `"Smith, John"`.
//!
//! A particle in first position never starts the last name, so
//! `"Van Dyck"` becomes `"Dyck, Van"`.

/// Separator between several authors in one field.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// Lowercase particles that open a multi-word surname.
pub const NAME_PARTICLES: &[&str] = &[
    "de", "la", "del", "della", "di", "da", "do", "dos", "das", "du", "van", "von", "der", "den",
    "ter", "ten", "op", "af", "al", "le", "el", "of",
];

/// Split a composite author field into raw names.
///
/// An empty field yields a single empty name.
pub fn split_authors(field: &str) -> impl Iterator<Item = &str> {
    field.split(AUTHOR_SEPARATOR)
}

fn is_particle(token: &str) -> bool {
    let lower = token.to_lowercase();
    NAME_PARTICLES.contains(&lower.as_str())
}

/// Normalize one raw author name into "Last, First" form.
pub fn normalize_author(raw: &str) -> String {
    let cleaned = raw.replace("(?)", "").replace('?', "");
    let author = cleaned.trim();

    let tokens: Vec<&str> = author.split_ascii_whitespace().collect();
    if tokens.len() < 2 {
        return author.to_string();
    }

    let split_at = tokens
        .iter()
        .skip(1)
        .position(|token| is_particle(token))
        .map(|i| i + 1)
        .unwrap_or(tokens.len() - 1);

    let last_name = tokens[split_at..].join(" ");
    let first_names = tokens[..split_at].join(" ");
    format!("{}, {}", last_name, first_names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_unchanged() {
        assert_eq!(normalize_author("Smith"), "Smith");
        assert_eq!(normalize_author("  Erasmus  "), "Erasmus");
    }

    #[test]
    fn test_particle_starts_last_name() {
        assert_eq!(normalize_author("Jean de la Fontaine"), "de la Fontaine, Jean");
        assert_eq!(
            normalize_author("Ludwig van Beethoven"),
            "van Beethoven, Ludwig"
        );
    }

    #[test]
    fn test_particle_case_insensitive() {
        assert_eq!(normalize_author("Pieter Van Dyck"), "Van Dyck, Pieter");
        assert_eq!(normalize_author("Jacob VON Sandrart"), "VON Sandrart, Jacob");
    }

    #[test]
    fn test_first_particle_wins() {
        assert_eq!(
            normalize_author("Maria Anna della Rovere di Urbino"),
            "della Rovere di Urbino, Maria Anna"
        );
    }

    #[test]
    fn test_no_particle_last_word() {
        assert_eq!(normalize_author("John Smith"), "Smith, John");
        assert_eq!(
            normalize_author("Johann Sebastian Bach"),
            "Bach, Johann Sebastian"
        );
    }

    #[test]
    fn test_markers_stripped() {
        assert_eq!(normalize_author("John Smith (?)"), "Smith, John");
        assert_eq!(normalize_author("John Smith?"), "Smith, John");
        assert_eq!(normalize_author("?Smith"), "Smith");
    }

    #[test]
    fn test_leading_particle_not_separator() {
        assert_eq!(normalize_author("Van Dyck"), "Dyck, Van");
        assert_eq!(normalize_author("de Jean Santeuil"), "Santeuil, de Jean");
    }

    #[test]
    fn test_particle_only_as_whole_token() {
        assert_eq!(normalize_author("Jean Delacroix"), "Delacroix, Jean");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize_author("John \t  Smith"), "Smith, John");
        assert_eq!(normalize_author("John   Smith"), normalize_author("John Smith"));
    }

    #[test]
    fn test_empty_and_marker_only() {
        assert_eq!(normalize_author(""), "");
        assert_eq!(normalize_author("(?)"), "");
        assert_eq!(normalize_author(" ? "), "");
    }

    #[test]
    fn test_deterministic() {
        let once = normalize_author("Jean de la Fontaine");
        assert_eq!(once, normalize_author("Jean de la Fontaine"));
    }

    #[test]
    fn test_split_authors() {
        let names: Vec<&str> = split_authors("John Smith, Jean de la Fontaine").collect();
        assert_eq!(names, vec!["John Smith", "Jean de la Fontaine"]);

        let names: Vec<&str> = split_authors("Smith,John").collect();
        assert_eq!(names, vec!["Smith,John"]);

        let names: Vec<&str> = split_authors("").collect();
        assert_eq!(names, vec![""]);
    }
}
