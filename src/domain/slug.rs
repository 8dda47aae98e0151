//! URL slugs for users and departments.

use crate::config::SLUG_MAX_LENGTH;

/// Characters dropped before transliteration.
const SUBSTITUTIONS: [char; 4] = ['ь', 'Ь', 'ъ', 'Ъ'];

/// Transliterate, lowercase and dash-join `text`, cut to the maximum slug length.
pub fn make(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| !SUBSTITUTIONS.contains(c)).collect();
    let mut slug = slug::slugify(cleaned);
    if slug.len() > SLUG_MAX_LENGTH {
        // slugify output is ASCII, byte truncation is safe
        slug.truncate(SLUG_MAX_LENGTH);
        let trimmed = slug.trim_end_matches('-').len();
        slug.truncate(trimmed);
    }
    slug
}

/// Slug of a user built from the full name, or the id when no name is set.
pub fn for_user(id: i32, surname: &str, name: &str, patronymic: &str) -> String {
    if surname.is_empty() && name.is_empty() && patronymic.is_empty() {
        return id.to_string();
    }
    make(&format!("{} {} {}", surname, name, patronymic))
}

/// True when `text` could have been produced by [`make`].
pub fn is_slug(text: &str) -> bool {
    if text.is_empty() || text.len() > SLUG_MAX_LENGTH {
        return false;
    }
    if text.starts_with(['-', '_']) || text.ends_with(['-', '_']) {
        return false;
    }
    text.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_transliterates_and_lowercases() {
        let slug = make("Терапия");
        assert!(slug.starts_with("terap"));
        assert!(is_slug(&slug));
        assert_eq!(make("Hello World"), "hello-world");
    }

    #[test]
    fn test_soft_and_hard_signs_are_removed() {
        assert_eq!(make("Объём"), make("Обём"));
        assert!(!make("Мальвина").contains('-'));
    }

    #[test]
    fn test_make_truncates() {
        let slug = make(&"Кардиология ".repeat(10));
        assert!(slug.len() <= SLUG_MAX_LENGTH);
        assert!(is_slug(&slug));
    }

    #[test]
    fn test_user_slug_falls_back_to_id() {
        assert_eq!(for_user(17, "", "", ""), "17");
        assert_eq!(for_user(1, "Ivanov", "Ivan", ""), "ivanov-ivan");
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("familiia-imia"));
        assert!(is_slug("a_b"));
        assert!(is_slug("17"));
        assert!(!is_slug(""));
        assert!(!is_slug("-abc"));
        assert!(!is_slug("abc_"));
        assert!(!is_slug("Abc"));
        assert!(!is_slug("фамилия"));
        assert!(!is_slug(&"a".repeat(41)));
    }
}
