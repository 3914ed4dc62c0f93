//! Normalize module - Turns class-style names into template identifiers

/// Convert a camel/Pascal-case name into a lowercase, hyphen-delimited
/// template identifier.
///
/// Word boundaries are an uppercase letter after a lowercase letter or digit
/// (`HomePage` → `home-page`), and the start of a capitalized word that ends
/// an uppercase run (`XMLParser` → `xml-parser`). Underscores, hyphens and
/// whitespace are delimiters; runs of them collapse into a single hyphen.
pub fn normalize_template_identifier(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            pending_separator = true;
            continue;
        }

        let boundary = i > 0 && starts_word(&chars, i);
        if !out.is_empty() && (pending_separator || boundary) {
            out.push('-');
        }
        pending_separator = false;

        out.extend(c.to_lowercase());
    }

    out
}

fn is_delimiter(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn starts_word(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if !c.is_uppercase() {
        return false;
    }

    let prev = chars[i - 1];
    if prev.is_lowercase() || prev.is_numeric() {
        return true;
    }

    prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_template_identifier as normalize;

    #[test]
    fn single_words_are_lowercased() {
        assert_eq!(normalize("App"), "app");
        assert_eq!(normalize("List"), "list");
        assert_eq!(normalize("blog"), "blog");
    }

    #[test]
    fn pascal_case_is_hyphenated() {
        assert_eq!(normalize("HomePage"), "home-page");
        assert_eq!(normalize("UserProfileEdit"), "user-profile-edit");
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(normalize("XMLParser"), "xml-parser");
        assert_eq!(normalize("XMLHttpRequest"), "xml-http-request");
        assert_eq!(normalize("API"), "api");
    }

    #[test]
    fn digits_end_a_word() {
        assert_eq!(normalize("Page2Go"), "page2-go");
        assert_eq!(normalize("Oauth2"), "oauth2");
    }

    #[test]
    fn delimiters_collapse() {
        assert_eq!(normalize("my__blog"), "my-blog");
        assert_eq!(normalize("_Admin-_Panel_"), "admin-panel");
        assert_eq!(normalize("home-page"), "home-page");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }
}
