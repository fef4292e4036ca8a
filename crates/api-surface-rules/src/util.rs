//! Shared name-shape helpers for the rule set.

pub(crate) fn starts_with_lower(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

pub(crate) fn starts_with_upper(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// `CONSTANT_CASE`: ASCII capitals, digits and underscores only.
pub(crate) fn is_constant_case(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Whether the name embeds an all-caps acronym: a run of three or more
/// capitals anywhere, or a run of two capitals ending the name.
///
/// A run of capitals followed by a lowercase letter donates its last capital
/// to the next word (`HTMLText` is the acronym `HTML` plus the word `Text`),
/// so `getZOrder` has no acronym while `getHTMLText` and `getURL` do.
pub(crate) fn has_acronym(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_uppercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_uppercase() {
                i += 1;
            }
            let run = i - start;
            if run >= 3 || (run == 2 && i == chars.len()) {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

/// Rewrites acronym runs into capitalized words: `getHTMLText` becomes
/// `getHtmlText`, `getURL` becomes `getUrl`.
pub(crate) fn decapitalize_acronyms(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_uppercase() {
            i += 1;
        }
        let run = i - start;
        // The last capital before a lowercase letter starts the next word.
        let splits_word = run > 1 && i < chars.len() && chars[i].is_ascii_lowercase();
        let end = if splits_word { i - 1 } else { i };
        out.push(chars[start]);
        for &c in &chars[start + 1..end] {
            out.push(c.to_ascii_lowercase());
        }
        if splits_word {
            out.push(chars[end]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_detection() {
        assert!(has_acronym("getHTMLText"));
        assert!(has_acronym("getURL"));
        assert!(has_acronym("URLConnection"));
        assert!(has_acronym("isAB"));
        assert!(!has_acronym("getZOrder"));
        assert!(!has_acronym("getName"));
        assert!(!has_acronym("Builder"));
    }

    #[test]
    fn acronym_decapitalization() {
        assert_eq!(decapitalize_acronyms("getHTMLText"), "getHtmlText");
        assert_eq!(decapitalize_acronyms("getURL"), "getUrl");
        assert_eq!(decapitalize_acronyms("URLConnection"), "UrlConnection");
        assert_eq!(decapitalize_acronyms("getZOrder"), "getZOrder");
    }

    #[test]
    fn constant_case() {
        assert!(is_constant_case("FLAG_ONE"));
        assert!(is_constant_case("MAX_VALUE2"));
        assert!(!is_constant_case("flagOne"));
        assert!(!is_constant_case("Flag_One"));
        assert!(!is_constant_case(""));
    }
}
