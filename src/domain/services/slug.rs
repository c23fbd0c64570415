use unicode_normalization::UnicodeNormalization;

/// Returns `explicit_id` when set, otherwise a slug derived from `fallback_title`.
pub fn normalize(explicit_id: &str, fallback_title: &str) -> String {
    if explicit_id.is_empty() {
        slugify(fallback_title)
    } else {
        explicit_id.to_string()
    }
}

/// "Thai Cooking Class" -> "thai-cooking-class", "Café Crème" -> "cafe-creme".
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().nfd() {
        if is_combining_accent(c) {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

// Combining Diacritical Marks block
fn is_combining_accent(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
