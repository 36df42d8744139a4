/// Generate a group slug from a base name.
///
/// Letters and digits in any script are kept (lowercased); every run of
/// anything else becomes a single `-`. Leading and trailing dashes are
/// dropped.
#[must_use]
pub fn slugify(base: &str) -> String {
    let mut spaced = String::with_capacity(base.len());
    for c in base.chars() {
        if c.is_alphanumeric() {
            spaced.extend(c.to_lowercase());
        } else {
            spaced.push('-');
        }
    }

    spaced
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
