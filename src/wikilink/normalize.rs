//! Name normalization for registry lookup keys.

use indexmap::IndexSet;

/// Lookup-key spellings of a name.
///
/// All variants are lower-cased; hyphens and underscores are removed or
/// turned into spaces, separately and together. The set keeps insertion
/// order, which feeds the registry's insertion order.
///
/// ```ignore
/// variants("My-Note_v2")
/// // my-note_v2, mynote_v2, my-notev2, mynotev2, my note_v2, my-note v2, my note v2
/// ```
pub fn variants(name: &str) -> IndexSet<String> {
    let mut set = IndexSet::with_capacity(7);

    set.insert(name.to_lowercase());
    set.insert(name.replace('-', "").to_lowercase());
    set.insert(name.replace('_', "").to_lowercase());
    set.insert(name.replace(['-', '_'], "").to_lowercase());
    set.insert(name.replace('-', " ").to_lowercase());
    set.insert(name.replace('_', " ").to_lowercase());
    set.insert(name.replace(['-', '_'], " ").to_lowercase());

    set
}

/// Keep only ASCII lowercase letters and digits of an already lower-cased key.
///
/// `"my-note v2!"` -> `"mynotev2"`
pub fn clean(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
