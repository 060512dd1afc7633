//! Small, no-regex English pluralization used for collection naming.
//!
//! Inputs are the lower-case model names produced by the naming policy, so
//! case handling is deliberately out of scope. Simple string operations
//! (suffix matching, table lookups) keep this cheap enough for the
//! evaluation hot path.

/// Irregular singular → plural mappings, sorted by singular for binary search.
static IRREGULARS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("child", "children"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("die", "dice"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("index", "indices"),
    ("louse", "lice"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("woman", "women"),
];

/// Words that are the same in singular and plural form.
static UNCOUNTABLE: &[&str] = &[
    "aircraft",
    "bison",
    "deer",
    "equipment",
    "fish",
    "information",
    "moose",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
];

/// Words ending in `-o` that take `es` rather than a plain `s`.
static O_TAKES_ES: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

/// Words ending in `-f`/`-fe` that take a plain `s` rather than `ves`.
static F_TAKES_S: &[&str] = &["belief", "chef", "chief", "gulf", "proof", "roof"];

/// Convert a singular English word to its plural form.
///
/// Handles irregular plurals, uncountable nouns, and the standard suffix
/// rules: sibilant endings take `es`, consonant + `y` becomes `ies`,
/// `-f`/`-fe` becomes `ves`, everything else takes `s`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if UNCOUNTABLE.binary_search(&word).is_ok() {
        return word.to_string();
    }
    if let Ok(index) = IRREGULARS.binary_search_by_key(&word, |(singular, _)| *singular) {
        return IRREGULARS[index].1.to_string();
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !ends_with_vowel(stem) {
            return format!("{stem}ies");
        }
    }
    if O_TAKES_ES.binary_search(&word).is_ok() {
        return format!("{word}es");
    }
    if F_TAKES_S.binary_search(&word).is_ok() {
        return format!("{word}s");
    }
    if let Some(stem) = word.strip_suffix("fe") {
        return format!("{stem}ves");
    }
    if let Some(stem) = word.strip_suffix('f') {
        return format!("{stem}ves");
    }
    format!("{word}s")
}

fn ends_with_vowel(stem: &str) -> bool {
    matches!(stem.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
