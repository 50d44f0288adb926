use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Folds a string into a 32-bit signed hash over its UTF-16 code units
/// (base-31 polynomial hash written as shift-and-subtract). Matches the
/// values the original web client computed with `charCodeAt`, so scores
/// stay stable across app versions.
fn fold_hash(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in s.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(code));
    }
    hash
}

/// Canonicalizes a pair of names: trim, sort, join. The sort makes every
/// derived score symmetric in its arguments.
fn combine_names(a: &str, b: &str) -> String {
    let mut pair = [a.trim(), b.trim()];
    pair.sort_unstable();
    pair.join("-")
}

fn score_in_range(a: &str, b: &str, floor: u32, span: u32) -> u8 {
    let hash = fold_hash(&combine_names(a, b));
    (floor + hash.unsigned_abs() % span) as u8
}

/// Compatibility percentage for two names, always in `60..=100`.
pub fn name_compatibility(a: &str, b: &str) -> u8 {
    score_in_range(a, b, 60, 41)
}

/// Love-compatibility percentage, always in `50..=100`. Shares the hash
/// fold with [`name_compatibility`] but maps into a wider band; the two
/// are used by different features and are not interchangeable.
pub fn love_compatibility(a: &str, b: &str) -> u8 {
    score_in_range(a, b, 50, 51)
}

static ABJAD: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    // Traditional Abjad numerals. Hamza-carrier variants share the alef
    // value; teh marbuta counts as heh, alef maksura as yeh.
    [
        ('ا', 1), ('أ', 1), ('إ', 1), ('آ', 1),
        ('ب', 2), ('ج', 3), ('د', 4), ('ه', 5), ('ة', 5),
        ('و', 6), ('ز', 7), ('ح', 8), ('ط', 9), ('ي', 10), ('ى', 10),
        ('ك', 20), ('ل', 30), ('م', 40), ('ن', 50), ('س', 60),
        ('ع', 70), ('ف', 80), ('ص', 90), ('ق', 100), ('ر', 200),
        ('ش', 300), ('ت', 400), ('ث', 500), ('خ', 600), ('ذ', 700),
        ('ض', 800), ('ظ', 900), ('غ', 1000),
    ]
    .into_iter()
    .collect()
});

/// Abjad (حساب الجُمَّل) value of a name: the sum of the mapped value of
/// every character. Unmapped characters (Latin letters, whitespace,
/// punctuation) contribute 0.
pub fn gematria_value(name: &str) -> u32 {
    name.chars().map(|c| ABJAD.get(&c).copied().unwrap_or(0)).sum()
}
