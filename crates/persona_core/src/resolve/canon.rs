//! Comparison keys for free-text champion input

/// Lowercase `input` and keep only ASCII letters and digits.
///
/// Total over all input; anything else (spaces, punctuation, accented
/// letters) is dropped, so `"Kha'Zix"` and `"kha zix"` both become `"khazix"`.
pub fn canonicalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
