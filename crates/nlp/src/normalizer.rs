//! Text normalization: lowercase plus chat-shorthand expansion.

/// Canonical spelling for common informal tokens.
fn correction(word: &str) -> Option<&'static str> {
    let fixed = match word {
        "wat" | "wht" => "what",
        "hw" => "how",
        "y" => "why",
        "cuz" | "bc" => "because",
        "u" => "you",
        "r" => "are",
        "ur" => "your",
        "plz" | "pls" => "please",
        _ => return None,
    };
    Some(fixed)
}

/// Lowercase every whitespace-separated word, replace known shorthand, and
/// rejoin with single spaces.
///
/// Never fails; blank input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            match correction(&lower) {
                Some(fixed) => fixed.to_string(),
                None => lower,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
