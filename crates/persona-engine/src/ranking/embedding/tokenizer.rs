/// Tokens this short carry no signal and are dropped.
const MIN_TOKEN_CHARS: usize = 3;

/// Lowercases, splits on any non-alphanumeric run and drops tokens of two characters or fewer.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_drops_short_tokens() {
        let tokens = tokenize("CTO @ Ledgerly | ex-Stripe, AI/ML infra");
        assert_eq!(tokens, vec!["cto", "ledgerly", "stripe", "infra"]);
    }

    #[test]
    fn empty_and_symbol_only_text_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- || ").is_empty());
    }
}
