use super::domain::Industry;

/// Ordered keyword rules; the first rule with a hit wins.
const INDUSTRY_RULES: &[(Industry, &[&str])] = &[
    (
        Industry::AiMl,
        &[
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "computer vision",
            "generative ai",
            "genai",
            "llm",
            "ai/ml",
            "ai infra",
            "ai-native",
            "ai-powered",
            "neural network",
        ],
    ),
    (
        Industry::Fintech,
        &[
            "fintech", "payments", "banking", "lending", "insurtech", "neobank", "financial",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "healthcare", "health", "medical", "biotech", "clinical", "pharma", "patient",
        ],
    ),
    (
        Industry::Saas,
        &["saas", "b2b software", "enterprise software", "subscription software"],
    ),
    (
        Industry::Crypto,
        &["crypto", "blockchain", "web3", "defi", "bitcoin", "ethereum"],
    ),
];

/// Case-insensitive substring match against the ordered rules.
pub(crate) fn infer_industry(text: &str) -> Option<Industry> {
    let lowered = text.to_lowercase();
    INDUSTRY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(industry, _)| *industry)
}

/// Resolves the industry from an explicit label and the free text around it.
///
/// Returns `None` only when there is nothing at all to classify.
pub(crate) fn classify_industry(explicit: Option<&str>, text: &str) -> Option<Industry> {
    if let Some(label) = explicit {
        if let Some(industry) = Industry::from_label(label) {
            return Some(industry);
        }
        let combined = format!("{label} {text}");
        return Some(infer_industry(&combined).unwrap_or(Industry::Tech));
    }

    if text.trim().is_empty() {
        return None;
    }

    Some(infer_industry(text).unwrap_or(Industry::Tech))
}
