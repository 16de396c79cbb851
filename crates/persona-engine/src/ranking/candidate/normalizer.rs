use super::domain::{
    CandidateFeatures, CompanyRecord, ExperienceEntry, PersonRecord, SignalRecord,
};
use super::industry::classify_industry;

const HEADLINE_SEPARATORS: &[&str] = &[" at ", " @ ", " | ", " - ", ", "];

pub(crate) fn clean(value: Option<&str>) -> Option<String> {
    let value = value?.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| clean(Some(value)))
        .collect()
}

/// The part of a headline before the first standard separator.
pub(crate) fn headline_role(headline: &str) -> Option<String> {
    let cut = HEADLINE_SEPARATORS
        .iter()
        .filter_map(|separator| headline.find(separator))
        .min()
        .unwrap_or(headline.len());
    clean(Some(&headline[..cut]))
}

fn experience_phrase(entry: &ExperienceEntry) -> Option<String> {
    match (
        clean(entry.title.as_deref()),
        clean(entry.company.as_deref()),
    ) {
        (Some(title), Some(company)) => Some(format!("{title} at {company}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn join_pieces<I>(pieces: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pieces
        .into_iter()
        .flatten()
        .filter(|piece| !piece.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn joined_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(" "))
    }
}

fn classification_text(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|part| part.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn normalize_person(
    record: &PersonRecord,
    fallback_id: &str,
    max_past_organizations: usize,
) -> CandidateFeatures {
    let headline = clean(record.headline.as_deref());
    let about = clean(record.about.as_deref());
    let name = clean(record.name.as_deref());
    let tags = clean_list(&record.highlights);
    let current = record.experiences.iter().find(|entry| entry.is_current);

    let role = clean(record.title.as_deref())
        .or_else(|| current.and_then(|entry| clean(entry.title.as_deref())))
        .or_else(|| headline.as_deref().and_then(headline_role));

    let organization = clean(record.current_company.as_deref())
        .or_else(|| current.and_then(|entry| clean(entry.company.as_deref())));

    let past_organizations = record
        .experiences
        .iter()
        .filter(|entry| !entry.is_current)
        .filter_map(|entry| clean(entry.company.as_deref()))
        .take(max_past_organizations)
        .collect();

    let industry = classify_industry(
        clean(record.industry.as_deref()).as_deref(),
        &classification_text(&[&headline, &about]),
    );

    let embedding_text = join_pieces(
        [
            name.clone(),
            headline.clone(),
            about.clone(),
            joined_tags(&tags),
        ]
        .into_iter()
        .chain(record.experiences.iter().map(experience_phrase)),
    );

    CandidateFeatures {
        id: clean(record.id.as_deref()).unwrap_or_else(|| fallback_id.to_string()),
        name,
        role,
        industry,
        region: clean(record.location.as_deref()),
        organization,
        tags,
        past_organizations,
        signal_type: clean(record.signal_type.as_deref()),
        funding_stage: clean(record.funding_stage.as_deref()),
        embedding_text,
    }
}

pub(crate) fn normalize_company(record: &CompanyRecord, fallback_id: &str) -> CandidateFeatures {
    let name = clean(record.name.as_deref());
    let tagline = clean(record.tagline.as_deref());
    let description = clean(record.description.as_deref());
    let tags = clean_list(&record.tags);

    let industry = classify_industry(
        clean(record.industry.as_deref()).as_deref(),
        &classification_text(&[&tagline, &description]),
    );

    let embedding_text = join_pieces([
        name.clone(),
        tagline,
        description,
        joined_tags(&tags),
    ]);

    CandidateFeatures {
        id: clean(record.id.as_deref()).unwrap_or_else(|| fallback_id.to_string()),
        organization: name.clone(),
        name,
        role: None,
        industry,
        region: clean(record.location.as_deref()),
        tags,
        past_organizations: Vec::new(),
        signal_type: clean(record.signal_type.as_deref()),
        funding_stage: clean(record.funding_stage.as_deref()),
        embedding_text,
    }
}

pub(crate) fn normalize_signal(record: &SignalRecord, fallback_id: &str) -> CandidateFeatures {
    let name = clean(record.name.as_deref());
    let headline = clean(record.headline.as_deref());
    let description = clean(record.description.as_deref());
    let tags = clean_list(&record.tags);
    let title = clean(record.title.as_deref());
    let company = clean(record.company.as_deref());

    let role = title
        .clone()
        .or_else(|| headline.as_deref().and_then(headline_role));

    let industry = classify_industry(
        clean(record.industry.as_deref()).as_deref(),
        &classification_text(&[&headline, &description]),
    );

    let position = experience_phrase(&ExperienceEntry {
        title,
        company: company.clone(),
        is_current: true,
    });

    let embedding_text = join_pieces([
        name.clone(),
        headline,
        description,
        joined_tags(&tags),
        position,
    ]);

    CandidateFeatures {
        id: clean(record.id.as_deref()).unwrap_or_else(|| fallback_id.to_string()),
        name,
        role,
        industry,
        region: clean(record.location.as_deref()),
        organization: company,
        tags,
        past_organizations: Vec::new(),
        signal_type: clean(record.signal_type.as_deref()),
        funding_stage: clean(record.funding_stage.as_deref()),
        embedding_text,
    }
}
