use super::domain::{ExperienceEntry, PersonRecord};
use super::RawCandidate;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// Failures while reading candidate exports from disk.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read candidate export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid candidate JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads candidate exports into raw records.
pub struct CandidateImporter;

impl CandidateImporter {
    /// Loads `.csv` files as contact exports and everything else as a JSON array.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawCandidate>, ImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<RawCandidate>, ImportError> {
        let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Ok(values.into_iter().map(RawCandidate::from_value).collect())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<RawCandidate>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates = Vec::new();

        for (index, record) in csv_reader.deserialize::<ContactRow>().enumerate() {
            let row = record?;
            candidates.push(RawCandidate::Person(row.into_person(index + 1)));
        }

        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct ContactRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(rename = "Company", default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(rename = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(rename = "Industry", default, deserialize_with = "empty_string_as_none")]
    industry: Option<String>,
    #[serde(rename = "Headline", default, deserialize_with = "empty_string_as_none")]
    headline: Option<String>,
    #[serde(rename = "About", default, deserialize_with = "empty_string_as_none")]
    about: Option<String>,
    #[serde(rename = "Tags", default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(
        rename = "Past Companies",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    past_companies: Option<String>,
}

impl ContactRow {
    fn into_person(self, row_number: usize) -> PersonRecord {
        let mut experiences = Vec::new();
        if self.title.is_some() || self.company.is_some() {
            experiences.push(ExperienceEntry {
                title: self.title.clone(),
                company: self.company.clone(),
                is_current: true,
            });
        }
        experiences.extend(split_list(self.past_companies.as_deref()).into_iter().map(
            |company| ExperienceEntry {
                title: None,
                company: Some(company),
                is_current: false,
            },
        ));

        PersonRecord {
            id: Some(self.id.unwrap_or_else(|| format!("row-{row_number}"))),
            name: self.name,
            headline: self.headline,
            about: self.about,
            title: self.title,
            industry: self.industry,
            location: self.location,
            current_company: self.company,
            experiences,
            highlights: split_list(self.tags.as_deref()),
            signal_type: None,
            funding_stage: None,
        }
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(';')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
