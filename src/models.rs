//! Wire types for the matching backend.
//!
//! Field names follow the JSON the server sends. Scores are trusted to be
//! present and numeric; only contact and candidate text fields are optional.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// -- Identifiers --

/// Server-assigned job identifier.
///
/// The backend sends an integer, but the client only ever echoes it back
/// into URLs, so it is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => JobId(s),
            Raw::Number(n) => JobId(n.to_string()),
        })
    }
}

// -- /upload_resume --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One skill category as extracted by the server, e.g. `programming`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub experience_years: i64,
    /// Categories in the order the server listed them.
    #[serde(default, deserialize_with = "ordered_categories")]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedResume {
    #[serde(default)]
    pub candidate_id: Option<i64>,
    pub parsed_data: ParsedResume,
}

/// Deserialize a `{category: [skill, ...]}` object without losing key order.
fn ordered_categories<'de, D>(deserializer: D) -> Result<Vec<SkillCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoryVisitor;

    impl<'de> Visitor<'de> for CategoryVisitor {
        type Value = Vec<SkillCategory>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of skill category to skill list")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, skills)) = map.next_entry::<String, Vec<String>>()? {
                categories.push(SkillCategory { name, skills });
            }
            Ok(categories)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(CategoryVisitor)
}

// -- /upload_job_description --

/// Job description as submitted from the job form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_experience: i64,
    pub education_requirements: Vec<String>,
}

impl JobDraft {
    /// Build a draft from raw form text. `required_experience` falls back to 0
    /// when it does not start with an integer.
    pub fn from_fields(title: &str, company: &str, description: &str, required_experience: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            required_experience: parse_leading_int(required_experience).unwrap_or(0),
            education_requirements: Vec::new(),
        }
    }
}

/// Parse the integer prefix of `text`: leading whitespace, an optional sign,
/// then decimal digits. `"5 years"` gives 5, `"3.7"` gives 3, `"abc"` gives None.
/// Digit runs too long for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].bytes().fold(0i64, |acc, d| {
        let digit = i64::from(d - b'0');
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(digit)
        } else {
            acc.saturating_add(digit)
        }
    });
    Some(value)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedJob {
    pub job_id: JobId,
    #[serde(default)]
    pub extracted_skills: Vec<String>,
}

// -- /match_candidates/{id} --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartialMatch {
    pub jd_skill: String,
    pub resume_skill: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillMatch {
    /// Fraction of required skills covered, 0.0 to 1.0.
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub partial_matches: Vec<PartialMatch>,
    #[serde(default)]
    pub exact_matches: Option<usize>,
    #[serde(default)]
    pub total_required: Option<usize>,
}

/// Scores are percentages (0 to 100) except `skill_match.score`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub skill_match: SkillMatch,
    pub semantic_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidateMatch {
    pub candidate: Candidate,
    pub match_result: MatchResult,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobSummary {
    #[serde(default)]
    pub id: Option<JobId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchReport {
    #[serde(default)]
    pub matches: Vec<CandidateMatch>,
    pub job: JobSummary,
}
