//! View-models for the result sections.
//!
//! Everything here is a pure function of the server payload, so the same
//! response always produces the same markup once the components render it.

use crate::models::{CandidateMatch, MatchReport, ParsedResume};

const BYTES_PER_MIB: f64 = 1_048_576.0;

pub const NOT_FOUND: &str = "Not found";
pub const NO_CANDIDATES: &str = "No candidates found. Upload some resumes first!";

/// Keep `value` when it carries text, otherwise use `fallback`.
fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Format a percentage with at most two decimals and no trailing zeros.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

// -- File selection --

/// Name and size of the file picked in the resume drop zone.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: u64,
}

impl FileSummary {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in mebibytes with two decimals, halves rounded up.
    pub fn size_mib(&self) -> String {
        let mib = self.size_bytes as f64 / BYTES_PER_MIB;
        format!("{:.2}", (mib * 100.0).round() / 100.0)
    }

    pub fn label(&self) -> String {
        format!("{} ({} MB)", self.name, self.size_mib())
    }
}

// -- Resume --

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSummary {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience: String,
    /// Every extracted skill, categories flattened in server order.
    pub skills: Vec<String>,
    pub education: Vec<String>,
}

impl ResumeSummary {
    pub fn from_parsed(parsed: &ParsedResume) -> Self {
        let contact = &parsed.contact_info;
        Self {
            email: text_or(contact.email.as_deref(), NOT_FOUND),
            phone: text_or(contact.phone.as_deref(), NOT_FOUND),
            location: text_or(contact.location.as_deref(), NOT_FOUND),
            experience: format!("{} years", parsed.experience_years),
            skills: parsed
                .skills
                .iter()
                .flat_map(|category| category.skills.iter().cloned())
                .collect(),
            education: parsed.education.clone(),
        }
    }
}

// -- Matches --

/// Colour band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            ScoreTier::High => "text-green-600",
            ScoreTier::Mid => "text-yellow-600",
            ScoreTier::Low => "text-red-600",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ScoreTier::High => "Excellent match!",
            ScoreTier::Mid => "Good match with some areas for development.",
            ScoreTier::Low => "Fair match with significant skill gaps.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub label: &'static str,
    pub percent: String,
    pub text_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateCard {
    pub name: String,
    pub email: String,
    pub location: String,
    pub overall: String,
    pub tier: ScoreTier,
    pub breakdown: Vec<SubScore>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: Option<String>,
}

impl CandidateCard {
    pub fn from_match(m: &CandidateMatch) -> Self {
        let candidate = &m.candidate;
        let result = &m.match_result;
        let skills = &result.skill_match;
        let tier = ScoreTier::from_score(result.overall_score);

        let explanation = match (skills.exact_matches, skills.total_required) {
            (Some(exact), Some(total)) => {
                let mut text = format!(
                    "{} The candidate matches {} out of {} required skills exactly",
                    tier.verdict(),
                    exact,
                    total
                );
                if !skills.partial_matches.is_empty() {
                    text.push_str(&format!(
                        " and has partial matches for {} additional skills",
                        skills.partial_matches.len()
                    ));
                }
                text.push('.');
                Some(text)
            }
            _ => None,
        };

        Self {
            name: text_or(candidate.name.as_deref(), "Unknown"),
            email: text_or(candidate.email.as_deref(), "No email"),
            location: text_or(candidate.location.as_deref(), "Location not specified"),
            overall: format_percent(result.overall_score),
            tier,
            breakdown: vec![
                SubScore {
                    label: "Skills",
                    percent: format_percent(skills.score * 100.0),
                    text_class: "text-blue-600",
                },
                SubScore {
                    label: "Semantic",
                    percent: format_percent(result.semantic_score),
                    text_class: "text-purple-600",
                },
                SubScore {
                    label: "Experience",
                    percent: format_percent(result.experience_score),
                    text_class: "text-orange-600",
                },
                SubScore {
                    label: "Education",
                    percent: format_percent(result.education_score),
                    text_class: "text-teal-600",
                },
            ],
            matched_skills: skills.matched_skills.clone(),
            missing_skills: skills.missing_skills.clone(),
            explanation,
        }
    }
}

/// Header plus one card per candidate, in the order the server ranked them.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBoard {
    pub heading: String,
    pub found: String,
    pub cards: Vec<CandidateCard>,
}

impl MatchBoard {
    pub fn from_report(report: &MatchReport) -> Self {
        Self {
            heading: format!("{} at {}", report.job.title, report.job.company),
            found: format!("Found {} candidates", report.matches.len()),
            cards: report.matches.iter().map(CandidateCard::from_match).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Candidate, ContactInfo, JobSummary, MatchResult, PartialMatch, SkillCategory, SkillMatch,
    };

    fn candidate_match(name: &str, overall: f64, skill_score: f64) -> CandidateMatch {
        CandidateMatch {
            candidate: Candidate {
                id: Some(1),
                name: Some(name.to_string()),
                email: None,
                phone: None,
                location: Some("Lisbon".to_string()),
                experience_years: Some(3),
            },
            match_result: MatchResult {
                overall_score: overall,
                skill_match: SkillMatch {
                    score: skill_score,
                    matched_skills: vec!["python".to_string()],
                    missing_skills: vec!["kubernetes".to_string()],
                    partial_matches: Vec::new(),
                    exact_matches: None,
                    total_required: None,
                },
                semantic_score: 42.5,
                experience_score: 100.0,
                education_score: 0.0,
            },
        }
    }

    fn report(matches: Vec<CandidateMatch>) -> MatchReport {
        MatchReport {
            matches,
            job: JobSummary {
                id: None,
                title: "Data Engineer".to_string(),
                company: "Acme".to_string(),
            },
        }
    }

    #[test]
    fn test_file_summary_size_and_label() {
        let file = FileSummary::new("cv.pdf", 1_572_864);
        assert_eq!(file.size_mib(), "1.50");
        assert_eq!(file.label(), "cv.pdf (1.50 MB)");

        assert_eq!(FileSummary::new("empty.docx", 0).size_mib(), "0.00");
        assert_eq!(FileSummary::new("tiny.pdf", 5_243).size_mib(), "0.01");
        assert_eq!(FileSummary::new("big.pdf", 16 * 1_048_576).size_mib(), "16.00");

        // 0.125 and 0.625 MiB are exact halves
        assert_eq!(FileSummary::new("cv.pdf", 131_072).size_mib(), "0.13");
        assert_eq!(FileSummary::new("cv.pdf", 655_360).size_mib(), "0.63");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(75.0), "75");
        assert_eq!(format_percent(85.5), "85.5");
        assert_eq!(format_percent(61.234), "61.23");
        assert_eq!(format_percent(0.7 * 100.0), "70");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(100.0), "100");
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(85.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(79.99), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(79.0), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(59.0), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Low);
    }

    #[test]
    fn test_resume_summary_fallbacks() {
        let parsed = ParsedResume {
            contact_info: ContactInfo {
                email: Some(String::new()),
                phone: Some("+1 555 0100".to_string()),
                location: None,
            },
            experience_years: 6,
            skills: vec![
                SkillCategory {
                    name: "programming".to_string(),
                    skills: vec!["python".to_string(), "rust".to_string()],
                },
                SkillCategory {
                    name: "soft".to_string(),
                    skills: Vec::new(),
                },
                SkillCategory {
                    name: "cloud".to_string(),
                    skills: vec!["aws".to_string()],
                },
            ],
            education: vec!["BSc Computer Science".to_string()],
        };

        let summary = ResumeSummary::from_parsed(&parsed);
        assert_eq!(summary.email, NOT_FOUND);
        assert_eq!(summary.phone, "+1 555 0100");
        assert_eq!(summary.location, NOT_FOUND);
        assert_eq!(summary.experience, "6 years");
        assert_eq!(summary.skills, vec!["python", "rust", "aws"]);
        assert_eq!(summary.education.len(), 1);
    }

    #[test]
    fn test_candidate_card_scores() {
        let card = CandidateCard::from_match(&candidate_match("Ada", 85.0, 0.75));
        assert_eq!(card.name, "Ada");
        assert_eq!(card.email, "No email");
        assert_eq!(card.location, "Lisbon");
        assert_eq!(card.overall, "85");
        assert_eq!(card.tier, ScoreTier::High);

        let percents: Vec<&str> = card.breakdown.iter().map(|s| s.percent.as_str()).collect();
        assert_eq!(percents, vec!["75", "42.5", "100", "0"]);
        let labels: Vec<&str> = card.breakdown.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Skills", "Semantic", "Experience", "Education"]);

        assert_eq!(card.matched_skills, vec!["python"]);
        assert_eq!(card.missing_skills, vec!["kubernetes"]);
        assert!(card.explanation.is_none());
    }

    #[test]
    fn test_candidate_card_explanation() {
        let mut m = candidate_match("Grace", 65.0, 0.5);
        m.match_result.skill_match.exact_matches = Some(3);
        m.match_result.skill_match.total_required = Some(4);
        m.match_result.skill_match.partial_matches = vec![PartialMatch {
            jd_skill: "postgres".to_string(),
            resume_skill: "postgresql".to_string(),
        }];

        let card = CandidateCard::from_match(&m);
        assert_eq!(
            card.explanation.as_deref(),
            Some(
                "Good match with some areas for development. The candidate matches 3 out of 4 \
                 required skills exactly and has partial matches for 1 additional skills."
            )
        );
    }

    #[test]
    fn test_match_board_empty() {
        let board = MatchBoard::from_report(&report(Vec::new()));
        assert!(board.is_empty());
        assert_eq!(board.heading, "Data Engineer at Acme");
        assert_eq!(board.found, "Found 0 candidates");
    }

    #[test]
    fn test_match_board_keeps_server_order() {
        let board = MatchBoard::from_report(&report(vec![
            candidate_match("Low", 40.0, 0.1),
            candidate_match("High", 90.0, 0.9),
        ]));
        let names: Vec<&str> = board.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "High"]);
        assert_eq!(board.found, "Found 2 candidates");
    }

    #[test]
    fn test_render_is_deterministic() {
        let r = report(vec![candidate_match("Ada", 72.0, 0.6)]);
        assert_eq!(MatchBoard::from_report(&r), MatchBoard::from_report(&r));
    }
}
