use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the fixed interest/personality dimensions questions are tagged with.
///
/// Serializes as its display string, including as a `category_scores` map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
    Extraversion,
    Introversion,
    Openness,
    Conscientiousness,
    #[serde(rename = "Work Values")]
    WorkValues,
}

/// A catalog question. The catalog is compiled in, so text fields borrow
/// from the binary.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i32,
    pub text: &'static str,
    pub category: Category,
    pub subcategory: &'static str,
}

/// A single submitted rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: i32,
    /// Raw rating as submitted. The range is intentionally unchecked.
    pub value: i32,
}

/// A predefined career archetype matched against category totals.
#[derive(Debug)]
pub struct CareerProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub sample_careers: &'static [&'static str],
    pub primary_categories: &'static [Category],
}

/// A profile match embedded in an [`AssessmentResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    pub match_score: i64,
    pub description: String,
    pub traits: Vec<String>,
    pub sample_careers: Vec<String>,
}

impl CareerMatch {
    pub fn from_profile(profile: &CareerProfile, match_score: i64) -> Self {
        Self {
            title: profile.title.to_string(),
            match_score,
            description: profile.description.to_string(),
            traits: profile.traits.iter().map(|t| t.to_string()).collect(),
            sample_careers: profile
                .sample_careers
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// The full persisted outcome of one submission. Immutable once stored.
///
/// `category_scores` keeps insertion order — the order categories were first
/// encountered while aggregating answers — so ranking ties stay deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub career_matches: Vec<CareerMatch>,
    pub personality_type: String,
    pub top_strengths: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub category_scores: IndexMap<Category, i64>,
}
