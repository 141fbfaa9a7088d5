//! Assessment scoring — category aggregation and career-profile matching.
//!
//! Pure and deterministic apart from the fresh result id and timestamp, so
//! the whole pipeline is testable without a store or a server.

use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::assessment::catalog;
use crate::models::assessment::{Answer, AssessmentResult, CareerMatch, CareerProfile, Category};

/// A profile whose percentage reaches this is a strong match.
const STRONG_MATCH_THRESHOLD: i64 = 50;
/// Fallback matches never report below this.
const FALLBACK_FLOOR: i64 = 40;
/// Raw category-sum that maps to a 100% profile match.
const FULL_MATCH_SCORE: f64 = 15.0;
/// At most this many matches (and strengths) are reported.
const MAX_MATCHES: usize = 3;

const FALLBACK_PERSONALITY: &str = "Balanced Professional";

/// Scores a submission end to end and assembles the result document.
pub fn score_assessment(answers: &[Answer]) -> AssessmentResult {
    let category_scores = aggregate_scores(answers);
    let ranked = rank_categories(&category_scores);
    let career_matches = match_profiles(&category_scores);

    let personality_type = career_matches
        .first()
        .map(|m| m.title.clone())
        .unwrap_or_else(|| FALLBACK_PERSONALITY.to_string());

    AssessmentResult {
        id: Uuid::new_v4(),
        career_matches,
        personality_type,
        top_strengths: top_strengths(&ranked),
        timestamp: Utc::now(),
        category_scores,
    }
}

/// Sums answer values per category. Answers whose question id is not in the
/// catalog are ignored; categories nobody answered stay absent (not zero).
fn aggregate_scores(answers: &[Answer]) -> IndexMap<Category, i64> {
    let mut scores = IndexMap::new();
    for answer in answers {
        if let Some(question) = catalog::question_by_id(answer.question_id) {
            *scores.entry(question.category).or_insert(0) += i64::from(answer.value);
        }
    }
    scores
}

/// Categories by total, descending. The sort is stable, so ties keep the
/// order categories were first encountered in the answers.
fn rank_categories(scores: &IndexMap<Category, i64>) -> Vec<(Category, i64)> {
    let mut ranked: Vec<(Category, i64)> = scores.iter().map(|(c, s)| (*c, *s)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Percentage for one profile: the sum over its primary categories scaled so
/// that 15 points is 100%, truncated toward zero and capped at 100.
fn profile_percentage(scores: &IndexMap<Category, i64>, profile: &CareerProfile) -> i64 {
    let score: i64 = profile
        .primary_categories
        .iter()
        .map(|c| scores.get(c).copied().unwrap_or(0))
        .sum();
    (((score as f64 / FULL_MATCH_SCORE) * 100.0) as i64).min(100)
}

/// Two-pass selection over the profile catalog.
///
/// Pass 1 takes every strong match (>= 50%) with its true percentage. Pass 2
/// tops the list up to three from the remaining profiles in catalog order,
/// flooring their percentage at 40. The combined list is stable-sorted by
/// score, descending, and truncated to three.
fn match_profiles(scores: &IndexMap<Category, i64>) -> Vec<CareerMatch> {
    let profiles = catalog::profiles();
    let mut matches = Vec::new();
    let mut matched = vec![false; profiles.len()];

    for (i, profile) in profiles.iter().enumerate() {
        let pct = profile_percentage(scores, profile);
        if pct >= STRONG_MATCH_THRESHOLD {
            matches.push(CareerMatch::from_profile(profile, pct));
            matched[i] = true;
        }
    }

    if matches.len() < MAX_MATCHES {
        for (i, profile) in profiles.iter().enumerate() {
            if matched[i] {
                continue;
            }
            let pct = profile_percentage(scores, profile);
            matches.push(CareerMatch::from_profile(profile, pct.max(FALLBACK_FLOOR)));
            if matches.len() >= MAX_MATCHES {
                break;
            }
        }
    }

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(MAX_MATCHES);
    matches
}

/// Maps the top-ranked categories to strength labels. Categories without a
/// label are dropped, so fewer than three strengths is possible.
fn top_strengths(ranked: &[(Category, i64)]) -> Vec<String> {
    ranked
        .iter()
        .take(MAX_MATCHES)
        .filter_map(|(category, _)| catalog::strength_label(*category))
        .map(|label| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i32, value: i32) -> Answer {
        Answer { question_id, value }
    }

    #[test]
    fn test_category_totals_sum_to_answer_values() {
        // Known ids across four categories.
        let answers = vec![answer(1, 3), answer(3, 4), answer(5, 2), answer(7, 5)];
        let scores = aggregate_scores(&answers);
        let total: i64 = scores.values().sum();
        assert_eq!(total, 3 + 4 + 2 + 5);
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let answers = vec![answer(1, 5), answer(999, 100), answer(-4, 7)];
        let scores = aggregate_scores(&answers);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(&Category::Realistic), Some(&5));
    }

    #[test]
    fn test_categories_absent_when_unanswered() {
        let scores = aggregate_scores(&[answer(3, 4)]);
        assert!(!scores.contains_key(&Category::Realistic));
        assert_eq!(scores.get(&Category::Investigative), Some(&4));
    }

    #[test]
    fn test_builder_is_strong_match_at_full_realistic_conventional() {
        // 5+5 Realistic, 5+5 Conventional => Builder raw 20 => capped at 100.
        let answers = vec![answer(1, 5), answer(2, 5), answer(11, 5), answer(12, 5)];
        let result = score_assessment(&answers);

        assert_eq!(result.category_scores.get(&Category::Realistic), Some(&10));
        assert_eq!(
            result.category_scores.get(&Category::Conventional),
            Some(&10)
        );

        let top = &result.career_matches[0];
        assert_eq!(top.title, "The Builder");
        assert_eq!(top.match_score, 100);
        assert_eq!(result.personality_type, "The Builder");
    }

    #[test]
    fn test_empty_answers_fall_back_in_catalog_order() {
        let result = score_assessment(&[]);

        assert!(result.category_scores.is_empty());
        assert_eq!(result.career_matches.len(), 3);
        let titles: Vec<&str> = result
            .career_matches
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Innovator", "The Builder", "The Helper"]);
        assert!(result.career_matches.iter().all(|m| m.match_score == 40));
        assert_eq!(result.personality_type, "The Innovator");
        assert!(result.top_strengths.is_empty());
    }

    #[test]
    fn test_percentage_truncates_toward_zero() {
        // Realistic 7 => Builder 7/15*100 = 46.67, reported as 46 (not 47).
        let scores = aggregate_scores(&[answer(1, 7)]);
        let builder = &catalog::profiles()[1];
        assert_eq!(profile_percentage(&scores, builder), 46);
    }

    #[test]
    fn test_sub_threshold_profile_joins_via_fallback_with_true_score() {
        // Builder at 46% is below the strong threshold but above the floor,
        // so the fallback keeps its real percentage.
        let result = score_assessment(&[answer(1, 7)]);
        let builder = result
            .career_matches
            .iter()
            .find(|m| m.title == "The Builder")
            .unwrap();
        assert_eq!(builder.match_score, 46);
    }

    #[test]
    fn test_matches_sorted_descending_and_bounded() {
        let answers = vec![answer(3, 5), answer(4, 5), answer(11, 4), answer(12, 4)];
        let result = score_assessment(&answers);

        assert!(result.career_matches.len() <= 3);
        assert!(!result.career_matches.is_empty());
        for pair in result.career_matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for m in &result.career_matches {
            assert!((40..=100).contains(&m.match_score), "score {}", m.match_score);
        }
    }

    #[test]
    fn test_strengths_follow_category_ranking() {
        // Social 9 > Investigative 6 > Realistic 2.
        let answers = vec![answer(7, 5), answer(8, 4), answer(3, 6), answer(1, 2)];
        let result = score_assessment(&answers);
        assert_eq!(
            result.top_strengths,
            vec![
                "Interpersonal Skills",
                "Analytical Thinking",
                "Hands-on Problem Solving"
            ]
        );
    }

    #[test]
    fn test_unlabeled_categories_drop_out_of_strengths() {
        // Openness, Conscientiousness and Work Values rank first but carry
        // no label, so the strengths list comes up empty.
        let answers = vec![answer(16, 5), answer(18, 5), answer(20, 5)];
        let result = score_assessment(&answers);
        assert_eq!(result.category_scores.len(), 3);
        assert!(result.top_strengths.is_empty());
    }

    #[test]
    fn test_ranking_ties_keep_encounter_order() {
        // Conventional first in the answers, then Realistic, same totals.
        let answers = vec![answer(11, 5), answer(1, 5)];
        let ranked = rank_categories(&aggregate_scores(&answers));
        assert_eq!(ranked[0].0, Category::Conventional);
        assert_eq!(ranked[1].0, Category::Realistic);
    }

    #[test]
    fn test_resubmission_is_deterministic_apart_from_identity() {
        let answers = vec![answer(1, 5), answer(2, 5), answer(11, 5), answer(12, 5)];
        let first = score_assessment(&answers);
        let second = score_assessment(&answers);

        assert_ne!(first.id, second.id);
        assert_eq!(first.career_matches, second.career_matches);
        assert_eq!(first.personality_type, second.personality_type);
        assert_eq!(first.top_strengths, second.top_strengths);
    }

    #[test]
    fn test_negative_values_tolerated_and_floored_in_fallback() {
        // Values are unvalidated; a negative total still yields the 40 floor.
        let result = score_assessment(&[answer(1, -10)]);
        assert_eq!(result.career_matches.len(), 3);
        assert!(result.career_matches.iter().all(|m| m.match_score == 40));
    }
}
