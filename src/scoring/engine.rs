use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::answers::AnswerSequence;
use super::category::Category;
use super::clusters::{CareerCluster, MIXED_CLUSTER};
use super::combinations::blended_careers;
use super::questions::QuestionBank;

/// Secondary cluster must reach this share of the top score
pub const SECONDARY_RATIO: f64 = 0.8;
/// Categories within this many points of the top score count toward Mixed
pub const MIXED_MARGIN: f64 = 1.0;
/// Number of near-top categories (top included) that makes a result Mixed
pub const MIXED_MIN_COUNT: usize = 3;

/// 0-based index of the answer that can trigger the social/education bonus
pub const SOCIAL_BONUS_INDEX: usize = 9;
/// Bonus added to `d` when the last answer is `d` and `d` already ranks top 3
pub const SOCIAL_BONUS: f64 = 0.2;
const SOCIAL_BONUS_MAX_RANK: usize = 3;

/// Weighted tally per category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector {
    values: [f64; 6],
}

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn add(&mut self, category: Category, amount: f64) {
        self.values[category.index()] += amount;
    }

    /// Categories sorted by score descending. Equal scores keep a..f order.
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut ranked: Vec<(Category, f64)> =
            Category::ALL.iter().map(|c| (*c, self.get(*c))).collect();
        // sort_by is stable, so ties stay in declaration order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// 0-based rank of a category in [`ranked`](Self::ranked) order
    pub fn rank_of(&self, category: Category) -> usize {
        self.ranked()
            .iter()
            .position(|(c, _)| *c == category)
            .unwrap_or(Category::ALL.len())
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0_f64, f64::max)
    }
}

impl FromIterator<(Category, f64)> for ScoreVector {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        let mut scores = ScoreVector::new();
        for (category, amount) in iter {
            scores.add(category, amount);
        }
        scores
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            map.serialize_entry(&category, &self.get(category))?;
        }
        map.end()
    }
}

/// Which of the three result shapes the quiz produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizOutcome {
    /// One clear top category
    Single {
        category: Category,
        primary: &'static CareerCluster,
    },
    /// A top category with a close runner-up and careers that blend both
    Paired {
        category: Category,
        primary: &'static CareerCluster,
        secondary_category: Category,
        secondary: &'static CareerCluster,
        /// Empty when no combination is defined for the pair
        blended: Vec<&'static str>,
    },
    /// Three or more categories nearly tied
    Mixed { profile: &'static CareerCluster },
}

impl QuizOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            QuizOutcome::Single { .. } => "single",
            QuizOutcome::Paired { .. } => "paired",
            QuizOutcome::Mixed { .. } => "mixed",
        }
    }

    pub fn primary_category(&self) -> Option<Category> {
        match self {
            QuizOutcome::Single { category, .. } | QuizOutcome::Paired { category, .. } => {
                Some(*category)
            }
            QuizOutcome::Mixed { .. } => None,
        }
    }

    pub fn secondary_category(&self) -> Option<Category> {
        match self {
            QuizOutcome::Paired {
                secondary_category, ..
            } => Some(*secondary_category),
            _ => None,
        }
    }
}

/// Output of the scorer. Built once per completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub outcome: QuizOutcome,
    /// Final scores, after any adjustment
    pub scores: ScoreVector,
    /// True when the social/education bonus was added to `d`
    pub social_bonus_applied: bool,
}

impl QuizResult {
    /// Name shown as the headline and stored in history
    pub fn cluster_name(&self) -> String {
        match &self.outcome {
            QuizOutcome::Single { primary, .. } => primary.name.to_string(),
            QuizOutcome::Paired {
                primary, secondary, ..
            } => format!("{} + {}", primary.name, secondary.name),
            QuizOutcome::Mixed { profile } => profile.name.to_string(),
        }
    }

    pub fn cluster_description(&self) -> &'static str {
        match &self.outcome {
            QuizOutcome::Single { primary, .. } | QuizOutcome::Paired { primary, .. } => {
                primary.description
            }
            QuizOutcome::Mixed { profile } => profile.description,
        }
    }

    /// Careers to suggest: the blend for a pairing when one exists,
    /// otherwise the primary (or mixed) cluster's own list.
    pub fn careers(&self) -> Vec<&'static str> {
        match &self.outcome {
            QuizOutcome::Single { primary, .. } => primary.careers.to_vec(),
            QuizOutcome::Paired {
                primary, blended, ..
            } => {
                if blended.is_empty() {
                    primary.careers.to_vec()
                } else {
                    blended.clone()
                }
            }
            QuizOutcome::Mixed { profile } => profile.careers.to_vec(),
        }
    }
}

/// Weighted tally of the answers, before any adjustment.
pub fn tally(answers: &AnswerSequence, bank: &QuestionBank) -> ScoreVector {
    answers
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, category)| (*category, bank.weight_at(i)))
        .collect()
}

/// Social/education bonus. Returns true when it fired.
fn apply_social_bonus(scores: &mut ScoreVector, answers: &AnswerSequence) -> bool {
    if answers.get(SOCIAL_BONUS_INDEX) != Some(Category::D) {
        return false;
    }
    if scores.rank_of(Category::D) >= SOCIAL_BONUS_MAX_RANK {
        return false;
    }
    scores.add(Category::D, SOCIAL_BONUS);
    true
}

/// Rank a finished score vector into an outcome. Mixed wins over a secondary.
pub fn classify(scores: &ScoreVector) -> QuizOutcome {
    let ranked = scores.ranked();
    let (top, max) = ranked[0];

    let secondary_threshold = max * SECONDARY_RATIO;
    let secondary = ranked
        .iter()
        .skip(1)
        .find(|(_, score)| *score >= secondary_threshold)
        .map(|(category, _)| *category);

    let mixed_threshold = max - MIXED_MARGIN;
    let near_top = ranked
        .iter()
        .filter(|(_, score)| *score >= mixed_threshold)
        .count();

    if near_top >= MIXED_MIN_COUNT {
        return QuizOutcome::Mixed {
            profile: &MIXED_CLUSTER,
        };
    }

    match secondary {
        Some(second) => QuizOutcome::Paired {
            category: top,
            primary: top.cluster(),
            secondary_category: second,
            secondary: second.cluster(),
            blended: blended_careers(top, second)
                .map(|careers| careers.to_vec())
                .unwrap_or_default(),
        },
        None => QuizOutcome::Single {
            category: top,
            primary: top.cluster(),
        },
    }
}

/// Score a validated answer sequence.
///
/// Pure: no I/O, no shared state. `answers` must have been built against a
/// bank of the same length (see [`AnswerSequence::new`]).
pub fn score_answers(answers: &AnswerSequence, bank: &QuestionBank) -> QuizResult {
    let mut scores = tally(answers, bank);
    let social_bonus_applied = apply_social_bonus(&mut scores, answers);
    let outcome = classify(&scores);

    tracing::debug!(
        kind = outcome.kind(),
        social_bonus_applied,
        "scored {} answers",
        answers.len()
    );

    QuizResult {
        outcome,
        scores,
        social_bonus_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AnswerError, NORMAL_WEIGHT, WEIGHTED_WEIGHT};

    fn answers(codes: &str) -> AnswerSequence {
        AnswerSequence::parse(codes, 10).unwrap()
    }

    fn score(codes: &str) -> QuizResult {
        score_answers(&answers(codes), &QuestionBank::reference())
    }

    fn vector(values: [f64; 6]) -> ScoreVector {
        Category::ALL.iter().copied().zip(values).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_all_a_is_single_technology() {
        let result = score("aaaaaaaaaa");
        assert!(approx(result.scores.get(Category::A), 11.0));
        for other in [Category::B, Category::C, Category::D, Category::E, Category::F] {
            assert_eq!(result.scores.get(other), 0.0);
        }
        match result.outcome {
            QuizOutcome::Single { category, primary } => {
                assert_eq!(category, Category::A);
                assert_eq!(primary.name, "Technology & Engineering");
            }
            other => panic!("expected single outcome, got {other:?}"),
        }
        assert!(!result.social_bonus_applied);
    }

    #[test]
    fn test_all_identical_answers_are_single() {
        for category in Category::ALL {
            let codes: String = std::iter::repeat(category.code()).take(10).collect();
            let result = score(&codes);

            let expected = if category == Category::D {
                11.0 + SOCIAL_BONUS
            } else {
                11.0
            };
            assert!(approx(result.scores.get(category), expected));
            assert_eq!(result.outcome.primary_category(), Some(category));
            assert_eq!(result.outcome.kind(), "single");
        }
    }

    #[test]
    fn test_weighted_position_adds_half_point() {
        let bank = QuestionBank::reference();
        // 'b' at position 2 (unweighted) vs position 3 (weighted)
        let unweighted = tally(&answers("abaaaaaaaa"), &bank);
        let weighted = tally(&answers("aabaaaaaaa"), &bank);
        assert_eq!(unweighted.get(Category::B), NORMAL_WEIGHT);
        assert_eq!(weighted.get(Category::B), WEIGHTED_WEIGHT);
        assert!(approx(weighted.get(Category::B) - unweighted.get(Category::B), 0.5));
    }

    #[test]
    fn test_social_bonus_fires_when_d_in_top_three() {
        // a=6.5, d=1.5 (weighted last answer), b=c=e=1
        let result = score("aaaaaabced");
        assert!(result.social_bonus_applied);
        assert!(approx(result.scores.get(Category::D), 1.5 + SOCIAL_BONUS));
        assert_eq!(result.outcome.primary_category(), Some(Category::A));
    }

    #[test]
    fn test_social_bonus_skipped_when_d_ranks_fourth() {
        // b=3.5, a=3, c=3, d=1.5
        let result = score("aabbccabcd");
        assert!(!result.social_bonus_applied);
        assert!(approx(result.scores.get(Category::D), 1.5));
    }

    #[test]
    fn test_social_bonus_needs_d_as_last_answer() {
        let result = score("ddddddddda");
        assert!(!result.social_bonus_applied);
        assert!(approx(result.scores.get(Category::D), 9.5));
    }

    #[test]
    fn test_bonus_only_for_d() {
        // Last answer 'e' with e on top never gets a bonus
        let result = score("eeeeeeeeee");
        assert!(!result.social_bonus_applied);
        assert!(approx(result.scores.get(Category::E), 11.0));
    }

    #[test]
    fn test_tie_resolves_to_earlier_category() {
        // a=4.5, b=4.5, c=2
        let result = score("aababbbcca");
        assert!(approx(result.scores.get(Category::A), 4.5));
        assert!(approx(result.scores.get(Category::B), 4.5));
        assert_eq!(result.outcome.primary_category(), Some(Category::A));

        // Same scores with the letters swapped in the sequence
        let swapped = score("bbabaaaccb");
        assert!(approx(swapped.scores.get(Category::B), 4.5));
        assert_eq!(swapped.outcome.primary_category(), Some(Category::A));
    }

    #[test]
    fn test_ranked_is_stable_for_equal_scores() {
        let ranked = vector([1.0, 2.0, 2.0, 0.0, 2.0, 0.0]).ranked();
        let order: Vec<Category> = ranked.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::B,
                Category::C,
                Category::E,
                Category::A,
                Category::D,
                Category::F
            ]
        );
    }

    #[test]
    fn test_mixed_takes_precedence_over_secondary() {
        // b=3.5, a=3, c=3: a qualifies as secondary (>= 2.8) but three are within 1 point
        let result = score("aabbccabcd");
        assert!(matches!(result.outcome, QuizOutcome::Mixed { .. }));
        assert_eq!(result.outcome.secondary_category(), None);
        assert_eq!(result.cluster_name(), MIXED_CLUSTER.name);
        assert!(!result.careers().is_empty());
    }

    #[test]
    fn test_classify_primary_and_secondary() {
        let outcome = classify(&vector([5.0, 4.2, 1.0, 1.0, 1.0, 1.0]));
        match outcome {
            QuizOutcome::Paired {
                category,
                secondary_category,
                ref blended,
                ..
            } => {
                assert_eq!(category, Category::A);
                assert_eq!(secondary_category, Category::B);
                assert_eq!(
                    blended.as_slice(),
                    blended_careers(Category::A, Category::B).unwrap()
                );
            }
            other => panic!("expected paired outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_secondary_threshold_is_inclusive() {
        let outcome = classify(&vector([5.0, 4.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(outcome.secondary_category(), Some(Category::B));

        let outcome = classify(&vector([5.0, 3.9, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(outcome.kind(), "single");
    }

    #[test]
    fn test_classify_mixed_threshold_is_inclusive() {
        let outcome = classify(&vector([5.0, 4.0, 4.0, 0.0, 0.0, 0.0]));
        assert_eq!(outcome.kind(), "mixed");
    }

    #[test]
    fn test_combination_symmetry_through_scoring() {
        // a=4, e=3.5 and the mirror e=4, a=3.5
        let ae = score("aaeaaeebcf");
        let ea = score("eeaeeaabcf");

        assert_eq!(ae.outcome.primary_category(), Some(Category::A));
        assert_eq!(ae.outcome.secondary_category(), Some(Category::E));
        assert_eq!(ea.outcome.primary_category(), Some(Category::E));
        assert_eq!(ea.outcome.secondary_category(), Some(Category::A));
        assert_eq!(ae.careers(), ea.careers());
    }

    #[test]
    fn test_paired_result_names_both_clusters() {
        let result = score("aaeaaeebcf");
        assert_eq!(result.cluster_name(), "Technology & Engineering + Creative & Media");
        assert_eq!(result.cluster_description(), Category::A.cluster().description);
    }

    #[test]
    fn test_score_rejected_before_scoring() {
        let err = AnswerSequence::parse("aaaaaaaaa", 10).unwrap_err();
        assert!(matches!(err, AnswerError::WrongLength { expected: 10, actual: 9 }));
    }

    #[test]
    fn test_result_serializes_with_kind_tag() {
        let result = score("aaaaaaaaaa");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"]["kind"], "single");
        assert_eq!(json["outcome"]["category"], "a");
        assert_eq!(json["scores"]["a"], 11.0);
        assert_eq!(json["scores"]["f"], 0.0);
    }
}
