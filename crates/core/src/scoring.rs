use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{QuestionId, QuizQuestion};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("No quiz questions available")]
    NoQuestions,
    #[error("Answer count mismatch")]
    AnswerCountMismatch { expected: usize, submitted: usize },
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// Outcome of grading one quiz attempt.
///
/// # Examples
///
/// ```
/// # use kuizmo_core::scoring::QuizResult;
/// let result = QuizResult::default();
/// assert_eq!(result.score, 0);
/// assert!(result.correct_question_ids.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    /// Ids of correctly answered questions, in question order.
    pub correct_question_ids: Vec<QuestionId>,
}

/// Grade `answers` positionally against `questions`.
///
/// `questions` must be in course creation order; the i-th answer is compared
/// with the i-th question's `answer_index`.
///
/// # Errors
///
/// Returns `AttemptError::NoQuestions` when the course has no questions.
/// Returns `AttemptError::AnswerCountMismatch` when the lengths differ.
pub fn score_attempt(
    questions: &[QuizQuestion],
    answers: &[i64],
) -> Result<QuizResult, AttemptError> {
    if questions.is_empty() {
        return Err(AttemptError::NoQuestions);
    }
    if answers.len() != questions.len() {
        return Err(AttemptError::AnswerCountMismatch {
            expected: questions.len(),
            submitted: answers.len(),
        });
    }

    let correct_question_ids: Vec<QuestionId> = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(**answer))
        .map(|(question, _)| question.id())
        .collect();

    Ok(QuizResult {
        score: correct_question_ids.len(),
        total: questions.len(),
        correct_question_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseId, QuestionDraft};

    fn question(id: u64, answer_index: i64) -> QuizQuestion {
        QuestionDraft::new("Q", ["A", "B", "C", "D"], answer_index)
            .validate()
            .unwrap()
            .assign_id(QuestionId::new(id), CourseId::new(1))
    }

    #[test]
    fn all_correct() {
        let questions = [question(1, 2), question(2, 1)];
        let result = score_attempt(&questions, &[2, 1]).unwrap();
        assert_eq!(
            result,
            QuizResult {
                score: 2,
                total: 2,
                correct_question_ids: vec![QuestionId::new(1), QuestionId::new(2)],
            }
        );
    }

    #[test]
    fn partial_credit_keeps_question_order() {
        let questions = [question(1, 2), question(2, 1)];
        let result = score_attempt(&questions, &[0, 1]).unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.correct_question_ids, vec![QuestionId::new(2)]);
    }

    #[test]
    fn out_of_range_answers_just_score_zero() {
        let questions = [question(5, 0)];
        let result = score_attempt(&questions, &[99]).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.correct_question_ids.is_empty());
    }

    #[test]
    fn empty_question_set_is_rejected() {
        assert_eq!(score_attempt(&[], &[]), Err(AttemptError::NoQuestions));
    }

    #[test]
    fn answer_count_must_match() {
        let questions = [question(1, 0), question(2, 0)];
        assert_eq!(
            score_attempt(&questions, &[0]),
            Err(AttemptError::AnswerCountMismatch {
                expected: 2,
                submitted: 1
            })
        );
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = QuizResult {
            score: 1,
            total: 2,
            correct_question_ids: vec![QuestionId::new(2)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "score": 1, "total": 2, "correct_question_ids": [2] })
        );
    }
}
