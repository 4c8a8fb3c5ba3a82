use std::sync::Arc;

use kuizmo_core::model::{CourseId, QuestionDraft, QuestionId, QuizQuestion};
use kuizmo_core::scoring::{QuizResult, score_attempt};
use storage::repository::{CourseRepository, QuizRepository};
use tracing::debug;

use crate::error::QuizServiceError;

/// Quiz question CRUD and attempt grading for a course.
#[derive(Clone)]
pub struct QuizService {
    courses: Arc<dyn CourseRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { courses, quizzes }
    }

    /// # Errors
    ///
    /// Returns `QuizServiceError::CourseNotFound` when the course does not exist.
    /// Returns `QuizServiceError::Storage` if repository access fails.
    pub async fn list_questions(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<QuizQuestion>, QuizServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        Ok(self.quizzes.list_questions(course_id).await?)
    }

    /// Validate and store a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::CourseNotFound` when the course does not exist.
    /// Returns `QuizServiceError::InvalidQuestion` if the draft fails validation;
    /// nothing is stored in that case.
    /// Returns `QuizServiceError::Storage` if persistence fails.
    pub async fn create_question(
        &self,
        course_id: CourseId,
        draft: QuestionDraft,
    ) -> Result<QuizQuestion, QuizServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        let content = draft.validate()?;
        let question = self.quizzes.insert_question(course_id, content).await?;
        debug!(course_id = %course_id, question_id = %question.id(), "quiz question created");
        Ok(question)
    }

    /// Fetch a question that belongs to `course_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::CourseNotFound` when the course does not exist.
    /// Returns `QuizServiceError::QuestionNotFound` when the question is missing
    /// or filed under another course.
    /// Returns `QuizServiceError::Storage` if repository access fails.
    pub async fn get_question(
        &self,
        course_id: CourseId,
        question_id: QuestionId,
    ) -> Result<QuizQuestion, QuizServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        self.quizzes
            .get_question(question_id)
            .await?
            .filter(|question| question.belongs_to(course_id))
            .ok_or(QuizServiceError::QuestionNotFound(question_id))
    }

    /// # Errors
    ///
    /// Lookup failures as [`QuizService::get_question`], then
    /// `QuizServiceError::InvalidQuestion` if the draft fails validation.
    pub async fn update_question(
        &self,
        course_id: CourseId,
        question_id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<QuizQuestion, QuizServiceError> {
        self.get_question(course_id, question_id).await?;
        let content = draft.validate()?;
        let question = self.quizzes.update_question(question_id, content).await?;
        debug!(course_id = %course_id, question_id = %question_id, "quiz question updated");
        Ok(question)
    }

    /// # Errors
    ///
    /// Same lookup failures as [`QuizService::get_question`].
    pub async fn delete_question(
        &self,
        course_id: CourseId,
        question_id: QuestionId,
    ) -> Result<(), QuizServiceError> {
        self.get_question(course_id, question_id).await?;
        if !self.quizzes.delete_question(question_id).await? {
            return Err(QuizServiceError::QuestionNotFound(question_id));
        }
        debug!(course_id = %course_id, question_id = %question_id, "quiz question deleted");
        Ok(())
    }

    /// Grade submitted option indices against the course's questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::CourseNotFound` when the course does not exist.
    /// Returns `QuizServiceError::Attempt` when the course has no questions or
    /// the answer count differs from the question count.
    pub async fn attempt(
        &self,
        course_id: CourseId,
        answers: &[i64],
    ) -> Result<QuizResult, QuizServiceError> {
        crate::require_course(self.courses.as_ref(), course_id).await?;
        let questions = self.quizzes.list_questions(course_id).await?;
        let result = score_attempt(&questions, answers)?;
        debug!(
            course_id = %course_id,
            score = result.score,
            total = result.total,
            "quiz attempt graded"
        );
        Ok(result)
    }
}
