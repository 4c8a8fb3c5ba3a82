//! Domain types for the Kuizmo study API: courses, modules, quiz questions,
//! per-user progress, and quiz attempt scoring.

#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;

pub use scoring::{AttemptError, QuizResult, score_attempt};
