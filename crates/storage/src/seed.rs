//! Demo fixture loaded into a fresh store at startup.

use kuizmo_core::model::{
    CourseDraft, CourseId, ModuleDraft, ModuleId, QuestionDraft, QuestionError, QuestionId,
};

use crate::store::RecordStore;

/// Ids of the records created by [`seed_demo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeed {
    pub course_id: CourseId,
    pub module_ids: Vec<ModuleId>,
    pub question_ids: Vec<QuestionId>,
}

/// Populate `store` with one demo course, two modules and two quiz questions.
///
/// # Errors
///
/// Returns `QuestionError` if a fixture question fails validation.
pub fn seed_demo(store: &mut RecordStore) -> Result<DemoSeed, QuestionError> {
    let course = store.create_course(
        CourseDraft::new(
            "Neural Networks Primer",
            "Master the foundations of neural networks with short lessons, \
             animations, and interactive quizzes.",
        )
        .with_tags(["machine-learning", "ai", "beginner"]),
    );
    let course_id = course.id();

    let module_ids = [
        ModuleDraft::new(
            "Perceptron Intuition",
            "Explore the history of the perceptron, how it models a linear \
             separator, and its connection to modern neural architectures.",
        ),
        ModuleDraft::new(
            "Activation Functions",
            "Survey sigmoid, ReLU, and GELU activations through intuitive \
             animations and real-world examples.",
        ),
    ]
    .into_iter()
    .map(|draft| store.create_module(course_id, draft).id())
    .collect();

    let questions = [
        QuestionDraft::new(
            "Which activation function is piecewise linear?",
            ["Sigmoid", "Tanh", "ReLU", "Softmax"],
            2,
        ),
        QuestionDraft::new(
            "What problem does the perceptron struggle with?",
            [
                "Linearly separable data",
                "Non-linear boundaries",
                "High bias",
                "Overfitting",
            ],
            1,
        ),
    ];
    let mut question_ids = Vec::with_capacity(questions.len());
    for draft in questions {
        let content = draft.validate()?;
        question_ids.push(store.create_question(course_id, content).id());
    }

    Ok(DemoSeed {
        course_id,
        module_ids,
        question_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_first_ids_of_each_type() {
        let mut store = RecordStore::new();
        let seed = seed_demo(&mut store).unwrap();

        assert_eq!(seed.course_id, CourseId::new(1));
        assert_eq!(seed.module_ids, [ModuleId::new(1), ModuleId::new(2)]);
        assert_eq!(seed.question_ids, [QuestionId::new(1), QuestionId::new(2)]);

        let answers: Vec<usize> = store
            .questions_for_course(seed.course_id)
            .map(|q| q.answer_index())
            .collect();
        assert_eq!(answers, [2, 1]);
        assert_eq!(
            store.course(seed.course_id).unwrap().tags(),
            ["machine-learning", "ai", "beginner"]
        );
    }
}
