use kuizmo_core::model::{CourseDraft, ModuleDraft, QuestionDraft};
use services::{AppServices, CourseServiceError, ModuleServiceError, ProgressServiceError};
use storage::repository::Storage;
use storage::seed::seed_demo;
use storage::store::RecordStore;

#[tokio::test]
async fn study_flow_course_module_quiz_progress_then_cascade() {
    let services = AppServices::in_memory();

    let course = services
        .courses()
        .create_course(CourseDraft::new("Rust", "Ownership and borrowing").with_tags(["systems"]))
        .await
        .expect("create course");
    let intro = services
        .modules()
        .create_module(course.id(), ModuleDraft::new("Intro", "Moves"))
        .await
        .expect("create module");
    let question = services
        .quizzes()
        .create_question(course.id(), QuestionDraft::new("Borrow?", ["&", "*"], 0))
        .await
        .expect("create question");

    let progress = services
        .progress()
        .record_completion("ada", course.id(), intro.id())
        .await
        .expect("record completion");
    assert_eq!(progress.completed_module_ids(), [intro.id()]);

    let result = services
        .quizzes()
        .attempt(course.id(), &[0])
        .await
        .expect("attempt");
    assert_eq!((result.score, result.total), (1, 1));
    assert_eq!(result.correct_question_ids, vec![question.id()]);

    services
        .courses()
        .delete_course(course.id())
        .await
        .expect("delete course");

    let err = services.courses().get_course(course.id()).await.unwrap_err();
    assert!(matches!(err, CourseServiceError::NotFound(_)));
    let err = services.modules().list_modules(course.id()).await.unwrap_err();
    assert!(matches!(err, ModuleServiceError::CourseNotFound(_)));
    let err = services
        .progress()
        .get_progress("ada", course.id())
        .await
        .unwrap_err();
    assert!(matches!(err, ProgressServiceError::CourseNotFound(_)));
}

#[tokio::test]
async fn deleting_a_module_clears_it_from_progress() {
    let services = AppServices::in_memory();
    let course = services
        .courses()
        .create_course(CourseDraft::new("Go", "Channels"))
        .await
        .expect("create course");
    let first = services
        .modules()
        .create_module(course.id(), ModuleDraft::new("One", "1"))
        .await
        .expect("module one");
    let second = services
        .modules()
        .create_module(course.id(), ModuleDraft::new("Two", "2"))
        .await
        .expect("module two");

    for user in ["ada", "bob"] {
        for module in [&first, &second] {
            services
                .progress()
                .record_completion(user, course.id(), module.id())
                .await
                .expect("record completion");
        }
    }

    services
        .modules()
        .delete_module(course.id(), first.id())
        .await
        .expect("delete module");

    for user in ["ada", "bob"] {
        let progress = services
            .progress()
            .get_progress(user, course.id())
            .await
            .expect("get progress");
        assert_eq!(progress.completed_module_ids(), [second.id()]);
    }

    let err = services
        .progress()
        .record_completion("ada", course.id(), first.id())
        .await
        .unwrap_err();
    assert!(matches!(err, ProgressServiceError::ModuleNotFound(_)));
}

#[tokio::test]
async fn seeded_quiz_grades_demo_answers() {
    let mut store = RecordStore::default();
    let demo = seed_demo(&mut store).expect("seed demo");
    let services = AppServices::new(&Storage::from_store(store));

    let courses = services.courses().list_courses().await.expect("list courses");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title(), "Neural Networks Primer");

    let perfect = services
        .quizzes()
        .attempt(demo.course_id, &[2, 1])
        .await
        .expect("attempt");
    assert_eq!(perfect.score, 2);
    assert_eq!(perfect.correct_question_ids, demo.question_ids);

    let half = services
        .quizzes()
        .attempt(demo.course_id, &[2, 0])
        .await
        .expect("attempt");
    assert_eq!((half.score, half.total), (1, 2));
    assert_eq!(half.correct_question_ids, vec![demo.question_ids[0]]);
}
