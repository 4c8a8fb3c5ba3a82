use kuizmo_core::model::{CourseDraft, CourseId, ModuleDraft, QuestionDraft};
use storage::seed::seed_demo;
use storage::{InMemoryRepository, RecordStore, Storage};

#[tokio::test]
async fn course_ids_count_up_from_one_across_deletions() {
    let storage = Storage::in_memory();

    let mut ids = Vec::new();
    for n in 0..6 {
        let course = storage
            .courses
            .insert_course(CourseDraft::new(format!("Course {n}"), "..."))
            .await
            .expect("insert course");
        ids.push(course.id().value());
        if n % 2 == 0 {
            storage
                .courses
                .delete_course(course.id())
                .await
                .expect("delete course");
        }
    }

    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    let remaining: Vec<u64> = storage
        .courses
        .list_courses()
        .await
        .expect("list courses")
        .iter()
        .map(|c| c.id().value())
        .collect();
    assert_eq!(remaining, [2, 4, 6]);
}

#[tokio::test]
async fn seeded_store_cascades_through_repository_surface() {
    let mut store = RecordStore::new();
    let seed = seed_demo(&mut store).expect("seed");
    let repo = InMemoryRepository::from_store(store);
    let storage = Storage::from_repository(repo.clone());

    let other = storage
        .courses
        .insert_course(CourseDraft::new("Other", "kept"))
        .await
        .expect("insert other");
    let other_module = storage
        .modules
        .insert_module(other.id(), ModuleDraft::new("Kept", "kept"))
        .await
        .expect("insert module");
    let content = QuestionDraft::new("Kept?", ["yes", "no"], 0)
        .validate()
        .expect("valid question");
    storage
        .quizzes
        .insert_question(other.id(), content)
        .await
        .expect("insert question");

    for module_id in &seed.module_ids {
        storage
            .progress
            .record_completion("ada", seed.course_id, *module_id)
            .await
            .expect("record completion");
    }
    storage
        .progress
        .record_completion("ada", other.id(), other_module.id())
        .await
        .expect("record completion");

    assert!(
        storage
            .courses
            .delete_course(seed.course_id)
            .await
            .expect("delete seeded course")
    );

    assert!(storage.modules.list_modules(seed.course_id).await.unwrap().is_empty());
    assert!(storage.quizzes.list_questions(seed.course_id).await.unwrap().is_empty());
    assert_eq!(storage.modules.list_modules(other.id()).await.unwrap().len(), 1);
    assert_eq!(storage.quizzes.list_questions(other.id()).await.unwrap().len(), 1);

    let (seeded_progress, other_progress) = repo
        .inspect(|store| {
            (
                store.peek_progress("ada", seed.course_id).cloned(),
                store.peek_progress("ada", other.id()).cloned(),
            )
        })
        .expect("inspect");
    assert!(seeded_progress.is_none());
    assert_eq!(
        other_progress.expect("other progress").completed_module_ids(),
        [other_module.id()]
    );
}

#[tokio::test]
async fn progress_reads_are_lazy_and_writes_are_idempotent() {
    let repo = InMemoryRepository::new();
    let storage = Storage::from_repository(repo.clone());
    let course_id = storage
        .courses
        .insert_course(CourseDraft::new("Go", "Channels"))
        .await
        .expect("insert course")
        .id();

    let missing = storage
        .progress
        .get_progress("grace", CourseId::new(course_id.value() + 1))
        .await;
    assert!(missing.is_err());

    let empty = storage
        .progress
        .get_progress("grace", course_id)
        .await
        .expect("lazy progress");
    assert!(empty.completed_module_ids().is_empty());
    assert_eq!(repo.inspect(RecordStore::progress_count).unwrap(), 1);

    let module = storage
        .modules
        .insert_module(course_id, ModuleDraft::new("m", "c"))
        .await
        .expect("insert module");
    let once = storage
        .progress
        .record_completion("grace", course_id, module.id())
        .await
        .expect("first completion");
    let twice = storage
        .progress
        .record_completion("grace", course_id, module.id())
        .await
        .expect("second completion");
    assert_eq!(once, twice);
    assert_eq!(twice.completed_module_ids(), [module.id()]);
}
