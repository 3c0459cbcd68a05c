use std::collections::HashSet;
use std::sync::Arc;

use learnmate_session::{
    deserialize, serialize, FileBackend, FileBackendConfig, KeyValueBackend, MemoryBackend,
    PlaceholderContent, PracticeMachine, PracticeState, SessionLifecycle, SessionStore,
    SessionType, Submission, Transition, VideoFile, DEFAULT_SESSIONS_KEY,
};
use tempfile::TempDir;

fn memory_lifecycle() -> (Arc<SessionStore>, SessionLifecycle) {
    let store = Arc::new(SessionStore::new(Arc::new(MemoryBackend::new())));
    let lifecycle = SessionLifecycle::new(Arc::clone(&store), Arc::new(PlaceholderContent));
    (store, lifecycle)
}

#[tokio::test]
async fn non_blank_text_is_stored_exactly_once() {
    let (store, lifecycle) = memory_lifecycle();
    let inputs = ["a", " padded ", "multi\nline notes", "ünïcode ✓"];

    for raw in inputs {
        let session = lifecycle
            .create_from_text(raw)
            .await
            .unwrap()
            .into_session()
            .unwrap();
        assert_eq!(session.session_type, SessionType::Text);
        assert_eq!(session.content, raw);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.iter().filter(|s| s.id == session.id).count(), 1);
    }

    let ids: HashSet<_> = store.load().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), inputs.len());
}

#[tokio::test]
async fn rejected_inputs_store_nothing() {
    let (store, lifecycle) = memory_lifecycle();

    assert!(!lifecycle.create_from_text("").await.unwrap().is_accepted());
    assert!(!lifecycle.create_from_text("   ").await.unwrap().is_accepted());
    for media_type in ["video/webm", "video/quicktime", "image/png", "VIDEO/MP4", ""] {
        let file = VideoFile::new("clip", media_type);
        assert!(!lifecycle.create_from_video(Some(&file)).await.unwrap().is_accepted());
    }
    assert!(!lifecycle.create_from_video(None).await.unwrap().is_accepted());

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_preserves_relative_order() {
    let (store, lifecycle) = memory_lifecycle();
    let mut ids = Vec::new();
    for i in 0..5 {
        let session = lifecycle
            .create_from_text(&format!("notes {}", i))
            .await
            .unwrap()
            .into_session()
            .unwrap();
        ids.push(session.id);
    }

    lifecycle.delete(ids[1]).await.unwrap();
    lifecycle.delete(ids[3]).await.unwrap();

    let remaining: Vec<_> = store.load().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);
    assert!(!remaining.contains(&ids[1]));
}

#[tokio::test]
async fn hello_world_scenario() {
    let (store, lifecycle) = memory_lifecycle();
    assert!(store.load().await.unwrap().is_empty());

    let submission = lifecycle.create_from_text("hello world").await.unwrap();
    let Submission::Accepted(created) = submission else {
        panic!("hello world should be accepted");
    };

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].content, "hello world");
    assert_eq!(loaded[0].questions.len(), 3);

    lifecycle.delete(created.id).await.unwrap();
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn practice_answers_survive_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config = FileBackendConfig::new(temp_dir.path());

    let session_id = {
        let backend = FileBackend::new(config.clone()).await.unwrap();
        let store = Arc::new(SessionStore::new(Arc::new(backend)));
        let lifecycle = SessionLifecycle::new(store, Arc::new(PlaceholderContent));

        let session = lifecycle
            .create_from_text("react notes")
            .await
            .unwrap()
            .into_session()
            .unwrap();
        let id = session.id;

        let mut practice = PracticeMachine::new(session, lifecycle.provider()).unwrap();
        let total = practice.question_count();
        let mut completed = 0;
        for k in 0..total {
            assert_eq!(practice.state(), PracticeState::Asking(k));
            practice.edit_answer(format!("answer {}", k));
            assert!(matches!(practice.submit_pending(), Transition::FeedbackShown { .. }));
            if practice.advance() == Transition::Complete {
                completed += 1;
            }
            assert!(lifecycle.save_progress(practice.session()).await.unwrap());
        }
        assert_eq!(completed, 1);
        id
    };

    let backend = FileBackend::new(config).await.unwrap();
    let store = SessionStore::new(Arc::new(backend));
    let reloaded = store.get(session_id).await.unwrap().unwrap();
    for (k, question) in reloaded.questions.iter().enumerate() {
        assert_eq!(question.answer, format!("answer {}", k));
        assert!(!question.feedback.is_empty());
    }
    assert!(reloaded.is_fully_answered());
}

#[tokio::test]
async fn concurrent_appends_are_all_kept() {
    let (store, lifecycle) = memory_lifecycle();
    let lifecycle = Arc::new(lifecycle);

    let mut handles = Vec::new();
    for i in 0..16 {
        let lifecycle = Arc::clone(&lifecycle);
        handles.push(tokio::spawn(async move {
            lifecycle.create_from_text(&format!("notes {}", i)).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_accepted());
    }

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 16);
    let ids: HashSet<_> = loaded.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn reads_records_written_by_the_browser_front_end() {
    let raw = r#"[{"id":1718000000000,"date":"2024-06-10T06:13:20.000Z","type":"text","content":"old notes","summary":{"bulletPoints":["one"],"paragraph":"p"},"questions":[{"question":"Q?","answer":"","feedback":"Good start!"}]}]"#;
    let backend = Arc::new(MemoryBackend::new());
    backend.set(DEFAULT_SESSIONS_KEY, raw).await.unwrap();

    let store = SessionStore::new(backend);
    let sessions = store.load().await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, 1718000000000);
    assert_eq!(sessions[0].content, "old notes");

    assert_eq!(deserialize(&serialize(&sessions).unwrap()).unwrap(), sessions);
}

#[tokio::test]
async fn practice_resumes_after_leaving_for_the_summary() {
    let (store, lifecycle) = memory_lifecycle();
    let session = lifecycle
        .create_from_text("notes")
        .await
        .unwrap()
        .into_session()
        .unwrap();
    let id = session.id;

    let mut practice = PracticeMachine::new(session, lifecycle.provider()).unwrap();
    practice.submit_answer("first answer");
    assert_eq!(practice.advance(), Transition::NextQuestion(1));
    lifecycle.save_progress(practice.session()).await.unwrap();
    assert_eq!(practice.back(), Transition::ReturnedToSummary);
    drop(practice);

    let stored = store.get(id).await.unwrap().unwrap();
    let mut resumed = PracticeMachine::resume(stored, lifecycle.provider()).unwrap();
    assert_eq!(resumed.state(), PracticeState::Asking(1));

    let mut completions = 0;
    while let PracticeState::Asking(k) = resumed.state() {
        resumed.submit_answer(&format!("answer {}", k));
        if resumed.advance() == Transition::Complete {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    let questions = &resumed.session().questions;
    assert_eq!(questions[0].answer, "first answer");
    assert_eq!(questions[1].answer, "answer 1");
    assert_eq!(questions[2].answer, "answer 2");
}
