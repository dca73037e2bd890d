use std::time::Duration;

use quiz_core::model::{Category, Difficulty, Filter, OptionId, TimerDuration};
use services::QuizPhase;

use super::test_harness::setup_view_harness;
use crate::vm::QuizIntent;

fn select(option: &str) -> QuizIntent {
    QuizIntent::Select(OptionId::from(option))
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_pickers() {
    let harness = setup_view_harness(6, TimerDuration::Off);
    let html = harness.render();
    assert!(html.contains("Set up your quiz"), "missing title in {html}");
    assert!(
        html.contains("6 questions drawn from a bank of 6"),
        "missing counts in {html}"
    );
    assert!(html.contains("All topics"), "missing topic picker in {html}");
    assert!(html.contains("Modal Verbs"), "missing category label in {html}");
    assert!(html.contains("5 minutes"), "missing timer preset in {html}");
    assert!(html.contains("Start quiz"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_shows_feedback_after_submit() {
    let mut harness = setup_view_harness(6, TimerDuration::Off);
    harness.dispatch(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("Question 1 of 6"), "missing progress in {html}");
    assert!(html.contains("Check answer"), "missing submit in {html}");
    assert!(!html.contains("Correct!"), "feedback before submit in {html}");

    harness.dispatch(select("a"));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Rule for question"), "missing rule in {html}");
    assert!(html.contains("Next question"), "missing next in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 6"), "missing progress in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_reveals_correct_answer_on_mistake() {
    let mut harness = setup_view_harness(6, TimerDuration::Off);
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(select("b"));
    harness.dispatch(QuizIntent::Submit);

    let correct_text = harness.with_vm(|vm| {
        vm.session()
            .current_question()
            .map(|q| q.correct_option().text().to_owned())
            .unwrap()
    });
    let html = harness.render();
    assert!(html.contains("Not quite."), "missing headline in {html}");
    let expected = format!("Correct answer: {correct_text}");
    assert!(html.contains(&expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_after_full_run() {
    let mut harness = setup_view_harness(6, TimerDuration::Off);
    harness.dispatch(QuizIntent::Start);
    for _ in 0..6 {
        harness.dispatch(select("a"));
        harness.dispatch(QuizIntent::Submit);
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("Perfect score!"), "missing tier in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("6 / 6"), "missing score in {html}");
    assert!(html.contains("By topic"), "missing breakdown in {html}");
    assert!(html.contains("Time taken: 0m 0s"), "missing elapsed in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Start quiz"), "restart did not return home: {html}");
    assert!(harness.with_vm(|vm| vm.session().answers().is_empty()));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_view_smoke_offers_only_reset() {
    let mut harness = setup_view_harness(6, TimerDuration::Off);
    harness.dispatch(QuizIntent::SetDifficulty(Filter::Only(Difficulty::Beginner)));
    harness.dispatch(QuizIntent::SetCategory(Filter::Only(
        Category::SubjectVerbAgreement,
    )));
    let html = harness.render();
    assert!(
        html.contains("No questions match these filters"),
        "missing empty message in {html}"
    );
    assert!(html.contains("Reset filters"), "missing reset in {html}");
    assert!(!html.contains("Start quiz"), "start offered while empty: {html}");

    harness.dispatch(QuizIntent::Start);
    assert!(harness.with_vm(|vm| !vm.session().is_started()));

    harness.dispatch(QuizIntent::ResetFilters);
    let html = harness.render();
    assert!(html.contains("Start quiz"), "reset did not return home: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timer_smoke_counts_down_and_ignores_stale_ticks() {
    let mut harness = setup_view_harness(6, TimerDuration::Seconds(60));
    assert_eq!(harness.timer_generation(), None);

    harness.dispatch(QuizIntent::Start);
    assert_eq!(harness.timer_generation(), Some(0));
    assert!(harness.render().contains("1:00"));

    harness.dispatch(QuizIntent::Tick { generation: 0 });
    assert!(harness.render().contains("0:59"));

    harness.dispatch(QuizIntent::Finish);
    assert_eq!(harness.timer_generation(), None);

    harness.dispatch(QuizIntent::Restart);
    harness.dispatch(QuizIntent::Start);
    assert_eq!(harness.timer_generation(), Some(1));

    harness.dispatch(QuizIntent::Tick { generation: 0 });
    let html = harness.render();
    assert!(html.contains("1:00"), "stale tick changed countdown: {html}");

    harness.dispatch(QuizIntent::Tick { generation: 1 });
    assert!(harness.render().contains("0:59"));
}

#[tokio::test(flavor = "current_thread")]
async fn timer_smoke_expiry_shows_results() {
    let mut harness = setup_view_harness(6, TimerDuration::Seconds(2));
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(select("a"));
    harness.dispatch(QuizIntent::Tick { generation: 0 });
    harness.dispatch(QuizIntent::Tick { generation: 0 });

    assert_eq!(harness.timer_generation(), None);
    let html = harness.render();
    // Text is HTML-escaped, so match past the apostrophe.
    assert!(
        html.contains("6 questions unanswered."),
        "missing expiry note in {html}"
    );
    assert!(html.contains("0%"), "missing percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn untimed_quiz_never_starts_ticking() {
    let mut harness = setup_view_harness(6, TimerDuration::Off);
    harness.dispatch(QuizIntent::Start);
    assert_eq!(harness.timer_generation(), None);
    assert!(!harness.render().contains("quiz-timer-label"));
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_configured_custom_timer() {
    let harness = setup_view_harness(6, TimerDuration::Seconds(45));
    let html = harness.render();
    let id_at = html
        .find(r#"id="quiz-timer-custom""#)
        .unwrap_or_else(|| panic!("missing custom timer option in {html}"));
    let tag_start = html[..id_at].rfind('<').unwrap();
    let tag_end = id_at + html[id_at..].find('>').unwrap();
    let tag = &html[tag_start..tag_end];
    assert!(
        tag.contains("selected") && !tag.contains("false"),
        "custom timer not selected: {tag}"
    );
    assert!(html.contains("45 seconds"), "missing custom timer label in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn tick_task_counts_down_and_releases_on_expiry() {
    let mut harness = setup_view_harness(6, TimerDuration::Seconds(3));
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(select("a"));
    assert_eq!(harness.timer_generation(), Some(0));

    harness
        .run_until(|h| h.with_vm(|vm| vm.session().remaining_secs()) == Some(2))
        .await;
    assert!(harness.render().contains("0:02"));
    assert_eq!(harness.timer_generation(), Some(0));

    harness
        .run_until(|h| h.with_vm(|vm| vm.phase()) == QuizPhase::Finished)
        .await;
    assert_eq!(harness.timer_generation(), None);
    let html = harness.render();
    assert!(
        html.contains("6 questions unanswered."),
        "missing expiry note in {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn tick_task_stops_when_quiz_is_ended() {
    let mut harness = setup_view_harness(6, TimerDuration::Seconds(60));
    harness.dispatch(QuizIntent::Start);
    harness
        .run_until(|h| h.with_vm(|vm| vm.session().remaining_secs()) == Some(59))
        .await;

    harness.dispatch(QuizIntent::Finish);
    assert_eq!(harness.timer_generation(), None);
    let frozen = harness.with_vm(|vm| vm.session().remaining_secs());

    tokio::time::sleep(Duration::from_secs(5)).await;
    let _ = tokio::time::timeout(Duration::from_secs(1), harness.dom.wait_for_work()).await;
    super::test_harness::drive_dom(&mut harness.dom);
    assert_eq!(harness.with_vm(|vm| vm.session().remaining_secs()), frozen);
    assert_eq!(harness.with_vm(|vm| vm.phase()), QuizPhase::Finished);
}
