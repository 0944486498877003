use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_subject};

#[test]
fn home_view_smoke_renders_counts() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Subjects available: 3"), "missing subject count in {html}");
    assert!(html.contains("Games available: 3"), "missing game count in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1"), "missing heading in {html}");
    assert!(
        html.contains("What is the main goal of supervised learning?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Next Question"), "next shown before answering in {html}");
}

#[test]
fn quiz_view_smoke_honours_initial_subject() {
    let mut harness = setup_view_harness_with_subject(ViewKind::Quiz, Some("Science"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Photosynthesis"), "missing science options in {html}");
    assert!(
        html.contains(r#"class="quiz-subject""#),
        "missing subject heading in {html}"
    );
}

#[test]
fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_subject(ViewKind::Quiz, Some("Astrology"));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("That subject is not available."),
        "missing error message in {html}"
    );
}

#[test]
fn games_view_smoke_renders_memory_board() {
    let mut harness = setup_view_harness(ViewKind::Games);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Memory Match"), "missing game title in {html}");
    assert!(
        html.contains("Available Levels: Easy, Medium, Hard"),
        "missing levels in {html}"
    );
    assert_eq!(html.matches("🔄").count(), 4, "expected four hidden cells in {html}");
    assert!(html.contains("New Game"), "missing restart button in {html}");
}
