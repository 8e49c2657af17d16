use quiz_core::model::{CategoryId, ScaleValue};
use services::{AdvanceOutcome, QuizSession};

use super::test_harness::{ViewKind, embedded_store, setup_view_harness};

fn completed_session(favoured: CategoryId) -> QuizSession {
    let store = embedded_store();
    let mut session = QuizSession::with_order(store.statements().to_vec());
    loop {
        let value = if session.current().unwrap().category() == favoured {
            ScaleValue::StronglyAgree
        } else {
            ScaleValue::Disagree
        };
        session.select_answer(value);
        if session.advance() == AdvanceOutcome::Completed {
            break;
        }
    }
    session
}

#[test]
fn assessment_smoke_renders_first_statement_and_scale() {
    let store = embedded_store();
    let total = store.statements().len();
    let first_text = store.statements()[0].text().to_string();
    let session = QuizSession::with_order(store.statements().to_vec());

    let mut harness = setup_view_harness(ViewKind::Assessment, session);
    harness.rebuild();
    let html = harness.render();

    let counter = format!("Question 1 of {total}");
    assert!(html.contains(&counter), "missing {counter} in {html}");
    assert!(html.contains(&first_text), "missing statement text in {html}");
    assert!(html.contains("Strongly agree"), "missing scale label in {html}");
    assert!(html.contains("Strongly disagree"), "missing scale label in {html}");
}

#[test]
fn assessment_smoke_renders_completion_card() {
    let session = completed_session(CategoryId::new(1));
    let mut harness = setup_view_harness(ViewKind::Assessment, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("statements answered"), "missing completion in {html}");
    assert!(html.contains("See results"), "missing results link in {html}");
}

#[test]
fn results_smoke_preview_lists_every_profile_in_order() {
    let store = embedded_store();
    let session = QuizSession::with_order(store.statements().to_vec());

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("The nine types"), "missing preview title in {html}");
    assert!(
        html.contains("Answer every statement"),
        "missing preview banner in {html}"
    );
    let reformer = html.find("Type 1: The Reformer — The Perfectionist");
    let peacemaker = html.find("Type 9: The Peacemaker");
    assert!(reformer.is_some(), "missing type 1 heading in {html}");
    assert!(peacemaker.is_some(), "missing type 9 heading in {html}");
    // Natural order in preview: type 1 before type 9.
    assert!(reformer.unwrap() < peacemaker.unwrap());
    // The duplicate label of type 9 must not be appended.
    assert!(!html.contains("The Peacemaker — The Peacemaker"));
}

#[test]
fn results_smoke_ranks_the_favoured_type_first() {
    let favoured = CategoryId::new(4);
    let session = completed_session(favoured);

    let mut harness = setup_view_harness(ViewKind::Results, session);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Your resonance profile"),
        "missing scored title in {html}"
    );
    assert!(html.contains("5.00 / 5"), "missing top score in {html}");
    let individualist = html
        .find("Type 4: The Individualist — The Romantic")
        .expect("favoured heading present");
    let other = html.find("Type 1: The Reformer").expect("other heading present");
    assert!(individualist < other, "favoured type is not ranked first");
    assert!(!html.contains("Answer every statement"), "preview banner leaked");
}
