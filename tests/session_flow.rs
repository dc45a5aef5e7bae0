use std::sync::Arc;

use naturequiz::bank::QuestionBank;
use naturequiz::error::QuizError;
use naturequiz::model::Question;
use naturequiz::session::{percentage, Phase, QuizSession};

fn bank_of(questions: Vec<Question>) -> Arc<QuestionBank> {
    Arc::new(QuestionBank::new("Test", questions).unwrap())
}

fn two_plus_two() -> Arc<QuestionBank> {
    bank_of(vec![Question::new("2+2?", &["3", "4"], 1)])
}

fn seven_questions() -> Arc<QuestionBank> {
    bank_of(
        (0..7)
            .map(|i| {
                Question::new(
                    &format!("Question {}", i),
                    &["alpha", "beta", "gamma", "delta"],
                    i % 4,
                )
            })
            .collect(),
    )
}

/// Answers the current question, correctly or not, and returns the result.
fn answer(session: &mut QuizSession, correctly: bool) -> bool {
    let pos = {
        let cq = session.current_question().unwrap();
        let correct = cq.correct_position().unwrap();
        if correctly {
            correct
        } else {
            (correct + 1) % cq.presented.len()
        }
    };
    session.submit_answer(pos).unwrap()
}

#[test]
fn test_single_question_correct() {
    let mut session = QuizSession::seeded(1);
    session.start(two_plus_two()).unwrap();
    assert_eq!(session.phase(), Phase::InProgress);

    let pos = {
        let cq = session.current_question().unwrap();
        assert_eq!(cq.question.prompt, "2+2?");
        assert_eq!(cq.bank_index, 0);
        cq.presented_position_of(1).unwrap()
    };

    assert!(session.submit_answer(pos).unwrap());
    assert_eq!(session.score(), 1);
    assert_eq!(session.advance().unwrap(), Phase::Completed);
    assert_eq!(session.final_percentage().unwrap(), 100);
}

#[test]
fn test_single_question_wrong() {
    let mut session = QuizSession::seeded(2);
    session.start(two_plus_two()).unwrap();

    let pos = session
        .current_question()
        .unwrap()
        .presented_position_of(0)
        .unwrap();

    assert!(!session.submit_answer(pos).unwrap());
    assert_eq!(session.score(), 0);
    session.advance().unwrap();
    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(session.final_percentage().unwrap(), 0);
}

#[test]
fn test_order_visits_every_question_once() {
    let bank = seven_questions();
    for seed in 0..25 {
        let mut session = QuizSession::seeded(seed);
        session.start(bank.clone()).unwrap();

        let mut visited = Vec::new();
        while session.phase() == Phase::InProgress {
            visited.push(session.current_question().unwrap().bank_index);
            answer(&mut session, seed % 2 == 0);
            session.advance().unwrap();
        }

        visited.sort_unstable();
        assert_eq!(visited, (0..7).collect::<Vec<_>>());

        let mut order = session.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..7).collect::<Vec<_>>());
    }
}

#[test]
fn test_score_matches_records() {
    let mut session = QuizSession::seeded(9);
    session.start(seven_questions()).unwrap();

    let pattern = [true, false, true, true, false, false, true];
    for &correctly in &pattern {
        assert_eq!(answer(&mut session, correctly), correctly);
        session.advance().unwrap();
    }

    let correct_records = session.answers().iter().filter(|a| a.is_correct).count();
    assert_eq!(session.score(), 4);
    assert_eq!(correct_records, session.score());
    assert_eq!(session.final_percentage().unwrap(), percentage(4, 7));
    assert_eq!(session.final_percentage().unwrap(), 57);
}

#[test]
fn test_records_follow_original_indices() {
    let bank = seven_questions();
    let mut session = QuizSession::seeded(4);
    session.start(bank.clone()).unwrap();

    while session.phase() == Phase::InProgress {
        answer(&mut session, false);
        session.advance().unwrap();
    }

    for record in session.answers() {
        let expected = record.chosen_choice_index == bank[record.question_index].correct_index;
        assert_eq!(record.is_correct, expected);
    }
    assert_eq!(session.answers().len(), 7);
}

#[test]
fn test_double_submit_rejected() {
    let mut session = QuizSession::seeded(5);
    session.start(seven_questions()).unwrap();

    answer(&mut session, true);
    assert_eq!(session.score(), 1);

    let err = session.submit_answer(0).unwrap_err();
    assert_eq!(err, QuizError::AlreadyAnswered);
    assert_eq!(session.score(), 1);
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn test_advance_before_answer_rejected() {
    let mut session = QuizSession::seeded(6);
    session.start(seven_questions()).unwrap();

    assert_eq!(session.advance().unwrap_err(), QuizError::NotYetAnswered);
    assert_eq!(session.position(), 0);

    answer(&mut session, true);
    session.advance().unwrap();
    assert_eq!(session.advance().unwrap_err(), QuizError::NotYetAnswered);
    assert_eq!(session.position(), 1);
}

#[test]
fn test_progress_fraction_monotonic() {
    let mut session = QuizSession::seeded(7);
    assert_eq!(session.progress_fraction(), 0.0);
    session.start(seven_questions()).unwrap();

    let mut last = session.progress_fraction();
    assert_eq!(last, 0.0);
    while session.phase() == Phase::InProgress {
        answer(&mut session, true);
        let after_answer = session.progress_fraction();
        assert!(after_answer >= last);
        session.advance().unwrap();
        let now = session.progress_fraction();
        assert!(now >= after_answer);
        assert!((0.0..=1.0).contains(&now));
        last = now;
    }
    assert_eq!(session.progress_fraction(), 1.0);
}

#[test]
fn test_choice_order_stable_within_question() {
    let mut session = QuizSession::seeded(8);
    session.start(seven_questions()).unwrap();

    let first = session.current_question().unwrap().presented.to_vec();
    for _ in 0..10 {
        assert_eq!(session.current_question().unwrap().presented, &first[..]);
    }

    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3]);

    // Redraws after answering keep the same order for highlighting
    answer(&mut session, false);
    assert_eq!(session.current_question().unwrap().presented, &first[..]);
    assert_eq!(session.current_question().unwrap().presented, &first[..]);

    session.advance().unwrap();
    let next = session.current_question().unwrap().presented.to_vec();
    answer(&mut session, true);
    assert_eq!(session.current_question().unwrap().presented, &next[..]);
}

#[test]
fn test_choice_texts_follow_presented_order() {
    let mut session = QuizSession::seeded(16);
    session.start(seven_questions()).unwrap();

    let cq = session.current_question().unwrap();
    let texts: Vec<&str> = cq.choices().collect();
    assert_eq!(texts.len(), cq.presented.len());
    for (pos, &original) in cq.presented.iter().enumerate() {
        assert_eq!(texts[pos], cq.question.choices[original]);
    }
}

#[test]
fn test_choice_out_of_range() {
    let mut session = QuizSession::seeded(10);
    session.start(two_plus_two()).unwrap();

    assert_eq!(
        session.submit_answer(5).unwrap_err(),
        QuizError::ChoiceOutOfRange { index: 5, len: 2 }
    );
    assert!(!session.is_answered());
    assert!(session.answers().is_empty());
}

#[test]
fn test_operations_before_start() {
    let mut session = QuizSession::new();
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(matches!(session.current_question(), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.submit_answer(0), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.final_percentage(), Err(QuizError::InvalidState(_))));
}

#[test]
fn test_empty_bank_rejected() {
    let mut session = QuizSession::new();
    let empty = Arc::new(QuestionBank::new("Empty", Vec::new()).unwrap());
    assert!(matches!(session.start(empty.clone()), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.restart(empty), Err(QuizError::InvalidState(_))));
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn test_operations_after_completion() {
    let mut session = QuizSession::seeded(11);
    session.start(two_plus_two()).unwrap();
    answer(&mut session, true);
    session.advance().unwrap();

    assert!(matches!(session.current_question(), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.submit_answer(0), Err(QuizError::InvalidState(_))));
    assert!(matches!(session.advance(), Err(QuizError::InvalidState(_))));
}

#[test]
fn test_start_and_restart() {
    let bank = seven_questions();
    let mut session = QuizSession::seeded(12);
    session.start(bank.clone()).unwrap();
    answer(&mut session, true);
    session.advance().unwrap();

    assert!(matches!(session.start(bank.clone()), Err(QuizError::InvalidState(_))));
    assert_eq!(session.position(), 1);

    session.restart(bank.clone()).unwrap();
    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.position(), 0);
    assert_eq!(session.score(), 0);
    assert!(session.answers().is_empty());
    assert!(!session.is_answered());

    // A completed session may be started again directly
    while session.phase() == Phase::InProgress {
        answer(&mut session, true);
        session.advance().unwrap();
    }
    assert_eq!(session.final_percentage().unwrap(), 100);
    session.start(bank).unwrap();
    assert_eq!(session.phase(), Phase::InProgress);
}

#[test]
fn test_review_entries() {
    let mut session = QuizSession::seeded(13);
    session.start(two_plus_two()).unwrap();
    assert!(session.review().is_empty());

    answer(&mut session, false);
    let review = session.review();
    assert_eq!(review.len(), 1);
    assert_eq!(review[0].number, 1);
    assert_eq!(review[0].chosen, "3");
    assert_eq!(review[0].correct, "4");
    assert!(!review[0].is_correct);
}

#[test]
fn test_percentage_rounding() {
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(0, 0), 0);
}
