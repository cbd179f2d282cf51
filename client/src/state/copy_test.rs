use super::*;

#[test]
fn nothing_copied_by_default() {
    let feedback = CopyFeedback::default();
    assert_eq!(feedback, CopyFeedback { copied: None, issued: 0 });
    assert!(!feedback.is_copied(0));
}

#[test]
fn only_the_copied_index_shows_feedback() {
    let mut feedback = CopyFeedback::default();
    feedback.mark_copied(2);
    assert!(feedback.is_copied(2));
    assert!(!feedback.is_copied(0));
    assert!(!feedback.is_copied(1));
    assert!(!feedback.is_copied(3));
}

#[test]
fn expiry_clears_feedback() {
    let mut feedback = CopyFeedback::default();
    let token = feedback.mark_copied(1);
    assert!(feedback.expire(token));
    assert!(!feedback.is_copied(1));
}

#[test]
fn later_copy_replaces_earlier_index() {
    let mut feedback = CopyFeedback::default();
    feedback.mark_copied(0);
    feedback.mark_copied(1);
    assert!(!feedback.is_copied(0));
    assert!(feedback.is_copied(1));
}

#[test]
fn earlier_timer_does_not_clear_later_copy() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.mark_copied(0);
    let second = feedback.mark_copied(1);
    assert!(!feedback.expire(first));
    assert!(feedback.is_copied(1));
    assert!(feedback.expire(second));
    assert!(!feedback.is_copied(1));
    assert!(!feedback.is_copied(0));
}

#[test]
fn recopying_same_index_restarts_window() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.mark_copied(0);
    let second = feedback.mark_copied(0);
    assert!(!feedback.expire(first));
    assert!(feedback.is_copied(0));
    assert!(feedback.expire(second));
}

#[test]
fn copy_label_reflects_state() {
    assert_eq!(copy_label(false), "Copy");
    assert_eq!(copy_label(true), "Copied!");
}

#[test]
fn feedback_window_is_two_seconds() {
    assert_eq!(COPY_FEEDBACK_MS, 2000);
}
