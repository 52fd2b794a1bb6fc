use super::*;

fn info(message: &str) -> NewToast {
    NewToast::new(ToastKind::Info, message)
}

#[test]
fn push_assigns_increasing_ids_and_kind_duration() {
    let mut queue = ToastQueue::default();
    let a = queue.push(info("a"), 0.0);
    let b = queue.push(NewToast::new(ToastKind::Error, "b"), 0.0);
    assert!(b > a);
    assert_eq!(queue.toasts[0].duration_ms, Some(4_000.0));
    assert_eq!(queue.toasts[1].duration_ms, Some(8_000.0));
}

#[test]
fn push_evicts_oldest_past_max_visible() {
    let mut queue = ToastQueue::with_max_visible(2);
    queue.push(info("a"), 0.0);
    queue.push(info("b"), 0.0);
    queue.push(info("c"), 0.0);
    let messages: Vec<_> = queue.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["b", "c"]);
}

#[test]
fn expire_marks_elapsed_toasts_once() {
    let mut queue = ToastQueue::default();
    let id = queue.push(info("a").duration_ms(1_000.0), 100.0);
    assert!(queue.expire(1_000.0).is_empty());
    assert_eq!(queue.expire(1_100.0), vec![id]);
    assert!(queue.toasts[0].dismissing);
    assert!(queue.expire(5_000.0).is_empty());
}

#[test]
fn sticky_toasts_never_expire() {
    let mut queue = ToastQueue::default();
    queue.push(info("stay").sticky(), 0.0);
    assert!(queue.expire(1_000_000.0).is_empty());
    assert!(!queue.toasts[0].dismissing);
}

#[test]
fn pause_preserves_remaining_lifetime() {
    let mut queue = ToastQueue::default();
    let id = queue.push(info("a").duration_ms(1_000.0), 0.0);
    queue.pause(400.0);
    assert!(queue.is_paused());
    assert!(queue.expire(10_000.0).is_empty());
    queue.resume(10_000.0);
    assert!(queue.expire(10_500.0).is_empty());
    assert_eq!(queue.expire(10_600.0), vec![id]);
}

#[test]
fn toast_pushed_while_paused_keeps_full_lifetime() {
    let mut queue = ToastQueue::default();
    queue.pause(0.0);
    let id = queue.push(info("hovered").duration_ms(1_000.0), 500.0);
    assert!(queue.expire(5_000.0).is_empty());
    queue.resume(5_000.0);
    assert!(queue.expire(5_999.0).is_empty());
    assert_eq!(queue.expire(6_000.0), vec![id]);
}

#[test]
fn dismiss_then_remove() {
    let mut queue = ToastQueue::default();
    let id = queue.push(info("a"), 0.0);
    assert!(queue.dismiss(id));
    assert!(!queue.dismiss(id));
    assert!(!queue.dismiss(id + 1));
    queue.remove(id);
    assert!(queue.toasts.is_empty());
}

#[test]
fn new_toast_builder_sets_title() {
    let toast = NewToast::new(ToastKind::Success, "Order filled").title("BTC-USD");
    assert_eq!(toast.title.as_deref(), Some("BTC-USD"));
    assert_eq!(ToastKind::Error.aria_live(), "assertive");
    assert_eq!(ToastKind::Success.aria_live(), "polite");
}
