use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push("A", "first", ToastVariant::Default);
    let b = toasts.push("B", "second", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push("A", "", ToastVariant::Default);
    let b = toasts.push("B", "", ToastVariant::Default);
    toasts.dismiss(a);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, b);
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut toasts = ToastState::default();
    for i in 0..5 {
        toasts.push(format!("T{i}"), "", ToastVariant::Default);
    }
    assert_eq!(toasts.items.len(), TOAST_LIMIT);
    assert_eq!(toasts.items[0].title, "T2");
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut toasts = ToastState::default();
    let a = toasts.push("A", "", ToastVariant::Default);
    toasts.dismiss(a);
    let b = toasts.push("B", "", ToastVariant::Default);
    assert_ne!(a, b);
}
