use super::*;

/// Signals owned by a short-lived modal scope, plus a flag set by `on_close`.
struct ModalScope {
    owner: Owner,
    sending: RwSignal<bool>,
    draft: RwSignal<HostMessage>,
    on_close: Callback<()>,
}

fn open_modal(closed: RwSignal<bool>) -> ModalScope {
    let owner = Owner::new();
    let (sending, draft, on_close) = owner.with(|| {
        let draft = RwSignal::new(HostMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Is it still available?".to_owned(),
            ..HostMessage::default()
        });
        (RwSignal::new(true), draft, Callback::new(move |()| closed.set(true)))
    });
    ModalScope { owner, sending, draft, on_close }
}

// =============================================================================
// SEND COMPLETION
// =============================================================================

#[test]
fn finish_send_resets_and_closes_open_modal() {
    let toasts = RwSignal::new(ToastState::default());
    let closed = RwSignal::new(false);
    let modal = open_modal(closed);

    finish_send(toasts, "Sarah Johnson", modal.sending, modal.draft, modal.on_close);

    assert!(!modal.sending.get_untracked());
    assert_eq!(modal.draft.get_untracked(), HostMessage::default());
    assert!(closed.get_untracked());
    let items = toasts.with_untracked(|t| t.items.clone());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Message sent successfully!");
    assert!(items[0].description.contains("Sarah Johnson"));
}

#[test]
fn finish_send_after_modal_dismissed_only_toasts() {
    let toasts = RwSignal::new(ToastState::default());
    let closed = RwSignal::new(false);
    let modal = open_modal(closed);

    // Escape or a backdrop click during the delay drops the modal's scope.
    modal.owner.cleanup();

    finish_send(toasts, "Mike Chen", modal.sending, modal.draft, modal.on_close);

    assert!(!closed.get_untracked());
    assert!(modal.sending.try_get_untracked().is_none());
    let items = toasts.with_untracked(|t| t.items.clone());
    assert_eq!(items.len(), 1);
    assert!(items[0].description.contains("Mike Chen"));
}
