use dioxus::prelude::*;

use crate::{config::SiteConfig, util::generate_id};

const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| push_bounded(entries, message));
}

/// Appends `message`, evicting the oldest entries past `MAX_VISIBLE`.
pub fn push_bounded(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    entries.push(message);
    if entries.len() > MAX_VISIBLE {
        let overflow = entries.len() - MAX_VISIBLE;
        entries.drain(..overflow);
    }
}

pub fn dismiss(entries: &mut Vec<ToastMessage>, id: &str) {
    entries.retain(|toast| toast.id != id);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for view in views {
                    ToastCard { key: "{view.id}", view, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timeout = use_context::<SiteConfig>().notice_timeout();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(timeout).await;
            toasts.with_mut(|items| dismiss(items, &id));
        }
    });

    let mut toasts = toasts;
    rsx! {
        li { class: "toast {view.theme}",
            span { class: "toast-icon", "{view.icon}" }
            p { "{view.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| dismiss(items, &target));
                },
                "Dismiss"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    text: String,
    theme: &'static str,
    icon: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let (theme, icon) = match message.kind {
            ToastKind::Info => ("toast-info", "ℹ️"),
            ToastKind::Success => ("toast-success", "✅"),
            ToastKind::Error => ("toast-error", "⛔"),
        };

        ToastView {
            id: message.id,
            text: message.text,
            theme,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    fn texts(entries: &[ToastMessage]) -> Vec<&str> {
        entries.iter().map(|toast| toast.text.as_str()).collect()
    }

    #[test]
    fn oldest_notice_is_evicted_past_the_cap() {
        let mut entries = Vec::new();
        for n in 1..=MAX_VISIBLE + 2 {
            push_bounded(&mut entries, ToastMessage::new(ToastKind::Info, format!("n{n}")));
        }
        assert_eq!(entries.len(), MAX_VISIBLE);
        assert_eq!(texts(&entries), ["n3", "n4", "n5", "n6"]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_id() {
        let mut entries = Vec::new();
        push_bounded(&mut entries, ToastMessage::new(ToastKind::Error, "not found"));
        push_bounded(&mut entries, ToastMessage::new(ToastKind::Success, "found"));
        let target = entries[0].id.clone();

        dismiss(&mut entries, &target);
        assert_eq!(texts(&entries), ["found"]);

        dismiss(&mut entries, "toast-unknown");
        assert_eq!(entries.len(), 1);
    }

    thread_local! {
        static NOTICES: Cell<Option<Signal<Vec<ToastMessage>>>> = const { Cell::new(None) };
    }

    #[component]
    fn NoticeHost() -> Element {
        use_context_provider(|| SiteConfig {
            notice_timeout_secs: 0,
            ..SiteConfig::default()
        });
        let toasts = use_signal(|| {
            vec![ToastMessage::new(
                ToastKind::Error,
                "Tracking number not found in our system",
            )]
        });
        use_context_provider(|| toasts);
        NOTICES.with(|slot| slot.set(Some(toasts)));

        rsx! { Toast {} }
    }

    #[tokio::test]
    async fn notices_clear_themselves_after_the_timeout() {
        let mut dom = VirtualDom::new(NoticeHost);
        dom.rebuild_in_place();
        let toasts = NOTICES.with(|slot| slot.get()).expect("host mounted");
        assert_eq!(dom.in_runtime(|| toasts.peek().len()), 1);

        tokio::time::timeout(Duration::from_secs(2), async {
            while dom.in_runtime(|| !toasts.peek().is_empty()) {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await
        .expect("notice should auto-clear");
    }
}
