//! Dismissible success/error toasts shown after create, update and delete.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Queue of visible notifications, shared through context.
#[derive(Clone, Copy)]
pub struct NotificationService {
    pub items: RwSignal<Vec<Notification>>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Error, message.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NotificationKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.items.update(|items| items.push(Notification { id, kind, message }));
        id
    }
}

/// Service from context; a detached one when none was provided.
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().unwrap_or_else(|| {
        log::warn!("NotificationService not found in context, notifications will not be shown");
        NotificationService::new()
    })
}

#[component]
fn Toast(notification: Notification, service: NotificationService, timeout_ms: u32) -> impl IntoView {
    let id = notification.id;

    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        service.dismiss(id);
    });

    view! {
        <div class=notification.kind.class() role="status">
            <span class="toast__message">{notification.message}</span>
            <button class="button button--icon toast__close" on:click=move |_| service.dismiss(id)>
                {icon("x")}
            </button>
        </div>
    }
}

/// Renders the toasts of the context service in a fixed corner.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();
    let timeout_ms = super::config::use_config().notification_timeout_ms;

    view! {
        <div class="toast-host">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |notification| {
                    view! { <Toast notification=notification service=service timeout_ms=timeout_ms /> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let owner = Owner::new();
        owner.set();

        let service = NotificationService::new();
        let first = service.success("Supplier created");
        let second = service.error("Failed to delete the record");
        assert_eq!(service.items.get_untracked().len(), 2);

        service.dismiss(first);
        let left = service.items.get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, second);
        assert_eq!(left[0].kind, NotificationKind::Error);
    }
}
