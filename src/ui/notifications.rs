//! Notification toasts

use crate::app::AppState;
use crate::types::NotificationKind;
use dioxus::prelude::*;

#[component]
pub fn NotificationTray() -> Element {
    let app_state = use_context::<AppState>();
    let notifications = app_state.notifications.read().clone();

    rsx! {
        div {
            class: "toast-tray",
            for notification in notifications {
                {
                    let kind_class = match notification.kind {
                        NotificationKind::Info => "toast-info",
                        NotificationKind::Success => "toast-success",
                        NotificationKind::Warning => "toast-warning",
                        NotificationKind::Error => "toast-error",
                    };
                    let id = notification.id;
                    let mut app_state = app_state.clone();
                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast {kind_class}",
                            span { "{notification.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| app_state.dismiss_notification(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
