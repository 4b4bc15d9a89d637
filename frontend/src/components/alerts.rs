//! 全局错误横幅与成功提示

use crate::store::use_store;
use charity_directory::store::{Action, Dispatch};
use leptos::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[component]
pub fn ErrorAlert() -> impl IntoView {
    let store = use_store();
    let error = move || store.select(|s| s.error.clone());

    move || {
        error().map(|message| {
            view! {
                <div role="alert" class="alert alert-error shadow">
                    <span><strong>"Error: "</strong>{message}</span>
                    <button
                        class="btn btn-sm btn-ghost"
                        aria-label="Dismiss"
                        on:click=move |_| store.dispatch(Action::ClearError)
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

/// 成功提示，数秒后自动消失
#[component]
pub fn NotificationToast() -> impl IntoView {
    let store = use_store();
    let notification = Memo::new(move |_| store.select(|s| s.notification.clone()));

    Effect::new(move |_| {
        if let Some(message) = notification.get() {
            set_timeout(
                move || {
                    // 期间出现了新的提示则不清除
                    if store.select_untracked(|s| s.notification.as_deref() == Some(message.as_str())) {
                        store.dispatch(Action::ClearNotification);
                    }
                },
                TOAST_DURATION,
            );
        }
    });

    move || {
        notification.get().map(|message| {
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="status" class="alert alert-success shadow-lg">
                        <span>{message}</span>
                        <button
                            class="btn btn-sm btn-ghost"
                            aria-label="Dismiss"
                            on:click=move |_| store.dispatch(Action::ClearNotification)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
