//! 内联 SVG 图标（lucide 线条风格）

use leptos::prelude::*;

#[component]
fn Icon(children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="h-5 w-5"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn Heart() -> impl IntoView {
    view! {
        <Icon>
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        </Icon>
    }
}

#[component]
pub fn Search() -> impl IntoView {
    view! {
        <Icon>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        </Icon>
    }
}

#[component]
pub fn Bell() -> impl IntoView {
    view! {
        <Icon>
            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        </Icon>
    }
}

#[component]
pub fn MapPin() -> impl IntoView {
    view! {
        <Icon>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </Icon>
    }
}

#[component]
pub fn Bookmark() -> impl IntoView {
    view! {
        <Icon>
            <path d="m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" />
        </Icon>
    }
}

#[component]
pub fn LogOut() -> impl IntoView {
    view! {
        <Icon>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" x2="9" y1="12" y2="12" />
        </Icon>
    }
}

#[component]
pub fn ShieldCheck() -> impl IntoView {
    view! {
        <Icon>
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
            <path d="m9 12 2 2 4-4" />
        </Icon>
    }
}
