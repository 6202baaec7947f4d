//! Toast Notification Component
//!
//! Shows the current notice with its title and description.

use leptos::*;

use edurev::portal::{Notice, NoticeKind};

use crate::state::global::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-6 right-4 z-50 max-w-sm" role="status" aria-live="polite">
            {move || {
                state.notice.get().map(|notice| view! {
                    <ToastMessage notice=notice on_dismiss=move |_| state.dismiss_notice() />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    notice: Notice,
    on_dismiss: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let (icon, bg_class) = toast_style(notice.kind);

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg leading-6">{icon}</span>
            <div class="flex-1">
                <p class="font-semibold">{notice.title}</p>
                <p class="text-sm opacity-90">{notice.description}</p>
            </div>
            <button
                type="button"
                class="text-white/80 hover:text-white"
                aria-label="Dismiss"
                on:click=on_dismiss
            >
                "×"
            </button>
        </div>
    }
}

fn toast_style(kind: NoticeKind) -> (&'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Info => ("ℹ", "bg-blue-600"),
        NoticeKind::Warning => ("⚠", "bg-yellow-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_and_error_styles_differ() {
        assert_eq!(toast_style(NoticeKind::Warning).1, "bg-yellow-600");
        assert_eq!(toast_style(NoticeKind::Error).1, "bg-red-600");
        assert_ne!(toast_style(NoticeKind::Success), toast_style(NoticeKind::Info));
    }
}
