//! Transient toast notifications, delivered as HTMX out-of-band swaps.

use leptos::prelude::*;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Success => "border-emerald-500/50 text-emerald-500",
            Self::Error => "border-rose-500/50 text-rose-500",
        }
    }
}

/// Toast appended into `#toast-region` via `hx-swap-oob`, auto-dismissed
/// by Alpine after a few seconds.
#[component]
pub fn Toast(variant: ToastVariant, message: String) -> impl IntoView {
    view! {
        <div id="toast-region" hx-swap-oob="afterbegin">
            <div
                class=format!(
                    "rounded-lg border bg-background px-4 py-3 text-sm shadow-md {}",
                    variant.classes()
                )
                x-data="{ show: true }"
                x-show="show"
                x-init="setTimeout(() => show = false, 4000)"
                role="status"
            >
                {message}
            </div>
        </div>
    }
}
