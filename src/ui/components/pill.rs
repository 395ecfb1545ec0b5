//! Pill primitives: rounded badges with status, delta, and indicator slots.

use leptos::prelude::*;

use super::badge::{Badge, BadgeVariant};
use super::icons::{ChevronDownIcon, ChevronUpIcon, MinusIcon};

/// Rounded pill built on [`Badge`].
#[component]
pub fn Pill(
    /// Badge variant for the pill body.
    #[prop(default = BadgeVariant::Secondary)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Pill content.
    children: Children,
) -> impl IntoView {
    let classes = format!("gap-2 rounded-full px-3 py-1.5 font-normal {class}");

    view! {
        <Badge variant=variant class=classes>
            {children()}
        </Badge>
    }
}

/// Leading status section inside a pill, separated by a border.
#[component]
pub fn PillStatus(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Status content.
    children: Children,
) -> impl IntoView {
    let classes =
        format!("flex items-center gap-2 border-r border-panelBorder pr-2 font-medium {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Indicator dot variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PillIndicatorVariant {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl PillIndicatorVariant {
    fn dot_classes(self) -> &'static str {
        match self {
            Self::Success => "bg-emerald-500",
            Self::Error => "bg-rose-500",
            Self::Warning => "bg-amber-500",
            Self::Info => "bg-sky-500",
        }
    }

    fn ping_classes(self) -> &'static str {
        match self {
            Self::Success => "bg-emerald-400",
            Self::Error => "bg-rose-400",
            Self::Warning => "bg-amber-400",
            Self::Info => "bg-sky-400",
        }
    }
}

/// Small colored dot, optionally pulsing.
#[component]
pub fn PillIndicator(
    /// Dot color.
    #[prop(default = PillIndicatorVariant::Success)]
    variant: PillIndicatorVariant,
    /// Whether to render the pulsing halo.
    #[prop(default = false)]
    pulse: bool,
) -> impl IntoView {
    view! {
        <span class="relative flex size-2">
            {pulse.then(|| view! {
                <span class=format!(
                    "absolute inline-flex h-full w-full animate-ping rounded-full opacity-75 {}",
                    variant.ping_classes()
                )/>
            })}
            <span class=format!(
                "relative inline-flex size-2 rounded-full {}",
                variant.dot_classes()
            )/>
        </span>
    }
}

/// Up/down/flat arrow for a numeric change.
#[component]
pub fn PillDelta(
    /// The change; zero renders a flat dash.
    delta: i64,
) -> impl IntoView {
    if delta == 0 {
        return view! { <MinusIcon class="size-3 text-textMuted"/> }.into_any();
    }
    if delta > 0 {
        return view! { <ChevronUpIcon class="size-3 text-emerald-500"/> }.into_any();
    }
    view! { <ChevronDownIcon class="size-3 text-rose-500"/> }.into_any()
}
