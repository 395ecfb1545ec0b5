//! Badge component for labels and counts.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Muted panel-colored badge.
    Secondary,
    /// Destructive/error badge.
    Destructive,
    /// Outline badge.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-white",
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder",
            Self::Destructive => "bg-danger text-white",
            Self::Outline => "border border-panelBorder bg-transparent text-textPrimary",
        }
    }
}

/// Badge for displaying a short label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Secondary>"3 documents"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold \
                        transition-colors";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
