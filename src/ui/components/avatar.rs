//! Avatar component with image and fallback support.

use leptos::prelude::*;

use super::icons::UserIcon;

/// Avatar component for displaying user images.
///
/// With no `src`, renders the fallback initials; with no fallback either,
/// renders a user silhouette.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar src="/images/user.jpg" alt="User" fallback="JD" />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image source URL.
    #[prop(into, default = String::new())]
    src: String,
    /// Alt text for the image.
    #[prop(into, default = String::from("Avatar"))]
    alt: String,
    /// Fallback text (initials) when no image is available.
    #[prop(into, default = String::new())]
    fallback: String,
    /// Size class (e.g., "h-10 w-10").
    #[prop(default = "h-10 w-10")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let container_classes =
        format!("relative flex shrink-0 overflow-hidden rounded-full {size} {class}");

    view! {
        <span class=container_classes>
            {if src.is_empty() {
                view! {
                    <span class="flex h-full w-full items-center justify-center rounded-full bg-panel text-textMuted text-sm font-medium">
                        {if fallback.is_empty() {
                            view! { <UserIcon class="size-4"/> }.into_any()
                        } else {
                            fallback.into_any()
                        }}
                    </span>
                }.into_any()
            } else {
                view! {
                    <img
                        class="aspect-square h-full w-full object-cover"
                        src=src
                        alt=alt
                    />
                }.into_any()
            }}
        </span>
    }
}
