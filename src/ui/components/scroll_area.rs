//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container with custom scrollbar styling.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ScrollArea class="h-[70vh]">
///         // Long content here
///     </ScrollArea>
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative overflow-auto scrollbar-thin scrollbar-thumb-panelBorder \
         scrollbar-track-transparent {class}"
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
