//! Card component with header and content sections.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="p-4 text-center">
///         <p>"No documents in clustering"</p>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm {class}"
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
