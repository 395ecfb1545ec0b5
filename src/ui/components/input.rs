//! Input component for text fields.

use leptos::prelude::*;

/// Text input component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         input_type="search"
///         placeholder="Search documents..."
///         name="q"
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, search, email, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(into, default = String::new())]
    placeholder: String,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Default value.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                        px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                        focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{base_classes} {class}");

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            disabled=disabled
            required=required
            value=value
            autocomplete=autocomplete
        />
    }
}
