//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility.

use leptos::prelude::*;

use crate::files::FileKind;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

macro_rules! stroke_icon {
    ($(#[$meta:meta])* $name:ident, $body:expr) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            /// Additional CSS classes.
            #[prop(into, default = String::new())]
            class: String,
        ) -> impl IntoView {
            let classes = format!("{} {}", ICON_SIZE, class);

            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=classes
                    inner_html=$body
                />
            }
        }
    };
}

stroke_icon!(
    /// Chevron pointing down (dropdown trigger).
    ChevronDownIcon,
    r#"<path d="m6 9 6 6 6-6"/>"#
);

stroke_icon!(
    /// Chevron pointing up.
    ChevronUpIcon,
    r#"<path d="m18 15-6-6-6 6"/>"#
);

stroke_icon!(
    /// Minus / no-change indicator.
    MinusIcon,
    r#"<path d="M5 12h14"/>"#
);

stroke_icon!(
    /// Closed folder.
    FolderIcon,
    r#"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"#
);

stroke_icon!(
    /// Open folder.
    FolderOpenIcon,
    r#"<path d="m6 14 1.45-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.55 6a2 2 0 0 1-1.94 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.93a2 2 0 0 1 1.66.9l.82 1.2a2 2 0 0 0 1.66.9H18a2 2 0 0 1 2 2v2"/>"#
);

stroke_icon!(
    /// Expanded tree (expand-all trigger).
    ListTreeIcon,
    r#"<path d="M21 12h-8"/><path d="M21 6H8"/><path d="M21 18h-8"/><path d="M3 6v4c0 1.1.9 2 2 2h3"/><path d="M3 10v6c0 1.1.9 2 2 2h3"/>"#
);

stroke_icon!(
    /// Collapsed list (collapse-all trigger).
    ListCollapseIcon,
    r#"<path d="m3 10 2.5-2.5L3 5"/><path d="m3 19 2.5-2.5L3 14"/><path d="M10 6h11"/><path d="M10 12h11"/><path d="M10 18h11"/>"#
);

stroke_icon!(
    /// Question-mark badge (description label).
    BadgeQuestionMarkIcon,
    r#"<path d="M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><line x1="12" x2="12.01" y1="17" y2="17"/>"#
);

stroke_icon!(
    /// New-document action.
    FilePlusIcon,
    r#"<path d="M4 22h14a2 2 0 0 0 2-2V7l-5-5H6a2 2 0 0 0-2 2v4"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M3 15h6"/><path d="M6 12v6"/>"#
);

stroke_icon!(
    /// User silhouette (avatar fallback).
    UserIcon,
    r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
);

stroke_icon!(
    /// User with pen (account settings tab).
    UserPenIcon,
    r#"<path d="M11.5 15H7a4 4 0 0 0-4 4v2"/><path d="M21.378 16.626a1 1 0 0 0-3.004-3.004l-4.01 4.012a2 2 0 0 0-.506.854l-.837 2.87a.5.5 0 0 0 .62.62l2.87-.837a2 2 0 0 0 .854-.506z"/><circle cx="10" cy="7" r="4"/>"#
);

stroke_icon!(
    /// Logout action.
    LogOutIcon,
    r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><polyline points="16 17 21 12 16 7"/><line x1="21" x2="9" y1="12" y2="12"/>"#
);

stroke_icon!(
    /// Send icon for the chat submit button.
    SendIcon,
    r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#
);

stroke_icon!(
    /// Magnifier (search box).
    SearchIcon,
    r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#
);

stroke_icon!(
    /// Sidebar toggle.
    PanelLeftIcon,
    r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M9 3v18"/>"#
);

stroke_icon!(
    /// Generic document sheet.
    FileIcon,
    r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#
);

stroke_icon!(
    /// Document sheet with text lines.
    FileTextIcon,
    r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#
);

stroke_icon!(
    /// Image frame.
    ImageIcon,
    r#"<rect width="18" height="18" x="3" y="3" rx="2" ry="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/>"#
);

stroke_icon!(
    /// Audio note.
    MusicIcon,
    r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#
);

stroke_icon!(
    /// Video clapper.
    VideoIcon,
    r#"<path d="m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5"/><rect x="2" y="6" width="14" height="12" rx="2"/>"#
);

stroke_icon!(
    /// Archive box.
    ArchiveIcon,
    r#"<rect width="20" height="5" x="2" y="3" rx="1"/><path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8"/><path d="M10 12h4"/>"#
);

stroke_icon!(
    /// Angle brackets (code file).
    CodeIcon,
    r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
);

stroke_icon!(
    /// Table grid (spreadsheet).
    TableIcon,
    r#"<path d="M12 3v18"/><rect width="18" height="18" x="3" y="3" rx="2"/><path d="M3 9h18"/><path d="M3 15h18"/>"#
);

stroke_icon!(
    /// Presentation board.
    PresentationIcon,
    r#"<path d="M2 3h20"/><path d="M21 3v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V3"/><path d="m7 21 5-5 5 5"/>"#
);

stroke_icon!(
    /// Loader/spinner. Callers add `animate-spin` when needed.
    LoaderIcon,
    r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#
);

/// Leaf-row icon selected from the document's [`FileKind`].
#[component]
pub fn FileKindIcon(
    kind: FileKind,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    match kind {
        FileKind::Pdf | FileKind::Markdown | FileKind::Text => {
            view! { <FileTextIcon class=class/> }.into_any()
        }
        FileKind::Image => view! { <ImageIcon class=class/> }.into_any(),
        FileKind::Audio => view! { <MusicIcon class=class/> }.into_any(),
        FileKind::Video => view! { <VideoIcon class=class/> }.into_any(),
        FileKind::Archive => view! { <ArchiveIcon class=class/> }.into_any(),
        FileKind::Code => view! { <CodeIcon class=class/> }.into_any(),
        FileKind::Spreadsheet => view! { <TableIcon class=class/> }.into_any(),
        FileKind::Presentation => view! { <PresentationIcon class=class/> }.into_any(),
        FileKind::Unknown => view! { <FileIcon class=class/> }.into_any(),
    }
}
