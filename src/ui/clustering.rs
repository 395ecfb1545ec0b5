//! Clustering panel: picker, generation triggers, and the tree view.
//!
//! Rendered server-side and swapped as one HTMX fragment (`#clustering-panel`).
//! Expansion, selection highlight, and double-click navigation are local
//! Alpine state; everything that touches data goes back through the server.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::clustering::store::Phase;
use crate::clustering::tree::{TreeNode, TreeNodes};
use crate::clustering::{Clustering, is_placeholder_id};
use crate::files::FileKind;
use crate::ui::components::{
    BadgeQuestionMarkIcon, ButtonSize, ButtonVariant, Card, ChevronDownIcon, FileKindIcon,
    FolderIcon, FolderOpenIcon, ListCollapseIcon, ListTreeIcon, LoaderIcon, Pill, PillIndicator,
    PillIndicatorVariant,
};

/// Pixels of indent per tree depth level.
const INDENT: usize = 20;

/// DOM id of the swappable panel fragment.
pub const PANEL_ID: &str = "clustering-panel";

/// Clustering count at or below which generation lives in the dropdown.
pub const GENERATE_IN_DROPDOWN_MAX: usize = 2;

fn centered_note(text: &'static str) -> AnyView {
    view! {
        <div class="p-4 text-center">
            <p class="text-textMuted text-sm">{text}</p>
        </div>
    }
    .into_any()
}

/// The complete clustering sidebar panel for one collection.
#[component]
pub fn ClusteringPanel(
    collection_id: String,
    phase: Phase,
    clusterings: Vec<Clustering>,
    selected: Option<Clustering>,
    /// Tree projection of the selected clustering, when there is one.
    tree: Option<Arc<TreeNodes>>,
    /// Whether a generation request is in flight (disables both triggers).
    generating: bool,
    /// When the list was last fetched successfully.
    #[prop(default = None)]
    fetched_at: Option<DateTime<Utc>>,
) -> impl IntoView {
    let body = match phase {
        Phase::Pending => view! {
            <div class="flex items-center justify-center gap-2 p-4">
                <LoaderIcon class="animate-spin text-textMuted"/>
                <span class="text-textMuted text-sm">"Loading clusterings..."</span>
            </div>
        }
        .into_any(),
        Phase::Error(_) => centered_note("Failed to load clusterings"),
        Phase::Empty => centered_note("No clusterings available"),
        Phase::Success if clusterings.is_empty() => centered_note("No clusterings available"),
        Phase::Success => match selected {
            None => centered_note("No clustering selected"),
            Some(selected) => {
                let tree = tree.unwrap_or_else(|| {
                    Arc::new(crate::clustering::tree::build_tree(&selected))
                });
                selected_view(
                    &collection_id,
                    &clusterings,
                    &selected,
                    &tree,
                    generating,
                    fetched_at,
                )
            }
        },
    };

    view! {
        <div id=PANEL_ID class="flex flex-col gap-4">
            {body}
        </div>
    }
}

fn selected_view(
    collection_id: &str,
    clusterings: &[Clustering],
    selected: &Clustering,
    tree: &TreeNodes,
    generating: bool,
    fetched_at: Option<DateTime<Utc>>,
) -> AnyView {
    let show_standalone =
        clusterings.len() > GENERATE_IN_DROPDOWN_MAX && !selected.is_virtual();
    let generate_url = format!("/collection/{collection_id}/clusterings/generate");

    let standalone = show_standalone.then(|| {
        let classes = format!(
            "w-fit {} {}",
            ButtonVariant::Primary.classes(),
            ButtonSize::Sm.classes()
        );
        view! {
            <button
                type="button"
                class=format!("inline-flex items-center justify-center rounded-lg font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 {classes}")
                hx-post=generate_url.clone()
                hx-target=format!("#{PANEL_ID}")
                hx-swap="outerHTML"
                hx-disabled-elt="this"
                disabled=generating
            >
                {if generating { "Generating..." } else { "Generate Clustering" }}
            </button>
        }
    });

    view! {
        <ClusteringPicker
            collection_id=collection_id.to_string()
            clusterings=clusterings.to_vec()
            selected_id=selected.id.clone()
            selected_title=selected.title.clone()
            generating=generating
        />

        {standalone}

        <div class="flex flex-col gap-2">
            <div class="flex items-center gap-2 text-sm font-medium">
                <BadgeQuestionMarkIcon/>
                "Description"
            </div>
            <div class="border-panelBorder w-full rounded border p-2">
                <p class="text-sm">{selected.description.clone()}</p>
            </div>
            {fetched_at.map(|at| view! {
                <p class="text-textMuted text-xs">
                    {format!("Updated {}", at.format("%H:%M:%S UTC"))}
                </p>
            })}
        </div>

        <TreeSection collection_id=collection_id.to_string() tree=tree.clone()/>
    }
    .into_any()
}

/// Dropdown listing the available clusterings, with the in-dropdown
/// generation trigger when the list is small.
#[component]
fn ClusteringPicker(
    collection_id: String,
    clusterings: Vec<Clustering>,
    selected_id: String,
    selected_title: String,
    generating: bool,
) -> impl IntoView {
    let select_url = format!("/collection/{collection_id}/clusterings/select");
    let generate_url = format!("/collection/{collection_id}/clusterings/generate");
    let offer_generate = clusterings.len() <= GENERATE_IN_DROPDOWN_MAX;

    let title = if selected_title.is_empty() {
        "Clustering".to_string()
    } else {
        selected_title
    };

    let items = clusterings
        .into_iter()
        .map(|clustering| {
            let is_selected = clustering.id == selected_id;
            view! {
                <button
                    type="button"
                    class=format!(
                        "w-full rounded px-2 py-1.5 text-left text-sm hover:bg-panelBorder {}",
                        if is_selected { "bg-panelBorder" } else { "" }
                    )
                    hx-post=select_url.clone()
                    hx-vals=format!(r#"{{"clustering_id": {}}}"#, js_string(&clustering.id))
                    hx-target=format!("#{PANEL_ID}")
                    hx-swap="outerHTML"
                >
                    {clustering.title}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="flex items-center justify-between" x-data="{ open: false }">
            <div class="relative w-full">
                <button
                    type="button"
                    class="flex w-full items-center justify-between rounded-lg border border-panelBorder bg-transparent px-4 py-2 text-sm font-medium hover:bg-panel"
                    x-on:click="open = !open"
                >
                    <span class="max-w-[200px] truncate">{title}</span>
                    <ChevronDownIcon class="ml-1 h-3 w-3"/>
                </button>
                <div
                    class="absolute z-10 mt-1 w-full rounded-lg border border-panelBorder bg-background p-1 shadow-md"
                    x-show="open"
                    x-on:click.outside="open = false"
                    x-cloak=""
                >
                    {items}
                    {offer_generate.then(|| view! {
                        <button
                            type="button"
                            class="w-full rounded px-2 py-1.5 text-left text-sm hover:bg-panelBorder disabled:pointer-events-none disabled:opacity-50"
                            hx-post=generate_url.clone()
                            hx-target=format!("#{PANEL_ID}")
                            hx-swap="outerHTML"
                            hx-disabled-elt="this"
                            disabled=generating
                        >
                            {if generating { "Generating..." } else { "AI Generated" }}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Expandable tree with single selection and expand/collapse-all.
#[component]
fn TreeSection(collection_id: String, tree: TreeNodes) -> impl IntoView {
    let toolbar_button = format!(
        "inline-flex items-center justify-center rounded-lg transition-colors {} {}",
        ButtonVariant::Ghost.classes(),
        ButtonSize::IconSm.classes()
    );

    let body = if tree.has_entries() {
        let folders_json =
            serde_json::to_string(&tree.folder_ids()).unwrap_or_else(|_| "[]".to_string());
        let x_data = format!(
            "{{ open: {{}}, selected: null, folders: {folders_json}, \
             expandAll() {{ this.folders.forEach(id => this.open[id] = true) }}, \
             collapseAll() {{ this.open = {{}} }} }}"
        );

        let mut visited = HashSet::new();
        let rows = tree
            .root()
            .children
            .iter()
            .map(|child| tree_rows(&tree, child, 0, &collection_id, &mut visited))
            .collect::<Vec<_>>();

        let entries = tree.len().saturating_sub(1);

        view! {
            <div class="flex flex-col gap-2" x-data=x_data>
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <h3 class="text-sm font-medium">"Trees"</h3>
                        <Pill>
                            <PillIndicator variant=PillIndicatorVariant::Info/>
                            {format!("{entries} entries")}
                        </Pill>
                    </div>
                    <div class="flex gap-1">
                        <button
                            type="button"
                            class=toolbar_button.clone()
                            x-on:click="expandAll()"
                            aria-label="Expand all"
                        >
                            <ListTreeIcon class="h-3 w-3"/>
                        </button>
                        <button
                            type="button"
                            class=toolbar_button
                            x-on:click="collapseAll()"
                            aria-label="Collapse all"
                        >
                            <ListCollapseIcon class="h-3 w-3"/>
                        </button>
                    </div>
                </div>
                <div role="tree">{rows}</div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex flex-col gap-2">
                <h3 class="text-sm font-medium">"Trees"</h3>
                <Card class="p-4 text-center">
                    <p class="text-textMuted text-sm">"No documents in clustering"</p>
                </Card>
            </div>
        }
        .into_any()
    };

    body
}

/// Render one node and, for folders, its subtree. The root itself is never
/// rendered; callers start from the root's children. `visited` holds the
/// ids on the current path, so a cyclic `children` relation in the payload
/// bottoms out instead of recursing forever.
fn tree_rows(
    tree: &TreeNodes,
    id: &str,
    depth: usize,
    collection_id: &str,
    visited: &mut HashSet<String>,
) -> AnyView {
    let Some(node) = tree.get(id) else {
        // build_tree materializes every referenced id; nothing to render.
        return ().into_any();
    };

    let id_js = js_string(&node.id);
    let indent_style = format!("padding-left: {}px", depth * INDENT);
    let row_base = "flex w-full min-w-0 items-center gap-2 overflow-hidden rounded px-2 py-1 text-sm text-start";

    if node.is_folder() {
        if !visited.insert(node.id.clone()) {
            return ().into_any();
        }
        let children = node
            .children
            .iter()
            .map(|child| tree_rows(tree, child, depth + 1, collection_id, visited))
            .collect::<Vec<_>>();
        visited.remove(&node.id);

        view! {
            <div role="treeitem">
                <button
                    type="button"
                    class=format!("{row_base} hover:bg-panel")
                    style=indent_style
                    x-on:click=format!("open[{id_js}] = !open[{id_js}]; selected = {id_js}")
                    x-bind:class=format!("selected === {id_js} ? 'bg-panelBorder' : ''")
                >
                    <span class="flex-shrink-0" x-show=format!("open[{id_js}]")>
                        <FolderOpenIcon class="h-4 w-4"/>
                    </span>
                    <span class="flex-shrink-0" x-show=format!("!open[{id_js}]")>
                        <FolderIcon class="h-4 w-4"/>
                    </span>
                    <span class="min-w-0 flex-1 truncate text-start">{node.name.clone()}</span>
                </button>
                <div role="group" x-show=format!("open[{id_js}]")>
                    {children}
                </div>
            </div>
        }
        .into_any()
    } else {
        leaf_row(node, &indent_style, row_base, &id_js, collection_id)
    }
}

fn leaf_row(
    node: &TreeNode,
    indent_style: &str,
    row_base: &str,
    id_js: &str,
    collection_id: &str,
) -> AnyView {
    let kind = FileKind::from_name(&node.name);
    let select = format!("selected = {id_js}");
    let highlight = format!("selected === {id_js} ? 'bg-panelBorder' : ''");

    // Placeholder entries render but never navigate.
    if is_placeholder_id(&node.id) {
        return view! {
            <div role="treeitem">
                <button
                    type="button"
                    class=row_base.to_string()
                    style=indent_style.to_string()
                    x-on:click=select
                    x-bind:class=highlight
                >
                    <span class="flex-shrink-0"><FileKindIcon kind=kind/></span>
                    <span class="min-w-0 flex-1 truncate text-start">{node.name.clone()}</span>
                </button>
            </div>
        }
        .into_any();
    }

    let href = format!("/collection/{collection_id}/docs/{}", node.id);
    view! {
        <div role="treeitem">
            <button
                type="button"
                class=format!("{row_base} hover:bg-panel cursor-pointer transition-colors")
                style=indent_style.to_string()
                title="Double-click to view document"
                x-on:click=select
                x-bind:class=highlight
                x-on:dblclick=format!("window.location.href = {}", js_string(&href))
            >
                <span class="flex-shrink-0"><FileKindIcon kind=kind/></span>
                <span class="min-w-0 flex-1 truncate text-start">{node.name.clone()}</span>
            </button>
        </div>
    }
    .into_any()
}

/// Encode a value as a JS string literal for Alpine expressions. JSON
/// string syntax is valid JS; HTML escaping of the attribute is left to
/// the renderer.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
