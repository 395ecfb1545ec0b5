//! Collection sidebar and the collapsed-state header.

use leptos::prelude::*;

use crate::ui::clustering::PANEL_ID;
use crate::ui::components::{
    FilePlusIcon, Input, LoaderIcon, PanelLeftIcon, SearchIcon, Separator,
};
use crate::ui::settings::SettingsDialog;

/// Sidebar for one collection: identity, search, new-document action, and
/// the clustering panel.
///
/// The clustering panel is loaded as an HTMX fragment on mount, so the
/// sidebar itself renders instantly with a loading row in its place.
#[component]
pub fn CollectionSidebar(
    collection_id: String,
    title: String,
    description: String,
) -> impl IntoView {
    let clusterings_url = format!("/collection/{collection_id}/clusterings");
    let new_doc_url = format!("/collection/{collection_id}/docs");

    view! {
        <aside
            class="flex h-screen w-72 shrink-0 flex-col border-r border-panelBorder bg-panel/50"
            x-show="sidebar"
        >
            <div class="flex flex-row items-center justify-between p-4">
                <a href="/home" class="text-lg font-semibold text-primary">"Workbench"</a>
                <SettingsDialog/>
            </div>
            <Separator/>
            <div class="flex min-h-0 flex-1 flex-col gap-6 overflow-auto p-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-semibold">{title}</h1>
                </div>
                <p class="text-textMuted text-sm font-light">{description}</p>
                <Separator/>
                <div class="flex w-full gap-2">
                    <div class="relative flex-1">
                        <Input
                            input_type="search"
                            name="q"
                            placeholder="Search documents..."
                            class="pl-8"
                        />
                        <span class="pointer-events-none absolute left-2 top-1/2 -translate-y-1/2 text-textMuted">
                            <SearchIcon/>
                        </span>
                    </div>
                    <a
                        href=new_doc_url
                        class="inline-flex h-10 w-10 items-center justify-center rounded-lg border border-panelBorder text-textPrimary hover:bg-panel"
                        aria-label="New document"
                    >
                        <FilePlusIcon/>
                    </a>
                </div>
                <div
                    hx-get=clusterings_url
                    hx-trigger="load"
                    hx-target="this"
                    hx-swap="outerHTML"
                >
                    <div id=PANEL_ID class="flex items-center justify-center gap-2 p-4">
                        <LoaderIcon class="animate-spin text-textMuted"/>
                        <span class="text-textMuted text-sm">"Loading clusterings..."</span>
                    </div>
                </div>
            </div>
        </aside>
    }
}

/// Header row above the main pane: sidebar trigger, and the collection
/// title when the sidebar is collapsed.
#[component]
pub fn CollectionHeader(title: String) -> impl IntoView {
    view! {
        <div class="mb-2 flex w-full items-center justify-between gap-4">
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="inline-flex h-8 w-8 items-center justify-center rounded-lg text-textMuted hover:bg-panel hover:text-textPrimary"
                    x-on:click="sidebar = !sidebar"
                    aria-label="Toggle sidebar"
                >
                    <PanelLeftIcon/>
                </button>
                <span x-show="!sidebar">{title}</span>
            </div>
        </div>
    }
}
