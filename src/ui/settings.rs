//! Settings dialog and panel.

use leptos::prelude::*;

use crate::ui::components::{
    Avatar, Button, ButtonSize, ButtonVariant, LogOutIcon, ScrollArea, Separator,
    SeparatorOrientation, UserPenIcon,
};

/// Avatar-triggered modal dialog wrapping the settings panel.
///
/// Open/close is Alpine-local; nothing about settings round-trips until a
/// concrete setting does.
#[component]
pub fn SettingsDialog() -> impl IntoView {
    view! {
        <div x-data="{ open: false }">
            <button
                type="button"
                class="rounded-full"
                x-on:click="open = true"
                aria-label="Open settings"
            >
                <Avatar size="h-8 w-8"/>
            </button>

            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50"
                x-show="open"
                x-on:click.self="open = false"
                x-on:keydown.escape.window="open = false"
                x-cloak=""
            >
                <div class="w-full max-w-2xl rounded-xl border border-panelBorder bg-background p-6 shadow-lg">
                    <div class="mb-4 flex items-center justify-between">
                        <h2 class="text-lg font-semibold">"Settings"</h2>
                        <button
                            type="button"
                            class="text-textMuted hover:text-textPrimary"
                            x-on:click="open = false"
                            aria-label="Close settings"
                        >
                            "✕"
                        </button>
                    </div>
                    <SettingsPanel/>
                </div>
            </div>
        </div>
    }
}

/// Vertical-tab settings panel with the account section.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    view! {
        <div class="flex h-[70vh] w-full flex-row">
            <div class="flex flex-col items-start justify-start gap-1 px-1 py-0">
                <button
                    type="button"
                    class="relative flex w-full items-center justify-start gap-1.5 rounded px-3 py-2 text-sm hover:bg-panel"
                >
                    <UserPenIcon class="opacity-60"/>
                    "Account"
                </button>
            </div>
            <Separator orientation=SeparatorOrientation::Vertical/>
            <div class="flex-1 pl-4">
                <ScrollArea class="flex h-full flex-col gap-y-4">
                    <div class="flex items-center gap-6">
                        <Avatar size="size-36"/>
                        <div class="flex flex-col gap-2">
                            <h4 class="text-4xl font-bold">"Username"</h4>
                            <p class="text-base">"Email@email.com"</p>
                        </div>
                    </div>
                    <div>
                        <Button variant=ButtonVariant::Destructive size=ButtonSize::Md>
                            <LogOutIcon class="mr-2"/>
                            <span>"Logout"</span>
                        </Button>
                    </div>
                </ScrollArea>
            </div>
        </div>
    }
}
