//! Chat form: controlled message input with document mentions.
//!
//! The form posts through HTMX and is swapped wholesale with the server's
//! response, which is how reset-after-submit happens: a valid submission
//! comes back as a fresh empty form, an invalid one comes back with the
//! validation message rendered under the field.

use leptos::prelude::*;

use crate::chat::{MESSAGE_REQUIRED, SUGGESTIONS};
use crate::ui::components::{ButtonSize, ButtonVariant, SendIcon};

/// DOM id of the swappable form fragment.
pub const FORM_ID: &str = "chat-form";

/// Chat input form with mention support and optional suggestion chips.
#[component]
pub fn ChatForm(
    collection_id: String,
    /// Render fixed suggestion chips while the message is empty.
    #[prop(default = false)]
    suggest: bool,
    /// Validation error from the previous submission, if any.
    #[prop(default = None)]
    error: Option<String>,
    /// Disable the whole form.
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let submit_url = format!("/collection/{collection_id}/chat");

    let suggestions = suggest.then(|| {
        let chips = SUGGESTIONS
            .iter()
            .map(|text| {
                view! {
                    <button
                        type="button"
                        class="rounded-full border border-panelBorder bg-panel px-3 py-1.5 text-sm text-textPrimary transition-colors hover:bg-panelBorder"
                        x-on:click=format!("message = {}", js_string(text))
                    >
                        {*text}
                    </button>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="flex flex-wrap gap-2" x-show="message === ''">
                {chips}
            </div>
        }
    });

    let send_classes = format!(
        "inline-flex shrink-0 items-center justify-center rounded-xl font-medium transition-colors disabled:pointer-events-none disabled:opacity-50 {} {}",
        ButtonVariant::Primary.classes(),
        ButtonSize::Icon.classes()
    );

    view! {
        <form
            id=FORM_ID
            class="flex w-full flex-col gap-2"
            hx-post=submit_url
            hx-target=format!("#{FORM_ID}")
            hx-swap="outerHTML"
            x-data="{ message: '' }"
        >
            {suggestions}

            <div class="flex gap-2">
                <div class="flex-1 relative">
                    <label for="chat_message" class="sr-only">"Message"</label>
                    // The mention-input Web Component watches for "@" and
                    // maintains hidden `reference` inputs inside the form as
                    // mentions are added and removed.
                    <mention-input collection-id=collection_id.clone() class="block w-full">
                        <textarea
                            id="chat_message"
                            name="chat_message"
                            placeholder="Type @ to mention a document..."
                            class="w-full min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl \
                                   border border-panelBorder bg-background text-textPrimary \
                                   placeholder:text-textMuted resize-none \
                                   focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent"
                            rows="1"
                            x-model="message"
                            x-on:keydown.enter="if (!$event.shiftKey) { $event.preventDefault(); if (message.trim()) $el.form.requestSubmit() }"
                            required
                            disabled=disabled
                        />
                    </mention-input>
                    {error.map(|message| view! {
                        <p class="text-danger mt-1 text-sm">{message}</p>
                    })}
                </div>

                <button
                    type="submit"
                    class=send_classes
                    disabled=disabled
                    x-bind:disabled="!message.trim()"
                    aria-label="Send message"
                >
                    <SendIcon class="h-5 w-5"/>
                </button>
            </div>
        </form>
    }
}

/// Fresh empty form, rendered after a successful submission.
#[must_use]
pub fn reset_form(collection_id: &str, suggest: bool) -> AnyView {
    view! {
        <ChatForm collection_id=collection_id.to_string() suggest=suggest/>
    }
    .into_any()
}

/// Form re-rendered with the "Message is required" validation error.
#[must_use]
pub fn invalid_form(collection_id: &str, suggest: bool) -> AnyView {
    view! {
        <ChatForm
            collection_id=collection_id.to_string()
            suggest=suggest
            error=Some(MESSAGE_REQUIRED.to_string())
        />
    }
    .into_any()
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
