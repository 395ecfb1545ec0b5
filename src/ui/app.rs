//! Page layouts: document shell and the routed pages.

use leptos::prelude::*;

use crate::ui::chat::ChatForm;
use crate::ui::components::{Card, CardContent, CardHeader};
use crate::ui::sidebar::{CollectionHeader, CollectionSidebar};

const HTMX_RESPONSE_HANDLING: &str = r#"
document.addEventListener("DOMContentLoaded", () => {
  htmx.config.responseHandling = [
    { code: "204", swap: false },
    { code: "[23]..", swap: true },
    { code: "422", swap: true },
    { code: "[45]..", swap: false, error: true },
  ];
});
"#;

/// Document shell shared by every page.
///
/// Scripts are served locally from `static/`, no CDN.
#[component]
pub fn Page(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Collection workbench"/>

                <title>{title}</title>

                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                // 422 carries the re-rendered form with its validation
                // message; htmx must swap it like a success.
                <script>{HTMX_RESPONSE_HANDLING}</script>

                // mention-input Web Component bundle
                <script type="module" src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
                <div id="toast-region" class="fixed bottom-4 right-4 z-50 flex flex-col gap-2"></div>
            </body>
        </html>
    }
}

/// Main collection page: sidebar plus the chat pane.
#[component]
pub fn CollectionPage(
    collection_id: String,
    title: String,
    description: String,
) -> impl IntoView {
    view! {
        <Page title=format!("{title} - Workbench")>
            <div class="flex min-h-screen" x-data="{ sidebar: true }">
                <CollectionSidebar
                    collection_id=collection_id.clone()
                    title=title.clone()
                    description=description
                />
                <main class="flex min-h-screen flex-1 flex-col px-4 py-4">
                    <CollectionHeader title=title/>
                    <div class="flex flex-1 flex-col justify-end gap-4">
                        <ChatForm collection_id=collection_id suggest=true/>
                    </div>
                </main>
            </div>
        </Page>
    }
}

/// Document detail page. Navigation target for leaf double-clicks; the
/// document body itself comes from the remote API elsewhere.
#[component]
pub fn DocumentPage(collection_id: String, document_id: String) -> impl IntoView {
    let back_url = format!("/collection/{collection_id}");
    view! {
        <Page title=format!("{document_id} - Workbench")>
            <div class="container mx-auto max-w-3xl px-4 py-10">
                <Card>
                    <CardHeader>
                        <h1 class="text-xl font-semibold">{document_id}</h1>
                    </CardHeader>
                    <CardContent>
                        <a href=back_url class="text-primary text-sm hover:underline">
                            "Back to collection"
                        </a>
                    </CardContent>
                </Card>
            </div>
        </Page>
    }
}

/// Document creation page. Navigation target for the sidebar's
/// new-document action.
#[component]
pub fn NewDocumentPage(collection_id: String) -> impl IntoView {
    let back_url = format!("/collection/{collection_id}");
    view! {
        <Page title="New document - Workbench">
            <div class="container mx-auto max-w-3xl px-4 py-10">
                <Card>
                    <CardHeader>
                        <h1 class="text-xl font-semibold">"New document"</h1>
                    </CardHeader>
                    <CardContent>
                        <a href=back_url class="text-primary text-sm hover:underline">
                            "Back to collection"
                        </a>
                    </CardContent>
                </Card>
            </div>
        </Page>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Page title="Not found - Workbench">
            <div class="flex flex-col items-center justify-center py-20">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-textMuted mb-6">"Page not found"</p>
            </div>
        </Page>
    }
}
