use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::Form;
use leptos::prelude::*;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::api::HttpCollectionApi;
use crate::chat::{ApiChatHandler, ChatSubmission};
use crate::clustering::store::ClusteringStore;
use crate::config::AppConfig;
use crate::ui::app::{CollectionPage, DocumentPage, NewDocumentPage, NotFoundPage};
use crate::ui::chat::{invalid_form, reset_form};
use crate::ui::clustering::ClusteringPanel;
use crate::ui::toast::{Toast, ToastVariant};

/// Fallback message when a generation error payload has no usable detail.
const GENERATE_FALLBACK_ERROR: &str = "Failed to generate clustering. Please try again.";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/collection/{id}", get(collection_page))
        .route("/collection/{id}/clusterings", get(clusterings_fragment))
        .route(
            "/collection/{id}/clusterings/select",
            post(select_clustering),
        )
        .route(
            "/collection/{id}/clusterings/generate",
            post(generate_clustering),
        )
        .route("/collection/{id}/chat", post(chat_submit))
        .route("/collection/{id}/docs", get(new_document_page))
        .route("/collection/{id}/docs/{doc_id}", get(document_page))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let api = Arc::new(HttpCollectionApi::new(
        url::Url::parse(&config.api.base_url)?,
        Duration::from_secs(config.api.timeout_secs),
    )?);

    let state = AppState {
        chat: Arc::new(ApiChatHandler::new(api.clone())),
        api,
        stores: crate::clustering::store::ClusteringStores::new(),
        config: config.clone(),
    };

    // Request timeout. Same trick as always: a huge duration instead of a
    // conditional layer, so the router type stays put.
    let timeout = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(30)
    };

    let app = router(state)
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(axum::middleware::from_fn(move |req: Request, next: Next| {
            async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            }
        }));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(name: "server.listening", %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn html<V: IntoView>(view: V) -> Html<String> {
    Html(view.to_html())
}

/// Placeholder collection identity until collection metadata is wired in.
fn collection_title(collection_id: &str) -> String {
    format!("Collection {collection_id}")
}

async fn collection_page(Path(id): Path<String>) -> Html<String> {
    html(view! {
        <CollectionPage
            collection_id=id.clone()
            title=collection_title(&id)
            description="Browse, cluster, and chat over this collection's documents.".to_string()
        />
    })
}

async fn document_page(Path((id, doc_id)): Path<(String, String)>) -> Html<String> {
    html(view! { <DocumentPage collection_id=id document_id=doc_id/> })
}

async fn new_document_page(Path(id): Path<String>) -> Html<String> {
    html(view! { <NewDocumentPage collection_id=id/> })
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, html(view! { <NotFoundPage/> }))
}

/// Render the clustering panel from the store's current state.
fn render_panel(store: &ClusteringStore, collection_id: &str) -> Html<String> {
    let clusterings = store.clusterings();
    let selected = store.selected();
    let tree = selected.as_ref().map(|c| store.tree_for(c));

    html(view! {
        <ClusteringPanel
            collection_id=collection_id.to_string()
            phase=store.phase()
            clusterings=clusterings
            selected=selected
            tree=tree
            generating=store.is_generating()
            fetched_at=store.fetched_at()
        />
    })
}

/// Fetch the clustering list and apply it to the store. Stale completions
/// lose to newer fetches via the epoch.
async fn refresh_clusterings(state: &AppState, store: &ClusteringStore, collection_id: &str) {
    let epoch = store.begin_fetch();
    let result = state
        .api
        .list_clusterings(collection_id)
        .await
        .map_err(|e| e.to_string());
    if let Err(message) = &result {
        warn!(name: "clusterings.fetch.failed", collection_id, %message, "Clustering fetch failed");
    }
    if store.finish_fetch(epoch, result) {
        info!(
            name: "clusterings.fetched",
            collection_id,
            count = store.len(),
            "Clustering list updated"
        );
    }
}

async fn clusterings_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let store = state.stores.for_collection(&id);
    refresh_clusterings(&state, &store, &id).await;
    render_panel(&store, &id)
}

#[derive(Debug, Deserialize)]
struct SelectForm {
    clustering_id: String,
}

async fn select_clustering(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SelectForm>,
) -> Html<String> {
    let store = state.stores.for_collection(&id);
    store.select(&form.clustering_id);
    render_panel(&store, &id)
}

async fn generate_clustering(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let store = state.stores.for_collection(&id);

    // Single-flight across both triggers.
    if !store.begin_generation() {
        return render_panel(&store, &id);
    }

    let result = state.api.generate_clustering(&id).await;
    let toast = match result {
        Ok(()) => {
            info!(name: "clustering.generated", collection_id = %id, "Clustering generated");
            refresh_clusterings(&state, &store, &id).await;
            view! {
                <Toast
                    variant=ToastVariant::Success
                    message="Clustering generated successfully!".to_string()
                />
            }
        }
        Err(error) => {
            warn!(name: "clustering.generate.failed", collection_id = %id, %error, "Generation failed");
            let message = error
                .detail()
                .unwrap_or_else(|| GENERATE_FALLBACK_ERROR.to_string());
            view! { <Toast variant=ToastVariant::Error message=message/> }
        }
    };
    store.finish_generation();

    let panel = render_panel(&store, &id);
    Html(format!("{}{}", panel.0, toast.to_html()))
}

async fn chat_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(submission): Form<ChatSubmission>,
) -> Response {
    if submission.validate().is_err() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(invalid_form(&id, true).to_html()),
        )
            .into_response();
    }

    info!(
        name: "chat.submitted",
        collection_id = %id,
        references = submission.reference.len(),
        "Chat message submitted"
    );

    // Reset is unconditional: a handler failure surfaces as a toast, the
    // form still comes back empty.
    let reset = reset_form(&id, true).to_html();
    match state.chat.handle(&id, submission).await {
        Ok(()) => Html(reset).into_response(),
        Err(error) => {
            warn!(name: "chat.dispatch.failed", collection_id = %id, %error, "Chat dispatch failed");
            let toast = view! {
                <Toast
                    variant=ToastVariant::Error
                    message="Failed to send message. Please try again.".to_string()
                />
            };
            Html(format!("{}{}", reset, toast.to_html())).into_response()
        }
    }
}
