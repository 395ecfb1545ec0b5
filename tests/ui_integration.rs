//! End-to-end fragment rendering tests against a stubbed collection API.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use collection_workbench::AppState;
use collection_workbench::api::{ApiError, CollectionApi};
use collection_workbench::chat::{ChatHandler, ChatSubmission};
use collection_workbench::clustering::store::ClusteringStores;
use collection_workbench::clustering::{Clustering, Item};
use collection_workbench::config::AppConfig;
use collection_workbench::server::router;

/// Stub API with scripted responses.
#[derive(Clone, Default)]
struct StubApi {
    clusterings: Vec<Clustering>,
    fail_list: bool,
    generate_error_body: Option<String>,
}

#[async_trait]
impl CollectionApi for StubApi {
    async fn list_clusterings(&self, _collection_id: &str) -> Result<Vec<Clustering>, ApiError> {
        if self.fail_list {
            return Err(ApiError::Upstream {
                status: 500,
                body: "upstream down".to_string(),
            });
        }
        Ok(self.clusterings.clone())
    }

    async fn generate_clustering(&self, _collection_id: &str) -> Result<(), ApiError> {
        match &self.generate_error_body {
            Some(body) => Err(ApiError::Upstream {
                status: 422,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn send_chat(
        &self,
        _collection_id: &str,
        _submission: &ChatSubmission,
    ) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Chat handler that records what it was given.
#[derive(Clone, Default)]
struct RecordingChat {
    calls: Arc<Mutex<Vec<(String, ChatSubmission)>>>,
}

#[async_trait]
impl ChatHandler for RecordingChat {
    async fn handle(&self, collection_id: &str, submission: ChatSubmission) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((collection_id.to_string(), submission));
        Ok(())
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: collection_workbench::config::ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        api: collection_workbench::config::ApiConfig {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 5,
        },
        resilience: collection_workbench::config::ResilienceConfig {
            timeout_disabled: true,
        },
    }
}

fn server_with(api: StubApi, chat: RecordingChat) -> TestServer {
    let state = AppState {
        api: Arc::new(api),
        chat: Arc::new(chat),
        stores: ClusteringStores::new(),
        config: Arc::new(test_config()),
    };
    TestServer::new(router(state)).expect("failed to build test server")
}

fn clustering(id: &str, title: &str, items: Vec<Item>) -> Clustering {
    Clustering {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        items,
    }
}

fn leaf(id: &str, name: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        parent: None,
        children: Vec::new(),
    }
}

fn folder(id: &str, name: &str, children: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        parent: None,
        children: children.iter().map(ToString::to_string).collect(),
    }
}

#[tokio::test]
async fn test_fragment_renders_tree_and_dropdown_generate() {
    let api = StubApi {
        clusterings: vec![clustering(
            "c1",
            "Topics",
            vec![
                folder("grp-1", "Research", &["doc-1"]),
                leaf("doc-1", "paper.pdf"),
            ],
        )],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let response = server.get("/collection/col-1/clusterings").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("Topics"));
    assert!(body.contains("Trees"));
    assert!(body.contains("Research"));
    assert!(body.contains("paper.pdf"));
    // One clustering: generation lives in the dropdown.
    assert!(body.contains("AI Generated"));
    assert!(!body.contains("Generate Clustering"));
}

#[tokio::test]
async fn test_standalone_generate_shown_for_large_non_virtual_list() {
    let api = StubApi {
        clusterings: vec![
            clustering("c1", "Topics", Vec::new()),
            clustering("c2", "Authors", Vec::new()),
            clustering("c3", "Years", Vec::new()),
        ],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let response = server.get("/collection/col-1/clusterings").await;
    let body = response.text();

    // Three clusterings with a non-virtual selection: standalone button,
    // no dropdown item.
    assert!(body.contains("Generate Clustering"));
    assert!(!body.contains("AI Generated"));
}

#[tokio::test]
async fn test_standalone_generate_hidden_for_virtual_selection() {
    let api = StubApi {
        clusterings: vec![
            clustering("c1", "Topics", Vec::new()),
            clustering("c2", "Authors", Vec::new()),
            clustering("c3-virtual", "Folders", Vec::new()),
        ],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    // Populate the store, then select the virtual clustering.
    server.get("/collection/col-1/clusterings").await;
    let response = server
        .post("/collection/col-1/clusterings/select")
        .form(&[("clustering_id", "c3-virtual")])
        .await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("Folders description"));
    assert!(!body.contains("Generate Clustering"));
}

#[tokio::test]
async fn test_fetch_failure_renders_error_state() {
    let api = StubApi {
        fail_list: true,
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let body = server.get("/collection/col-1/clusterings").await.text();
    assert!(body.contains("Failed to load clusterings"));
}

#[tokio::test]
async fn test_empty_list_renders_empty_state() {
    let server = server_with(StubApi::default(), RecordingChat::default());

    let body = server.get("/collection/col-1/clusterings").await.text();
    assert!(body.contains("No clusterings available"));
}

#[tokio::test]
async fn test_unknown_selection_renders_no_selection() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    server.get("/collection/col-1/clusterings").await;
    let response = server
        .post("/collection/col-1/clusterings/select")
        .form(&[("clustering_id", "nope")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("No clustering selected"));
}

#[tokio::test]
async fn test_empty_clustering_renders_placeholder_card() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let body = server.get("/collection/col-1/clusterings").await.text();
    assert!(body.contains("No documents in clustering"));
}

#[tokio::test]
async fn test_cyclic_payload_renders_without_hanging() {
    // c -> a -> b -> a: a malformed payload with a cycle in the children
    // relation must render finitely, not hang the fragment endpoint.
    let api = StubApi {
        clusterings: vec![clustering(
            "c1",
            "Topics",
            vec![
                folder("c", "Outer", &["a"]),
                folder("a", "Left", &["b"]),
                folder("b", "Right", &["a"]),
            ],
        )],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let response = server.get("/collection/col-1/clusterings").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("Outer"));
    assert!(body.contains("Left"));
    assert!(body.contains("Right"));
}

#[tokio::test]
async fn test_fetch_time_rendered_in_panel() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let body = server.get("/collection/col-1/clusterings").await.text();
    assert!(body.contains("Updated "));
}

#[tokio::test]
async fn test_placeholder_leaves_do_not_navigate() {
    let api = StubApi {
        clusterings: vec![clustering(
            "c1",
            "Topics",
            vec![leaf("id-42", "pending.pdf"), leaf("doc-42", "ready.pdf")],
        )],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let body = server.get("/collection/col-1/clusterings").await.text();
    assert!(body.contains("/collection/col-1/docs/doc-42"));
    assert!(!body.contains("/collection/col-1/docs/id-42"));
}

#[tokio::test]
async fn test_generate_success_refetches_and_toasts() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let response = server
        .post("/collection/col-1/clusterings/generate")
        .await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("Clustering generated successfully!"));
    // Refetched list renders alongside the toast.
    assert!(body.contains("Topics"));
}

#[tokio::test]
async fn test_generate_failure_surfaces_detail_message() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        generate_error_body: Some(r#"{"detail":"Collection has too few documents"}"#.to_string()),
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    server.get("/collection/col-1/clusterings").await;
    let body = server
        .post("/collection/col-1/clusterings/generate")
        .await
        .text();

    assert!(body.contains("Collection has too few documents"));
}

#[tokio::test]
async fn test_generate_failure_without_detail_uses_fallback() {
    let api = StubApi {
        clusterings: vec![clustering("c1", "Topics", Vec::new())],
        generate_error_body: Some("wedged".to_string()),
        ..StubApi::default()
    };
    let server = server_with(api, RecordingChat::default());

    let body = server
        .post("/collection/col-1/clusterings/generate")
        .await
        .text();
    assert!(body.contains("Failed to generate clustering. Please try again."));
}

#[tokio::test]
async fn test_chat_empty_message_is_blocked() {
    let chat = RecordingChat::default();
    let server = server_with(StubApi::default(), chat.clone());

    let response = server
        .post("/collection/col-1/chat")
        .form(&[("chat_message", "")])
        .await;
    response.assert_status_unprocessable_entity();
    assert!(response.text().contains("Message is required"));
    assert!(chat.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_valid_message_dispatches_and_resets() {
    let chat = RecordingChat::default();
    let server = server_with(StubApi::default(), chat.clone());

    let response = server
        .post("/collection/col-1/chat")
        .form(&[
            ("chat_message", "hello"),
            ("reference", "doc-1"),
            ("reference", "doc-2"),
        ])
        .await;
    response.assert_status_ok();

    let calls = chat.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (collection_id, submission) = &calls[0];
    assert_eq!(collection_id, "col-1");
    assert_eq!(submission.chat_message, "hello");
    assert_eq!(submission.reference, vec!["doc-1", "doc-2"]);

    // The response is a fresh, empty form.
    let body = response.text();
    assert!(!body.contains("hello"));
    assert!(!body.contains("Message is required"));
}

#[tokio::test]
async fn test_collection_page_renders_shell() {
    let server = server_with(StubApi::default(), RecordingChat::default());

    let response = server.get("/collection/col-1").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("Collection col-1"));
    assert!(body.contains("chat-form"));
    assert!(body.contains("/collection/col-1/clusterings"));
}
