use std::sync::Arc;
use std::time::Duration;

use etymo_client::config::ClientConfig;
use etymo_client::handler::HandlerState;
use etymo_client::http_handler;
use etymo_client::model::SchemaVersion;
use etymo_client::view::{ElementId, MemoryView};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

/// Raw request as the stub server saw it.
struct Captured {
    head: String,
    body: String,
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Serves exactly one request with `status` and `body`, then hands back what it received.
async fn stub_server(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);
            let text = String::from_utf8_lossy(&buffer).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let head = &text[..end];
                if buffer.len() >= end + 4 + content_length(head) {
                    break;
                }
            }
        }

        let text = String::from_utf8_lossy(&buffer).to_string();
        let (head, request_body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let _ = tx.send(Captured {
            head: head.to_string(),
            body: request_body.to_string(),
        });
    });

    (base_url, rx)
}

fn config(base_url: String, schema: SchemaVersion) -> ClientConfig {
    ClientConfig {
        base_url,
        schema,
        timeout_secs: Some(5),
        ..Default::default()
    }
}

#[tokio::test]
async fn posts_form_and_renders_similarity_answer() {
    let (base_url, captured) = stub_server(
        "200 OK",
        r#"{"most_similar_word":"feline","similarity_score":0.91,"origin_language":"Latin","noun_meaning":"a small domesticated carnivore","adj_meaning":"catlike","verb_meaning":"to whip"}"#,
    )
    .await;
    let view = Arc::new(Mutex::new(MemoryView::new()));
    let handler = http_handler(&config(base_url, SchemaVersion::Similarity), view.clone()).unwrap();

    let outcome = handler.submit_word("cat").await;
    assert_eq!(HandlerState::Rendered, outcome.state);

    let request = captured.await.unwrap();
    assert!(request.head.starts_with("POST /get_etymology HTTP/1.1"));
    assert!(request
        .head
        .to_lowercase()
        .contains("content-type: application/x-www-form-urlencoded"));
    assert_eq!("word=cat", request.body);

    let view = view.lock().await;
    assert_eq!(
        Some("Most similar word: feline"),
        view.text(&ElementId::new("wordOutput"))
    );
    assert!(view.is_visible(&ElementId::new("responsePanel")));
}

#[tokio::test]
async fn legacy_answer_with_error_field_alerts() {
    let (base_url, captured) = stub_server(
        "200 OK",
        r#"{"error":"The word is not recognized as an English word."}"#,
    )
    .await;
    let view = Arc::new(Mutex::new(MemoryView::new()));
    let handler = http_handler(&config(base_url, SchemaVersion::Legacy), view.clone()).unwrap();

    let outcome = handler.submit_word("qwerty").await;
    assert_eq!(HandlerState::ErrorShown, outcome.state);
    assert_eq!("word=qwerty", captured.await.unwrap().body);

    let view = view.lock().await;
    assert_eq!(
        vec!["The word is not recognized as an English word.".to_string()],
        view.alerts().to_vec()
    );
    assert!(!view.is_visible(&ElementId::new("responsePanel")));
}

#[tokio::test]
async fn server_error_status_alerts_once() {
    let (base_url, _captured) = stub_server("500 Internal Server Error", "{}").await;
    let view = Arc::new(Mutex::new(MemoryView::new()));
    let handler = http_handler(&config(base_url, SchemaVersion::Similarity), view.clone()).unwrap();

    let outcome = handler.submit_word("cat").await;
    assert_eq!(HandlerState::Failed, outcome.state);

    let view = view.lock().await;
    assert_eq!(1, view.alerts().len());
    assert!(view.alerts()[0].contains("500"));
    assert_eq!(None, view.text(&ElementId::new("wordOutput")));
}

#[tokio::test]
async fn server_error_with_error_body_alerts_server_message() {
    let (base_url, captured) = stub_server(
        "500 Internal Server Error",
        r#"{"error":"Error running subprocess."}"#,
    )
    .await;
    let view = Arc::new(Mutex::new(MemoryView::new()));
    let handler = http_handler(&config(base_url, SchemaVersion::Similarity), view.clone()).unwrap();

    let outcome = handler.submit_word("cat").await;
    assert_eq!(HandlerState::ErrorShown, outcome.state);
    assert_eq!("word=cat", captured.await.unwrap().body);

    let view = view.lock().await;
    assert_eq!(vec!["Error running subprocess.".to_string()], view.alerts().to_vec());
    assert_eq!(None, view.text(&ElementId::new("wordOutput")));
    assert!(!view.is_visible(&ElementId::new("responsePanel")));
}

#[tokio::test]
async fn timeout_alerts_once() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        // accept and never answer
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let mut config = config(base_url, SchemaVersion::Similarity);
    config.timeout_secs = Some(1);
    let view = Arc::new(Mutex::new(MemoryView::new()));
    let handler = http_handler(&config, view.clone()).unwrap();

    let outcome = handler.submit_word("cat").await;
    assert_eq!(HandlerState::Failed, outcome.state);
    assert_eq!(1, view.lock().await.alerts().len());
}
