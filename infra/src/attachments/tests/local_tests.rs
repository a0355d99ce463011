//! Unit tests for the filesystem attachment store

use std::time::Duration;

use acct_core::errors::ErrorKind;
use acct_core::services::AttachmentStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::attachments::local::check_payload;
use crate::attachments::LocalAttachmentStore;
use crate::config::AttachmentConfig;

fn store_in(dir: &tempfile::TempDir, max_bytes: usize) -> LocalAttachmentStore {
    LocalAttachmentStore::new(&AttachmentConfig {
        directory: dir.path().join("blobs").to_string_lossy().into_owned(),
        max_bytes,
        fetch_timeout_secs: 5,
    })
    .unwrap()
}

/// Serves one canned response, then holds the connection open
async fn serve_once(head: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    format!("http://{}/photo.png", addr)
}

#[test]
fn test_check_payload_bounds() {
    assert!(check_payload(1, 10).is_ok());
    assert!(check_payload(10, 10).is_ok());
    assert_eq!(check_payload(0, 10).unwrap_err().kind(), ErrorKind::Malformed);
    assert_eq!(check_payload(11, 10).unwrap_err().kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_create_with_data_writes_blob() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    let attachment = store
        .create_with_data(b"\x89PNG data".to_vec(), "image/png")
        .await
        .unwrap();

    assert_eq!(attachment.content_type, "image/png");
    assert!(store.path_for(&attachment.name).exists());
    assert_eq!(store.read(&attachment.name).await.unwrap(), b"\x89PNG data");
}

#[tokio::test]
async fn test_each_attachment_gets_own_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    let first = store.create_with_data(vec![1], "image/png").await.unwrap();
    let second = store.create_with_data(vec![2], "image/png").await.unwrap();

    assert_ne!(first.name, second.name);
}

#[tokio::test]
async fn test_empty_data_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    let err = store.create_with_data(Vec::new(), "image/png").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_oversized_data_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 4);

    let err = store
        .create_with_data(vec![0; 5], "image/png")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert!(!store.directory().exists());
}

#[tokio::test]
async fn test_unreachable_url_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    let err = store
        .create_with_url("http://127.0.0.1:1/photo.png")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[tokio::test]
async fn test_url_download_is_stored() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);
    let url = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 2\r\n\r\n",
        b"hi".to_vec(),
    )
    .await;

    let attachment = store.create_with_url(&url).await.unwrap();

    assert_eq!(attachment.content_type, "image/png");
    assert_eq!(store.read(&attachment.name).await.unwrap(), b"hi");
}

#[tokio::test]
async fn test_declared_length_over_limit_rejected_at_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 10);
    let url = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 50000000\r\n\r\n",
        vec![0; 100],
    )
    .await;

    let outcome = tokio::time::timeout(Duration::from_secs(2), store.create_with_url(&url))
        .await
        .expect("oversized download must not wait for the body");

    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::Malformed);
    assert!(!store.directory().exists());
}

#[tokio::test]
async fn test_unbounded_body_over_limit_rejected_while_streaming() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 10);
    let url = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n",
        vec![0; 100],
    )
    .await;

    let outcome = tokio::time::timeout(Duration::from_secs(2), store.create_with_url(&url))
        .await
        .expect("streaming download must stop at the size limit");

    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::Malformed);
    assert!(!store.directory().exists());
}
