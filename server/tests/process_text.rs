use std::net::SocketAddr;

use context_client::Client;
use server::{bind, serve, ServerError};
use tonic::transport::Uri;

async fn start_server() -> SocketAddr {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener));
    addr
}

async fn connect(addr: SocketAddr) -> Client {
    let uri: Uri = format!("http://{addr}").parse().unwrap();
    Client::new(uri).await.unwrap()
}

#[tokio::test]
async fn process_text_round_trip() {
    let mut client = connect(start_server().await).await;

    let processed = client.process_text("hello").await.unwrap();
    assert_eq!(processed, "Echo: hello");
}

#[tokio::test]
async fn empty_input_round_trip() {
    let mut client = connect(start_server().await).await;

    let processed = client.process_text("").await.unwrap();
    assert_eq!(processed, "Echo: ");
}

#[tokio::test]
async fn repeated_calls_return_identical_output() {
    let mut client = connect(start_server().await).await;

    let first = client.process_text("same input").await.unwrap();
    let second = client.process_text("same input").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_calls_do_not_cross_contaminate() {
    let client = connect(start_server().await).await;
    let mut c1 = client.clone();
    let mut c2 = client;

    let (a, b) = tokio::join!(c1.process_text("a"), c2.process_text("b"));
    assert_eq!(a.unwrap(), "Echo: a");
    assert_eq!(b.unwrap(), "Echo: b");
}

#[tokio::test]
async fn bind_fails_on_occupied_port() {
    let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let err = bind(addr).await.unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
}
