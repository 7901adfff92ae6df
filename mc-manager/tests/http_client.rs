use mc_manager::{Client, HttpClient, HttpClientConfig};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

/// 接收一个连接，返回请求行与请求头
async fn capture_one_request() -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 204 No Content\r\ncontent-length: 0\r\n\r\n")
            .await
            .unwrap();
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });

    (Url::parse(&format!("http://{addr}/collect/")).unwrap(), rx)
}

#[tokio::test]
async fn fetch_sends_get_without_waiting() {
    let (endpoint, rx) = capture_one_request().await;
    let client = HttpClient::new(
        Url::parse("https://example.com/page").unwrap(),
        HttpClientConfig {
            user_agent: "relay-test".into(),
            ..Default::default()
        },
    )
    .unwrap();

    let mut target = endpoint.clone();
    target.query_pairs_mut().append_pair("fmt", "js").append_pair("v", "2");
    client.fetch(target).unwrap();

    let request = tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .expect("request not received in time")
        .unwrap();

    let request_line = request.lines().next().unwrap();
    assert_eq!(request_line, "GET /collect/?fmt=js&v=2 HTTP/1.1");
    assert!(request.to_ascii_lowercase().contains("user-agent: relay-test"));
}

#[tokio::test]
async fn fetch_to_unreachable_host_is_not_reported() {
    let client = HttpClient::parse("https://example.com/page").unwrap();
    // 端口 9 (discard) 在测试机上通常无人监听，失败只记录日志
    let target = Url::parse("http://127.0.0.1:9/collect/?fmt=js").unwrap();
    assert!(client.fetch(target).is_ok());
    assert_eq!(client.url().as_str(), "https://example.com/page");
}
