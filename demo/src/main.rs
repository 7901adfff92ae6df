//! 用法：demo [page_url] [payload_json]
//!
//! 加载 LinkedIn 组件，为给定页面派发一个 `event` 事件。
//! 日志级别由 `RUST_LOG` 控制，默认 `debug`。
use anyhow::{Context, bail};
use mc_linkedin::{EVENT_TYPE, LinkedIn};
use mc_manager::{ComponentSettings, Event, HttpClient, Manager};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let page = args
        .next()
        .unwrap_or_else(|| "https://example.com/page".to_string());
    let payload = match args.next() {
        Some(raw) => match serde_json::from_str(&raw).context("payload must be JSON")? {
            Value::Object(map) => map,
            other => bail!("payload must be a JSON object, got {other}"),
        },
        None => serde_json::Map::new(),
    };

    let manager = Manager::new();
    manager
        .load_component(&LinkedIn::new(), &ComponentSettings::new())
        .await?;

    let client = Arc::new(HttpClient::parse(&page)?);
    let event = Event::builder()
        .event_type(EVENT_TYPE)
        .client(client)
        .payload(payload)
        .build();

    manager.dispatch(&event).await?;
    tracing::info!(page = %page, "event dispatched");

    // 请求在后台任务中执行，留出时间让其完成后再退出
    tokio::time::sleep(Duration::from_secs(2)).await;
    Ok(())
}
