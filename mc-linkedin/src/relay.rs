//! 追踪中继监听器（TrackingRelay）
//!
//! 每个事件构造一次出站负载并通过客户端派发 GET：
//! 固定字段 `fmt`、`v`、`url`、`time` 在前，事件负载随后合并且优先。
//!
use async_trait::async_trait;
use mc_manager::{Clock, Event, EventListener, ManagerResult, QueryParams, SystemClock};
use std::sync::Arc;
use url::Url;

/// 追踪端点
pub const TRACK_URL: &str = "https://px.ads.linkedin.com/collect/";

/// 构造出站负载
pub fn build_payload(event: &Event, now_ms: i64) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("fmt", "js");
    params.insert("v", "2");
    params.insert("url", event.client().url().as_str());
    params.insert("time", now_ms.to_string());
    params.merge(event.payload());
    params
}

/// 追踪端点加上编码后的查询串
pub fn tracking_url(params: &QueryParams) -> ManagerResult<Url> {
    Ok(params.append_to(Url::parse(TRACK_URL)?))
}

pub struct TrackingRelay {
    clock: Arc<dyn Clock>,
}

impl TrackingRelay {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for TrackingRelay {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}

#[async_trait]
impl EventListener for TrackingRelay {
    fn listener_name(&self) -> &str {
        "linkedin.tracking_relay"
    }

    async fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let params = build_payload(event, self.clock.now_millis());
        let target = tracking_url(&params)?;

        tracing::debug!(page = %event.client().url(), params = params.len(), "relaying event");
        // 只派发，不等待请求结果
        event.client().fetch(target)?;
        Ok(())
    }
}
