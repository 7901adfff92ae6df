//! LinkedIn 追踪组件（mc-linkedin）
//!
//! 加载后为 `event` 事件登记一个监听器，把每个事件转发为一次
//! 发往 `https://px.ads.linkedin.com/collect/` 的 GET 请求。
//!
pub mod relay;

pub use relay::{TRACK_URL, TrackingRelay, build_payload, tracking_url};

use async_trait::async_trait;
use mc_manager::{Clock, Component, ComponentSettings, Manager, SystemClock};
use std::sync::Arc;

/// 监听的事件类型
pub const EVENT_TYPE: &str = "event";

pub struct LinkedIn {
    clock: Arc<dyn Clock>,
}

impl LinkedIn {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for LinkedIn {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for LinkedIn {
    fn name(&self) -> &str {
        "linkedin"
    }

    async fn setup(&self, manager: &Manager, _settings: &ComponentSettings) -> anyhow::Result<()> {
        manager.add_event_listener(EVENT_TYPE, Arc::new(TrackingRelay::new(self.clock.clone())));
        Ok(())
    }
}
