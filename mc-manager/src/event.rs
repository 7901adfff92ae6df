//! 事件（Event）
//!
//! 管理器分发给监听器的事件：事件类型、触发事件的客户端上下文以及自由格式的负载。
//!
use crate::client::Client;
use bon::Builder;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// 事件负载：保持插入顺序的字符串键映射
pub type Payload = Map<String, Value>;

#[derive(Clone, Builder)]
pub struct Event {
    /// 事件类型，管理器据此匹配监听器
    #[builder(into)]
    event_type: String,
    /// 触发事件的客户端
    client: Arc<dyn Client>,
    /// 事件负载
    #[builder(default)]
    payload: Payload,
}

impl Event {
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn client(&self) -> &Arc<dyn Client> {
        &self.client
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.event_type)
            .field("client_url", &self.client.url().as_str())
            .field("payload", &self.payload)
            .finish()
    }
}
