//! 事件监听器（EventListener）
//!
//! 定义组件注册到管理器上的事件处理逻辑与元信息（名称）。
//!
use crate::event::Event;
use async_trait::async_trait;

/// 事件监听器：处理某一类型的事件
#[async_trait]
pub trait EventListener: Send + Sync {
    /// 监听器名称（用于日志与错误定位）
    fn listener_name(&self) -> &str;
    /// 处理事件
    async fn handle(&self, event: &Event) -> anyhow::Result<()>;
}
