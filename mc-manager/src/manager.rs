//! 管理器（Manager）
//!
//! 组件的宿主：
//! - `add_event_listener`：按事件类型登记监听器，同一类型可登记多个；
//! - `dispatch`：将事件分发给匹配的监听器并发处理，失败记录日志并返回首个错误；
//! - `load_component`：调用组件的 `setup` 完成注册。
//!
use crate::component::{Component, ComponentSettings};
use crate::error::{ManagerError, ManagerResult};
use crate::event::Event;
use crate::listener::EventListener;
use dashmap::DashMap;
use futures_util::{StreamExt, future, stream};
use std::sync::Arc;

/// 管理器配置
#[derive(Clone, Copy, Debug)]
pub struct ManagerConfig {
    /// 单事件的处理并发（同一事件分发给多个监听器）
    pub listener_concurrency: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            listener_concurrency: 8,
        }
    }
}

#[derive(Default)]
pub struct Manager {
    listeners: DashMap<String, Vec<Arc<dyn EventListener>>>,
    config: ManagerConfig,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            listeners: DashMap::new(),
            config,
        }
    }

    /// 登记事件监听器
    pub fn add_event_listener(
        &self,
        event_type: impl Into<String>,
        listener: Arc<dyn EventListener>,
    ) {
        let event_type = event_type.into();
        tracing::debug!(
            event_type = %event_type,
            listener = listener.listener_name(),
            "event listener registered"
        );
        self.listeners.entry(event_type).or_default().push(listener);
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map_or(0, |l| l.len())
    }

    /// 分发事件；无匹配监听器时直接返回
    pub async fn dispatch(&self, event: &Event) -> ManagerResult<()> {
        let listeners = self.matching(event.event_type());
        if listeners.is_empty() {
            tracing::debug!(event_type = event.event_type(), "no listeners for event");
            return Ok(());
        }

        let concurrency = self.config.listener_concurrency.max(1);
        let failures: Vec<ManagerError> = stream::iter(listeners)
            .map(|listener| async move {
                listener.handle(event).await.map_err(|err| {
                    ManagerError::event_listener(listener.listener_name(), format!("{err:#}"))
                })
            })
            .buffered(concurrency)
            .filter_map(|res| future::ready(res.err()))
            .collect()
            .await;

        for err in &failures {
            tracing::warn!(event_type = event.event_type(), error = %err, "event listener failed");
        }

        match failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// 加载组件
    pub async fn load_component(
        &self,
        component: &dyn Component,
        settings: &ComponentSettings,
    ) -> ManagerResult<()> {
        component
            .setup(self, settings)
            .await
            .map_err(|err| ManagerError::Component {
                component: component.name().to_string(),
                reason: format!("{err:#}"),
            })?;

        tracing::info!(component = component.name(), "component loaded");
        Ok(())
    }

    // 先克隆出监听器列表，避免跨 await 持有 DashMap 的读锁
    fn matching(&self, event_type: &str) -> Vec<Arc<dyn EventListener>> {
        self.listeners
            .get(event_type)
            .map(|l| l.value().clone())
            .unwrap_or_default()
    }
}
