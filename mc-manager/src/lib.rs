//! 事件采集/分析中继管理器（mc-manager）
//!
//! 为第三方追踪组件提供最小宿主能力：
//! - 事件（`event`）与负载（`Payload`）
//! - 客户端（`client`）：页面地址与不等待结果的出站请求，附带 reqwest 实现
//! - 监听器（`listener`）与管理器（`manager`）：登记与分发
//! - 组件（`component`）：插件加载与配置
//! - 查询参数（`params`）与时钟（`clock`）：组件构造出站请求的通用工具
//!
//! 典型用法：
//! 1. 实现 `Component`，在 `setup` 中调用 `Manager::add_event_listener`；
//! 2. 通过 `Manager::load_component` 加载组件；
//! 3. 为每个客户端事件构造 `Event` 并调用 `Manager::dispatch`。
//!
pub mod client;
pub mod clock;
pub mod component;
pub mod error;
pub mod event;
pub mod listener;
pub mod manager;
pub mod params;

pub use client::{Client, HttpClient, HttpClientConfig};
pub use clock::{Clock, SystemClock};
pub use component::{Component, ComponentSettings};
pub use error::{ManagerError, ManagerResult};
pub use event::{Event, Payload};
pub use listener::EventListener;
pub use manager::{Manager, ManagerConfig};
pub use params::{QueryParams, param_value};
