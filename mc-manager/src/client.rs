//! 客户端（Client）
//!
//! 事件携带的客户端上下文：当前页面地址，以及发起出站 GET 的能力。
//! `fetch` 只负责派发请求，不等待其完成，请求结果不回传给调用方。
//!
//! `HttpClient` 是基于 reqwest 的实现，每次 `fetch` 在当前 tokio 运行时中
//! 派生一个任务执行请求，失败仅记录日志，不做重试。
//!
use crate::error::{ManagerError, ManagerResult};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tokio::runtime::Handle;
use url::Url;

pub trait Client: Send + Sync {
    /// 客户端当前页面的绝对地址
    fn url(&self) -> &Url;

    /// 派发一次 GET 请求，不等待响应
    fn fetch(&self, resource: Url) -> ManagerResult<()>;
}

/// HTTP 客户端配置
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// 单次请求超时
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("mc-manager/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    url: Url,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(url: Url, config: HttpClientConfig) -> ManagerResult<Self> {
        let mut headers = HeaderMap::new();
        let ua = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            ManagerError::InvalidSetting {
                key: "user_agent".into(),
                reason: e.to_string(),
            }
        })?;
        headers.insert(USER_AGENT, ua);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { url, http })
    }

    /// 使用默认配置，页面地址由字符串解析
    pub fn parse(url: &str) -> ManagerResult<Self> {
        Self::new(Url::parse(url)?, HttpClientConfig::default())
    }
}

impl Client for HttpClient {
    fn url(&self) -> &Url {
        &self.url
    }

    fn fetch(&self, resource: Url) -> ManagerResult<()> {
        let handle = Handle::try_current().map_err(|e| ManagerError::Runtime {
            reason: e.to_string(),
        })?;

        let http = self.http.clone();
        handle.spawn(async move {
            match http.get(resource.clone()).send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(url = %resource, status = %resp.status(), "fetch completed");
                }
                Ok(resp) => {
                    tracing::warn!(url = %resource, status = %resp.status(), "fetch rejected");
                }
                Err(err) => {
                    tracing::warn!(url = %resource, error = %err, "fetch failed");
                }
            }
        });

        Ok(())
    }
}
