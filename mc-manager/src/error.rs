//! 管理器统一错误定义
//!
//! 覆盖 URL 构造、HTTP 客户端、运行时、监听器与组件加载等最小必要集合，
//! 组件内部通过 `?` 将错误上抛给管理器，由管理器统一记录并返回给调用方。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ManagerError {
    // --- URL/参数 ---
    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },
    #[error("invalid setting: key={key}, reason={reason}")]
    InvalidSetting { key: String, reason: String },

    // --- 出站请求 ---
    #[error("http client error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },
    #[error("runtime unavailable: {reason}")]
    Runtime { reason: String },

    // --- 事件系统 ---
    #[error("event listener error: listener={listener}, reason={reason}")]
    EventListener { listener: String, reason: String },
    #[error("component error: component={component}, reason={reason}")]
    Component { component: String, reason: String },
}

/// 统一 Result 类型别名
pub type ManagerResult<T> = Result<T, ManagerError>;

impl ManagerError {
    pub fn event_listener(listener: impl Into<String>, reason: impl ToString) -> Self {
        ManagerError::EventListener {
            listener: listener.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<url::ParseError> for ManagerError {
    fn from(err: url::ParseError) -> Self {
        ManagerError::InvalidUrl {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_parse_error_maps_to_invalid_url() {
        let err: ManagerError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, ManagerError::InvalidUrl { .. }));
        assert!(err.to_string().starts_with("invalid url:"));
    }

    #[test]
    fn event_listener_error_display() {
        let err = ManagerError::event_listener("linkedin", "boom");
        assert_eq!(
            err.to_string(),
            "event listener error: listener=linkedin, reason=boom"
        );
    }
}
