//! 组件（Component）与组件配置（ComponentSettings）
//!
//! 组件是加载进管理器的插件，在 `setup` 中向管理器注册监听器。
//! 配置为字符串键的 JSON 值映射，由宿主在加载时传入。
//!
use crate::error::{ManagerError, ManagerResult};
use crate::manager::Manager;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[async_trait]
pub trait Component: Send + Sync {
    /// 组件名称
    fn name(&self) -> &str;
    /// 注册监听器等初始化工作
    async fn setup(&self, manager: &Manager, settings: &ComponentSettings) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSettings(Map<String, Value>);

impl ComponentSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 读取字符串配置；键存在但不是字符串时返回错误
    pub fn get_str(&self, key: &str) -> ManagerResult<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(ManagerError::InvalidSetting {
                key: key.to_string(),
                reason: format!("expected string, found {other}"),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ComponentSettings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_str_distinguishes_missing_and_mistyped() {
        let mut settings = ComponentSettings::new();
        settings.insert("partner_id", "12345");
        settings.insert("enabled", true);

        assert_eq!(settings.get_str("partner_id").unwrap(), Some("12345"));
        assert_eq!(settings.get_str("missing").unwrap(), None);
        assert!(matches!(
            settings.get_str("enabled"),
            Err(ManagerError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn deserializes_from_plain_object() {
        let settings: ComponentSettings =
            serde_json::from_value(json!({"partner_id": "1", "debug": false})).unwrap();
        assert_eq!(settings.get("debug"), Some(&json!(false)));
        assert!(!settings.is_empty());
    }
}
