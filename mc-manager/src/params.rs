//! 出站查询参数（QueryParams）
//!
//! 有序的字符串键值对集合，用于把固定字段与事件负载合并后编码为
//! `application/x-www-form-urlencoded` 查询串：
//! - `insert`：同名键原位覆盖，新键追加到末尾；
//! - `merge`：按负载顺序依次 `insert`，负载值优先；
//! - `append_to`：把参数编码后拼接到目标 URL 上。
//!
use crate::event::Payload;
use serde_json::Value;
use url::{Url, form_urlencoded};

/// 有序查询参数
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入参数：已存在的键保持原位置并覆盖其值
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// 合并事件负载，负载中的值覆盖已有同名参数
    pub fn merge(&mut self, payload: &Payload) {
        for (key, value) in payload {
            self.insert(key.as_str(), param_value(value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// 追加到 `base` 的查询串之后
    pub fn append_to(&self, mut base: Url) -> Url {
        base.query_pairs_mut().extend_pairs(self.iter());
        base
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// 将负载值转为查询参数字符串。
///
/// 规则与浏览器 `URLSearchParams` 对记录值的字符串化保持一致：
/// 整数值的浮点数输出为整数形式，|x| >= 1e21 或 |x| < 1e-6 时使用指数形式
/// （`1e+21`、`1e-7`），数组按 `,` 连接（`null` 元素为空串），
/// 对象输出为 `[object Object]`。
pub fn param_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) if f == 0.0 => "0".to_string(),
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
                    format!("{f:.0}")
                }
                Some(f) => float_string(f),
                None => n.to_string(),
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => param_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// 与 JS `Number#toString` 一致：超出 [1e-6, 1e21) 时为指数形式，正指数带 `+`
fn float_string(f: f64) -> String {
    if !f.is_finite() || (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
