use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub serialization: SerializationConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub environment: String,
    pub log_level: String,
}

/// 序列化配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializationConfig {
    pub null_fields: NullFieldPolicy,
    pub pretty: bool,
}

/// 未设置字段在 JSON 中的写法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullFieldPolicy {
    /// 写出 `"key": null`
    #[default]
    Explicit,
    /// 省略该键
    Omit,
}
