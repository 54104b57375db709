//! 统一错误处理模块
//!
//! 记录类型本身没有失败路径，错误只来自配置、序列化、时间解析与日志初始化。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_stampsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum StampsysError {
            $($variant(String),)*
        }

        impl StampsysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StampsysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StampsysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StampsysError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl StampsysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StampsysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_stampsys_errors! {
    Configuration("E001", "Configuration Error"),
    Serialization("E002", "Serialization Error"),
    DateParse("E003", "Date Parse Error"),
    Logging("E004", "Logging Error"),
}

impl StampsysError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StampsysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StampsysError {}

impl From<config::ConfigError> for StampsysError {
    fn from(err: config::ConfigError) -> Self {
        StampsysError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for StampsysError {
    fn from(err: serde_json::Error) -> Self {
        StampsysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for StampsysError {
    fn from(err: chrono::ParseError) -> Self {
        StampsysError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StampsysError>;
