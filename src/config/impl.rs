use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};

use super::AppConfig;

impl AppConfig {
    /// 内置默认值，配置文件缺失时也能启动
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("serialization.null_fields", "explicit")?
            .set_default("serialization.pretty", false)
    }

    /// 加载配置
    ///
    /// 环境变量使用 `STAMPSYS__` 前缀与 `__` 分隔，例如
    /// `STAMPSYS__SERIALIZATION__NULL_FIELDS=omit`。
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            // 默认配置文件
            .add_source(File::with_name("stampsys").required(false))
            // 根据环境加载特定配置文件
            .add_source(File::with_name(&format!("stampsys.{environment}")).required(false))
            // 环境变量覆盖
            .add_source(
                Environment::with_prefix("STAMPSYS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        builder.build()?.try_deserialize()
    }

    /// 从 TOML 文本加载，未给出的键取默认值
    pub fn load_from_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}
