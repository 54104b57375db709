//! 日志初始化

use tracing::{Subscriber, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::AppConfig;
use crate::errors::{Result, StampsysError};

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// 安装全局日志订阅者
///
/// 开发环境输出带文件名与行号的文本日志，其他环境输出 JSON。
/// 返回的 guard 需由调用方持有，丢弃后缓冲中的日志不再写出。
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = build_subscriber(config, non_blocking_writer)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| StampsysError::logging(e.to_string()))?;

    warn!(
        "Logging initialized
        Project: {}
        Version: {}
        Environment: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    Ok(guard)
}

fn build_subscriber<W>(config: &AppConfig, writer: W) -> Result<BoxedSubscriber>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.app.log_level)
        .map_err(|e| StampsysError::logging(format!("invalid log level: {e}")))?;
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(config.is_development());

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(tracing_format);

    if config.is_development() {
        Ok(Box::new(
            tracing_builder
                .with_file(true)
                .with_line_number(true)
                .finish(),
        ))
    } else {
        Ok(Box::new(tracing_builder.json().finish()))
    }
}
