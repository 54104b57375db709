//! Stampsys - 班级与教室记录的数据传输层
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `logging`: 日志初始化
//! - `models`: 传输记录定义
//! - `utils`: JSON 编解码

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod utils;
