//! 日志系统模块
//!
//! 提供结构化日志配置和初始化功能

use crate::error::{Result, VitalsApiError};
use log::LevelFilter;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter, Layer};

/// 日志配置结构
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: LevelFilter,
    /// 是否输出到控制台
    pub console: bool,
    /// 是否使用JSON格式
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            console: true,
            json_format: false,
        }
    }
}

/// 全局日志初始化状态
#[derive(Debug)]
struct GlobalLoggingState {
    /// 是否已初始化
    initialized: bool,
    /// 初始化结果
    init_result: std::result::Result<(), String>,
}

impl Default for GlobalLoggingState {
    fn default() -> Self {
        Self {
            initialized: false,
            init_result: Ok(()),
        }
    }
}

/// 全局日志状态管理器
static GLOBAL_LOGGING_STATE: OnceLock<Mutex<GlobalLoggingState>> = OnceLock::new();

/// 初始化日志系统
///
/// 线程安全的单次初始化，重复调用返回首次初始化的结果。
///
/// # 参数
/// * `config` - 日志配置
///
/// # 返回
/// * `Result<()>` - 初始化结果
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let state_mutex = GLOBAL_LOGGING_STATE.get_or_init(|| Mutex::new(GlobalLoggingState::default()));

    let mut state = state_mutex.lock().unwrap_or_else(|e| e.into_inner());
    if state.initialized {
        return state
            .init_result
            .clone()
            .map_err(VitalsApiError::Logging);
    }

    let init_result = perform_initialization(config);
    state.initialized = true;
    state.init_result = init_result
        .as_ref()
        .map(|_| ())
        .map_err(|e| e.to_string());

    init_result
}

/// 查询日志系统是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_LOGGING_STATE
        .get()
        .map(|state| state.lock().unwrap_or_else(|e| e.into_inner()).initialized)
        .unwrap_or(false)
}

/// 执行实际的日志系统初始化
fn perform_initialization(config: &LogConfig) -> Result<()> {
    init_log_tracer()?;
    init_tracing_subscriber(config)?;
    Ok(())
}

/// 初始化 LogTracer（log crate 到 tracing 的桥接）
fn init_log_tracer() -> Result<()> {
    use tracing_log::LogTracer;

    static LOG_TRACER_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

    let result = LOG_TRACER_INIT.get_or_init(|| LogTracer::init().map_err(|e| e.to_string()));

    result
        .as_ref()
        .map_err(|e| VitalsApiError::Logging(format!("LogTracer初始化失败: {e}")))?;
    Ok(())
}

/// 初始化 tracing subscriber
fn init_tracing_subscriber(config: &LogConfig) -> Result<()> {
    let env_filter =
        EnvFilter::from_default_env().add_directive(convert_level_to_directive(config.level));

    let fmt_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(config.console)
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .boxed()
    };

    let result = registry().with(env_filter).with(fmt_layer).try_init();

    match result {
        Ok(()) => {
            tracing::debug!("日志系统初始化完成, 配置: {:?}", config);
            Ok(())
        }
        Err(e) => {
            let error_msg = e.to_string();
            // 宿主应用可能已经安装了全局 subscriber，此时沿用宿主的即可
            if error_msg.contains("already been set")
                || error_msg.contains("already initialized")
            {
                tracing::debug!("全局 subscriber 已存在，跳过初始化");
                Ok(())
            } else {
                Err(VitalsApiError::Logging(format!(
                    "tracing subscriber初始化失败: {error_msg}"
                )))
            }
        }
    }
}

/// 将 log::LevelFilter 转换为 tracing 的指令
fn convert_level_to_directive(level: LevelFilter) -> tracing_subscriber::filter::Directive {
    use tracing_subscriber::filter::Directive;
    match level {
        LevelFilter::Off => Directive::from(tracing::level_filters::LevelFilter::OFF),
        LevelFilter::Error => Directive::from(tracing::Level::ERROR),
        LevelFilter::Warn => Directive::from(tracing::Level::WARN),
        LevelFilter::Info => Directive::from(tracing::Level::INFO),
        LevelFilter::Debug => Directive::from(tracing::Level::DEBUG),
        LevelFilter::Trace => Directive::from(tracing::Level::TRACE),
    }
}
