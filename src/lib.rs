//! Vitals API - 服务健康契约与提供者发现库
//!
//! 这是Service Vitals生态的健康检查契约库，提供：
//! - 健康响应数据契约（UP/DOWN状态与可选附加属性）
//! - 链式响应构建器契约与工厂能力
//! - 双作用域提供者发现（线程上下文作用域 + 进程库作用域）
//! - 结构化日志记录
//!
//! 本库只定义契约并发现实现，不实现构建器工厂本身；宿主运行时在
//! 启动期向库作用域注册默认工厂，应用通过 [`named`] 获取构建器。

pub mod error;
pub mod logging;
pub mod provider;
pub mod response;

// 重新导出主要类型
pub use error::{ProviderError, ResponseError, Result, ScopeAccessError, VitalsApiError};
pub use provider::{install_context_scope, library_scope, locate, ProviderRegistry, ScopeProviders};
pub use response::{
    down, named, up, Attributes, Response, ResponseBuilder, ResponseBuilderFactory, ResponseState,
};

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 库描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
