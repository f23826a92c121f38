//! 错误处理模块
//!
//! 定义健康契约库的统一错误类型

use thiserror::Error;

/// Vitals API 库的主要错误类型
#[derive(Error, Debug)]
pub enum VitalsApiError {
    /// 提供者发现相关错误
    #[error("提供者发现错误: {0}")]
    Provider(#[from] ProviderError),

    /// 健康响应构建相关错误
    #[error("健康响应错误: {0}")]
    Response(#[from] ResponseError),

    /// 日志系统初始化错误
    #[error("日志系统错误: {0}")]
    Logging(String),
}

/// 提供者发现错误类型
#[derive(Error, Debug)]
pub enum ProviderError {
    /// 所有作用域均未找到实现，属于部署配置问题，调用方无法降级处理
    #[error("未找到能力 {capability} 的提供者实现")]
    NotFound {
        /// 请求的能力类型名称
        capability: &'static str,
    },
}

/// 作用域访问错误类型
///
/// 仅在库内部流转：定位器记录日志后按"该作用域无候选"降级，
/// 不会作为独立错误向调用方传播。
#[derive(Error, Debug, Clone)]
pub enum ScopeAccessError {
    /// 作用域枚举失败（如受限执行环境禁止自省）
    #[error("作用域枚举失败: {reason}")]
    Enumeration {
        /// 失败原因描述
        reason: String,
    },

    /// 线程上下文作用域不可访问
    #[error("无法访问线程上下文作用域: {reason}")]
    ContextUnavailable {
        /// 失败原因描述
        reason: String,
    },
}

/// 健康响应错误类型
#[derive(Error, Debug)]
pub enum ResponseError {
    /// build 调用前未设置状态
    #[error("健康检查 {name} 在构建前未设置状态")]
    MissingState {
        /// 检查名称
        name: String,
    },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, VitalsApiError>;
