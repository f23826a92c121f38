//! 健康状态枚举
//!
//! 定义健康检查响应的状态类型

use serde::{Deserialize, Serialize};

/// 健康检查状态枚举
///
/// 契约只允许两种状态，汇总层按字面值 `UP`/`DOWN` 序列化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseState {
    /// 检查通过
    Up,
    /// 检查失败
    Down,
}

impl std::fmt::Display for ResponseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseState::Up => write!(f, "UP"),
            ResponseState::Down => write!(f, "DOWN"),
        }
    }
}

impl ResponseState {
    /// 判断状态是否为健康
    pub fn is_healthy(&self) -> bool {
        matches!(self, ResponseState::Up)
    }
}
