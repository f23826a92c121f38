//! 健康响应模块
//!
//! 提供健康检查响应的数据契约、链式构建器契约与发现入口

pub mod builder;
pub mod model;
pub mod state;

// 重新导出主要类型
pub use builder::{ResponseBuilder, ResponseBuilderFactory};
pub use model::{down, named, up, Attributes, Response};
pub use state::ResponseState;
