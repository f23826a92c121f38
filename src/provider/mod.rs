//! 提供者发现模块
//!
//! 提供显式的能力注册表、双作用域抽象与定位器

pub mod locator;
pub mod registry;
pub mod scope;

// 重新导出主要类型
pub use locator::{locate, locate_in};
pub use registry::{ProviderEntry, ProviderRegistry};
pub use scope::{
    current_context_scope, install_context_scope, library_scope, ContextScopeGuard, ScopeProviders,
};
