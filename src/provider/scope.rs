//! 解析作用域抽象
//!
//! 定义上下文作用域（线程局部）与库作用域（进程全局）两级解析边界

use std::any::TypeId;
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

use crate::error::ScopeAccessError;
use crate::provider::registry::{ProviderEntry, ProviderRegistry};

/// 作用域提供者枚举trait
///
/// 每个作用域针对给定能力产出零或一个候选实现。枚举本身可能失败
/// （如受限执行环境禁止自省），失败由定位器记录日志并按无候选降级。
pub trait ScopeProviders: Send + Sync {
    /// 枚举能力的第一个候选实现
    ///
    /// # 参数
    /// * `capability` - 能力类型标识
    ///
    /// # 返回
    /// * `Result<Option<ProviderEntry>, ScopeAccessError>` - 第一个候选或无候选
    fn first_provider(
        &self,
        capability: TypeId,
    ) -> Result<Option<ProviderEntry>, ScopeAccessError>;
}

thread_local! {
    /// 线程局部的上下文作用域栈，栈顶为当前生效的作用域
    static CONTEXT_SCOPE: RefCell<Vec<Arc<dyn ScopeProviders>>> =
        const { RefCell::new(Vec::new()) };
}

/// 进程全局的库作用域
static LIBRARY_SCOPE: OnceLock<ProviderRegistry> = OnceLock::new();

/// 获取库作用域注册表
///
/// 宿主运行时在启动期向该作用域注册默认工厂实现；
/// 解析时库作用域的候选覆盖上下文作用域的候选。
pub fn library_scope() -> &'static ProviderRegistry {
    LIBRARY_SCOPE.get_or_init(ProviderRegistry::new)
}

/// 上下文作用域安装守卫
///
/// Drop 时恢复先前生效的作用域，支持嵌套安装。
#[must_use = "守卫被丢弃时上下文作用域随即恢复"]
pub struct ContextScopeGuard {
    _private: (),
}

impl Drop for ContextScopeGuard {
    fn drop(&mut self) {
        // 线程析构阶段 TLS 可能已不可用，此时无需恢复
        let _ = CONTEXT_SCOPE.try_with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// 在当前线程安装上下文作用域
///
/// # 参数
/// * `scope` - 作用域提供者实现（通常为 [`ProviderRegistry`]）
///
/// # 返回
/// * `ContextScopeGuard` - RAII守卫，离开作用域时恢复先前状态
pub fn install_context_scope(scope: Arc<dyn ScopeProviders>) -> ContextScopeGuard {
    CONTEXT_SCOPE.with(|stack| stack.borrow_mut().push(scope));
    ContextScopeGuard { _private: () }
}

/// 获取当前线程生效的上下文作用域
///
/// 访问本身可能失败（如线程析构阶段），失败包装为 [`ScopeAccessError`]，
/// 由定位器记录日志并降级处理。
pub fn current_context_scope() -> Result<Option<Arc<dyn ScopeProviders>>, ScopeAccessError> {
    CONTEXT_SCOPE
        .try_with(|stack| stack.borrow().last().cloned())
        .map_err(|e| ScopeAccessError::ContextUnavailable {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker: Send + Sync {
        fn id(&self) -> u32;
    }

    struct MarkerImpl(u32);

    impl Marker for MarkerImpl {
        fn id(&self) -> u32 {
            self.0
        }
    }

    fn registry_with(id: u32) -> Arc<ProviderRegistry> {
        let registry = ProviderRegistry::new();
        registry.register::<dyn Marker>(Arc::new(MarkerImpl(id)));
        Arc::new(registry)
    }

    fn current_marker_id() -> Option<u32> {
        let scope = current_context_scope().unwrap()?;
        let entry = scope.first_provider(TypeId::of::<dyn Marker>()).unwrap()?;
        crate::provider::registry::downcast_entry::<dyn Marker>(&entry).map(|m| m.id())
    }

    #[test]
    fn test_no_context_scope_by_default() {
        assert!(current_context_scope().unwrap().is_none());
    }

    #[test]
    fn test_install_and_restore() {
        {
            let _guard = install_context_scope(registry_with(1));
            assert_eq!(current_marker_id(), Some(1));
        }
        // 守卫离开作用域后恢复为无上下文
        assert!(current_context_scope().unwrap().is_none());
    }

    #[test]
    fn test_nested_install() {
        let _outer = install_context_scope(registry_with(1));
        assert_eq!(current_marker_id(), Some(1));

        {
            let _inner = install_context_scope(registry_with(2));
            // 栈顶作用域生效
            assert_eq!(current_marker_id(), Some(2));
        }

        // 内层守卫释放后恢复外层作用域
        assert_eq!(current_marker_id(), Some(1));
    }

    #[test]
    fn test_context_scope_is_per_thread() {
        let _guard = install_context_scope(registry_with(7));

        let handle = std::thread::spawn(|| current_context_scope().unwrap().is_none());
        // 其他线程看不到本线程安装的作用域
        assert!(handle.join().unwrap());
        assert_eq!(current_marker_id(), Some(7));
    }

    #[test]
    fn test_library_scope_is_shared() {
        // 同一进程内多次获取的是同一个注册表实例
        let a = library_scope() as *const ProviderRegistry;
        let b = library_scope() as *const ProviderRegistry;
        assert_eq!(a, b);
    }
}
