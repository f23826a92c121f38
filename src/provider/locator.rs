//! 提供者定位器
//!
//! 按固定优先级在两个作用域中解析能力实现：先查上下文作用域得到暂定
//! 结果，再查库作用域并覆盖暂定结果；任一作用域枚举失败仅记录日志并
//! 降级为"该作用域无候选"，两个作用域均无候选时以配置错误失败。

use std::any::{type_name, TypeId};
use std::sync::Arc;

use crate::error::ProviderError;
use crate::provider::registry::downcast_entry;
use crate::provider::scope::{current_context_scope, library_scope, ScopeProviders};

/// 在默认作用域（线程上下文 + 进程库作用域）中定位能力 `T` 的实现
///
/// # 返回
/// * `Result<Arc<T>, ProviderError>` - 解析到的唯一实现；两个作用域均无
///   候选时返回 [`ProviderError::NotFound`]
pub fn locate<T>() -> Result<Arc<T>, ProviderError>
where
    T: ?Sized + Send + Sync + 'static,
{
    let context = match current_context_scope() {
        Ok(scope) => scope,
        Err(err) => {
            tracing::error!(
                capability = type_name::<T>(),
                error = %err,
                "无法访问上下文作用域，按无候选处理"
            );
            None
        }
    };

    locate_in::<T>(context.as_deref(), library_scope())
}

/// 在显式给定的作用域中定位能力 `T` 的实现
///
/// 覆盖顺序与 [`locate`] 一致：即使上下文作用域已产出候选，库作用域
/// 仍会被查询，其候选为最终权威结果。
///
/// # 参数
/// * `context` - 上下文作用域，可能缺失
/// * `library` - 库作用域
pub fn locate_in<T>(
    context: Option<&dyn ScopeProviders>,
    library: &dyn ScopeProviders,
) -> Result<Arc<T>, ProviderError>
where
    T: ?Sized + Send + Sync + 'static,
{
    let capability = TypeId::of::<T>();
    let mut resolved: Option<Arc<T>> = None;

    if let Some(scope) = context {
        if let Some(instance) = probe_scope::<T>(scope, capability, "context") {
            resolved = Some(instance);
        }
    }

    // 库作用域的候选覆盖上下文作用域的暂定结果
    if let Some(instance) = probe_scope::<T>(library, capability, "library") {
        resolved = Some(instance);
    }

    resolved.ok_or_else(|| ProviderError::NotFound {
        capability: type_name::<T>(),
    })
}

/// 探测单个作用域，枚举失败或类型不符时记录日志并按无候选处理
fn probe_scope<T>(
    scope: &dyn ScopeProviders,
    capability: TypeId,
    scope_label: &'static str,
) -> Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    match scope.first_provider(capability) {
        Ok(Some(entry)) => match downcast_entry::<T>(&entry) {
            Some(instance) => {
                tracing::debug!(
                    capability = type_name::<T>(),
                    scope = scope_label,
                    "解析到提供者实现"
                );
                Some(instance)
            }
            None => {
                tracing::error!(
                    capability = type_name::<T>(),
                    scope = scope_label,
                    "提供者条目类型不符，按无候选处理"
                );
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            tracing::error!(
                capability = type_name::<T>(),
                scope = scope_label,
                error = %err,
                "作用域枚举失败，按无候选处理"
            );
            None
        }
    }
}
