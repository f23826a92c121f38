//! 提供者注册表
//!
//! 以能力类型为键的显式注册表，每个作用域持有一个实例

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::ScopeAccessError;
use crate::provider::scope::ScopeProviders;

/// 类型擦除的提供者条目
///
/// 内部保存一个 `Arc<T>`（`T` 通常是 `dyn Trait` 形式的能力类型），
/// 由定位器按能力类型还原为具体引用。
pub type ProviderEntry = Arc<dyn Any + Send + Sync>;

/// 提供者注册表
///
/// 启动期写入、运行期只读的能力到实现映射。同一能力的枚举顺序
/// 为注册顺序，定位器只取第一个候选。
#[derive(Default)]
pub struct ProviderRegistry {
    /// 能力类型到实现列表的映射
    entries: RwLock<HashMap<TypeId, Vec<ProviderEntry>>>,
}

impl ProviderRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册能力 `T` 的一个实现
    ///
    /// # 参数
    /// * `provider` - 实现实例，`T` 通常为 `dyn Trait` 形式的能力类型
    pub fn register<T>(&self, provider: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Arc::new(provider));
    }

    /// 查询能力 `T` 的第一个实现
    ///
    /// # 返回
    /// * `Option<Arc<T>>` - 第一个注册的实现；该能力无注册时返回 `None`
    pub fn first<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&TypeId::of::<T>())?
            .iter()
            .find_map(downcast_entry::<T>)
    }

    /// 返回能力 `T` 已注册的实现数量
    pub fn count<T>(&self) -> usize
    where
        T: ?Sized + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        f.debug_struct("ProviderRegistry")
            .field("capabilities", &entries.len())
            .finish()
    }
}

impl ScopeProviders for ProviderRegistry {
    fn first_provider(
        &self,
        capability: TypeId,
    ) -> Result<Option<ProviderEntry>, ScopeAccessError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(&capability).and_then(|list| list.first().cloned()))
    }
}

/// 将类型擦除条目还原为 `Arc<T>`
///
/// 条目类型与请求能力不符时返回 `None`，由调用方按无候选处理。
pub(crate) fn downcast_entry<T>(entry: &ProviderEntry) -> Option<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    entry
        .clone()
        .downcast::<Arc<T>>()
        .ok()
        .map(|inner| (*inner).clone())
}
