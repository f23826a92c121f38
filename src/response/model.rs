//! 健康响应读取契约与发现入口
//!
//! 定义响应的三个稳定访问器，以及通过提供者定位器获取构建器的入口函数

use crate::error::Result;
use crate::provider;
use crate::response::builder::{ResponseBuilder, ResponseBuilderFactory};
use crate::response::state::ResponseState;
use std::collections::HashMap;
use std::fmt;

/// 附加属性映射类型
pub type Attributes = HashMap<String, serde_json::Value>;

/// 健康响应读取契约
///
/// 由被发现的提供者实现。三个访问器必须稳定且无副作用，
/// 供外部汇总/序列化层消费。
pub trait Response: fmt::Debug + Send + Sync {
    /// 获取检查名称
    ///
    /// 与发起构建时传入 [`named`] 的字符串完全一致。
    fn name(&self) -> &str;

    /// 获取检查状态
    ///
    /// 构建完成的响应必然持有有效状态。
    fn state(&self) -> ResponseState;

    /// 获取附加属性
    ///
    /// `None` 表示从未提供属性；`Some` 且为空表示显式提供了空属性集，
    /// 两者语义不同且可区分。
    fn attributes(&self) -> Option<&Attributes>;
}

/// 获取一个以 `name` 命名的响应构建器
///
/// 通过提供者定位器解析构建器工厂（上下文作用域 + 库作用域，
/// 库作用域候选优先），创建构建器并预置名称。
///
/// # 参数
/// * `name` - 检查名称，本层不做校验
///
/// # 返回
/// * `Result<Box<dyn ResponseBuilder>>` - 预置名称的构建器；任何作用域
///   都没有注册工厂时原样传播
///   [`ProviderError::NotFound`](crate::error::ProviderError)，不做降级
pub fn named(name: &str) -> Result<Box<dyn ResponseBuilder>> {
    let factory = provider::locate::<dyn ResponseBuilderFactory>()?;
    Ok(factory.create_response_builder().name(name))
}

/// 构建一个状态为正常、无附加属性的健康响应
pub fn up(name: &str) -> Result<Box<dyn Response>> {
    named(name)?.up().build()
}

/// 构建一个状态为异常、无附加属性的健康响应
pub fn down(name: &str) -> Result<Box<dyn Response>> {
    named(name)?.down().build()
}
