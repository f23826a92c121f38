//! 健康响应构建器契约
//!
//! 定义链式响应构建器及其工厂能力，工厂实现通过提供者定位器发现

use crate::error::Result;
use crate::response::model::{Attributes, Response};
use crate::response::state::ResponseState;
use serde_json::Value;
use std::fmt;

/// 健康响应构建器trait，定义链式构建接口
///
/// 构建器由被发现的工厂实现创建，按值消费以支持链式调用；
/// `build` 消费构建器本身，构建完成后无法复用。
pub trait ResponseBuilder: fmt::Debug + Send {
    /// 设置检查名称
    ///
    /// # 参数
    /// * `name` - 检查名称，本层不做校验（空字符串也被接受）
    fn name(self: Box<Self>, name: &str) -> Box<dyn ResponseBuilder>;

    /// 设置检查状态
    ///
    /// `build` 前必须至少调用一次本方法（或 [`up`](ResponseBuilder::up)/
    /// [`down`](ResponseBuilder::down)），后设置者覆盖先设置者。
    fn state(self: Box<Self>, state: ResponseState) -> Box<dyn ResponseBuilder>;

    /// 将状态设置为正常
    fn up(self: Box<Self>) -> Box<dyn ResponseBuilder> {
        self.state(ResponseState::Up)
    }

    /// 将状态设置为异常
    fn down(self: Box<Self>) -> Box<dyn ResponseBuilder> {
        self.state(ResponseState::Down)
    }

    /// 添加附加属性
    ///
    /// 可调用零或多次；同名键后写覆盖先写。首次调用即视为
    /// "显式提供了属性集"，即使最终属性集为空也与从未调用可区分。
    fn attribute(self: Box<Self>, key: &str, value: Value) -> Box<dyn ResponseBuilder>;

    /// 整体替换属性集
    ///
    /// 显式提供空映射与从未提供属性是两种可区分的合法状态；
    /// 后设置者覆盖先设置者。
    fn attributes(self: Box<Self>, attributes: Attributes) -> Box<dyn ResponseBuilder>;

    /// 完成构建，产生不可变的健康响应
    ///
    /// # 返回
    /// * `Result<Box<dyn Response>>` - 构建出的响应；符合契约的实现
    ///   在状态未设置时应以
    ///   [`ResponseError::MissingState`](crate::error::ResponseError) 快速失败
    fn build(self: Box<Self>) -> Result<Box<dyn Response>>;
}

/// 健康响应构建器工厂trait，即提供者发现的目标能力
///
/// 每个作用域最多选中一个实现；本库只发现并调用该工厂，从不实现它。
/// 单个工厂实例会服务任意数量的并发调用方。
pub trait ResponseBuilderFactory: fmt::Debug + Send + Sync {
    /// 创建新的响应构建器
    fn create_response_builder(&self) -> Box<dyn ResponseBuilder>;
}
