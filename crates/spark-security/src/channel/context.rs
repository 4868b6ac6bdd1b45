use alloc::{boxed::Box, sync::Arc};
use core::any::{Any, TypeId};

use crate::Result;
use crate::channel::{ChannelFactory, ChannelShape};

/// 下层通道栈的窄契约，由外部协作方实现。
///
/// # 教案级注释
///
/// ## 意图（Why）
/// - 安全绑定层不实现任何传输通道，只在"声明能力、裁决资格、委托构造"三个接触点上
///   消费下层栈；将这三个接触点收敛为一个 trait，使核心逻辑可以在契约测试中用脚本化
///   桩对象完整驱动；
/// - 属性查询采用类型标识分发，使上层能以泛型接口逐层下钻而无需枚举所有属性种类。
///
/// ## 契约（What）
/// - [`can_build`](Self::can_build)：下层栈是否声明可构建给定形态；纯查询，不得有副作用；
/// - [`property`](Self::property)：按 [`TypeId`] 返回下层暴露的属性值，逐层未解析则返回 `None`；
/// - [`build_channel_factory`](Self::build_channel_factory)：仅在资格确认之后被调用；
///   失败按契约原样上抛，本层不重试也不改写。
///
/// ## 风险提示（Trade-offs）
/// - 属性值以 `Arc<dyn Any + Send + Sync>` 传递，牺牲一次向下转型换取契约面最小化；
///   实现方应保证同一 `TypeId` 恒返回同一具体类型，否则转型失败等同于属性缺席。
pub trait InnerStack {
    /// 下层栈是否声明可构建给定通道形态。
    fn can_build(&self, shape: ChannelShape) -> bool;

    /// 按类型标识查询下层暴露的属性。
    fn property(&self, key: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;

    /// 委托下层构造通道工厂。
    ///
    /// # 前置条件
    /// - 调用方已通过资格裁决确认该形态可构建；违反前置条件时实现可直接返回错误。
    fn build_channel_factory(&self, shape: ChannelShape) -> Result<Box<dyn ChannelFactory>>;
}

/// 以具体类型从下层栈查询属性的便捷函数。
///
/// # 契约
/// - 返回 `None` 表示属性在所有层均未解析，或实现方对该 `TypeId` 返回了异型值；
/// - 纯查询，不缓存结果。
pub fn inner_property<T: Any + Send + Sync>(stack: &dyn InnerStack) -> Option<Arc<T>> {
    stack
        .property(TypeId::of::<T>())
        .and_then(|value| value.downcast::<T>().ok())
}
