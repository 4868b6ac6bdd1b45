//! 契约测试共用的脚本化桩对象。
//!
//! # 教案式导航
//! - **核心目标 (Why)**：安全绑定层只经由 `InnerStack` 窄契约接触下层通道栈，
//!   测试用脚本化桩声明形态清单、暴露属性并按需制造构造失败，即可完整驱动核心逻辑；
//! - **契约声明 (What)**：桩不含任何真实 IO，全部行为由构造时注入的数据决定。

// 各测试目标按需取用桩的子集，允许存在未使用的辅助方法。
#![allow(dead_code)]

use std::any::{Any, TypeId};
use std::sync::Arc;

use spark_security::{
    ChannelFactory, ChannelShape, InnerStack, Result, SecurityCapabilities, SecurityError,
};

/// 只记录形态的最小工厂桩。
pub struct StubChannelFactory {
    shape: ChannelShape,
}

impl ChannelFactory for StubChannelFactory {
    fn shape(&self) -> ChannelShape {
        self.shape
    }
}

/// 脚本化的下层通道栈桩。
pub struct StubInnerStack {
    shapes: Vec<ChannelShape>,
    capabilities: Option<SecurityCapabilities>,
    extra: Option<(TypeId, Arc<dyn Any + Send + Sync>)>,
    fail_build: bool,
}

impl StubInnerStack {
    /// 不声明任何形态、不暴露任何属性的空白桩。
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            capabilities: None,
            extra: None,
            fail_build: false,
        }
    }

    /// 声明可构建的形态清单。
    pub fn with_shapes(shapes: &[ChannelShape]) -> Self {
        let mut stack = Self::new();
        stack.shapes = shapes.to_vec();
        stack
    }

    /// 声明下层暴露的能力集合。
    pub fn declare_capabilities(mut self, capabilities: SecurityCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// 暴露一个任意类型的属性值，模拟更深层的属性解析。
    pub fn expose<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.extra = Some((TypeId::of::<T>(), Arc::new(value)));
        self
    }

    /// 令工厂构造路径失败，模拟下层栈的构造异常。
    pub fn failing_build(mut self) -> Self {
        self.fail_build = true;
        self
    }
}

impl InnerStack for StubInnerStack {
    fn can_build(&self, shape: ChannelShape) -> bool {
        self.shapes.contains(&shape)
    }

    fn property(&self, key: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        if key == TypeId::of::<SecurityCapabilities>() {
            return self
                .capabilities
                .map(|capabilities| Arc::new(capabilities) as Arc<dyn Any + Send + Sync>);
        }
        self.extra
            .as_ref()
            .filter(|(id, _)| *id == key)
            .map(|(_, value)| Arc::clone(value))
    }

    fn build_channel_factory(&self, shape: ChannelShape) -> Result<Box<dyn ChannelFactory>> {
        if self.fail_build {
            return Err(SecurityError::InnerConstruction {
                detail: String::from("stub refuses to build"),
            });
        }
        Ok(Box::new(StubChannelFactory { shape }))
    }
}
