use alloc::boxed::Box;

use crate::capability::SecurityCapabilities;
use crate::channel::ChannelShape;

/// 通道工厂抽象，下层栈构造流程的产物。
///
/// # 契约（What）
/// - 本 crate 不定义工厂的建连行为，只约束"产物知晓自身形态"这一最小可观测面；
/// - 要求 `Send`，保证工厂可交付多线程宿主继续装配。
pub trait ChannelFactory: Send {
    /// 工厂对应的通道形态。
    fn shape(&self) -> ChannelShape;
}

/// 附带合并后能力集合的通道工厂包装。
///
/// # 设计背景（Why）
/// - 完整的通道工厂构造属于外围子系统，本层对上交付的只有两件事：资格裁决的结论
///   （体现为包装成功与否）与合并后的能力集合；将二者与下层工厂一并打包，上层
///   元数据/运行时无需再次查询即可取得能力视图。
#[derive(Debug)]
pub struct SecuredChannelFactory {
    inner: Box<dyn ChannelFactory>,
    shape: ChannelShape,
    capabilities: SecurityCapabilities,
}

impl core::fmt::Debug for dyn ChannelFactory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChannelFactory({})", self.shape())
    }
}

impl SecuredChannelFactory {
    /// 打包下层工厂、对外形态与合并能力。
    pub fn new(
        inner: Box<dyn ChannelFactory>,
        shape: ChannelShape,
        capabilities: SecurityCapabilities,
    ) -> Self {
        Self {
            inner,
            shape,
            capabilities,
        }
    }

    /// 获取合并后的能力集合。
    pub fn capabilities(&self) -> &SecurityCapabilities {
        &self.capabilities
    }

    /// 获取下层工厂实际构造出的形态。
    pub fn inner_shape(&self) -> ChannelShape {
        self.inner.shape()
    }

    /// 拆出下层工厂，交由外围装配流程继续使用。
    pub fn into_inner(self) -> Box<dyn ChannelFactory> {
        self.inner
    }
}

impl ChannelFactory for SecuredChannelFactory {
    fn shape(&self) -> ChannelShape {
        self.shape
    }
}
