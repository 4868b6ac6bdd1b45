//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 为安全绑定层对外暴露的同步失败提供集中定义，并绑定稳定错误码，方便运维与观测按码聚合；
//! - 本 crate 的全部操作均为同步纯计算，不存在重试或部分失败恢复，错误一经产生即原样上报调用方。
//!
//! ## 设计要求（What）
//! - 启用 `std` 特性时派生 `thiserror::Error` 以兼容 `std::error::Error` 生态；
//! - `no_std` 轨道手工实现 `core::fmt::Display`，保证两种构建下诊断文案一致；
//! - 错误码遵循 `<域>.<语义>` 约定（如 `security.header_layout.undefined`），新增变体必须同步登记。

use alloc::string::String;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

use crate::channel::ChannelShape;

/// 安全绑定层的核心错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：聚合配置期守卫与通道工厂委托路径上的全部失败形态；变体保持细粒度，
///   帮助上层区分"调用方传参越界"与"下层栈拒绝构建"两类完全不同的处置策略。
/// - **契约 (What)**：
///   - 所有变体均 `Send + Sync + 'static`，可安全跨线程传播；
///   - [`code`](Self::code) 返回稳定错误码，日志与指标只应依赖码值而非文案；
///   - 不存在"平台未实现"类变体：本层所有声明的操作均有完整实现。
/// - **风险 (Trade-offs)**：`InnerConstruction` 以 `String` 保存下层详情，牺牲少量堆分配换取
///   排障可读性；若未来需要零分配，可引入 `Arc<str>` 版本。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SecurityError {
    /// 头布局原始码不在封闭枚举定义域内。
    ///
    /// - **意图 (Why)**：安全头布局必须恒为四个已定义值之一，越界赋值在写入前被拒绝；
    /// - **契约 (What)**：`code` 为被拒绝的原始码；先前值保持不变，调用方可安全重试合法值。
    #[cfg_attr(
        feature = "std",
        error("security header layout code `{code}` is not defined")
    )]
    UndefinedHeaderLayout { code: u32 },

    /// 请求的通道形态无法在下层栈之上构建。
    ///
    /// - **意图 (Why)**：资格裁决失败时阻止工厂构造继续下行，避免下层栈收到注定失败的请求；
    /// - **契约 (What)**：`shape` 为被拒绝的形态；调用方应改用下层声明可构建的形态或调整栈组合。
    #[cfg_attr(
        feature = "std",
        error("channel shape `{shape}` cannot be built on top of the inner stack")
    )]
    ShapeUnsupported { shape: ChannelShape },

    /// 下层通道栈在工厂构造阶段失败。
    ///
    /// - **意图 (Why)**：资格确认后构造仍可能失败（资源、握手预热等），该失败按契约原样上抛；
    /// - **契约 (What)**：`detail` 由下层实现填充，本层不追加解释也不重试。
    #[cfg_attr(
        feature = "std",
        error("inner channel factory construction failed: {detail}")
    )]
    InnerConstruction { detail: String },
}

impl SecurityError {
    /// 返回稳定错误码。
    ///
    /// # 契约
    /// - 码值一经发布不再变更；观测、SLO 与告警均以此为聚合键。
    pub fn code(&self) -> &'static str {
        match self {
            SecurityError::UndefinedHeaderLayout { .. } => "security.header_layout.undefined",
            SecurityError::ShapeUnsupported { .. } => "security.channel.shape_unsupported",
            SecurityError::InnerConstruction { .. } => "security.channel.inner_failure",
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityError::UndefinedHeaderLayout { code } => {
                write!(f, "security header layout code `{code}` is not defined")
            }
            SecurityError::ShapeUnsupported { shape } => {
                write!(f, "channel shape `{shape}` cannot be built on top of the inner stack")
            }
            SecurityError::InnerConstruction { detail } => {
                write!(f, "inner channel factory construction failed: {detail}")
            }
        }
    }
}
