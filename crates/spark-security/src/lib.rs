#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "spark-security: SOAP 风格 RPC 安全策略子系统的消息级安全绑定组合与能力协商核心。"]
#![doc = ""]
#![doc = "== 定位与边界 =="]
#![doc = "本 crate 只负责三件事：声明式的消息安全需求如何聚合为能力集合、该能力集合如何与下层通道栈的能力合并、以及任意组合出的绑定如何被识别回一组规范命名配置。"]
#![doc = "真实的签名/加密、传输通道与 WS-Trust 协商均由外部协作方承担，本 crate 仅消费其窄契约（参见 [`channel::InnerStack`]）。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "本 crate 定位于 `no_std + alloc` 场景：令牌登记表、绑定聚合根等契约依赖 [`alloc`] 中的 `Vec`、`Box`、`Arc`。"]
#![doc = "纯 `no_std`（无分配器）环境暂不支持；`std` Feature 仅增量开启 `thiserror` 派生与 `tracing` 观测，不改变核心语义。"]

extern crate alloc;

/// 绑定聚合根、家族分派、规范构造器与结构识别器的命名空间。
///
/// - **意图说明 (Why)**：将"绑定由什么组成"与"绑定如何被识别"集中在同一域目录，保证构造器与识别器的往返律在单点维护；
/// - **契约定位 (What)**：聚合根 [`MessageSecurityBinding`] 仅在配置阶段可变，交付通道工厂构造后应视为只读。
pub mod binding;

/// 能力集合与保护级别的值聚合。
///
/// - **意图说明 (Why)**：把"本层声明的能力"与"层间合并规则"建模为纯值运算，避免在聚合根上散落布尔逻辑；
/// - **契约定位 (What)**：合并规则刻意不对称，客户端侧标志只由本层决定，详见 [`capability::SecurityCapabilities::merge_with_inner`]。
pub mod capability;

/// 通道形态、会话资格裁决与下层通道栈契约。
///
/// - **意图说明 (Why)**：会话形态能否在下层之上搭建是纯表驱动判定，独立成模块便于契约测试逐行核对；
/// - **契约定位 (What)**：[`channel::InnerStack`] 是外部协作方的唯一接入面，构造失败原样上抛。
pub mod channel;

/// 错误类型与稳定错误码集中声明处。
///
/// - **意图说明 (Why)**：统一描述头布局越界、形态不可构建等同步失败，供观测与告警按码聚合；
/// - **风险提示 (Trade-offs)**：本 crate 无重试语义，所有错误一次性上报调用方。
pub mod error;

/// 令牌需求变体与四类登记表。
///
/// - **意图说明 (Why)**：登记表是能力聚合与结构识别共同的输入，类别之间永不隐式合并；
/// - **契约定位 (What)**：[`token::TokenRequirement`] 创建后不可变，配置期替换整值而非原地修改。
pub mod token;

pub use binding::{
    BindingFamily, EndpointIdentity, HeaderLayout, IdentityVerifier, LocalClientSettings,
    MessageSecurityBinding, SecurityVersion, WsSecurity, WsSecurityPolicy, WsTrust,
    is_certificate_over_transport, is_mutual_certificate, is_username_over_transport,
};
pub use capability::{ProtectionLevel, SecurityCapabilities};
pub use channel::{
    ChannelFactory, ChannelShape, InnerStack, SecuredChannelFactory, can_build_session_channel,
    inner_property,
};
pub use error::SecurityError;
pub use token::{TokenCapabilities, TokenInclusion, TokenRequirement, TokenRequirementRegistry};

/// crate 级结果别名，默认错误域为 [`SecurityError`]。
pub type Result<T, E = SecurityError> = core::result::Result<T, E>;
