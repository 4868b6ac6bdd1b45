//! 通道形态与下层栈契约的域目录。
//!
//! # 模块划分（Where）
//! - [`shape`]：四种通道形态的封闭枚举；
//! - [`eligibility`]：会话形态能否搭建于下层栈之上的表驱动裁决；
//! - [`context`]：下层通道栈的窄契约（外部协作方实现）；
//! - [`factory`]：通道工厂抽象与附带能力集合的包装产物。

mod context;
mod eligibility;
mod factory;
mod shape;

pub use context::{InnerStack, inner_property};
pub use eligibility::can_build_session_channel;
pub use factory::{ChannelFactory, SecuredChannelFactory};
pub use shape::ChannelShape;
