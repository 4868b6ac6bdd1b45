//! 安全绑定聚合根的域目录。
//!
//! # 模块划分（Where）
//! - [`version`]：不可变的安全策略版本侧写，克隆间以 `Arc` 共享；
//! - [`layout`]：安全头布局的封闭枚举与越界守卫；
//! - [`settings`]：端点本地的客户端运行时策略与身份校验器；
//! - [`family`]：绑定家族的封闭和类型，携带各家族的能力供给与构造路径；
//! - [`composition`]：聚合根本体、规范构造器与通道工厂委托；
//! - [`classify`]：把任意组合映射回规范命名配置的结构识别器。

mod classify;
mod composition;
mod family;
mod layout;
mod settings;
mod version;

pub use classify::{
    is_certificate_over_transport, is_mutual_certificate, is_username_over_transport,
};
pub use composition::MessageSecurityBinding;
pub use family::BindingFamily;
pub use layout::HeaderLayout;
pub use settings::{EndpointIdentity, IdentityVerifier, LocalClientSettings};
pub use version::{SecurityVersion, WsSecurity, WsSecurityPolicy, WsTrust};
