//! 令牌需求与登记表的域目录。
//!
//! # 模块划分（Where）
//! - [`requirement`]：封闭的令牌需求变体及其能力标志；
//! - [`registry`]：按签名语义分类的四类登记表与端点侧能力聚合。

mod registry;
mod requirement;

pub use registry::{TokenCapabilities, TokenRequirementRegistry};
pub use requirement::{TokenInclusion, TokenRequirement};
