//! 绑定形状的结构识别器。
//!
//! # 角色定位（Why）
//! - 上层元数据/导出逻辑需要用人类可读的规范名称（如"传输之上的用户名认证"）呈现一套
//!   组合，而不是倾倒原始组合图；识别器提供从结构到名称的单向映射；
//! - 识别器与规范构造器互为往返：对构造器产物必须判真，对其任意变异必须判假。
//!
//! # 契约边界（What）
//! - 这些谓词是单向启发式，不是任意组合的通用逆函数：手工拼装的组合不保证被正确分类；
//! - 判定只依赖策略形状（家族标签、类别计数、变体匹配、时间戳开关），与顺序无关，
//!   也不读取本地客户端策略。

use alloc::sync::Arc;

#[cfg(feature = "std")]
use tracing::trace;

use crate::token::{TokenInclusion, TokenRequirement};

use super::composition::MessageSecurityBinding;

/// 识别"传输之上的用户名认证"形状。
///
/// # 判定条件（What）
/// - 时间戳开启；传输安全家族；
/// - 类别计数恰为 (signed, signed-encrypted, endorsing, signed-endorsing) = (0, 1, 0, 0)；
/// - 唯一的签名加密条目是用户名变体。
pub fn is_username_over_transport(binding: &MessageSecurityBinding) -> bool {
    if !binding.include_timestamp() {
        return false;
    }
    if !binding.family().is_transport_security() {
        return false;
    }

    let registry = binding.registry();
    if !registry.signed().is_empty()
        || registry.signed_encrypted().len() != 1
        || !registry.endorsing().is_empty()
        || !registry.signed_endorsing().is_empty()
    {
        return false;
    }

    let matched = matches!(registry.signed_encrypted()[0], TokenRequirement::Username);
    #[cfg(feature = "std")]
    if matched {
        trace!("binding recognized as username-over-transport");
    }
    matched
}

/// 识别"传输之上的证书背书"形状。
///
/// # 判定条件（What）
/// - 时间戳开启；传输安全家族；
/// - 类别计数恰为 (0, 0, 1, 0)；
/// - 唯一的背书条目是发往接收方的证书变体（与对应构造器的登记动作一致）。
pub fn is_certificate_over_transport(binding: &MessageSecurityBinding) -> bool {
    if !binding.include_timestamp() {
        return false;
    }
    if !binding.family().is_transport_security() {
        return false;
    }

    let registry = binding.registry();
    if !registry.signed().is_empty()
        || !registry.signed_encrypted().is_empty()
        || registry.endorsing().len() != 1
        || !registry.signed_endorsing().is_empty()
    {
        return false;
    }

    let matched = matches!(
        registry.endorsing()[0],
        TokenRequirement::Certificate {
            inclusion: TokenInclusion::AlwaysToRecipient,
            ..
        }
    );
    #[cfg(feature = "std")]
    if matched {
        trace!("binding recognized as certificate-over-transport");
    }
    matched
}

/// 识别"双向证书认证"形状。
///
/// # 判定条件（What）
/// - 与按该绑定自身版本调用默认双向证书构造器得到的规范实例做策略形状整体比对
///   （相等语义排除本地客户端策略）；
/// - 版本套件不同则家族与令牌参数随之不同，比对自然失败。
pub fn is_mutual_certificate(binding: &MessageSecurityBinding) -> bool {
    let canonical =
        MessageSecurityBinding::mutual_certificate_with(Arc::clone(binding.version()), false);
    let matched = *binding == canonical;
    #[cfg(feature = "std")]
    if matched {
        trace!("binding recognized as mutual-certificate");
    }
    matched
}
