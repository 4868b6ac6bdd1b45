//! 绑定克隆语义契约测试
//!
//! # 教案式导航
//! - **核心目标 (Why)**：克隆必须深拷贝登记表与本地客户端策略（克隆后互不可见），
//!   同时共享不可变的版本引用；该语义是"跨并发消费方共享前先克隆"纪律的根基；
//! - **执行策略 (How)**：克隆后分别变异两侧可变状态，核对另一侧不受影响，
//!   并以指针相等断言版本共享。

use std::sync::Arc;

use spark_security::{
    IdentityVerifier, MessageSecurityBinding, SecurityVersion, TokenRequirement,
};

/// 验证：克隆体的本地客户端策略独立于原绑定。
#[test]
fn clone_client_settings_are_independent() {
    let original = MessageSecurityBinding::username_over_transport();
    let mut cloned = original.clone();

    cloned
        .client_settings_mut()
        .set_identity_verifier(IdentityVerifier::AcceptAny);
    cloned.client_settings_mut().set_detect_replays(false);

    assert_eq!(
        original.client_settings().identity_verifier(),
        &IdentityVerifier::Strict
    );
    assert!(original.client_settings().detect_replays());
    assert_eq!(
        cloned.client_settings().identity_verifier(),
        &IdentityVerifier::AcceptAny
    );
}

/// 验证：克隆体的登记表独立于原绑定，反向亦然。
#[test]
fn clone_registry_is_deep_copied() {
    let original =
        MessageSecurityBinding::certificate_over_transport(SecurityVersion::default_suite());
    let mut cloned = original.clone();

    cloned
        .registry_mut()
        .push_signed_endorsing(TokenRequirement::windows_identity());

    assert!(original.registry().signed_endorsing().is_empty());
    assert_eq!(cloned.registry().signed_endorsing().len(), 1);
}

/// 验证：版本侧写在克隆间以同一引用共享。
#[test]
fn clone_shares_version_reference() {
    let original = MessageSecurityBinding::mutual_certificate_default();
    let cloned = original.clone();
    assert!(Arc::ptr_eq(original.version(), cloned.version()));
}

/// 验证：刚克隆出的绑定与原绑定策略形状相等。
#[test]
fn fresh_clone_preserves_policy_shape() {
    let original =
        MessageSecurityBinding::certificate_over_transport(SecurityVersion::wss11_trust13_policy12());
    let cloned = original.clone();
    assert_eq!(original, cloned);
}

/// 验证：克隆体变异登记表后，策略形状相等随之失效。
#[test]
fn mutated_clone_diverges_in_policy_shape() {
    let original = MessageSecurityBinding::username_over_transport();
    let mut cloned = original.clone();
    cloned
        .registry_mut()
        .push_signed(TokenRequirement::certificate());
    assert_ne!(original, cloned);
}
