//! 能力合并与属性解析契约测试
//!
//! # 教案式导航
//! - **核心目标 (Why)**：层间能力合并的不对称规则（客户端侧只取本层、服务端侧取或、
//!   保护级别取强）与类型化属性解析的三路分发，是上层元数据的唯一事实来源；
//! - **执行策略 (How)**：以脚本化桩栈声明下层能力与深层属性，逐条核对合并产物
//!   与解析路径；代数律的随机化覆盖另见 `tests/capability_properties.rs`。

mod support;

use std::sync::Arc;

use spark_security::{
    IdentityVerifier, MessageSecurityBinding, ProtectionLevel, SecurityCapabilities,
    SecurityVersion,
};
use support::StubInnerStack;

/// 深层属性桩：模拟由更下层解析出的任意类型。
#[derive(Debug, PartialEq)]
struct InnerTag(&'static str);

fn transport_inner() -> SecurityCapabilities {
    SecurityCapabilities::new(
        false,
        true,
        false,
        ProtectionLevel::SignAndEncrypt,
        ProtectionLevel::SignAndEncrypt,
    )
}

/// 验证：下层未暴露能力时，本层声明原样生效。
#[test]
fn missing_inner_capabilities_fall_back_to_own() {
    let binding =
        MessageSecurityBinding::certificate_over_transport(SecurityVersion::default_suite());
    let stack = StubInnerStack::new();

    let merged = binding.security_capabilities(&stack);
    assert_eq!(merged, binding.own_capabilities());
    assert!(merged.supports_client_authentication);
    assert!(!merged.supports_server_authentication);
    assert_eq!(merged.request_protection_level, ProtectionLevel::None);
}

/// 验证：传输安全绑定与 TLS 类下层合并后的完整能力画像。
#[test]
fn transport_binding_merges_with_tls_like_inner() {
    let binding =
        MessageSecurityBinding::certificate_over_transport(SecurityVersion::default_suite());
    let stack = StubInnerStack::new().declare_capabilities(transport_inner());

    let merged = binding.security_capabilities(&stack);
    // 客户端侧标志只由消息层决定。
    assert!(merged.supports_client_authentication);
    assert!(!merged.supports_client_windows_identity);
    // 服务端认证与保护强度由下层补足。
    assert!(merged.supports_server_authentication);
    assert_eq!(
        merged.request_protection_level,
        ProtectionLevel::SignAndEncrypt
    );
    assert_eq!(
        merged.response_protection_level,
        ProtectionLevel::SignAndEncrypt
    );
}

/// 验证：下层声称的客户端认证不会污染合并结果。
#[test]
fn inner_client_auth_claims_are_ignored() {
    let binding = MessageSecurityBinding::username_over_transport();
    let inner = SecurityCapabilities::new(
        true,
        false,
        true,
        ProtectionLevel::None,
        ProtectionLevel::None,
    );
    let stack = StubInnerStack::new().declare_capabilities(inner);

    let merged = binding.security_capabilities(&stack);
    // 用户名需求登记在签名加密类别，不参与背书聚合，本层客户端侧声明为假。
    assert!(!merged.supports_client_authentication);
    assert!(!merged.supports_client_windows_identity);
}

/// 验证：能力集合经由类型化属性解析取得，与直接合并一致。
#[test]
fn capabilities_resolve_as_typed_property() {
    let binding = MessageSecurityBinding::mutual_certificate_default();
    let stack = StubInnerStack::new().declare_capabilities(transport_inner());

    let resolved = binding
        .resolve_property::<SecurityCapabilities>(&stack)
        .expect("capabilities are always resolvable");
    assert_eq!(*resolved, binding.security_capabilities(&stack));
    assert!(resolved.supports_client_authentication);
}

/// 验证：身份校验器从本地客户端策略解析，不下钻到内层。
#[test]
fn identity_verifier_resolves_from_client_settings() {
    let mut binding = MessageSecurityBinding::username_over_transport();
    binding
        .client_settings_mut()
        .set_identity_verifier(IdentityVerifier::PinnedAuthority(String::from(
            "spiffe://prod",
        )));

    let resolved = binding
        .resolve_property::<IdentityVerifier>(&StubInnerStack::new())
        .expect("verifier always present in client settings");
    assert_eq!(
        *resolved,
        IdentityVerifier::PinnedAuthority(String::from("spiffe://prod"))
    );
}

/// 验证：未识别类型透传下层栈解析。
#[test]
fn unknown_properties_delegate_to_inner_stack() {
    let binding = MessageSecurityBinding::username_over_transport();
    let stack = StubInnerStack::new().expose(InnerTag("quic-endpoint"));

    let resolved = binding
        .resolve_property::<InnerTag>(&stack)
        .expect("inner stack exposes the tag");
    assert_eq!(*resolved, InnerTag("quic-endpoint"));
}

/// 验证：所有层均未解析时返回缺席。
#[test]
fn unresolved_property_yields_none() {
    let binding = MessageSecurityBinding::username_over_transport();
    assert!(
        binding
            .resolve_property::<InnerTag>(&StubInnerStack::new())
            .is_none()
    );
}

/// 验证：安全会话绑定继承引导绑定的客户端侧能力。
#[test]
fn secure_conversation_inherits_bootstrap_client_flags() {
    let bootstrap =
        MessageSecurityBinding::certificate_over_transport(SecurityVersion::default_suite());
    let session = MessageSecurityBinding::secure_conversation(bootstrap);

    let own = session.own_capabilities();
    assert!(own.supports_client_authentication);
    assert!(own.supports_server_authentication);
    assert_eq!(own.request_protection_level, ProtectionLevel::SignAndEncrypt);
}

/// 验证：合并结果可直接序列化供元数据导出。
#[test]
fn merged_capabilities_serialize_for_metadata_export() {
    let binding = MessageSecurityBinding::mutual_certificate_default();
    let merged = binding.security_capabilities(&StubInnerStack::new());

    let json = serde_json::to_value(merged).expect("capability set serializes");
    assert_eq!(json["request_protection_level"], "sign_and_encrypt");
    assert_eq!(json["supports_server_authentication"], true);
}

/// 验证：版本引用在属性路径上保持共享语义。
#[test]
fn version_reference_survives_resolution_paths() {
    let binding = MessageSecurityBinding::mutual_certificate_default();
    let before = Arc::clone(binding.version());
    let _ = binding.security_capabilities(&StubInnerStack::new());
    assert!(Arc::ptr_eq(binding.version(), &before));
}
