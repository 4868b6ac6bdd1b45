//! 通道形态资格与工厂委托契约测试
//!
//! # 教案式导航
//! - **核心目标 (Why)**：会话形态的表驱动资格裁决、裸形态的下层透传、以及
//!   "资格确认后才触达下层构造、失败原样上抛"的委托纪律；
//! - **执行策略 (How)**：桩栈逐行声明形态清单，分别驱动资格查询与工厂构造路径。

mod support;

use spark_security::{
    ChannelFactory, ChannelShape, MessageSecurityBinding, ProtectionLevel, SecurityError,
    can_build_session_channel,
};
use support::StubInnerStack;

fn session_binding() -> MessageSecurityBinding {
    MessageSecurityBinding::secure_conversation(MessageSecurityBinding::username_over_transport())
}

/// 验证：下层仅声明裸请求应答时的决策表整行结论。
#[test]
fn eligibility_table_for_plain_request_reply_inner() {
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]);

    assert!(can_build_session_channel(
        ChannelShape::SessionRequestReply,
        &inner
    ));
    assert!(!can_build_session_channel(ChannelShape::SessionDuplex, &inner));
    assert!(!can_build_session_channel(ChannelShape::PlainDuplex, &inner));
    assert!(!can_build_session_channel(
        ChannelShape::PlainRequestReply,
        &inner
    ));
}

/// 验证：会话家族的绑定走表驱动裁决。
#[test]
fn session_family_uses_eligibility_table() {
    let binding = session_binding();
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]);

    assert!(binding.can_build_channel(ChannelShape::SessionRequestReply, &inner));
    assert!(!binding.can_build_channel(ChannelShape::SessionDuplex, &inner));
    // 会话家族经由本路径不声明裸形态。
    assert!(!binding.can_build_channel(ChannelShape::PlainRequestReply, &inner));
}

/// 验证：非会话家族直接透传下层声明。
#[test]
fn plain_families_delegate_to_inner_declaration() {
    let binding = MessageSecurityBinding::username_over_transport();
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]);

    assert!(binding.can_build_channel(ChannelShape::PlainRequestReply, &inner));
    assert!(!binding.can_build_channel(ChannelShape::SessionRequestReply, &inner));
}

/// 验证：下层毫无声明时会话裁决整体短路为否。
#[test]
fn empty_inner_declaration_short_circuits() {
    let binding = session_binding();
    let inner = StubInnerStack::new();
    for shape in ChannelShape::ALL {
        assert!(!binding.can_build_channel(shape, &inner));
    }
}

/// 验证：资格裁决失败时构造请求不触达下层，错误码稳定。
#[test]
fn ineligible_shape_is_rejected_before_inner_build() {
    let binding = session_binding();
    // 桩若被触达会构造成功，错误只能来自本层的资格守卫。
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]);

    let err = binding
        .build_channel_factory(ChannelShape::SessionDuplex, &inner)
        .unwrap_err();
    assert_eq!(err.code(), "security.channel.shape_unsupported");
}

/// 验证：会话形态构造成功时优先骑在同模式裸通道上，并附带合并能力。
#[test]
fn session_factory_rides_plain_inner_and_carries_capabilities() {
    let binding = session_binding();
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]);

    let factory = binding
        .build_channel_factory(ChannelShape::SessionRequestReply, &inner)
        .expect("eligible shape must build");
    assert_eq!(factory.shape(), ChannelShape::SessionRequestReply);
    assert_eq!(factory.inner_shape(), ChannelShape::PlainRequestReply);
    assert_eq!(
        factory.capabilities().request_protection_level,
        ProtectionLevel::SignAndEncrypt
    );
}

/// 验证：下层仅声明会话形态时按原形态下行请求。
#[test]
fn session_inner_shape_is_requested_verbatim_when_plain_is_absent() {
    let binding = session_binding();
    let inner = StubInnerStack::with_shapes(&[ChannelShape::SessionRequestReply]);

    let factory = binding
        .build_channel_factory(ChannelShape::SessionRequestReply, &inner)
        .expect("eligible shape must build");
    assert_eq!(factory.inner_shape(), ChannelShape::SessionRequestReply);
}

/// 验证：下层构造失败原样上抛，不被本层改写。
#[test]
fn inner_build_failure_propagates_unchanged() {
    let binding = MessageSecurityBinding::username_over_transport();
    let inner = StubInnerStack::with_shapes(&[ChannelShape::PlainRequestReply]).failing_build();

    let err = binding
        .build_channel_factory(ChannelShape::PlainRequestReply, &inner)
        .unwrap_err();
    assert_eq!(
        err,
        SecurityError::InnerConstruction {
            detail: String::from("stub refuses to build"),
        }
    );
}
