use crate::channel::{ChannelShape, InnerStack};

/// 裁决带会话的通道形态能否搭建于下层栈之上。
///
/// # 教案级注释
///
/// ## 意图（Why）
/// - 安全会话在消息层自建会话语义，因此既可以骑在下层的会话通道上，也可以骑在
///   同模式的裸通道上；但它无法跨越交互模式：请求应答会话搭不到双工通道上，反之亦然；
/// - 把该裁决固化为表驱动纯函数，契约测试可逐行核对决策表。
///
/// ## 契约（What）
/// - 决策表（requested 行，"下层可构建"列）：
///   - `SessionRequestReply` 当且仅当下层可构建 `PlainRequestReply` 或 `SessionRequestReply`；
///   - `SessionDuplex` 当且仅当下层可构建 `PlainDuplex` 或 `SessionDuplex`；
///   - 裸形态（`PlainDuplex`、`PlainRequestReply`）经本路径恒不可构建；
/// - **前置门槛**：下层对四种已识别形态全部答否时，直接短路为 `false`；
/// - 纯函数，无副作用，无错误路径。
pub fn can_build_session_channel(requested: ChannelShape, inner: &dyn InnerStack) -> bool {
    if !ChannelShape::ALL.iter().any(|shape| inner.can_build(*shape)) {
        return false;
    }

    match requested {
        ChannelShape::SessionRequestReply => {
            inner.can_build(ChannelShape::PlainRequestReply)
                || inner.can_build(ChannelShape::SessionRequestReply)
        }
        ChannelShape::SessionDuplex => {
            inner.can_build(ChannelShape::PlainDuplex)
                || inner.can_build(ChannelShape::SessionDuplex)
        }
        ChannelShape::PlainDuplex | ChannelShape::PlainRequestReply => false,
    }
}
