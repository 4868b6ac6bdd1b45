use core::fmt;

/// 通道形态，四种通信模式的封闭枚举。
///
/// # 设计依据（Why）
/// - 双工/请求应答两种交互模式，各自再分"裸"与"带会话"两档，构成安全层资格裁决的
///   完整判定域；
/// - 封闭枚举保证决策表穷尽：新增形态必须同步修订资格裁决与构造委托。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelShape {
    /// 裸双工。
    PlainDuplex,
    /// 带会话的双工。
    SessionDuplex,
    /// 裸请求应答。
    PlainRequestReply,
    /// 带会话的请求应答。
    SessionRequestReply,
}

impl ChannelShape {
    /// 四种形态的完整清单，供"下层栈是否声明任何已识别形态"类判定遍历。
    pub const ALL: [ChannelShape; 4] = [
        ChannelShape::PlainDuplex,
        ChannelShape::SessionDuplex,
        ChannelShape::PlainRequestReply,
        ChannelShape::SessionRequestReply,
    ];

    /// 是否带会话语义。
    pub fn is_session(self) -> bool {
        matches!(
            self,
            ChannelShape::SessionDuplex | ChannelShape::SessionRequestReply
        )
    }

    /// 是否为双工交互模式。
    pub fn is_duplex(self) -> bool {
        matches!(
            self,
            ChannelShape::PlainDuplex | ChannelShape::SessionDuplex
        )
    }

    /// 去掉会话语义后的同模式裸形态；裸形态返回自身。
    pub fn plain_form(self) -> ChannelShape {
        match self {
            ChannelShape::SessionDuplex => ChannelShape::PlainDuplex,
            ChannelShape::SessionRequestReply => ChannelShape::PlainRequestReply,
            plain => plain,
        }
    }
}

impl fmt::Display for ChannelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChannelShape::PlainDuplex => "plain-duplex",
            ChannelShape::SessionDuplex => "session-duplex",
            ChannelShape::PlainRequestReply => "plain-request-reply",
            ChannelShape::SessionRequestReply => "session-request-reply",
        })
    }
}
