use alloc::boxed::Box;
use core::fmt;

use crate::capability::{ProtectionLevel, SecurityCapabilities};
use crate::token::{TokenRequirement, TokenRequirementRegistry};

use super::composition::MessageSecurityBinding;

/// 绑定家族：封闭的和类型，决定一套组合的能力供给与构造路径。
///
/// # 设计背景（Why）
/// - 不同家族对"本层声明什么能力"的回答完全不同：传输安全家族把保护职责交给传输层，
///   消息安全两个家族自带加密签名，安全会话家族则继承引导绑定的回答；
/// - 以封闭和类型加模式匹配承载这些差异，家族归属是标签判定而非运行时类型探查，
///   结构识别器据此回答"该绑定是否属于传输安全家族"。
///
/// # 契约说明（What）
/// - 家族携带的令牌参数（保护令牌、发起方/接收方令牌）属于家族本身，不进入四类登记表；
/// - [`own_capabilities`](Self::own_capabilities) 是各家族能力供给的唯一入口，输入为
///   所属绑定的登记表，纯函数。
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindingFamily {
    /// 传输安全：消息层只补充认证语义，保护强度由传输层供给。
    TransportSecurity,
    /// 对称消息安全：单一保护令牌派生的会话密钥同时保护两个方向。
    SymmetricMessageSecurity { protection_token: TokenRequirement },
    /// 非对称消息安全：发起方与接收方各执凭证，交叉保护。
    AsymmetricMessageSecurity {
        initiator_token: TokenRequirement,
        recipient_token: TokenRequirement,
    },
    /// 安全会话：在引导绑定之上建立消息层会话。
    SecureConversation {
        bootstrap: Box<MessageSecurityBinding>,
    },
}

impl BindingFamily {
    /// 是否属于传输安全家族。
    pub fn is_transport_security(&self) -> bool {
        matches!(self, BindingFamily::TransportSecurity)
    }

    /// 该家族是否在消息层自建会话语义。
    ///
    /// # 语义说明
    /// - 仅安全会话家族为真；会话形态的资格裁决只对该家族走表驱动路径。
    pub fn session_mode(&self) -> bool {
        matches!(self, BindingFamily::SecureConversation { .. })
    }

    /// 家族的稳定展示名，用于日志与诊断转储。
    pub fn label(&self) -> &'static str {
        match self {
            BindingFamily::TransportSecurity => "transport-security",
            BindingFamily::SymmetricMessageSecurity { .. } => "symmetric-message-security",
            BindingFamily::AsymmetricMessageSecurity { .. } => "asymmetric-message-security",
            BindingFamily::SecureConversation { .. } => "secure-conversation",
        }
    }

    /// 计算该家族在本层声明的能力集合。
    ///
    /// # 语义要点（What & Why）
    /// - **传输安全**：客户端侧标志来自登记表的背书聚合；服务端认证与保护强度归传输层，
    ///   此处声明 `false` 与两个方向的 `None`；
    /// - **对称消息安全**：保护令牌既守护信道也可参与客户端断言，其标志与背书聚合取或；
    ///   服务端认证与双向"签名并加密"由本层供给；
    /// - **非对称消息安全**：发起方令牌承担客户端断言，与背书聚合取或；其余同对称家族；
    /// - **安全会话**：继承引导绑定的声明，但会话密钥建立后双向保护必达"签名并加密"，
    ///   且服务端身份已在引导阶段确认。
    pub fn own_capabilities(&self, registry: &TokenRequirementRegistry) -> SecurityCapabilities {
        let endorsing = registry.endorsing_capabilities();
        match self {
            BindingFamily::TransportSecurity => SecurityCapabilities::new(
                endorsing.client_authentication,
                false,
                endorsing.client_windows_identity,
                ProtectionLevel::None,
                ProtectionLevel::None,
            ),
            BindingFamily::SymmetricMessageSecurity { protection_token } => {
                SecurityCapabilities::new(
                    endorsing.client_authentication
                        || protection_token.supports_client_authentication(),
                    true,
                    endorsing.client_windows_identity
                        || protection_token.supports_client_windows_identity(),
                    ProtectionLevel::SignAndEncrypt,
                    ProtectionLevel::SignAndEncrypt,
                )
            }
            BindingFamily::AsymmetricMessageSecurity {
                initiator_token, ..
            } => SecurityCapabilities::new(
                endorsing.client_authentication
                    || initiator_token.supports_client_authentication(),
                true,
                endorsing.client_windows_identity
                    || initiator_token.supports_client_windows_identity(),
                ProtectionLevel::SignAndEncrypt,
                ProtectionLevel::SignAndEncrypt,
            ),
            BindingFamily::SecureConversation { bootstrap } => {
                let inherited = bootstrap.own_capabilities();
                SecurityCapabilities::new(
                    inherited.supports_client_authentication,
                    true,
                    inherited.supports_client_windows_identity,
                    ProtectionLevel::SignAndEncrypt,
                    ProtectionLevel::SignAndEncrypt,
                )
            }
        }
    }
}

impl fmt::Display for BindingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
