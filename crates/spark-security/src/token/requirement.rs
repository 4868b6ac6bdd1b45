use alloc::string::String;
use core::fmt;

/// 令牌在消息中的携带策略。
///
/// # 设计依据（Why）
/// - 同一种凭证在发起方与接收方视角下的序列化需求不同：保护令牌通常只以引用出现（`Never`），
///   而背书令牌必须随请求送达接收方（`AlwaysToRecipient`）才能完成持有证明；
/// - 规范构造器依赖该字段区分"同一变体的不同角色"，结构识别器据此做精确变体匹配。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenInclusion {
    /// 永不随消息携带，仅以引用指向。
    Never,
    /// 仅在首条消息中携带一次。
    Once,
    /// 每条发往接收方的消息均携带。
    AlwaysToRecipient,
    /// 每条发往发起方的消息均携带。
    AlwaysToInitiator,
}

/// 单条令牌需求，封闭变体集合。
///
/// # 设计背景（Why）
/// - 需求描述"端点期望对端出示何种凭证、以何种方式参与消息保护"，是能力聚合与结构识别的最小单元；
/// - 以封闭枚举取代运行时类型探查：识别器只需模式匹配变体，不引入任何反射式判断。
///
/// # 契约说明（What）
/// - 值创建后不可变；配置期如需调整（如派生密钥开关），以 [`with_key_derivation`](Self::with_key_derivation)
///   产出新值整体替换；
/// - 两个能力标志由变体固定（`Custom` 自带）：证书与用户名凭证可断言客户端身份但不携带
///   Windows 身份，Windows 凭证二者皆可；
/// - `Username` 不支持派生密钥，相关开关对其恒为无效。
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenRequirement {
    /// X.509 证书凭证。
    Certificate {
        inclusion: TokenInclusion,
        require_derived_keys: bool,
    },
    /// 用户名/口令凭证。
    Username,
    /// Windows 域身份凭证。
    WindowsIdentity { require_derived_keys: bool },
    /// 扩展凭证，能力标志由接入方显式声明。
    ///
    /// # 实现责任 (Implementation Responsibility)
    /// - **命名约定**：`name` 使用稳定标识（如 `acme.totp` 或反向域名），identical 名称视为同种凭证；
    /// - **标志一致性**：声明 `supports_client_authentication = false` 却参与背书类别不会报错，
    ///   但聚合结果将无法体现客户端认证能力，接入方需自行保证语义自洽。
    Custom {
        name: String,
        supports_client_authentication: bool,
        supports_client_windows_identity: bool,
        requires_channel_demuxer: bool,
        require_derived_keys: bool,
    },
}

impl TokenRequirement {
    /// 构造默认携带策略（发往接收方）的证书需求。
    pub fn certificate() -> Self {
        TokenRequirement::Certificate {
            inclusion: TokenInclusion::AlwaysToRecipient,
            require_derived_keys: true,
        }
    }

    /// 构造指定携带策略的证书需求。
    pub fn certificate_with_inclusion(inclusion: TokenInclusion) -> Self {
        TokenRequirement::Certificate {
            inclusion,
            require_derived_keys: true,
        }
    }

    /// 构造用户名需求。
    pub fn username() -> Self {
        TokenRequirement::Username
    }

    /// 构造 Windows 身份需求。
    pub fn windows_identity() -> Self {
        TokenRequirement::WindowsIdentity {
            require_derived_keys: true,
        }
    }

    /// 该凭证能否在消息层断言客户端身份。
    pub fn supports_client_authentication(&self) -> bool {
        match self {
            TokenRequirement::Certificate { .. } => true,
            TokenRequirement::Username => true,
            TokenRequirement::WindowsIdentity { .. } => true,
            TokenRequirement::Custom {
                supports_client_authentication,
                ..
            } => *supports_client_authentication,
        }
    }

    /// 该凭证能否携带客户端的 Windows 身份。
    pub fn supports_client_windows_identity(&self) -> bool {
        match self {
            TokenRequirement::Certificate { .. } => false,
            TokenRequirement::Username => false,
            TokenRequirement::WindowsIdentity { .. } => true,
            TokenRequirement::Custom {
                supports_client_windows_identity,
                ..
            } => *supports_client_windows_identity,
        }
    }

    /// 该凭证是否支持派生密钥。
    ///
    /// # 语义说明
    /// - 用户名/口令不含密钥材料，无法派生会话密钥，恒返回 `false`。
    pub fn supports_key_derivation(&self) -> bool {
        !matches!(self, TokenRequirement::Username)
    }

    /// 读取派生密钥开关；不支持派生密钥的变体恒为 `false`。
    pub fn require_derived_keys(&self) -> bool {
        match self {
            TokenRequirement::Certificate {
                require_derived_keys,
                ..
            }
            | TokenRequirement::WindowsIdentity {
                require_derived_keys,
            }
            | TokenRequirement::Custom {
                require_derived_keys,
                ..
            } => *require_derived_keys,
            TokenRequirement::Username => false,
        }
    }

    /// 产出调整过派生密钥开关的新需求值。
    ///
    /// # 契约
    /// - 不支持派生密钥的变体（`Username`）原样返回；
    /// - 调用方以返回值整体替换登记表槽位，原值保持不可变语义。
    pub fn with_key_derivation(self, require: bool) -> Self {
        match self {
            TokenRequirement::Certificate { inclusion, .. } => TokenRequirement::Certificate {
                inclusion,
                require_derived_keys: require,
            },
            TokenRequirement::WindowsIdentity { .. } => TokenRequirement::WindowsIdentity {
                require_derived_keys: require,
            },
            TokenRequirement::Custom {
                name,
                supports_client_authentication,
                supports_client_windows_identity,
                requires_channel_demuxer,
                ..
            } => TokenRequirement::Custom {
                name,
                supports_client_authentication,
                supports_client_windows_identity,
                requires_channel_demuxer,
                require_derived_keys: require,
            },
            TokenRequirement::Username => TokenRequirement::Username,
        }
    }

    /// 该凭证的签发/校验是否需要通道分用器。
    ///
    /// # 语义说明
    /// - 内建凭证均在既有通道内完成交换；只有显式声明的扩展凭证可能要求独立分用通道。
    pub fn requires_channel_demuxer(&self) -> bool {
        match self {
            TokenRequirement::Custom {
                requires_channel_demuxer,
                ..
            } => *requires_channel_demuxer,
            _ => false,
        }
    }

    /// 变体的稳定展示名，用于日志与诊断转储。
    pub fn label(&self) -> &'static str {
        match self {
            TokenRequirement::Certificate { .. } => "certificate",
            TokenRequirement::Username => "username",
            TokenRequirement::WindowsIdentity { .. } => "windows-identity",
            TokenRequirement::Custom { .. } => "custom",
        }
    }
}

impl fmt::Display for TokenRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenRequirement::Custom { name, .. } => write!(f, "custom({name})"),
            other => f.write_str(other.label()),
        }
    }
}
