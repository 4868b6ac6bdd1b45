use alloc::string::String;
use core::time::Duration;

/// 对端端点身份的最小断言：签发机构加名称。
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EndpointIdentity {
    authority: String,
    name: String,
}

impl EndpointIdentity {
    /// 构造端点身份。
    pub fn new(authority: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            name: name.into(),
        }
    }

    /// 获取签发机构。
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// 获取名称。
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 身份校验器：对端声称的身份如何与期望约束比对。
///
/// # 设计依据（Why）
/// - 校验策略是端点本地决策，不随消息传播，因此建模为封闭和类型而非开放 trait：
///   每种策略的语义在此处一目了然，调用方也无法注入绕过比对的实现；
/// - 作为可解析属性对上暴露（见聚合根的属性解析），上层据此构建运行时校验链。
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityVerifier {
    /// 机构与名称均须精确一致。
    #[default]
    Strict,
    /// 接受任意声称身份；仅用于受控测试环境。
    AcceptAny,
    /// 仅钉住签发机构，名称放行。
    PinnedAuthority(String),
}

impl IdentityVerifier {
    /// 按当前策略比对期望身份与声称身份。
    pub fn verify(&self, expected: &EndpointIdentity, claimed: &EndpointIdentity) -> bool {
        match self {
            IdentityVerifier::Strict => expected == claimed,
            IdentityVerifier::AcceptAny => true,
            IdentityVerifier::PinnedAuthority(authority) => claimed.authority() == authority,
        }
    }
}

/// 端点本地的客户端安全运行时策略。
///
/// # 契约说明（What）
/// - 可变的本地策略容器，随绑定一起进入配置阶段；绑定克隆时深拷贝，克隆后生命周期独立，
///   对克隆体的修改不得经由原绑定可见；
/// - 字段不参与结构识别：识别器只看策略形状，不看本地运行时参数。
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocalClientSettings {
    identity_verifier: IdentityVerifier,
    detect_replays: bool,
    max_clock_skew: Duration,
    timestamp_validity: Duration,
}

impl Default for LocalClientSettings {
    fn default() -> Self {
        Self {
            identity_verifier: IdentityVerifier::default(),
            detect_replays: true,
            max_clock_skew: Duration::from_secs(300),
            timestamp_validity: Duration::from_secs(300),
        }
    }
}

impl LocalClientSettings {
    /// 构造默认策略。
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取身份校验器。
    pub fn identity_verifier(&self) -> &IdentityVerifier {
        &self.identity_verifier
    }

    /// 替换身份校验器。
    pub fn set_identity_verifier(&mut self, verifier: IdentityVerifier) {
        self.identity_verifier = verifier;
    }

    /// 是否开启重放检测。
    pub fn detect_replays(&self) -> bool {
        self.detect_replays
    }

    /// 设置重放检测开关。
    pub fn set_detect_replays(&mut self, detect: bool) {
        self.detect_replays = detect;
    }

    /// 获取允许的最大时钟偏移。
    pub fn max_clock_skew(&self) -> Duration {
        self.max_clock_skew
    }

    /// 设置允许的最大时钟偏移。
    pub fn set_max_clock_skew(&mut self, skew: Duration) {
        self.max_clock_skew = skew;
    }

    /// 获取时间戳有效期。
    pub fn timestamp_validity(&self) -> Duration {
        self.timestamp_validity
    }

    /// 设置时间戳有效期。
    pub fn set_timestamp_validity(&mut self, validity: Duration) {
        self.timestamp_validity = validity;
    }
}
