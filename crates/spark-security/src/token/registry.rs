use alloc::vec::Vec;
use core::fmt;

use super::requirement::TokenRequirement;

/// 端点侧令牌能力聚合结果。
///
/// # 契约说明（What）
/// - `client_authentication`：至少一条背书类需求可断言客户端身份；
/// - `client_windows_identity`：至少一条背书类需求可携带 Windows 身份；
/// - 二者均为跨需求的逻辑或，空输入得到全 `false`。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TokenCapabilities {
    pub client_authentication: bool,
    pub client_windows_identity: bool,
}

/// 按签名语义分类的令牌需求登记表。
///
/// # 设计背景（Why）
/// - 一个端点可同时声明多条令牌需求，但"仅被签名"“被签名加密”“背书”"被签名的背书"四种参与方式
///   的安全含义互不可替代，必须分类登记、独立计数，永不隐式合并；
/// - 登记表同时服务两个消费方：能力聚合只读背书两类，结构识别器按类别计数做精确匹配。
///
/// # 契约说明（What）
/// - 类别内保持插入顺序，允许重复条目；顺序对聚合无语义，对识别器也只参与计数而非排序比较；
/// - 登记表由所属绑定独占持有，绑定克隆时深拷贝全部四类。
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TokenRequirementRegistry {
    signed: Vec<TokenRequirement>,
    signed_encrypted: Vec<TokenRequirement>,
    endorsing: Vec<TokenRequirement>,
    signed_endorsing: Vec<TokenRequirement>,
}

impl TokenRequirementRegistry {
    /// 构造四类均为空的登记表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一条仅被消息签名覆盖的需求。
    pub fn push_signed(&mut self, requirement: TokenRequirement) {
        self.signed.push(requirement);
    }

    /// 登记一条被签名且加密的需求。
    pub fn push_signed_encrypted(&mut self, requirement: TokenRequirement) {
        self.signed_encrypted.push(requirement);
    }

    /// 登记一条背书需求（凭证须对消息签名以证明持有）。
    pub fn push_endorsing(&mut self, requirement: TokenRequirement) {
        self.endorsing.push(requirement);
    }

    /// 登记一条既被签名又参与背书的需求。
    pub fn push_signed_endorsing(&mut self, requirement: TokenRequirement) {
        self.signed_endorsing.push(requirement);
    }

    /// 获取仅签名类别。
    pub fn signed(&self) -> &[TokenRequirement] {
        &self.signed
    }

    /// 获取签名加密类别。
    pub fn signed_encrypted(&self) -> &[TokenRequirement] {
        &self.signed_encrypted
    }

    /// 获取背书类别。
    pub fn endorsing(&self) -> &[TokenRequirement] {
        &self.endorsing
    }

    /// 获取签名背书类别。
    pub fn signed_endorsing(&self) -> &[TokenRequirement] {
        &self.signed_endorsing
    }

    /// 四类是否全部为空。
    pub fn is_empty(&self) -> bool {
        self.signed.is_empty()
            && self.signed_encrypted.is_empty()
            && self.endorsing.is_empty()
            && self.signed_endorsing.is_empty()
    }

    /// 聚合端点侧令牌能力。
    ///
    /// # 语义要点（What & Why）
    /// - **只扫描背书两类**：仅签名或签名加密的凭证不对消息本身签名，无法构成持有证明，
    ///   因此不参与消息层客户端身份能力的判定；
    /// - 对背书与签名背书类别逐条做逻辑或；空类别得到全 `false`；
    /// - 纯函数，无错误路径。
    pub fn endorsing_capabilities(&self) -> TokenCapabilities {
        let mut capabilities = TokenCapabilities::default();
        for requirement in self.endorsing.iter().chain(self.signed_endorsing.iter()) {
            if requirement.supports_client_authentication() {
                capabilities.client_authentication = true;
            }
            if requirement.supports_client_windows_identity() {
                capabilities.client_windows_identity = true;
            }
        }
        capabilities
    }

    /// 将派生密钥开关应用到四类的全部需求。
    ///
    /// # 契约
    /// - 逐槽位以新值整体替换，保持单条需求的不可变语义；
    /// - 不支持派生密钥的变体（用户名）原样保留。
    pub fn set_key_derivation(&mut self, require: bool) {
        for category in [
            &mut self.signed,
            &mut self.signed_encrypted,
            &mut self.endorsing,
            &mut self.signed_endorsing,
        ] {
            for slot in category.iter_mut() {
                let updated = slot.clone().with_key_derivation(require);
                *slot = updated;
            }
        }
    }

    /// 检查全部支持派生密钥的需求是否均处于给定开关状态。
    pub fn is_set_key_derivation(&self, require: bool) -> bool {
        self.signed
            .iter()
            .chain(self.signed_encrypted.iter())
            .chain(self.endorsing.iter())
            .chain(self.signed_endorsing.iter())
            .filter(|requirement| requirement.supports_key_derivation())
            .all(|requirement| requirement.require_derived_keys() == require)
    }

    /// 背书两类中是否存在要求通道分用器的需求。
    pub fn requires_channel_demuxer(&self) -> bool {
        self.endorsing
            .iter()
            .chain(self.signed_endorsing.iter())
            .any(TokenRequirement::requires_channel_demuxer)
    }
}

impl fmt::Display for TokenRequirementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "signed: {}, signed-encrypted: {}, endorsing: {}, signed-endorsing: {}",
            self.signed.len(),
            self.signed_encrypted.len(),
            self.endorsing.len(),
            self.signed_endorsing.len()
        )
    }
}
