use alloc::sync::Arc;
use core::fmt;

/// 消息安全规范的主版本。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WsSecurity {
    /// WS-Security 1.0。
    V10,
    /// WS-Security 1.1。
    V11,
}

/// 信任协商规范的版本。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WsTrust {
    /// 2005 年 2 月版。
    Feb2005,
    /// 1.3 正式版。
    V13,
}

/// 安全策略断言规范的版本。
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WsSecurityPolicy {
    /// SecurityPolicy 1.1。
    V11,
    /// SecurityPolicy 1.2。
    V12,
}

/// 安全策略版本侧写：一次性标定适用的规范方言组合。
///
/// # 设计背景（Why）
/// - 同一绑定结构在不同规范组合下的线上语义不同，版本必须随绑定一起传递；
/// - 侧写创建后不可变，绑定克隆之间以 [`Arc`] 共享同一实例，结构识别器按值比较。
///
/// # 契约说明（What）
/// - 只能经由具名套件构造器获得，保证字段组合始终是业界实际存在的方言；
/// - 默认套件为 WS-Security 1.1 + Trust Feb2005 + Policy 1.1。
#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SecurityVersion {
    security: WsSecurity,
    trust: WsTrust,
    policy: WsSecurityPolicy,
}

impl SecurityVersion {
    /// WS-Security 1.0 + Trust Feb2005 + Policy 1.1 套件。
    pub fn wss10_trust_feb2005_policy11() -> Arc<Self> {
        Arc::new(Self {
            security: WsSecurity::V10,
            trust: WsTrust::Feb2005,
            policy: WsSecurityPolicy::V11,
        })
    }

    /// WS-Security 1.1 + Trust Feb2005 + Policy 1.1 套件。
    pub fn wss11_trust_feb2005_policy11() -> Arc<Self> {
        Arc::new(Self {
            security: WsSecurity::V11,
            trust: WsTrust::Feb2005,
            policy: WsSecurityPolicy::V11,
        })
    }

    /// WS-Security 1.1 + Trust 1.3 + Policy 1.2 套件。
    pub fn wss11_trust13_policy12() -> Arc<Self> {
        Arc::new(Self {
            security: WsSecurity::V11,
            trust: WsTrust::V13,
            policy: WsSecurityPolicy::V12,
        })
    }

    /// 默认套件。
    pub fn default_suite() -> Arc<Self> {
        Self::wss11_trust_feb2005_policy11()
    }

    /// 获取消息安全主版本。
    pub fn security(&self) -> WsSecurity {
        self.security
    }

    /// 获取信任协商版本。
    pub fn trust(&self) -> WsTrust {
        self.trust
    }

    /// 获取策略断言版本。
    pub fn policy(&self) -> WsSecurityPolicy {
        self.policy
    }
}

impl fmt::Display for SecurityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let security = match self.security {
            WsSecurity::V10 => "wss10",
            WsSecurity::V11 => "wss11",
        };
        let trust = match self.trust {
            WsTrust::Feb2005 => "trust-feb2005",
            WsTrust::V13 => "trust13",
        };
        let policy = match self.policy {
            WsSecurityPolicy::V11 => "policy11",
            WsSecurityPolicy::V12 => "policy12",
        };
        write!(f, "{security}+{trust}+{policy}")
    }
}
