use core::fmt;

use super::protection::ProtectionLevel;

/// 安全能力集合，描述一层安全机制对外声明的五项能力。
///
/// # 设计背景（Why）
/// - 元数据导出与运行时都需要回答"这套组合到底提供了什么"：客户端认证、服务端认证、
///   Windows 身份传递，以及请求/应答两个方向的保护强度；
/// - 建模为纯值聚合，合并运算不触碰任何共享状态，便于在契约测试中逐条核对代数律。
///
/// # 契约说明（What）
/// - 字段公开：本类型是跨层交换的值对象，调用方按字面构造与读取；
/// - [`merge_with_inner`](Self::merge_with_inner) 是唯一的合并入口，规则刻意不对称（见方法文档）。
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize,
)]
pub struct SecurityCapabilities {
    pub supports_client_authentication: bool,
    pub supports_server_authentication: bool,
    pub supports_client_windows_identity: bool,
    pub request_protection_level: ProtectionLevel,
    pub response_protection_level: ProtectionLevel,
}

impl SecurityCapabilities {
    /// 按字段构造能力集合。
    pub fn new(
        supports_client_authentication: bool,
        supports_server_authentication: bool,
        supports_client_windows_identity: bool,
        request_protection_level: ProtectionLevel,
        response_protection_level: ProtectionLevel,
    ) -> Self {
        Self {
            supports_client_authentication,
            supports_server_authentication,
            supports_client_windows_identity,
            request_protection_level,
            response_protection_level,
        }
    }

    /// 与下层（传输侧）声明的能力合并。
    ///
    /// # 语义要点（What & Why）
    /// - `inner` 缺席时本层声明原样生效，合并满足单位元律；
    /// - **客户端侧标志只取本层**：消息层客户端认证（及 Windows 身份）是本层独占职责，
    ///   传输层的双向 TLS 等机制属于另一维度，不得混入该标志；
    /// - `supports_server_authentication` 取逻辑或：任一层能认证服务端即可；
    /// - 两个方向的保护级别取较强者：保护强度单调，层间叠加不会减弱。
    pub fn merge_with_inner(&self, inner: Option<&SecurityCapabilities>) -> SecurityCapabilities {
        let Some(inner) = inner else {
            return *self;
        };
        SecurityCapabilities {
            supports_client_authentication: self.supports_client_authentication,
            supports_client_windows_identity: self.supports_client_windows_identity,
            supports_server_authentication: self.supports_server_authentication
                || inner.supports_server_authentication,
            request_protection_level: self
                .request_protection_level
                .stronger(inner.request_protection_level),
            response_protection_level: self
                .response_protection_level
                .stronger(inner.response_protection_level),
        }
    }
}

impl fmt::Display for SecurityCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client-auth: {}, server-auth: {}, windows-identity: {}, request: {}, response: {}",
            self.supports_client_authentication,
            self.supports_server_authentication,
            self.supports_client_windows_identity,
            self.request_protection_level,
            self.response_protection_level
        )
    }
}
