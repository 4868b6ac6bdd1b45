use core::fmt;

/// 消息部件要求的密码学处理强度，全序枚举。
///
/// # 设计依据（Why）
/// - 保护级别天然单调：`None < Sign < SignAndEncrypt`，层间合并取较强者即可，
///   无需额外的兼容矩阵；
/// - 派生 `Ord` 直接承载该全序，[`stronger`](Self::stronger) 只是语义化别名。
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd,
    serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionLevel {
    /// 不作密码学处理。
    #[default]
    None,
    /// 仅签名。
    Sign,
    /// 签名并加密。
    SignAndEncrypt,
}

impl ProtectionLevel {
    /// 返回两级别中较强的一个。
    ///
    /// # 契约
    /// - 满足交换律与幂等律：`stronger(x, x) == x`，`stronger(x, y) == stronger(y, x)`。
    pub fn stronger(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProtectionLevel::None => "none",
            ProtectionLevel::Sign => "sign",
            ProtectionLevel::SignAndEncrypt => "sign-and-encrypt",
        })
    }
}
