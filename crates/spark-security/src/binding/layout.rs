use core::fmt;

use crate::Result;
use crate::error::SecurityError;

/// 安全相关消息头的排序策略，封闭枚举。
///
/// # 契约说明（What）
/// - 布局恒为四个已定义值之一；来自配置或线上的原始码须经 [`from_code`](Self::from_code)
///   守卫进入类型系统，越界码被拒绝且不产生任何部分写入；
/// - 默认值为 `Strict`。
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLayout {
    /// 严格排序：按引用先后依赖排列。
    #[default]
    Strict,
    /// 宽松排序。
    Lax,
    /// 宽松排序，时间戳置于首位。
    LaxTimestampFirst,
    /// 宽松排序，时间戳置于末位。
    LaxTimestampLast,
}

impl HeaderLayout {
    /// 布局的稳定原始码，供配置层与诊断转储使用。
    pub fn code(self) -> u32 {
        match self {
            HeaderLayout::Strict => 0,
            HeaderLayout::Lax => 1,
            HeaderLayout::LaxTimestampFirst => 2,
            HeaderLayout::LaxTimestampLast => 3,
        }
    }

    /// 从原始码还原布局。
    ///
    /// # 错误
    /// - 码值越界时返回 [`SecurityError::UndefinedHeaderLayout`]，调用方持有的旧值不受影响。
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(HeaderLayout::Strict),
            1 => Ok(HeaderLayout::Lax),
            2 => Ok(HeaderLayout::LaxTimestampFirst),
            3 => Ok(HeaderLayout::LaxTimestampLast),
            other => Err(SecurityError::UndefinedHeaderLayout { code: other }),
        }
    }
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeaderLayout::Strict => "strict",
            HeaderLayout::Lax => "lax",
            HeaderLayout::LaxTimestampFirst => "lax-timestamp-first",
            HeaderLayout::LaxTimestampLast => "lax-timestamp-last",
        })
    }
}
