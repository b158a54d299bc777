//! 公共类型（对外暴露）
use std::fmt;

/// 换行符类型
///
/// 注意：这里沿用历史口径——单独的 `0A` 归入 `Cr`，单独的 `0D` 归入 `Lf`，
/// 与通常的叫法正好相反；标签文本同样保持原样，勿“修正”。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndingStyle {
    /// 单独的 `0A`
    Cr,
    /// 单独的 `0D`
    Lf,
    /// `0D 0A`
    CrLf,
    /// 出现过不止一种
    Mixed,
    /// 尚未检测到任何行边界
    #[default]
    Undefined,
}

impl LineEndingStyle {
    /// 合并新检测到的类型：首次检测定型，之后出现不同类型即变为 Mixed（只宽化，不回退）
    pub fn widen(self, detected: LineEndingStyle) -> LineEndingStyle {
        match self {
            LineEndingStyle::Undefined => detected,
            current if current == detected => current,
            _ => LineEndingStyle::Mixed,
        }
    }

    /// 汇总输出中使用的标签
    pub fn label(self) -> &'static str {
        match self {
            LineEndingStyle::CrLf => "CRLF (0D 0A)",
            LineEndingStyle::Lf => "LF (0D)",
            LineEndingStyle::Cr => "CR (0A)",
            LineEndingStyle::Mixed => "Mixed types",
            LineEndingStyle::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for LineEndingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
