//! 运行配置与统计信息（模块）
use std::path::PathBuf;

use crate::types::LineEndingStyle;

/// 运行配置（整个运行期间不可变）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// 待转储的文件路径
    pub file_path: PathBuf,
    /// 按逻辑行分行输出（否则固定 16 字节一行）
    pub line_oriented: bool,
    /// 截断上限；None 或 <= 0 表示不截断
    pub max_lines: Option<i64>,
}

impl RunConfig {
    /// 生效的截断上限（仅正数有效）
    pub fn line_limit(&self) -> Option<u64> {
        self.max_lines.filter(|&n| n > 0).map(|n| n as u64)
    }
}

/// 转储统计信息（便于 CLI 打印/测试断言）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpStats {
    /// 已消费的字节数
    pub length: u64,
    /// 逻辑行数（从 1 开始计）
    pub lines: u64,
    /// 换行符分类
    pub style: LineEndingStyle,
    /// 是否因上限提前停止
    pub truncated: bool,
}
