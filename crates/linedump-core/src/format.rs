//! 输出格式化
//!
//! 宽度、填充字符与进制都放在显式的 `FieldFormat` 上下文中，由纯函数渲染，
//! 不依赖任何全局/流上的格式状态。
use std::io::{self, Write};

use crate::options::DumpStats;

/// 每行字节数（固定宽度模式）
pub const ROW_WIDTH: u64 = 16;

/// 数值进制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    LowerHex,
}

/// 单个字段的格式上下文（右对齐）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFormat {
    pub width: usize,
    pub fill: char,
    pub radix: Radix,
}

/// 行首偏移：8 位宽，空格填充，十进制
pub const OFFSET: FieldFormat = FieldFormat { width: 8, fill: ' ', radix: Radix::Decimal };
/// 字节值：2 位宽，补零，小写十六进制
pub const BYTE: FieldFormat = FieldFormat { width: 2, fill: '0', radix: Radix::LowerHex };
/// 表头列号，与字节值同格式
pub const COLUMN: FieldFormat = BYTE;
/// 表头标签：9 位宽，空格填充
pub const LABEL: FieldFormat = FieldFormat { width: 9, fill: ' ', radix: Radix::Decimal };

impl FieldFormat {
    /// 渲染数值
    pub fn render(&self, value: u64) -> String {
        let digits = match self.radix {
            Radix::Decimal => value.to_string(),
            Radix::LowerHex => format!("{value:x}"),
        };
        self.pad(&digits)
    }

    /// 按宽度左侧填充（超出宽度时原样返回）
    pub fn pad(&self, text: &str) -> String {
        let len = text.chars().count();
        let mut s = String::with_capacity(self.width.max(len));
        for _ in len..self.width {
            s.push(self.fill);
        }
        s.push_str(text);
        s
    }
}

/// 表头行（不含换行）："   Index 01 02 … 10 "
pub fn header_line() -> String {
    let mut s = LABEL.pad("Index ");
    for col in 1..=ROW_WIDTH {
        s.push_str(&COLUMN.render(col));
        s.push(' ');
    }
    s
}

/// 行首（偏移 + 空格）
pub fn row_prefix(offset: u64) -> String {
    let mut s = OFFSET.render(offset);
    s.push(' ');
    s
}

/// 单个字节（十六进制 + 空格）
pub fn byte_cell(byte: u8) -> String {
    let mut s = BYTE.render(u64::from(byte));
    s.push(' ');
    s
}

/// 写出汇总块（前置一个空行）
pub fn write_summary(out: &mut dyn Write, stats: &DumpStats) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Length: {}", stats.length)?;
    writeln!(out, "Lines: {}", stats.lines)?;
    writeln!(out, "Type of line separator: {}", stats.style)?;
    Ok(())
}
