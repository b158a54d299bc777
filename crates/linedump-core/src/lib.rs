//! 十六进制转储 + 换行符分类核心库
//!
//! 设计要点：
//! - 单遍、常数内存：逐字节读取，分类器只记忆“上一个字节是否为未结算的 0D”。
//! - `0D 0A` 跨读取边界拆开送入时，分类结果与一次送入完全一致。
//! - 输出布局（分行、截断）随字节流实时决定，不回看、不缓冲整文件。
//! - 换行符类型的命名沿用历史口径（单独 0A 记为 CR，单独 0D 记为 LF）。

mod classifier;
mod dump;
mod error;
mod format;
mod options;
mod types;
mod validate;

pub use classifier::LineClassifier;
pub use dump::{dump_file, dump_reader};
pub use error::DumpError;
pub use format::{FieldFormat, Radix};
pub use options::{DumpStats, RunConfig};
pub use types::LineEndingStyle;
pub use validate::validate_path;
