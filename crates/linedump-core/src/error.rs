//! 错误类型
use std::io;
use std::path::PathBuf;

/// 运行期间可能出现的全部错误；均为终止性错误，不做重试
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// 未提供任何参数
    #[error("Usage: {program} [-L] [-n <count>] <file>")]
    Usage { program: String },
    /// `-n` 缺少取值或取值不是整数
    #[error("invalid value for -n: {0}")]
    Parse(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    /// 给出了多于一个文件
    #[error("expected exactly one file, got: {}", .0.join(" "))]
    AmbiguousArguments(Vec<String>),
    #[error("File path is empty")]
    EmptyPath,
    #[error("File {} doesn't exist", .0.display())]
    PathNotFound(PathBuf),
    #[error("{} is directory", .0.display())]
    IsDirectory(PathBuf),
    /// 校验通过后仍无法打开（例如权限不足）
    #[error("Failed to open file {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// 读写过程中的 I/O 错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DumpError {
    /// 进程退出码
    ///
    /// 打开文件失败沿用历史行为：只报错，不改变成功退出码。
    pub fn exit_code(&self) -> i32 {
        match self {
            DumpError::FileOpen { .. } => 0,
            _ => 1,
        }
    }
}
