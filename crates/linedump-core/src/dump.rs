//! 转储主流程：逐字节读取 → 分类 → 分行/截断 → 输出
use std::fs::File;
use std::io::{BufReader, Read, Write};

use tracing::debug;

use crate::classifier::LineClassifier;
use crate::error::DumpError;
use crate::format::{byte_cell, header_line, row_prefix, write_summary, ROW_WIDTH};
use crate::options::{DumpStats, RunConfig};

/// 运行计数器
#[derive(Debug)]
struct RunCounters {
    /// 已消费字节数
    byte_index: u64,
    /// 逻辑行数；文件从第 1 行“内部”开始
    line_count: u64,
}

/// 打开 `config.file_path` 并转储到 `out`
/// 打开失败返回 `DumpError::FileOpen`（退出码见 `DumpError::exit_code`）
pub fn dump_file(config: &RunConfig, out: &mut dyn Write) -> Result<DumpStats, DumpError> {
    let file = File::open(&config.file_path)
        .map_err(|source| DumpError::FileOpen { path: config.file_path.clone(), source })?;
    debug!(path = ?config.file_path, "opened input");
    dump_reader(file, out, config)
}

/// 从任意字节源单遍转储
///
/// 每次取一个字节；流结束时结束标记仍会送入分类器一次（用于结算末尾的 `0D`），
/// 但不开新行、不输出十六进制值、也不计入长度。
pub fn dump_reader<R: Read>(reader: R, out: &mut dyn Write, config: &RunConfig) -> Result<DumpStats, DumpError> {
    let mut bytes = BufReader::new(reader).bytes();
    let mut classifier = LineClassifier::new();
    let mut counters = RunCounters { byte_index: 0, line_count: 1 };
    let limit = config.line_limit();
    debug!(line_oriented = config.line_oriented, ?limit, "dump started");

    if !config.line_oriented {
        writeln!(out, "{}", header_line())?;
    }

    let mut row_open = false;
    let mut closed_prev = 0u64;
    let mut truncated = false;

    loop {
        let byte = match bytes.next().transpose()? {
            Some(b) => b,
            None => {
                // 结束探针
                classifier.finish();
                counters.line_count += classifier.acquire_and_reset_closed_count();
                break;
            }
        };

        // 先决定是否另起一行
        let new_row = if config.line_oriented {
            counters.byte_index == 0 || closed_prev > 0
        } else {
            counters.byte_index % ROW_WIDTH == 0
        };
        if new_row {
            if row_open { writeln!(out)?; }
            write!(out, "{}", row_prefix(counters.byte_index))?;
            row_open = true;
        }
        write!(out, "{}", byte_cell(byte))?;

        classifier.handle(byte);
        closed_prev = classifier.acquire_and_reset_closed_count();
        counters.line_count += closed_prev;
        counters.byte_index += 1;

        if let Some(max) = limit {
            let reached = if config.line_oriented {
                counters.line_count > max
            } else {
                max <= counters.byte_index / ROW_WIDTH
            };
            if reached {
                debug!(byte_index = counters.byte_index, line_count = counters.line_count, "limit reached");
                truncated = true;
                break;
            }
        }
    }

    if row_open { writeln!(out)?; }

    let stats = DumpStats {
        length: counters.byte_index,
        lines: counters.line_count,
        style: classifier.style(),
        truncated,
    };
    write_summary(out, &stats)?;
    debug!(length = stats.length, lines = stats.lines, style = %stats.style, "dump finished");
    Ok(stats)
}
