use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use linedump_core::{dump_file, validate_path, DumpError, RunConfig};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "linedump", version, about = "十六进制转储并识别换行符类型")]
struct Cli {
    /// 按逻辑行分行输出（默认每行 16 字节）
    #[arg(short = 'L')]
    line_oriented: bool,

    /// 最多输出的行数；<= 0 表示不限制
    #[arg(short = 'n', value_name = "COUNT", allow_negative_numbers = true)]
    max_lines: Option<i64>,

    /// 输入文件（恰好一个）
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();

    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            let code = e.downcast_ref::<DumpError>().map(DumpError::exit_code).unwrap_or(1);
            debug!(error = %e, code, "run failed");
            ExitCode::from(code as u8)
        }
    }
}

fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = resolve_config(args)?;
    validate_path(&config.file_path)?;
    info!(path = ?config.file_path, line_oriented = config.line_oriented, "starting dump");

    // stdout 加锁并缓冲，整个运行期间只追加写入
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let stats = dump_file(&config, &mut out)?;
    out.flush().context("flush stdout")?;

    info!(length = stats.length, lines = stats.lines, truncated = stats.truncated, "dump finished");
    Ok(())
}

/// 将进程参数解析为运行配置
/// - 无任何参数：Usage
/// - `-n` 缺值/非整数：Parse
/// - 未知 `-x`：UnknownFlag
/// - 多于一个文件：AmbiguousArguments
fn resolve_config<I, T>(args: I) -> Result<RunConfig, DumpError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "linedump".to_string());
    if args.len() <= 1 {
        return Err(DumpError::Usage { program });
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // 帮助/版本信息照常打印并以 0 退出
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::UnknownArgument => return Err(DumpError::UnknownFlag(invalid_arg(&e))),
            _ => return Err(DumpError::Parse(first_line(&e))),
        },
    };

    if cli.files.len() > 1 {
        let names = cli.files.iter().map(|p| p.display().to_string()).collect();
        return Err(DumpError::AmbiguousArguments(names));
    }

    Ok(RunConfig {
        // 未给出文件时留空，交给路径校验报 EmptyPath
        file_path: cli.files.into_iter().next().unwrap_or_default(),
        line_oriented: cli.line_oriented,
        max_lines: cli.max_lines,
    })
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免混入 stdout 上的转储内容；默认只输出 warn 及以上
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 取出 clap 报告的未知参数
fn invalid_arg(e: &clap::Error) -> String {
    match e.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(s)) => s.clone(),
        _ => first_line(e),
    }
}

/// clap 错误信息只保留首行
fn first_line(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_string()
}
