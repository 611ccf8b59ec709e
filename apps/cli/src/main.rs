//! # Servocal CLI
//!
//! 标定表的命令行工具：检查标定文件、运行单次转换、由采集位姿
//! 生成标定文件。
//!
//! ```bash
//! # 检查标定文件
//! servocal-cli --calibration calibration.json inspect
//!
//! # 编码器计数 → 逻辑角
//! servocal-cli --calibration calibration.json to-logical --joint shoulder_pan --ticks 2048
//!
//! # 多圈连续角与保持圈数的移动目标
//! servocal-cli --calibration calibration.json unwrap --joint shoulder_pan --ticks 6144
//! servocal-cli --calibration calibration.json move --joint shoulder_pan --ticks 6144 --target 90
//!
//! # 由采集位姿生成标定文件
//! servocal-cli build --poses poses.json --output calibration.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Servocal CLI - 舵机标定与位置转换工具
#[derive(Parser, Debug)]
#[command(name = "servocal-cli")]
#[command(about = "Command-line interface for servocal calibration tables", long_about = None)]
#[command(version)]
struct Cli {
    /// 标定文件路径（build 命令不需要）
    #[arg(short, long, global = true)]
    calibration: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 显示标定表摘要
    Inspect,

    /// 编码器计数 → 逻辑角
    ToLogical {
        /// 关节名
        #[arg(short, long)]
        joint: String,

        /// 编码器计数
        #[arg(short, long)]
        ticks: i32,

        /// 不折叠进单圈窗口（原样透传）
        #[arg(long)]
        unwrapped: bool,
    },

    /// 逻辑角 → 编码器计数
    ToPhysical {
        /// 关节名
        #[arg(short, long)]
        joint: String,

        /// 逻辑角（度）
        #[arg(short, long)]
        degrees: f64,

        /// 不折叠进单圈窗口（原样透传）
        #[arg(long)]
        unwrapped: bool,
    },

    /// 编码器计数 → 多圈连续逻辑角
    Unwrap {
        /// 关节名
        #[arg(short, long)]
        joint: String,

        /// 编码器计数（可超出单圈）
        #[arg(short, long)]
        ticks: i32,
    },

    /// 计算保持圈数的移动目标
    Move {
        /// 关节名
        #[arg(short, long)]
        joint: String,

        /// 当前编码器计数
        #[arg(short, long)]
        ticks: i32,

        /// 目标逻辑角（度）
        #[arg(long)]
        target: f64,
    },

    /// 由采集位姿生成标定文件
    Build {
        /// 采集位姿 JSON 文件
        #[arg(short, long)]
        poses: PathBuf,

        /// 输出标定文件路径
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("servocal_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect => commands::inspect(cli.calibration.as_deref()),
        Commands::ToLogical {
            joint,
            ticks,
            unwrapped,
        } => commands::to_logical(cli.calibration.as_deref(), &joint, ticks, unwrapped),
        Commands::ToPhysical {
            joint,
            degrees,
            unwrapped,
        } => commands::to_physical(cli.calibration.as_deref(), &joint, degrees, unwrapped),
        Commands::Unwrap { joint, ticks } => {
            commands::unwrap(cli.calibration.as_deref(), &joint, ticks)
        }
        Commands::Move {
            joint,
            ticks,
            target,
        } => commands::move_to(cli.calibration.as_deref(), &joint, ticks, target),
        Commands::Build { poses, output } => commands::build(&poses, &output),
    }
}
