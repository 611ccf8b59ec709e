//! # Servocal Store
//!
//! 标定数据的持久化与采集
//!
//! ## 模块
//!
//! - `format`: 标定文件的 JSON 结构与加载/保存
//! - `capture`: 由两个已知位姿的采样构建锚点表
//!
//! 核心转换逻辑不关心标定数据从哪里来；这一层负责把磁盘上的
//! 文件和标定流程的采样变成 [`servocal_table::CalibrationTable`]。

pub mod capture;
pub mod format;

// 重新导出常用类型
pub use capture::CapturedPose;
pub use format::{CalibrationFile, JointAnchors};

use servocal_table::CalibError;
use thiserror::Error;

/// 持久化层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 文件读写失败
    #[error("Calibration file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析或序列化失败
    #[error("Calibration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 标定数据不完整
    #[error(transparent)]
    Calib(#[from] CalibError),
}
