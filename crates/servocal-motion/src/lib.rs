//! # Servocal Motion
//!
//! 编码器计数与逻辑关节角之间的转换服务
//!
//! ## 模块
//!
//! - `convert`: 逐样本转换（单圈折叠 / 原样透传两种命名变体）
//! - `continuity`: 多圈连续位置与保持圈数的移动目标
//! - `batch`: 批量切片转换（逐样本函数的机械映射）
//!
//! ## 并发
//!
//! 全部操作都是对只读 [`servocal_table::CalibrationTable`] 的纯函数，
//! 没有锁、没有内部可变性；同一张表可以被任意多个线程同时使用。
//!
//! ## 示例
//!
//! ```rust
//! use servocal_motion::{Conversion, Converter};
//! use servocal_table::{CalibrationTable, LogicalAnchors, PhysicalAnchors};
//!
//! let table = CalibrationTable::from_anchors([(
//!     "shoulder_pan",
//!     PhysicalAnchors::new([-180.0, -90.0, 0.0, 90.0, 180.0]),
//!     LogicalAnchors::new([0.0, 90.0, 180.0, 270.0, 360.0]),
//! )]);
//! let converter = Converter::new(&table);
//!
//! // 编码器中点（2048 计数）是该关节的逻辑零位
//! let logical = converter
//!     .physical_to_logical("shoulder_pan", 2048, Conversion::Ranged)
//!     .unwrap();
//! assert!(logical.abs() < 1e-9);
//! ```

pub mod batch;
pub mod continuity;
pub mod convert;

// 重新导出常用类型
pub use convert::{Conversion, Converter, DEG_PER_TICK, TICKS_PER_REV};

use thiserror::Error;

/// 转换服务错误类型
#[derive(Error, Debug)]
pub enum ConversionError {
    /// 标定表中不存在该关节
    #[error("Unknown joint: {0}")]
    UnknownJoint(String),

    /// 样本值缺失（批量输入中的空读数）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 批量输入的关节数与样本数不一致
    #[error("Shape mismatch: {joints} joints vs {values} values")]
    ShapeMismatch { joints: usize, values: usize },
}
