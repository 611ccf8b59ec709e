//! # Servocal Table
//!
//! 舵机标定表核心（无硬件依赖）
//!
//! ## 模块
//!
//! - `anchors`: 标定锚点集合（物理方向 / 逻辑方向）
//! - `resolve`: ±180° 缝合点消歧规则
//! - `segments`: 分段线性求值表
//! - `table`: 按关节聚合的标定表
//!
//! ## 坐标约定
//!
//! - **物理位置**: 编码器原始读数，一圈 4096 计数，对应 0°–360°
//! - **逻辑位置**: 机器人控制坐标系中的关节角，以零位为中心的
//!   有符号角度，单圈范围 [-180°, 180°]
//!
//! 每个关节有独立标定：物理零位不必与逻辑零位对齐，
//! 物理→逻辑映射的方向与比例也可以不同（如反向接线）。
//!
//! ## 域外回退
//!
//! 两个方向的求值在定义域之外都返回 0（而不是报错）。这是从旧实现
//! 继承的兼容行为：调用方会预先归一化输入，回退分支只在标定数据
//! 有问题时触发。触发时通过 `tracing::warn!` 上报，便于标定数据
//! 的维护者发现坏数据。

pub mod anchors;
pub mod resolve;
pub mod segments;
pub mod table;

// 重新导出常用类型
pub use anchors::{LogicalAnchors, PhysicalAnchors};
pub use resolve::select_limits;
pub use segments::SegmentTable;
pub use table::{CalibrationTable, JointCalibration};

use thiserror::Error;

/// 标定数据错误类型
#[derive(Error, Debug)]
pub enum CalibError {
    /// 锚点映射缺少必需的键
    #[error("Missing calibration anchor: {0}")]
    MissingAnchor(String),
}
