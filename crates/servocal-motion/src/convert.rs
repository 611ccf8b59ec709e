//! 逐样本转换
//!
//! 编码器计数 ↔ 角度 ↔ 逻辑角。计数与角度的换算是固定比例
//! （一圈 4096 计数 = 360°）；角度与逻辑角的换算查每个关节的
//! 标定表。

use crate::ConversionError;
use servocal_table::{CalibrationTable, JointCalibration};

/// 一圈编码器计数（12 位磁编码器）
pub const TICKS_PER_REV: i32 = 4096;

/// 每计数对应的角度：360 / 4096 = 0.087890625°
pub const DEG_PER_TICK: f64 = 360.0 / TICKS_PER_REV as f64;

/// 转换入口的两种命名变体
///
/// 用枚举代替布尔参数，让非法组合无法表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// 先把输入折叠进单圈窗口再查表：
    /// 物理方向折叠进 [0°, 360°)，逻辑方向折叠进 [-180°, 180°)
    Ranged,
    /// 原样透传。供多圈跟踪的内部路径使用；
    /// 域外输入会触发标定表的回退行为
    Unwrapped,
}

/// 角度折叠进 [0, 360)
#[inline]
pub fn wrap_degrees_360(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// 角度折叠进 [-180, 180)
#[inline]
pub fn wrap_degrees_180(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// 逐样本转换服务
///
/// 持有对只读标定表的引用；自身可 `Copy`，跨线程传递零成本。
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a CalibrationTable,
}

impl<'a> Converter<'a> {
    /// 基于已构建的标定表创建转换服务
    #[inline]
    pub const fn new(table: &'a CalibrationTable) -> Self {
        Self { table }
    }

    /// 底层标定表
    #[inline]
    pub const fn table(&self) -> &'a CalibrationTable {
        self.table
    }

    pub(crate) fn joint(&self, name: &str) -> Result<&'a JointCalibration, ConversionError> {
        self.table
            .joint(name)
            .ok_or_else(|| ConversionError::UnknownJoint(name.to_string()))
    }

    /// 编码器计数 → 逻辑角度
    ///
    /// `ticks` 按 360/4096 换算为角度后查表。[`Conversion::Ranged`]
    /// 先把角度折叠进 [0°, 360°)；[`Conversion::Unwrapped`] 原样查表。
    ///
    /// # 错误
    ///
    /// 关节不存在时返回 [`ConversionError::UnknownJoint`]。
    pub fn physical_to_logical(
        &self,
        joint: &str,
        ticks: i32,
        conversion: Conversion,
    ) -> Result<f64, ConversionError> {
        let calibration = self.joint(joint)?;
        let degrees = ticks as f64 * DEG_PER_TICK;
        let degrees = match conversion {
            Conversion::Ranged => wrap_degrees_360(degrees),
            Conversion::Unwrapped => degrees,
        };
        Ok(calibration.physical_to_logical(degrees))
    }

    /// 逻辑角度 → 编码器计数
    ///
    /// [`Conversion::Ranged`] 先把输入折叠进 [-180°, 180°)。查表得到
    /// 物理角度后按 4096/360 换算为计数并四舍五入。
    ///
    /// # 错误
    ///
    /// 关节不存在时返回 [`ConversionError::UnknownJoint`]。
    pub fn logical_to_physical(
        &self,
        joint: &str,
        degrees: f64,
        conversion: Conversion,
    ) -> Result<i32, ConversionError> {
        let calibration = self.joint(joint)?;
        let degrees = match conversion {
            Conversion::Ranged => wrap_degrees_180(degrees),
            Conversion::Unwrapped => degrees,
        };
        let physical = calibration.logical_to_physical(degrees);
        Ok((physical / DEG_PER_TICK).round() as i32)
    }
}
