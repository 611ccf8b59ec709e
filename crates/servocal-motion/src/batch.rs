//! 批量切片转换
//!
//! 对逐样本函数的机械映射：样本之间没有数据依赖，调用方可以按需
//! 自行并行化。入口处先做形状校验，再逐元素转换；任何一个样本
//! 失败都会让整批失败，不做静默截断。
//!
//! 批量输入里的值用 `Option` 表示"可能没有读数"：总线读取失败的
//! 舵机会留下空位，这里把空位当作错误上报而不是产出垃圾角度。

use crate::convert::{Conversion, Converter};
use crate::ConversionError;

fn check_shape(joints: usize, values: usize) -> Result<(), ConversionError> {
    if joints != values {
        return Err(ConversionError::ShapeMismatch { joints, values });
    }
    Ok(())
}

fn require<T: Copy>(value: Option<T>, what: &str) -> Result<T, ConversionError> {
    value.ok_or_else(|| ConversionError::InvalidInput(format!("{what} cannot contain missing values")))
}

impl<'a> Converter<'a> {
    /// 批量：编码器计数 → 单圈逻辑角
    ///
    /// # 错误
    ///
    /// - 长度不一致 → [`ConversionError::ShapeMismatch`]
    /// - 任一读数缺失 → [`ConversionError::InvalidInput`]
    /// - 任一关节未知 → [`ConversionError::UnknownJoint`]
    pub fn physical_to_logical_batch(
        &self,
        joints: &[&str],
        ticks: &[Option<i32>],
    ) -> Result<Vec<f64>, ConversionError> {
        check_shape(joints.len(), ticks.len())?;
        joints
            .iter()
            .zip(ticks)
            .map(|(joint, sample)| {
                let ticks = require(*sample, "physical position")?;
                self.physical_to_logical(joint, ticks, Conversion::Ranged)
            })
            .collect()
    }

    /// 批量：逻辑角 → 编码器计数
    pub fn logical_to_physical_batch(
        &self,
        joints: &[&str],
        degrees: &[Option<f64>],
    ) -> Result<Vec<i32>, ConversionError> {
        check_shape(joints.len(), degrees.len())?;
        joints
            .iter()
            .zip(degrees)
            .map(|(joint, sample)| {
                let degrees = require(*sample, "logical position")?;
                self.logical_to_physical(joint, degrees, Conversion::Ranged)
            })
            .collect()
    }

    /// 批量：编码器计数 → 未折叠逻辑角
    pub fn to_unranged_logical_batch(
        &self,
        joints: &[&str],
        ticks: &[Option<i32>],
    ) -> Result<Vec<f64>, ConversionError> {
        check_shape(joints.len(), ticks.len())?;
        joints
            .iter()
            .zip(ticks)
            .map(|(joint, sample)| {
                let ticks = require(*sample, "physical position")?;
                self.to_unranged_logical(joint, ticks)
            })
            .collect()
    }

    /// 批量：保持圈数的移动目标
    ///
    /// `current_ticks` 与 `target_degrees` 都必须与 `joints` 等长。
    pub fn move_to_logical_with_offset_batch(
        &self,
        joints: &[&str],
        current_ticks: &[Option<i32>],
        target_degrees: &[Option<f64>],
    ) -> Result<Vec<i32>, ConversionError> {
        check_shape(joints.len(), current_ticks.len())?;
        check_shape(joints.len(), target_degrees.len())?;
        joints
            .iter()
            .zip(current_ticks.iter().zip(target_degrees))
            .map(|(joint, (current, target))| {
                let current = require(*current, "physical position")?;
                let target = require(*target, "logical position")?;
                self.move_to_logical_with_offset(joint, current, target)
            })
            .collect()
    }
}
