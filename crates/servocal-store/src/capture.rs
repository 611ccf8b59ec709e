//! 由采集位姿构建锚点表
//!
//! 标定流程只采集两个已知位姿（相邻象限，约 90° 间隔）：把关节摆到
//! 位姿上，记录编码器读数和该位姿对应的目标逻辑角。其余锚点由这
//! 两个采样沿 90° 网格线性外推得到。
//!
//! 编码器读数先吸附到最近的象限边界（1024 计数的整数倍），再换算
//! 成整数角度；物理方向的外推结果超出 [-180, 180] 时按 ±360 重新
//! 归一化，逻辑方向不做归一化。

use crate::format::{CalibrationFile, JointAnchors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 一圈编码器计数
const TICKS_PER_REV: i32 = 4096;

/// 相邻象限边界之间的计数间隔（4096 / 4）
const TICKS_PER_QUADRANT: i32 = 1024;

/// 标定流程中采集的单个位姿
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPose {
    /// 该位姿下的编码器读数
    pub ticks: i32,

    /// 该位姿对应的目标逻辑角（整数度）
    pub target: i32,
}

impl CapturedPose {
    /// 创建采样
    #[inline]
    pub const fn new(ticks: i32, target: i32) -> Self {
        Self { ticks, target }
    }
}

/// 吸附到最近的象限边界并折叠进一圈，返回整数物理角度
fn snap_to_quadrant_wrapped(ticks: i32) -> i32 {
    let wrapped = ticks.rem_euclid(TICKS_PER_REV);
    let snapped = ((wrapped as f64 / TICKS_PER_QUADRANT as f64).round() as i32
        * TICKS_PER_QUADRANT)
        .rem_euclid(TICKS_PER_REV);
    snapped * 360 / TICKS_PER_REV
}

/// 吸附到最近的象限边界（不折叠），返回整数物理角度
fn snap_to_quadrant(ticks: i32) -> i32 {
    let snapped = (ticks as f64 / TICKS_PER_QUADRANT as f64).round() as i32 * TICKS_PER_QUADRANT;
    snapped * 360 / TICKS_PER_REV
}

/// 物理方向外推值的重新归一化（与旧实现的取模语义一致）
fn renormalize(value: i32) -> i32 {
    if value < -180 {
        value.rem_euclid(360)
    } else if value > 180 {
        -((-value).rem_euclid(360))
    } else {
        value
    }
}

/// 物理方向锚点映射：物理象限边界键 → 逻辑角度值
///
/// 两个采样给出两个象限边界上的已知逻辑值，其余边界按每 90° 一个
/// 目标增量外推，超出 [-180, 180] 的结果回卷。
pub fn physical_anchor_map(first: CapturedPose, second: CapturedPose) -> BTreeMap<String, f64> {
    let first_deg = snap_to_quadrant_wrapped(first.ticks);
    let second_deg = snap_to_quadrant_wrapped(second.ticks);

    let mut map = BTreeMap::new();
    map.insert(first_deg.to_string(), first.target as f64);
    map.insert(second_deg.to_string(), second.target as f64);

    for quarter in 0..5 {
        let index = quarter * 90;
        if index == first_deg || index == second_deg {
            continue;
        }
        let value = if first_deg < second_deg {
            let offset = (index - first_deg).div_euclid(90) * (second.target - first.target);
            first.target + offset
        } else {
            let offset = (index - second_deg).div_euclid(90) * (first.target - second.target);
            second.target + offset
        };
        map.insert(index.to_string(), renormalize(value) as f64);
    }

    map
}

/// 逻辑方向锚点映射：逻辑象限边界键 → 物理角度值
///
/// 网格为 -180/-90/0/90/180；外推不做归一化（物理角度允许越界，
/// 由加载后的求值域检查兜底）。
pub fn logical_anchor_map(first: CapturedPose, second: CapturedPose) -> BTreeMap<String, f64> {
    let first_deg = snap_to_quadrant(first.ticks);
    let second_deg = snap_to_quadrant(second.ticks);

    let mut map = BTreeMap::new();
    map.insert(first.target.to_string(), first_deg as f64);
    map.insert(second.target.to_string(), second_deg as f64);

    for quarter in 0..5 {
        let index = quarter * 90 - 180;
        if index == first.target || index == second.target {
            continue;
        }
        let value = if first.target < second.target {
            let offset = (index - first.target).div_euclid(90) * (second_deg - first_deg);
            first_deg + offset
        } else {
            let offset = (index - second.target).div_euclid(90) * (first_deg - second_deg);
            second_deg + offset
        };
        map.insert(index.to_string(), value as f64);
    }

    map
}

/// 单个关节的完整锚点记录
pub fn joint_anchors(first: CapturedPose, second: CapturedPose) -> JointAnchors {
    JointAnchors {
        physical: physical_anchor_map(first, second),
        logical: logical_anchor_map(first, second),
    }
}

/// 为一组关节构建标定文件
pub fn build_calibration_file<I, S>(entries: I) -> CalibrationFile
where
    I: IntoIterator<Item = (S, CapturedPose, CapturedPose)>,
    S: Into<String>,
{
    let mut file = CalibrationFile::default();
    for (name, first, second) in entries {
        let name = name.into();
        tracing::debug!(joint = %name, "building anchors from captured poses");
        file.insert(name, joint_anchors(first, second));
    }
    file
}
