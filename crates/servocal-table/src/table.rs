//! 按关节聚合的标定表
//!
//! 每个关节持有两张方向相反的分段表。表一次性构建，之后只读；
//! 关节之间没有共享可变状态，可以跨线程并发使用。

use crate::anchors::{LogicalAnchors, PhysicalAnchors};
use crate::resolve::select_limits;
use crate::segments::SegmentTable;
use std::collections::HashMap;

/// 单个关节的双向标定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointCalibration {
    phys_to_log: SegmentTable,
    log_to_phys: SegmentTable,
}

impl JointCalibration {
    /// 由两组锚点构建
    ///
    /// 物理方向的每个象限先经过缝合点消歧（[`select_limits`]）；
    /// 逻辑方向直接取相邻锚点对——逻辑空间的不连续点被定义在 ±180，
    /// 恰好就是段边界，无需消歧。
    pub fn new(physical: &PhysicalAnchors, logical: &LogicalAnchors) -> Self {
        let pairs = physical.pairs();
        let phys_to_log = SegmentTable::new(
            0.0,
            [
                select_limits(pairs[0].0, pairs[0].1),
                select_limits(pairs[1].0, pairs[1].1),
                select_limits(pairs[2].0, pairs[2].1),
                select_limits(pairs[3].0, pairs[3].1),
            ],
        );
        let log_to_phys = SegmentTable::new(-180.0, logical.pairs());

        Self {
            phys_to_log,
            log_to_phys,
        }
    }

    /// 物理角度（0–360°）→ 逻辑角度
    #[inline]
    pub fn physical_to_logical(&self, degrees: f64) -> f64 {
        self.phys_to_log.eval(degrees)
    }

    /// 逻辑角度（-180–180°）→ 物理角度
    #[inline]
    pub fn logical_to_physical(&self, degrees: f64) -> f64 {
        self.log_to_phys.eval(degrees)
    }

    /// 物理→逻辑方向的已解析分段表
    #[inline]
    pub const fn physical_segments(&self) -> &SegmentTable {
        &self.phys_to_log
    }

    /// 逻辑→物理方向的分段表
    #[inline]
    pub const fn logical_segments(&self) -> &SegmentTable {
        &self.log_to_phys
    }
}

/// 全部关节的标定表
///
/// 以关节名为键。构建完成后只读，共享时不需要任何同步。
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    joints: HashMap<String, JointCalibration>,
}

impl CalibrationTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个关节的标定
    pub fn insert(&mut self, name: impl Into<String>, calibration: JointCalibration) {
        let name = name.into();
        tracing::debug!(joint = %name, "joint calibration registered");
        self.joints.insert(name, calibration);
    }

    /// 由 (名称, 物理锚点, 逻辑锚点) 序列构建
    pub fn from_anchors<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PhysicalAnchors, LogicalAnchors)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, physical, logical) in entries {
            table.insert(name, JointCalibration::new(&physical, &logical));
        }
        table
    }

    /// 按名称查找关节标定
    #[inline]
    pub fn joint(&self, name: &str) -> Option<&JointCalibration> {
        self.joints.get(name)
    }

    /// 关节数量
    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// 关节名称，按字典序
    pub fn joint_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.joints.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 遍历全部关节
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JointCalibration)> {
        self.joints.iter().map(|(name, calib)| (name.as_str(), calib))
    }
}
