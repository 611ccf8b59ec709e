//! 标定锚点集合
//!
//! 每个关节的标定由两组锚点给出：
//!
//! - **物理方向**: 在物理 0°/90°/180°/270°/360° 处记录的逻辑角度值。
//!   0° 与 360° 指向同一物理位置，360° 锚点的存在只是为了闭合第四象限。
//! - **逻辑方向**: 在逻辑 -180°/-90°/0°/90°/180° 处记录的物理角度值。
//!
//! 标定输入中锚点值为整数；运行期统一持有为 `f64`。

use crate::CalibError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 物理方向锚点：物理象限边界 → 逻辑角度值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalAnchors {
    values: [f64; 5],
}

impl PhysicalAnchors {
    /// 锚点键，按物理角度升序
    pub const KEYS: [&'static str; 5] = ["0", "90", "180", "270", "360"];

    /// 按 [`Self::KEYS`] 顺序创建
    #[inline]
    pub const fn new(values: [f64; 5]) -> Self {
        Self { values }
    }

    /// 从字符串键映射构建（标定文件的原始形态）
    ///
    /// # 错误
    ///
    /// 缺少任一必需键时返回 [`CalibError::MissingAnchor`]。
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self, CalibError> {
        let mut values = [0.0; 5];
        for (slot, key) in values.iter_mut().zip(Self::KEYS) {
            *slot = *map
                .get(key)
                .ok_or_else(|| CalibError::MissingAnchor(key.to_string()))?;
        }
        Ok(Self { values })
    }

    /// 按 [`Self::KEYS`] 顺序返回锚点值
    #[inline]
    pub const fn values(&self) -> [f64; 5] {
        self.values
    }

    /// 相邻象限边界对，按象限升序：[0,90) [90,180) [180,270) [270,360]
    #[inline]
    pub fn pairs(&self) -> [(f64, f64); 4] {
        let v = self.values;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[4])]
    }
}

/// 逻辑方向锚点：逻辑象限边界 → 物理角度值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalAnchors {
    values: [f64; 5],
}

impl LogicalAnchors {
    /// 锚点键，按逻辑角度升序
    pub const KEYS: [&'static str; 5] = ["-180", "-90", "0", "90", "180"];

    /// 按 [`Self::KEYS`] 顺序创建
    #[inline]
    pub const fn new(values: [f64; 5]) -> Self {
        Self { values }
    }

    /// 从字符串键映射构建
    ///
    /// # 错误
    ///
    /// 缺少任一必需键时返回 [`CalibError::MissingAnchor`]。
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self, CalibError> {
        let mut values = [0.0; 5];
        for (slot, key) in values.iter_mut().zip(Self::KEYS) {
            *slot = *map
                .get(key)
                .ok_or_else(|| CalibError::MissingAnchor(key.to_string()))?;
        }
        Ok(Self { values })
    }

    /// 按 [`Self::KEYS`] 顺序返回锚点值
    #[inline]
    pub const fn values(&self) -> [f64; 5] {
        self.values
    }

    /// 相邻象限边界对：[-180,-90) [-90,0) [0,90) [90,180]
    #[inline]
    pub fn pairs(&self) -> [(f64, f64); 4] {
        let v = self.values;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[4])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_physical_from_map() {
        let map = map_of(&[
            ("0", 0.0),
            ("90", 90.0),
            ("180", 180.0),
            ("270", -90.0),
            ("360", 0.0),
        ]);
        let anchors = PhysicalAnchors::from_map(&map).unwrap();
        assert_eq!(anchors.values(), [0.0, 90.0, 180.0, -90.0, 0.0]);
    }

    #[test]
    fn test_physical_from_map_missing_key() {
        // 缺少 "270"
        let map = map_of(&[("0", 0.0), ("90", 90.0), ("180", 180.0), ("360", 0.0)]);
        let err = PhysicalAnchors::from_map(&map).unwrap_err();
        match err {
            CalibError::MissingAnchor(key) => assert_eq!(key, "270"),
        }
    }

    #[test]
    fn test_logical_from_map() {
        let map = map_of(&[
            ("-180", 180.0),
            ("-90", 270.0),
            ("0", 0.0),
            ("90", 90.0),
            ("180", 180.0),
        ]);
        let anchors = LogicalAnchors::from_map(&map).unwrap();
        assert_eq!(anchors.values(), [180.0, 270.0, 0.0, 90.0, 180.0]);
    }

    #[test]
    fn test_logical_from_map_missing_key() {
        let map = map_of(&[("-90", 270.0), ("0", 0.0), ("90", 90.0), ("180", 180.0)]);
        let err = LogicalAnchors::from_map(&map).unwrap_err();
        match err {
            CalibError::MissingAnchor(key) => assert_eq!(key, "-180"),
        }
    }

    #[test]
    fn test_pairs_order() {
        let anchors = PhysicalAnchors::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(
            anchors.pairs(),
            [(1.0, 2.0), (2.0, 3.0), (3.0, 4.0), (4.0, 5.0)]
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let anchors = PhysicalAnchors::new([0.0, 90.0, 180.0, -90.0, 0.0]);
        let json = serde_json::to_string(&anchors).unwrap();
        let back: PhysicalAnchors = serde_json::from_str(&json).unwrap();
        assert_eq!(anchors, back);
    }
}
