//! 标定文件格式
//!
//! 每个关节两组字符串键锚点映射：物理方向键为 `"0".."360"`，
//! 逻辑方向键为 `"-180".."180"`。值在文件中是整数角度，加载后
//! 统一按 `f64` 处理。
//!
//! ```json
//! {
//!   "joints": {
//!     "shoulder_pan": {
//!       "physical": { "0": -180, "90": -90, "180": 0, "270": 90, "360": 180 },
//!       "logical":  { "-180": 0, "-90": 90, "0": 180, "90": 270, "180": 360 }
//!     }
//!   }
//! }
//! ```

use crate::StoreError;
use serde::{Deserialize, Serialize};
use servocal_table::{CalibrationTable, JointCalibration, LogicalAnchors, PhysicalAnchors};
use std::collections::BTreeMap;
use std::path::Path;

/// 标定文件中单个关节的锚点记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointAnchors {
    /// 物理象限边界 → 逻辑角度值
    pub physical: BTreeMap<String, f64>,

    /// 逻辑象限边界 → 物理角度值
    pub logical: BTreeMap<String, f64>,
}

/// 标定文件根结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationFile {
    /// 关节名 → 锚点记录
    pub joints: BTreeMap<String, JointAnchors>,
}

impl CalibrationFile {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            joints = file.joints.len(),
            "calibration file loaded"
        );
        Ok(file)
    }

    /// 保存为 JSON 文件（带缩进，便于人工校对）
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 登记一个关节的锚点记录
    pub fn insert(&mut self, name: impl Into<String>, anchors: JointAnchors) {
        self.joints.insert(name.into(), anchors);
    }

    /// 构建可供转换服务使用的标定表
    ///
    /// # 错误
    ///
    /// 任一关节的锚点映射缺键时返回
    /// [`servocal_table::CalibError::MissingAnchor`]。
    pub fn build_table(&self) -> Result<CalibrationTable, StoreError> {
        let mut table = CalibrationTable::new();
        for (name, anchors) in &self.joints {
            let physical = PhysicalAnchors::from_map(&anchors.physical)?;
            let logical = LogicalAnchors::from_map(&anchors.logical)?;
            table.insert(name.clone(), JointCalibration::new(&physical, &logical));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_anchors() -> JointAnchors {
        JointAnchors {
            physical: [("0", -180.0), ("90", -90.0), ("180", 0.0), ("270", 90.0), ("360", 180.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            logical: [("-180", 0.0), ("-90", 90.0), ("0", 180.0), ("90", 270.0), ("180", 360.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn test_build_table() {
        let mut file = CalibrationFile::default();
        file.insert("shoulder_pan", centered_anchors());

        let table = file.build_table().unwrap();
        let joint = table.joint("shoulder_pan").unwrap();
        assert!((joint.physical_to_logical(180.0) - 0.0).abs() < 1e-12);
        assert!((joint.logical_to_physical(0.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_table_missing_anchor() {
        let mut anchors = centered_anchors();
        anchors.physical.remove("270");

        let mut file = CalibrationFile::default();
        file.insert("shoulder_pan", anchors);

        let err = file.build_table().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Calib(servocal_table::CalibError::MissingAnchor(ref key)) if key == "270"
        ));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let mut file = CalibrationFile::default();
        file.insert("wrist_roll", centered_anchors());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        file.save(&path).unwrap();

        let loaded = CalibrationFile::load(&path).unwrap();
        assert_eq!(file, loaded);
    }

    #[test]
    fn test_load_accepts_integer_values() {
        // 标定输入中的锚点值是整数
        let json = r#"{
            "joints": {
                "j1": {
                    "physical": { "0": 0, "90": 90, "180": 180, "270": -90, "360": 0 },
                    "logical": { "-180": 180, "-90": 270, "0": 0, "90": 90, "180": 180 }
                }
            }
        }"#;
        let file: CalibrationFile = serde_json::from_str(json).unwrap();
        let table = file.build_table().unwrap();
        // 缝合点消歧生效：物理 180° → 逻辑 -180
        assert_eq!(table.joint("j1").unwrap().physical_to_logical(180.0), -180.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CalibrationFile::load(Path::new("/nonexistent/calibration.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
