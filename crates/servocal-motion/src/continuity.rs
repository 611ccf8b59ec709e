//! 多圈连续位置
//!
//! 舵机只上报单圈内的编码器计数，但关节可能已经转过了若干整圈。
//! 下游规划需要一个连续（"未折叠"）的逻辑角，也需要一个保持当前
//! 圈数的物理目标，而不是被拉回单圈窗口。
//!
//! 这里的两个操作看起来有状态，实际都是无状态的：每次调用都由
//! 当前计数（和目标角）重新推导，不缓存任何东西。

use crate::convert::{Conversion, Converter, DEG_PER_TICK};
use crate::ConversionError;

impl<'a> Converter<'a> {
    /// 编码器计数 → 未折叠逻辑角（多圈感知）
    ///
    /// 先取单圈逻辑角，再由它反推"只看单圈角度应得的计数"；
    /// 两者之差就是整圈残差（一圈 4096 计数的倍数加插值取整误差），
    /// 把残差换算回角度并从单圈逻辑角中扣除。
    ///
    /// 计数落在锚点参考的单圈内时，结果与单圈逻辑角一致；
    /// 计数每偏移一整圈，结果偏移整 360°。
    pub fn to_unranged_logical(&self, joint: &str, ticks: i32) -> Result<f64, ConversionError> {
        let ranged = self.physical_to_logical(joint, ticks, Conversion::Ranged)?;
        let base = self.logical_to_physical(joint, ranged, Conversion::Ranged)?;
        let turn_offset = ticks - base;
        Ok(ranged - turn_offset as f64 * DEG_PER_TICK)
    }

    /// 保持圈数的移动目标
    ///
    /// 返回一个编码器计数目标：圈数取自 `current_ticks`，圈内位置由
    /// `target_logical` 的单圈换算决定。它不会把目标展开到离当前
    /// 位置最近的多圈等价角——圈数合成与圈内增量是分开的。
    ///
    /// 把目标设为自身当前的未折叠逻辑角时，返回值恰等于
    /// `current_ticks`（精确，无容差）。
    pub fn move_to_logical_with_offset(
        &self,
        joint: &str,
        current_ticks: i32,
        target_logical: f64,
    ) -> Result<i32, ConversionError> {
        let target_ranged = self.logical_to_physical(joint, target_logical, Conversion::Ranged)?;
        let unranged = self.to_unranged_logical(joint, current_ticks)?;
        let base = self.logical_to_physical(joint, unranged, Conversion::Ranged)?;
        let goal = current_ticks - base + target_ranged;
        tracing::trace!(
            joint,
            current_ticks,
            target_logical,
            target_ranged,
            goal,
            "offset-preserving move target computed"
        );
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TICKS_PER_REV;
    use servocal_table::{CalibrationTable, LogicalAnchors, PhysicalAnchors};

    fn centered_table() -> CalibrationTable {
        CalibrationTable::from_anchors([(
            "joint",
            PhysicalAnchors::new([-180.0, -90.0, 0.0, 90.0, 180.0]),
            LogicalAnchors::new([0.0, 90.0, 180.0, 270.0, 360.0]),
        )])
    }

    #[test]
    fn test_unranged_matches_ranged_within_revolution() {
        let table = centered_table();
        let converter = Converter::new(&table);

        for ticks in [0, 1, 512, 2048, 3000, 4095] {
            let ranged = converter
                .physical_to_logical("joint", ticks, Conversion::Ranged)
                .unwrap();
            let unranged = converter.to_unranged_logical("joint", ticks).unwrap();
            assert!(
                (unranged - ranged).abs() < DEG_PER_TICK,
                "ticks={ticks}: unranged={unranged}, ranged={ranged}"
            );
        }
    }

    #[test]
    fn test_full_revolution_shifts_unranged_by_360() {
        let table = centered_table();
        let converter = Converter::new(&table);

        let at = |ticks: i32| converter.to_unranged_logical("joint", ticks).unwrap();

        // 每多转一圈，未折叠逻辑角整体偏移 360°
        for base in [0, 1000, 2048, 4095] {
            assert!((at(base - TICKS_PER_REV) - at(base) - 360.0).abs() < 1e-9);
            assert!((at(base + TICKS_PER_REV) - at(base) + 360.0).abs() < 1e-9);
            assert!((at(base + 3 * TICKS_PER_REV) - at(base) + 1080.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_move_to_own_position_is_noop() {
        let table = centered_table();
        let converter = Converter::new(&table);

        for ticks in [-5000, -1, 0, 2048, 4095, 6144, 20000] {
            let unranged = converter.to_unranged_logical("joint", ticks).unwrap();
            let target = converter
                .move_to_logical_with_offset("joint", ticks, unranged)
                .unwrap();
            assert_eq!(target, ticks);
        }
    }

    #[test]
    fn test_move_preserves_revolution_count() {
        let table = centered_table();
        let converter = Converter::new(&table);

        // 当前位置在第二圈的中点（逻辑 0 + 一整圈）
        let current = 2048 + TICKS_PER_REV;
        // 目标逻辑 +90° → 圈内 3072 计数，圈数保持
        let target = converter
            .move_to_logical_with_offset("joint", current, 90.0)
            .unwrap();
        assert_eq!(target, 3072 + TICKS_PER_REV);

        // 负圈同理
        let current = 2048 - 2 * TICKS_PER_REV;
        let target = converter
            .move_to_logical_with_offset("joint", current, -90.0)
            .unwrap();
        assert_eq!(target, 1024 - 2 * TICKS_PER_REV);
    }

    #[test]
    fn test_move_unknown_joint() {
        let table = centered_table();
        let converter = Converter::new(&table);
        assert!(matches!(
            converter.move_to_logical_with_offset("nope", 0, 0.0),
            Err(ConversionError::UnknownJoint(_))
        ));
    }
}
