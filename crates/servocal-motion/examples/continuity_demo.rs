//! 多圈跟踪演示
//!
//! 展示关节转过多圈后，单圈逻辑角与未折叠逻辑角的区别，
//! 以及保持圈数的移动目标。
//!
//! # 运行
//!
//! ```bash
//! cargo run -p servocal-motion --example continuity_demo
//! ```

use servocal_motion::{Conversion, Converter, TICKS_PER_REV};
use servocal_table::{CalibrationTable, LogicalAnchors, PhysicalAnchors};

fn main() {
    // 逻辑零位在编码器中点（2048 计数）的关节
    let table = CalibrationTable::from_anchors([(
        "shoulder_pan",
        PhysicalAnchors::new([-180.0, -90.0, 0.0, 90.0, 180.0]),
        LogicalAnchors::new([0.0, 90.0, 180.0, 270.0, 360.0]),
    )]);
    let converter = Converter::new(&table);

    println!("{:>8}  {:>10}  {:>10}", "ticks", "ranged", "unranged");
    for revs in -2..=2 {
        let ticks = 2048 + revs * TICKS_PER_REV;
        let ranged = converter
            .physical_to_logical("shoulder_pan", ticks, Conversion::Ranged)
            .unwrap();
        let unranged = converter.to_unranged_logical("shoulder_pan", ticks).unwrap();
        println!("{ticks:>8}  {ranged:>10.2}  {unranged:>10.2}");
    }

    // 当前在第二圈，移动到逻辑 +90°：圈数保持不变
    let current = 2048 + TICKS_PER_REV;
    let goal = converter
        .move_to_logical_with_offset("shoulder_pan", current, 90.0)
        .unwrap();
    println!("\nmove from {current} to logical 90°: goal = {goal}");
}
