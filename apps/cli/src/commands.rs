//! 子命令实现

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use servocal_motion::{Conversion, Converter};
use servocal_store::{CalibrationFile, CapturedPose, capture};
use servocal_table::CalibrationTable;
use std::collections::BTreeMap;
use std::path::Path;

/// 采集位姿文件中单个关节的两个位姿
#[derive(Debug, Deserialize)]
struct PosePair {
    first: CapturedPose,
    second: CapturedPose,
}

fn load_table(calibration: Option<&Path>) -> Result<CalibrationTable> {
    let Some(path) = calibration else {
        bail!("--calibration <FILE> is required for this command");
    };
    let file = CalibrationFile::load(path)
        .with_context(|| format!("failed to load calibration file {}", path.display()))?;
    let table = file.build_table().context("failed to build calibration table")?;
    Ok(table)
}

fn conversion(unwrapped: bool) -> Conversion {
    if unwrapped {
        Conversion::Unwrapped
    } else {
        Conversion::Ranged
    }
}

/// 显示标定表摘要
pub fn inspect(calibration: Option<&Path>) -> Result<()> {
    let table = load_table(calibration)?;

    println!("joints: {}", table.len());
    for name in table.joint_names() {
        let joint = table.joint(name).expect("name came from the table");
        println!("\n[{name}]");
        println!("  physical -> logical (resolved):");
        for (i, (low, high)) in joint.physical_segments().segments().iter().enumerate() {
            let start = i * 90;
            println!("    [{start:>3}°, {:>3}°]  {low:>8.2} .. {high:>8.2}", start + 90);
        }
        println!("  logical -> physical:");
        for (i, (low, high)) in joint.logical_segments().segments().iter().enumerate() {
            let start = i as i32 * 90 - 180;
            println!("    [{start:>4}°, {:>4}°]  {low:>8.2} .. {high:>8.2}", start + 90);
        }
    }
    Ok(())
}

/// 编码器计数 → 逻辑角
pub fn to_logical(
    calibration: Option<&Path>,
    joint: &str,
    ticks: i32,
    unwrapped: bool,
) -> Result<()> {
    let table = load_table(calibration)?;
    let converter = Converter::new(&table);
    let logical = converter.physical_to_logical(joint, ticks, conversion(unwrapped))?;
    println!("{logical:.4}");
    Ok(())
}

/// 逻辑角 → 编码器计数
pub fn to_physical(
    calibration: Option<&Path>,
    joint: &str,
    degrees: f64,
    unwrapped: bool,
) -> Result<()> {
    let table = load_table(calibration)?;
    let converter = Converter::new(&table);
    let ticks = converter.logical_to_physical(joint, degrees, conversion(unwrapped))?;
    println!("{ticks}");
    Ok(())
}

/// 编码器计数 → 多圈连续逻辑角
pub fn unwrap(calibration: Option<&Path>, joint: &str, ticks: i32) -> Result<()> {
    let table = load_table(calibration)?;
    let converter = Converter::new(&table);
    let unranged = converter.to_unranged_logical(joint, ticks)?;
    println!("{unranged:.4}");
    Ok(())
}

/// 保持圈数的移动目标
pub fn move_to(calibration: Option<&Path>, joint: &str, ticks: i32, target: f64) -> Result<()> {
    let table = load_table(calibration)?;
    let converter = Converter::new(&table);
    let goal = converter.move_to_logical_with_offset(joint, ticks, target)?;
    println!("{goal}");
    Ok(())
}

/// 由采集位姿生成标定文件
pub fn build(poses: &Path, output: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(poses)
        .with_context(|| format!("failed to read poses file {}", poses.display()))?;
    let pairs: BTreeMap<String, PosePair> =
        serde_json::from_str(&contents).context("failed to parse poses file")?;

    let file = capture::build_calibration_file(
        pairs
            .into_iter()
            .map(|(name, pair)| (name, pair.first, pair.second)),
    );

    // 生成后立刻构建一次，锚点不全时在这里就报错
    file.build_table()
        .context("captured poses do not produce a complete anchor set")?;

    file.save(output)
        .with_context(|| format!("failed to write calibration file {}", output.display()))?;
    println!("wrote {} joints to {}", file.joints.len(), output.display());
    Ok(())
}
