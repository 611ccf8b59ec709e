//! ±180° 缝合点消歧
//!
//! 物理 180°（或 -180°）锚点记录的逻辑值有歧义：逻辑空间中 +180 与
//! -180 指向同一点。只有当相邻象限的另一端恰为 ±90 或 ±270 时，
//! 原始记录值才是自洽的，否则需要替换为相反符号的一侧。

/// 解析一个物理象限的两个相邻锚点值 `(a, b)`
///
/// `a` 为低边界、`b` 为高边界记录的逻辑值。四个条件按固定优先级
/// 检查，命中第一个即返回；对于合法的标定数据，至多一个条件成立。
///
/// 分支顺序是行为的一部分，不可重排：恰在 90/180/270 边界取值时，
/// 重排会改变结果。
pub fn select_limits(a: f64, b: f64) -> (f64, f64) {
    if a == 180.0 && b != 90.0 && b != 270.0 {
        return (-180.0, b);
    }
    if b == 180.0 && a != 90.0 && a != 270.0 {
        return (a, -180.0);
    }
    if a == -180.0 && b != -90.0 && b != -270.0 {
        return (180.0, b);
    }
    if b == -180.0 && a != -90.0 && a != -270.0 {
        return (a, 180.0);
    }
    (a, b)
}
