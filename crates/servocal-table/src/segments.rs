//! 分段线性求值表
//!
//! 把一个 360° 的定义域切成四段 90° 的区间，每段持有一对端点值，
//! 段内做线性插值。表本身只是不可变数据（原点 + 四对端点），
//! 求值是一个无状态的纯函数。

/// 每个插值段覆盖的角度跨度
const SEGMENT_SPAN: f64 = 90.0;

/// 四段 90° 区间的分段线性表
///
/// - 物理→逻辑方向：`origin = 0`，定义域 [0, 360]
/// - 逻辑→物理方向：`origin = -180`，定义域 [-180, 180]
///
/// 定义域之外返回 0（遗留回退行为，见 crate 文档），并通过
/// `tracing::warn!` 上报一次输入。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTable {
    origin: f64,
    segments: [(f64, f64); 4],
}

impl SegmentTable {
    /// 由定义域原点和四对已解析端点创建
    #[inline]
    pub const fn new(origin: f64, segments: [(f64, f64); 4]) -> Self {
        Self { origin, segments }
    }

    /// 定义域下界
    #[inline]
    pub const fn origin(&self) -> f64 {
        self.origin
    }

    /// 四对端点，按段升序
    #[inline]
    pub const fn segments(&self) -> [(f64, f64); 4] {
        self.segments
    }

    /// 在 `x` 处求值
    ///
    /// 段号为 `floor((x - origin) / 90)`，收束到 {0,1,2,3}；段内参数
    /// `t = (x - 段起点) / 90`。定义域上界（`origin + 360`）落在第四段
    /// 且 `t = 1`。
    pub fn eval(&self, x: f64) -> f64 {
        if x < self.origin || x > self.origin + 360.0 {
            tracing::warn!(
                input = x,
                origin = self.origin,
                "conversion input outside table domain, falling back to 0"
            );
            return 0.0;
        }

        let offset = x - self.origin;
        let segment = ((offset / SEGMENT_SPAN) as usize).min(3);
        let (low, high) = self.segments[segment];
        let t = (offset - segment as f64 * SEGMENT_SPAN) / SEGMENT_SPAN;
        low + t * (high - low)
    }
}
