//! 目标分辨率.

use crate::Idx2d;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 目标分辨率, 包含高 (height) 和宽 (width), 二者均不为 0.
///
/// 该对象是只读的. 若要修改分辨率, 你应该创建新的实例.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resolution {
    height: usize,
    width: usize,
}

impl Resolution {
    /// 构建目标分辨率.
    ///
    /// `height` 或 `width` 为 0, 或超出 `u32` 范围 (图像库的尺寸上限) 时返回 `None`.
    pub fn new(height: usize, width: usize) -> Option<Resolution> {
        let valid = |v: usize| v > 0 && u32::try_from(v).is_ok();
        if valid(height) && valid(width) {
            Some(Self { height, width })
        } else {
            None
        }
    }

    /// 构建边长为 `side` 的正方形分辨率.
    ///
    /// `side` 为 0 时 panic.
    #[inline]
    pub const fn square(side: usize) -> Resolution {
        assert!(side > 0);
        Self {
            height: side,
            width: side,
        }
    }

    /// 高.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// 宽.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// (高, 宽).
    #[inline]
    pub fn shape(&self) -> Idx2d {
        (self.height, self.width)
    }

    /// 像素个数.
    #[inline]
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    /// `image` crate 使用的 (宽, 高) 尺寸.
    #[inline]
    pub(crate) fn image_dims(&self) -> (u32, u32) {
        // `new` 保证了不会溢出.
        (self.width as u32, self.height as u32)
    }
}

impl Default for Resolution {
    #[inline]
    fn default() -> Self {
        crate::consts::DEFAULT_RESOLUTION
    }
}

/// 按 `{高}x{宽}` 格式输出.
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// 解析 [`Resolution`] 错误.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseResolutionError {
    /// 不是 `{高}x{宽}` 或 `{边长}` 格式.
    #[error("expected `HxW` or a single side length, got `{0}`")]
    Format(String),

    /// 某一维为 0 或过大.
    #[error("resolution `{0}` is out of range")]
    OutOfRange(String),
}

/// 接受 `"128x96"` (高 x 宽) 或 `"128"` (正方形) 两种写法, 大小写不敏感.
impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let format_err = || ParseResolutionError::Format(s.to_string());
        let parse = |v: &str| v.trim().parse::<usize>().map_err(|_| format_err());

        let (h, w) = match s.split_once(&['x', 'X'][..]) {
            Some((h, w)) => (parse(h)?, parse(w)?),
            None => {
                let side = parse(s)?;
                (side, side)
            }
        };
        Resolution::new(h, w).ok_or_else(|| ParseResolutionError::OutOfRange(s.to_string()))
    }
}
