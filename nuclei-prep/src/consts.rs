//! 通用常量.

use crate::Resolution;

/// 掩膜像素值.
pub mod gray {
    /// 聚合掩膜中, 背景的像素值.
    pub const BACKGROUND: f32 = 0.0;

    /// 聚合掩膜中, 细胞核 (前景) 的像素值.
    pub const FOREGROUND: f32 = 1.0;

    /// 导出为 8-bit 图像时, 背景的灰度值.
    pub const BLACK: u8 = 0b_0000_0000;

    /// 导出为 8-bit 图像时, 前景的灰度值.
    pub const WHITE: u8 = 0b_1111_1111;

    /// 像素是否是前景?
    #[inline]
    pub fn is_foreground(p: f32) -> bool {
        p == FOREGROUND
    }

    /// 像素是否是背景?
    #[inline]
    pub fn is_background(p: f32) -> bool {
        p == BACKGROUND
    }
}

/// 默认目标分辨率 (高 128, 宽 128).
pub const DEFAULT_RESOLUTION: Resolution = Resolution::square(128);

/// 样本图像通道数 (RGB).
pub const IMAGE_CHANNELS: usize = 3;

/// 聚合掩膜通道数.
pub const MASK_CHANNELS: usize = 1;

/// 样本目录下存放完整图像的子目录名.
pub const IMAGES_DIR: &str = "images";

/// 样本目录下存放实例掩膜的子目录名.
pub const MASKS_DIR: &str = "masks";

/// 完整图像的扩展名.
pub const IMAGE_EXT: &str = "png";

/// 8-bit 像素的最大值. 图像数组保持在 `[0.0, PIXEL_MAX]` 范围内.
pub const PIXEL_MAX: f32 = 255.0;
