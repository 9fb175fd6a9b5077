//! 掩膜的持久化存储.

use crate::consts::gray::{is_foreground, BLACK, WHITE};
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{GrayImage, ImageResult, Luma};
use ndarray::{ArrayBase, Data, Ix2, Ix3};
use std::path::Path;

/// 表明一个可以通过 **可视化友好** 模式保存为 8-bit 灰度图的二值掩膜.
///
/// 前景映射为白色, 背景映射为黑色.
pub trait MaskWrite {
    /// 将掩膜保存到 `path` 路径. 格式由扩展名决定.
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 图像库使用的 (宽, 高). 任一维超出 `u32` 时返回错误.
fn image_dims(h: usize, w: usize) -> ImageResult<(u32, u32)> {
    match (u32::try_from(w), u32::try_from(h)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))),
    }
}

/// 将二值掩膜转为 8-bit 灰度图.
#[inline]
fn to_gray(h: usize, w: usize, pix: impl Fn(usize, usize) -> f32) -> ImageResult<GrayImage> {
    let (w, h) = image_dims(h, w)?;
    Ok(GrayImage::from_fn(w, h, |x, y| {
        Luma([if is_foreground(pix(y as usize, x as usize)) {
            WHITE
        } else {
            BLACK
        }])
    }))
}

/// `(H, W)` 掩膜.
impl<S: Data<Elem = f32>> MaskWrite for ArrayBase<S, Ix2> {
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (h, w) = self.dim();
        to_gray(h, w, |y, x| self[[y, x]])?.save(path)
    }
}

/// `(H, W, 1)` 掩膜. 只使用第 0 个通道.
impl<S: Data<Elem = f32>> MaskWrite for ArrayBase<S, Ix3> {
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (h, w, _) = self.dim();
        to_gray(h, w, |y, x| self[[y, x, 0]])?.save(path)
    }
}
