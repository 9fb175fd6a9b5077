//! 浮点重采样.
//!
//! 8-bit 像素先被缩放到 `[0, 1]` 的浮点数再做插值, 以保留抗锯齿产生的小数覆盖率.
//! `image` 对 `f32` 像素的取值约定正是 `[0, 1]`.

use crate::consts::PIXEL_MAX;
use crate::Resolution;
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};

/// 重采样滤波器. 双线性插值, 而非最近邻.
pub(crate) const FILTER: FilterType = FilterType::Triangle;

/// 将 RGB 图像重采样到 `res`, 返回 `(H, W, 3)` 数组, 取值范围 `[0, 255]`.
pub(crate) fn resize_rgb(img: &RgbImage, res: Resolution) -> Array3<f32> {
    let src: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Rgb([unit(r), unit(g), unit(b)])
    });
    let (tw, th) = res.image_dims();
    let out = imageops::resize(&src, tw, th, FILTER);

    let (h, w) = res.shape();
    let raw = out.as_raw();
    Array3::from_shape_fn((h, w, 3), |(y, x, c)| raw[(y * w + x) * 3 + c] * PIXEL_MAX)
}

/// 将单通道图像重采样到 `res`, 返回 `(H, W)` 数组, 取值范围 `[0, 1]`.
pub(crate) fn resize_luma(img: &GrayImage, res: Resolution) -> Array2<f32> {
    let src: ImageBuffer<Luma<f32>, Vec<f32>> =
        ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
            Luma([unit(img.get_pixel(x, y)[0])])
        });
    let (tw, th) = res.image_dims();
    let out = imageops::resize(&src, tw, th, FILTER);

    let (h, w) = res.shape();
    let raw = out.as_raw();
    Array2::from_shape_fn((h, w), |(y, x)| raw[y * w + x])
}

#[inline]
fn unit(p: u8) -> f32 {
    p as f32 / PIXEL_MAX
}
