//! 样本图像加载.

use crate::consts::{IMAGE_CHANNELS, PIXEL_MAX};
use crate::resize::resize_rgb;
use crate::{Error, Resolution, Result, SampleId};
use image::io::Reader;
use image::{DynamicImage, GrayImage};
use ndarray::{Array, Array3, Dimension};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 加载 `<root>/<id>/images/<id>.png`, 并重采样到 `res`.
///
/// 图像被转为 8-bit RGB 后做双线性插值. 返回形状为 `(H, W, 3)` 的数组,
/// 取值保持 8-bit 刻度 `[0.0, 255.0]`; 如需 `[0, 1]` 请调用 [`normalize`].
///
/// # 注意
///
/// 1. 文件不存在时返回 [`Error::MissingFile`].
/// 2. 数据损坏或格式不受支持时返回 [`Error::Decode`].
pub fn load_image<P: AsRef<Path>>(root: P, id: &SampleId, res: Resolution) -> Result<Array3<f32>> {
    let path = id.image_path(root);
    let img = decode(id, path)?;
    let out = resize_rgb(&img.to_rgb8(), res);
    debug_assert_eq!(out.shape(), &[res.height(), res.width(), IMAGE_CHANNELS]);
    Ok(out)
}

/// 将 `[0, 255]` 刻度的数组就地映射到 `[0, 1]`.
pub fn normalize<D: Dimension>(mut data: Array<f32, D>) -> Array<f32, D> {
    data.mapv_inplace(|v| v / PIXEL_MAX);
    data
}

/// 解码 `path` 处的图像. 文件句柄在返回前释放.
pub(crate) fn decode(id: &SampleId, path: PathBuf) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(Error::MissingFile {
            id: id.clone(),
            path,
        });
    }
    let reader = match Reader::open(&path) {
        Ok(r) => r,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingFile {
                id: id.clone(),
                path,
            })
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    let reader = match reader.with_guessed_format() {
        Ok(r) => r,
        Err(e) => return Err(Error::io(path, e)),
    };
    reader.decode().map_err(|source| Error::Decode {
        id: id.clone(),
        path,
        source,
    })
}

/// 以 8-bit 灰度模式解码 `path` 处的图像.
#[inline]
pub(crate) fn decode_luma(id: &SampleId, path: PathBuf) -> Result<GrayImage> {
    decode(id, path).map(|img| img.to_luma8())
}
