//! 实例掩膜聚合.
//!
//! 一个样本的所有实例掩膜各自重采样后逐元素相加, 再二值化:
//! 累加值 `> 0` 的像素为前景 `1.0`, 否则为背景 `0.0`.
//!
//! 数据集约定实例之间互不重叠, 因此 "相加后阈值化" 等价于逐像素逻辑或.
//! 重采样的抗锯齿会在边界产生 `(0, 1)` 之间的小数, 这些像素同样算作前景.

use crate::consts::gray::{BACKGROUND, FOREGROUND};
use crate::image_loader::decode_luma;
use crate::resize::resize_luma;
use crate::{Error, Resolution, Result, SampleId};
use ndarray::{Array2, Array3, ArrayView2, Axis};
use std::fs;
use std::path::{Path, PathBuf};

/// 聚合 `<masks_root>/<id>/masks/` 下的所有实例掩膜, 返回形状为 `(H, W, 1)`
/// 的二值数组, 取值仅为 `{0.0, 1.0}`.
///
/// # 注意
///
/// 1. 目录下所有普通文件都被视为实例掩膜, 并按文件名顺序读取.
/// 2. `masks` 目录为空时返回全零数组, 不视为错误.
/// 3. `masks` 目录不存在时返回 [`Error::MissingFile`]; 任一文件损坏时返回 [`Error::Decode`].
pub fn aggregate_mask<P: AsRef<Path>>(
    masks_root: P,
    id: &SampleId,
    res: Resolution,
) -> Result<Array3<f32>> {
    let files = instance_files(masks_root, id)?;
    if files.is_empty() {
        log::warn!("Sample `{id}` has no instance masks, using an empty mask");
    }

    let mut acc = Array2::<f32>::zeros(res.shape());
    for path in files {
        let instance = resize_luma(&decode_luma(id, path.clone())?, res);
        log::debug!("Sample `{id}`: accumulated `{}`", path.display());
        accumulate(&mut acc, instance.view());
    }
    binarize(&mut acc);
    Ok(acc.insert_axis(Axis(2)))
}

/// 列出样本的实例掩膜文件, 按文件名排序.
pub fn instance_files<P: AsRef<Path>>(masks_root: P, id: &SampleId) -> Result<Vec<PathBuf>> {
    let dir = id.masks_dir(masks_root);
    if !dir.is_dir() {
        return Err(Error::MissingFile {
            id: id.clone(),
            path: dir,
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let path = entry.map_err(|e| Error::io(&dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_unstable();
    Ok(files)
}

/// 将 `instance` 逐元素加到 `acc` 上.
///
/// 两者形状不一致时 panic.
#[inline]
pub fn accumulate(acc: &mut Array2<f32>, instance: ArrayView2<f32>) {
    *acc += &instance;
}

/// 就地二值化: `> 0` 为前景, 其余 (包括 NaN) 为背景.
pub fn binarize<D: ndarray::Dimension>(data: &mut ndarray::Array<f32, D>) {
    data.mapv_inplace(|v| if v > 0.0 { FOREGROUND } else { BACKGROUND });
}
