//! 数据集操作.

use crate::consts::{gray::is_foreground, IMAGE_CHANNELS, MASK_CHANNELS};
use crate::{Error, Resolution, Result, SampleId};
use ndarray::{Array4, ArrayView3, Axis};
use std::path::{Path, PathBuf};

pub mod builder;
pub mod loader;
mod npz;

pub use builder::{build, build_from_root, get_data, get_masks};
pub use npz::{read_npz, IMAGES_ENTRY, MASKS_ENTRY};

/// 获取 `{用户主目录}/dataset` 目录.
pub fn home_dataset_dir() -> Option<PathBuf> {
    let mut ans = dirs::home_dir()?;
    ans.push("dataset");
    Some(ans)
}

/// 获取 `{用户主目录}/dataset` 目录下给定继续项组成的全路径.
pub fn home_dataset_dir_with<P: AsRef<Path>, I: IntoIterator<Item = P>>(it: I) -> Option<PathBuf> {
    let mut ans = home_dataset_dir()?;
    ans.extend(it);
    Some(ans)
}

/// 内存中的完整数据集: 样本 ID, 图像 `(N, H, W, 3)` 和掩膜 `(N, H, W, 1)`.
///
/// 三者的第 `i` 项对应同一个样本. 构造时检查该不变量.
#[derive(Debug, Clone)]
pub struct Dataset {
    ids: Vec<SampleId>,
    images: Array4<f32>,
    masks: Array4<f32>,
}

impl Dataset {
    /// 初始化.
    ///
    /// 样本数不一致, 通道数不对 (图像 3, 掩膜 1), 或图像与掩膜分辨率不同时返回
    /// [`Error::ShapeMismatch`].
    pub fn new(ids: Vec<SampleId>, images: Array4<f32>, masks: Array4<f32>) -> Result<Self> {
        let &[n, h, w, _] = images.shape() else {
            unreachable!()
        };
        let expected_images = [ids.len(), h, w, IMAGE_CHANNELS];
        if n != ids.len() || images.shape() != expected_images {
            return Err(Error::ShapeMismatch {
                expected: expected_images.to_vec(),
                found: images.shape().to_vec(),
            });
        }
        let expected_masks = [ids.len(), h, w, MASK_CHANNELS];
        if masks.shape() != expected_masks {
            return Err(Error::ShapeMismatch {
                expected: expected_masks.to_vec(),
                found: masks.shape().to_vec(),
            });
        }
        Ok(Self { ids, images, masks })
    }

    /// 样本 ID, 与数组第 0 维对齐.
    #[inline]
    pub fn ids(&self) -> &[SampleId] {
        &self.ids
    }

    /// 图像数组 `(N, H, W, 3)`.
    #[inline]
    pub fn images(&self) -> &Array4<f32> {
        &self.images
    }

    /// 掩膜数组 `(N, H, W, 1)`.
    #[inline]
    pub fn masks(&self) -> &Array4<f32> {
        &self.masks
    }

    /// 样本个数.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// 是否没有样本.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 数组分辨率. 高或宽为 0 时返回 `None`.
    pub fn resolution(&self) -> Option<Resolution> {
        let &[_, h, w, _] = self.images.shape() else {
            unreachable!()
        };
        Resolution::new(h, w)
    }

    /// 第 `index` 个样本的 (ID, 图像, 掩膜). 越界时返回 `None`.
    pub fn sample(&self, index: usize) -> Option<(&SampleId, ArrayView3<f32>, ArrayView3<f32>)> {
        let id = self.ids.get(index)?;
        Some((
            id,
            self.images.index_axis(Axis(0), index),
            self.masks.index_axis(Axis(0), index),
        ))
    }

    /// 每个样本中前景像素所占比例.
    pub fn foreground_ratio(&self) -> Vec<f64> {
        self.masks
            .outer_iter()
            .map(|m| {
                let fg = m.iter().copied().filter(|&p| is_foreground(p)).count();
                if m.is_empty() {
                    0.0
                } else {
                    fg as f64 / m.len() as f64
                }
            })
            .collect()
    }

    /// 将图像和掩膜写入 `path` 处的 npz 归档 (条目名见 [`IMAGES_ENTRY`], [`MASKS_ENTRY`]).
    #[inline]
    pub fn write_npz<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        npz::write_npz(path, &self.images, &self.masks)
    }

    /// 消费自我, 获得底层数据.
    #[inline]
    pub fn into_parts(self) -> (Vec<SampleId>, Array4<f32>, Array4<f32>) {
        (self.ids, self.images, self.masks)
    }
}
