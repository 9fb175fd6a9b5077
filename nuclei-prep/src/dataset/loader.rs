//! 逐样本的图像/掩膜加载器.
//!
//! 提供迭代器风格的数据集获取模式.

use crate::image_loader::load_image;
use crate::mask::aggregate_mask;
use crate::{Resolution, Result, SampleId};
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// 从指定样本 ID 序列、数据集根目录和目标分辨率创建图像加载器.
///
/// # 注意
///
/// `ids` 的每个值 `id` 都必须在 `root` 下存在 `<id>/images/<id>.png`,
/// 否则加载器在迭代到该样本时会返回 `Result::Err`.
pub fn image_loader<I, P>(ids: I, root: P, res: Resolution) -> ImageLoader
where
    I: IntoIterator<Item = SampleId>,
    P: AsRef<Path>,
{
    let mut ids: Vec<SampleId> = ids.into_iter().collect();
    ids.reverse();

    ImageLoader {
        root: root.as_ref().to_owned(),
        ids_rev: ids,
        res,
    }
}

/// 样本图像加载器, 按给定顺序产出 `(H, W, 3)` 数组.
#[derive(Debug)]
pub struct ImageLoader {
    root: PathBuf,
    ids_rev: Vec<SampleId>,
    res: Resolution,
}

impl Iterator for ImageLoader {
    type Item = (SampleId, Result<Array3<f32>>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids_rev.pop()?;
        let data = load_image(&self.root, &id, self.res);
        Some((id, data))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for ImageLoader {
    #[inline]
    fn len(&self) -> usize {
        self.ids_rev.len()
    }
}

/// 从指定样本 ID 序列、掩膜根目录和目标分辨率创建聚合掩膜加载器.
///
/// # 注意
///
/// `ids` 的每个值 `id` 都必须在 `root` 下存在 `<id>/masks` 目录,
/// 否则加载器在迭代到该样本时会返回 `Result::Err`.
pub fn mask_loader<I, P>(ids: I, root: P, res: Resolution) -> MaskLoader
where
    I: IntoIterator<Item = SampleId>,
    P: AsRef<Path>,
{
    let mut ids: Vec<SampleId> = ids.into_iter().collect();
    ids.reverse();

    MaskLoader {
        root: root.as_ref().to_owned(),
        ids_rev: ids,
        res,
    }
}

/// 聚合掩膜加载器, 按给定顺序产出 `(H, W, 1)` 二值数组.
#[derive(Debug)]
pub struct MaskLoader {
    root: PathBuf,
    ids_rev: Vec<SampleId>,
    res: Resolution,
}

impl Iterator for MaskLoader {
    type Item = (SampleId, Result<Array3<f32>>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids_rev.pop()?;
        let data = aggregate_mask(&self.root, &id, self.res);
        Some((id, data))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for MaskLoader {
    #[inline]
    fn len(&self) -> usize {
        self.ids_rev.len()
    }
}
