//! 数据集构建.
//!
//! 图像和掩膜的构建都消费调用方给出的 **同一份** 有序样本 ID 列表,
//! 不在内部各自重新扫描目录, 因此两个数组的索引天然对齐.

use super::loader::{image_loader, mask_loader};
use super::Dataset;
use crate::consts::{IMAGE_CHANNELS, MASK_CHANNELS};
use crate::sample::enumerate_samples;
use crate::{Error, Resolution, Result, SampleId};
use ndarray::{Array3, Array4, Axis};
use std::path::Path;

/// 加载 `ids` 对应的所有样本图像, 返回 `(N, H, W, 3)` 数组.
///
/// `data_info` 仅用于日志上下文 (如 `"train"`, `"test"`), 不影响行为.
/// 该函数不读取掩膜, 也不做数据增强.
///
/// # 注意
///
/// 1. `images_root` 不是目录时返回 [`Error::NotFound`].
/// 2. 任一样本出错都会立即中止并返回该错误, 不会返回部分结果.
pub fn get_data<P: AsRef<Path>>(
    ids: &[SampleId],
    images_root: P,
    res: Resolution,
    data_info: &str,
) -> Result<Array4<f32>> {
    let root = checked_root(images_root.as_ref())?;
    log::info!("Loading `{data_info}` images from `{}`", root.display());
    log::info!("Resizing images to {res}");

    let loader = image_loader(ids.iter().cloned(), root, res);
    collect(loader, res, IMAGE_CHANNELS)
}

/// 聚合 `ids` 对应的所有样本掩膜, 返回 `(N, H, W, 1)` 二值数组.
///
/// # 注意
///
/// 1. `masks_root` 不是目录时返回 [`Error::NotFound`].
/// 2. 任一样本出错都会立即中止并返回该错误, 不会返回部分结果.
pub fn get_masks<P: AsRef<Path>>(
    ids: &[SampleId],
    masks_root: P,
    res: Resolution,
) -> Result<Array4<f32>> {
    let root = checked_root(masks_root.as_ref())?;
    log::info!("Aggregating masks from `{}` at {res}", root.display());

    let loader = mask_loader(ids.iter().cloned(), root, res);
    collect(loader, res, MASK_CHANNELS)
}

/// 以同一份 `ids` 分别构建图像和掩膜, 得到索引对齐的 [`Dataset`].
pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(
    ids: Vec<SampleId>,
    images_root: P,
    masks_root: Q,
    res: Resolution,
) -> Result<Dataset> {
    let images = get_data(&ids, images_root, res, "train")?;
    let masks = get_masks(&ids, masks_root, res)?;
    Dataset::new(ids, images, masks)
}

/// 枚举 `root` 下的样本一次, 并以该列表同时构建图像和掩膜.
///
/// 适用于图像和掩膜位于同一数据集目录的常见布局.
pub fn build_from_root<P: AsRef<Path>>(root: P, res: Resolution) -> Result<Dataset> {
    let root = root.as_ref();
    let ids = enumerate_samples(root)?;
    build(ids, root, root, res)
}

fn checked_root(root: &Path) -> Result<&Path> {
    if root.is_dir() {
        Ok(root)
    } else {
        Err(Error::NotFound {
            path: root.to_owned(),
        })
    }
}

/// 将逐样本数组依次写入预分配的 `(N, H, W, C)` 数组. 遇错立即返回.
fn collect<L>(loader: L, res: Resolution, channels: usize) -> Result<Array4<f32>>
where
    L: ExactSizeIterator<Item = (SampleId, Result<Array3<f32>>)>,
{
    let n = loader.len();
    let (h, w) = res.shape();
    let mut out = Array4::<f32>::zeros((n, h, w, channels));

    for (i, (id, data)) in loader.enumerate() {
        let data = data?;
        if data.shape() != [h, w, channels] {
            return Err(Error::ShapeMismatch {
                expected: vec![h, w, channels],
                found: data.shape().to_vec(),
            });
        }
        out.index_axis_mut(Axis(0), i).assign(&data);
        progress(i + 1, n, &id);
    }
    Ok(out)
}

/// 打印进度. 每 10% 一条 info 日志, 其余为 debug.
fn progress(done: usize, total: usize, id: &SampleId) {
    let step = (total / 10).max(1);
    if done % step == 0 || done == total {
        log::info!("[{done}/{total}] {id}");
    } else {
        log::debug!("[{done}/{total}] {id}");
    }
}

#[cfg(test)]
mod tests {
    use super::{build, build_from_root, get_data, get_masks};
    use crate::fixture::Fixture;
    use crate::{Error, Resolution, SampleId};
    use ndarray::{s, Axis};

    #[test]
    fn test_get_data_shape() {
        let fx = Fixture::new();
        fx.write_image("a", (10, 7), |_, _| image::Rgb([10, 20, 30]));
        fx.write_image("b", (3, 30), |_, _| image::Rgb([40, 50, 60]));
        let ids = ["a", "b"].map(SampleId::from);
        let res = Resolution::new(8, 6).unwrap();

        let images = get_data(&ids, fx.root(), res, "test").unwrap();
        assert_eq!(images.shape(), &[2, 8, 6, 3]);
        assert!((images[[1, 0, 0, 0]] - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_get_data_ignores_masks() {
        let fx = Fixture::new();
        // 只有图像, 没有 masks 目录.
        fx.write_image("a", (4, 4), |_, _| image::Rgb([1, 1, 1]));
        let ids = [SampleId::from("a")];
        assert!(get_data(&ids, fx.root(), Resolution::square(2), "train").is_ok());
    }

    #[test]
    fn test_missing_image_names_sample() {
        let fx = Fixture::new();
        fx.write_sample("good", (4, 4), [9, 9, 9]);
        fx.masks_dir("no-image");
        let ids = ["good", "no-image"].map(SampleId::from);

        let err = get_data(&ids, fx.root(), Resolution::square(4), "train").unwrap_err();
        assert!(matches!(&err, Error::MissingFile { id, .. } if id.as_str() == "no-image"));
        assert!(err.to_string().contains("no-image"));

        let err = build_from_root(fx.root(), Resolution::square(4)).unwrap_err();
        assert_eq!(err.sample_id().map(SampleId::as_str), Some("no-image"));
    }

    #[test]
    fn test_bad_roots() {
        let fx = Fixture::new();
        let missing = fx.root().join("nope");
        let ids = [SampleId::from("a")];
        let res = Resolution::default();
        assert!(matches!(get_data(&ids, &missing, res, "x"), Err(Error::NotFound { .. })));
        assert!(matches!(get_masks(&ids, &missing, res), Err(Error::NotFound { .. })));
        assert!(matches!(build_from_root(&missing, res), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_empty_id_list() {
        let fx = Fixture::new();
        let res = Resolution::square(4);
        let images = get_data(&[], fx.root(), res, "train").unwrap();
        assert_eq!(images.shape(), &[0, 4, 4, 3]);
        let ds = build_from_root(fx.root(), res).unwrap();
        assert!(ds.is_empty());
    }

    /// 三个样本, 颜色各不相同, 左上角为细胞核; 检查索引对齐.
    #[test]
    fn test_build_three_samples_aligned() {
        // 其他测试可能已经设置过 logger.
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init();

        let fx = Fixture::new();
        let colors = [("s1", [10u8, 0, 0]), ("s2", [0, 20, 0]), ("s3", [0, 0, 30])];
        for (id, color) in colors {
            fx.write_sample(id, (16, 16), color);
        }
        // 让 s2 没有任何细胞核.
        std::fs::remove_file(fx.masks_dir("s2").join("m0.png")).unwrap();

        let res = Resolution::square(8);
        let ds = build_from_root(fx.root(), res).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.images().shape(), &[3, 8, 8, 3]);
        assert_eq!(ds.masks().shape(), &[3, 8, 8, 1]);

        for (i, (id, color)) in colors.iter().enumerate() {
            let (got_id, image, mask) = ds.sample(i).unwrap();
            assert_eq!(got_id.as_str(), *id);
            let channel = color.iter().position(|&c| c != 0).unwrap();
            assert!((image[[4, 4, channel]] - color[channel] as f32).abs() < 1e-3);

            let nuclei = mask.slice(s![.., .., 0]).sum();
            if *id == "s2" {
                assert_eq!(nuclei, 0.0);
            } else {
                assert_eq!(mask[[0, 0, 0]], 1.0);
                assert_eq!(mask[[7, 7, 0]], 0.0);
            }
        }
    }

    #[test]
    fn test_build_separate_roots_share_ids() {
        let images = Fixture::new();
        let masks = Fixture::new();
        let ids: Vec<SampleId> = ["b", "a"].map(SampleId::from).into();
        for id in &ids {
            images.write_image(id.as_str(), (5, 5), |_, _| image::Rgb([3, 3, 3]));
            masks.write_mask(id.as_str(), "m", (5, 5), |_, _| image::Luma([255]));
        }
        let ds = build(ids.clone(), images.root(), masks.root(), Resolution::square(3)).unwrap();
        assert_eq!(ds.ids(), ids.as_slice());
        assert!(ds.masks().index_axis(Axis(0), 1).iter().all(|&v| v == 1.0));
    }
}
