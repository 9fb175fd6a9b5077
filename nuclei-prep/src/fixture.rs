//! 测试用的临时数据集目录.

use crate::consts::{IMAGES_DIR, IMAGE_EXT, MASKS_DIR};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 临时数据集根目录. drop 时自动删除.
pub(crate) struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// 创建 `<root>/<id>`.
    pub(crate) fn sample_dir(&self, id: &str) -> PathBuf {
        let p = self.root().join(id);
        fs::create_dir_all(&p).unwrap();
        p
    }

    /// 写入 `<root>/<id>/images/<id>.png`, 像素由 `f(x, y)` 给出.
    pub(crate) fn write_image<F>(&self, id: &str, (w, h): (u32, u32), f: F) -> PathBuf
    where
        F: FnMut(u32, u32) -> Rgb<u8>,
    {
        let dir = self.sample_dir(id).join(IMAGES_DIR);
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(format!("{id}.{IMAGE_EXT}"));
        RgbImage::from_fn(w, h, f).save(&p).unwrap();
        p
    }

    /// 创建空的 `<root>/<id>/masks`.
    pub(crate) fn masks_dir(&self, id: &str) -> PathBuf {
        let dir = self.sample_dir(id).join(MASKS_DIR);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// 写入 `<root>/<id>/masks/<name>.png`, 像素由 `f(x, y)` 给出.
    pub(crate) fn write_mask<F>(&self, id: &str, name: &str, (w, h): (u32, u32), f: F) -> PathBuf
    where
        F: FnMut(u32, u32) -> Luma<u8>,
    {
        let p = self.masks_dir(id).join(format!("{name}.png"));
        GrayImage::from_fn(w, h, f).save(&p).unwrap();
        p
    }

    /// 写入一个完整样本: 纯色图像 + 一个覆盖左上角的实例掩膜.
    pub(crate) fn write_sample(&self, id: &str, size: (u32, u32), color: [u8; 3]) {
        self.write_image(id, size, |_, _| Rgb(color));
        self.write_mask(id, "m0", size, |x, y| {
            Luma([if x < size.0 / 2 && y < size.1 / 2 { 255 } else { 0 }])
        });
    }
}
