//! 样本 ID 与样本枚举.

use crate::consts::{IMAGES_DIR, IMAGE_EXT, MASKS_DIR};
use crate::{Error, Result};
use itertools::Itertools;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 样本 ID, 即数据集根目录下的样本子目录名. 其内容对本 crate 不透明.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleId(String);

impl SampleId {
    /// 字符串形式.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 样本目录 `<root>/<id>`.
    #[inline]
    pub fn dir<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref().join(&self.0)
    }

    /// 完整图像路径 `<root>/<id>/images/<id>.png`.
    pub fn image_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        let mut p = self.dir(root);
        p.push(IMAGES_DIR);
        p.push(format!("{}.{IMAGE_EXT}", self.0));
        p
    }

    /// 实例掩膜目录 `<root>/<id>/masks`.
    pub fn masks_dir<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        let mut p = self.dir(root);
        p.push(MASKS_DIR);
        p
    }
}

impl fmt::Display for SampleId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SampleId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SampleId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SampleId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 列出 `root` 下所有直接子目录的名字, 作为样本 ID.
///
/// 普通文件会被忽略. 结果按字典序排列, 因此同一目录重复调用得到相同顺序.
///
/// # 注意
///
/// 1. `root` 不存在或不是目录时返回 [`Error::NotFound`].
/// 2. 名字不是合法 UTF-8 的子目录会被有损转换.
pub fn enumerate_samples<P: AsRef<Path>>(root: P) -> Result<Vec<SampleId>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotFound {
            path: root.to_owned(),
        });
    }

    let mut ids = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| Error::io(root, e))? {
        let entry = entry.map_err(|e| Error::io(root, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        // 跟随符号链接, 与 `is_dir` 语义一致.
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            ids.push(SampleId(entry.file_name().to_string_lossy().into_owned()));
        }
    }
    ids.sort_unstable();

    log::info!("Found {} samples under `{}`", ids.len(), root.display());
    log::debug!("Samples: [{}]", ids.iter().join(", "));
    Ok(ids)
}
