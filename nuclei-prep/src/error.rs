//! 运行时错误.

use crate::SampleId;
use std::path::PathBuf;

/// 数据预处理的运行时错误.
///
/// 每个变体都带有出错的路径; 与单个样本相关的变体还带有样本 ID.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 数据集根目录不存在, 或不是目录.
    #[error("dataset root `{}` does not exist or is not a directory", .path.display())]
    NotFound {
        /// 给定的根路径.
        path: PathBuf,
    },

    /// 样本缺少约定的文件或目录.
    #[error("sample `{id}`: expected `{}` is missing", .path.display())]
    MissingFile {
        /// 样本 ID.
        id: SampleId,
        /// 缺失的路径.
        path: PathBuf,
    },

    /// 图像数据损坏或格式不受支持.
    #[error("sample `{id}`: cannot decode `{}`", .path.display())]
    Decode {
        /// 样本 ID.
        id: SampleId,
        /// 无法解码的文件.
        path: PathBuf,
        /// 底层解码错误.
        #[source]
        source: image::ImageError,
    },

    /// 其他底层 I/O 错误.
    #[error("I/O error on `{}`", .path.display())]
    Io {
        /// 出错的路径.
        path: PathBuf,
        /// 底层 I/O 错误.
        #[source]
        source: std::io::Error,
    },

    /// 数组形状与期望不符.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// 期望形状.
        expected: Vec<usize>,
        /// 实际形状.
        found: Vec<usize>,
    },

    /// 写入 npz 归档错误.
    #[error("cannot write npz archive")]
    WriteNpz(#[from] ndarray_npy::WriteNpzError),

    /// 读取 npz 归档错误.
    #[error("cannot read npz archive")]
    ReadNpz(#[from] ndarray_npy::ReadNpzError),
}

/// 本 crate 的通用结果类型.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 以 `path` 包装 I/O 错误.
    #[inline]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 出错的样本 ID (若有).
    pub fn sample_id(&self) -> Option<&SampleId> {
        match self {
            Self::MissingFile { id, .. } | Self::Decode { id, .. } => Some(id),
            _ => None,
        }
    }
}
