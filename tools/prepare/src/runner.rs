//! 程序运行函数.

use crate::report::Summary;
use nuclei_prep::dataset;
use utils::loader;

/// 运行配置错误或预处理错误.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// 无法确定数据集目录或输出路径.
    #[error(
        "cannot locate the home directory, set `${}` and `${}`",
        loader::TRAIN_DIR_VAR,
        loader::NPZ_OUT_VAR
    )]
    NoHomeDir,

    /// `$NUCLEI_RESOLUTION` 格式错误.
    #[error("invalid `${}`", loader::RESOLUTION_VAR)]
    Resolution(#[source] nuclei_prep::resolution::ParseResolutionError),

    /// 预处理失败.
    #[error(transparent)]
    Prep(#[from] nuclei_prep::Error),
}

/// 实际运行: 枚举样本, 构建数据集, 写出 npz.
pub fn run() -> Result<Summary, RunError> {
    let root = loader::train_dir_from_env_or_home().ok_or(RunError::NoHomeDir)?;
    let res = loader::resolution_from_env().map_err(RunError::Resolution)?;
    let out = loader::npz_out_from_env_or_home(res).ok_or(RunError::NoHomeDir)?;

    log::info!("Preparing `{}` at {res}", root.display());
    let ds = dataset::build_from_root(&root, res)?;
    ds.write_npz(&out)?;

    Ok(Summary::new(&ds, out))
}
