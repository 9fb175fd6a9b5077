//! 对 `nuclei-prep::dataset` 的更一层封装. 从环境变量或用户主目录解析运行配置.

use nuclei_prep::dataset::home_dataset_dir_with;
use nuclei_prep::resolution::ParseResolutionError;
use nuclei_prep::Resolution;
use std::env;
use std::path::PathBuf;

/// 数据集根目录的环境变量.
pub const TRAIN_DIR_VAR: &str = "NUCLEI_TRAIN_DIR";

/// 目标分辨率的环境变量.
pub const RESOLUTION_VAR: &str = "NUCLEI_RESOLUTION";

/// npz 输出路径的环境变量.
pub const NPZ_OUT_VAR: &str = "NUCLEI_NPZ_OUT";

/// 获取训练集根目录.
///
/// 1. 若环境变量 `$NUCLEI_TRAIN_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/stage1_train`. 无法确定主目录时返回 `None`.
pub fn train_dir_from_env_or_home() -> Option<PathBuf> {
    match non_empty_var(TRAIN_DIR_VAR) {
        Some(d) => Some(PathBuf::from(d)),
        None => home_dataset_dir_with(["stage1_train"]),
    }
}

/// 获取目标分辨率.
///
/// 1. 若环境变量 `$NUCLEI_RESOLUTION` 非空, 则按 `HxW` 解析;
/// 2. 否则, 返回默认的 128x128.
pub fn resolution_from_env() -> Result<Resolution, ParseResolutionError> {
    match non_empty_var(RESOLUTION_VAR) {
        Some(s) => s.parse(),
        None => Ok(Resolution::default()),
    }
}

/// 获取 npz 输出路径.
///
/// 1. 若环境变量 `$NUCLEI_NPZ_OUT` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/nuclei-{H}x{W}.npz`. 无法确定主目录时返回 `None`.
pub fn npz_out_from_env_or_home(res: Resolution) -> Option<PathBuf> {
    match non_empty_var(NPZ_OUT_VAR) {
        Some(p) => Some(PathBuf::from(p)),
        None => home_dataset_dir_with([format!("nuclei-{res}.npz")]),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
