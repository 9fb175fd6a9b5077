//! 涵盖了本 crate 一系列常用的功能.

pub use crate::{Error, Idx2d, Resolution, Result, SampleId};

pub use crate::consts::gray::{BACKGROUND, FOREGROUND};
pub use crate::consts::DEFAULT_RESOLUTION;

pub use crate::dataset::{self, build, build_from_root, get_data, get_masks, Dataset};
pub use crate::dataset::{home_dataset_dir, home_dataset_dir_with};

pub use crate::image_loader::{load_image, normalize};
pub use crate::mask::aggregate_mask;
pub use crate::metrics::{iou, mean_iou};
pub use crate::sample::enumerate_samples;
pub use crate::save::MaskWrite;
