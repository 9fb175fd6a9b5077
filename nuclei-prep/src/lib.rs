#![warn(missing_docs)] // <= 合适时移除它.

//! 核心库. 将显微图像及其细胞核实例掩膜预处理为固定分辨率的数值数组,
//! 作为外部 U-Net 语义分割训练组件 (细胞核 vs. 背景) 的输入.
//!
//! 图像解码和重采样由 `image` crate 完成, 数组由 `ndarray` 承载.
//! 该 crate 不涉及网络结构、优化器和损失函数.
//!
//! # 数据集目录约定
//!
//! ```text
//! <root>/<id>/images/<id>.png   完整样本图像 (3 通道)
//! <root>/<id>/masks/*           零个或多个单实例掩膜 (单通道)
//! ```
//!
//! # 注意
//!
//! 1. 所有读取都是单线程、顺序执行的. 所有样本会同时驻留内存.
//! 2. 任何一个样本出错都会使整个构建调用立即失败, 不会跳过样本.
//! 3. 图像和掩膜的构建消费 **同一份** 外部给定的有序样本 ID 列表,
//!   从而保证索引 `i` 在两个数组中指向同一个样本.
//!
//! # 开发计划
//!
//! ### 样本枚举, 图像加载, 掩膜聚合 ✅
//!
//! 实现位于 `nuclei-prep/src/{sample, image_loader, mask}.rs`.
//!
//! ### 数据集构建与 npz 归档 ✅
//!
//! 实现位于 `nuclei-prep/src/dataset`.
//!
//! ### IoU 指标 ✅
//!
//! 实现位于 `nuclei-prep/src/metrics.rs`.

/// 二维索引 (高, 宽).
pub type Idx2d = (usize, usize);

pub mod consts;

mod error;
mod resize;

pub mod dataset;
pub mod image_loader;
pub mod mask;
pub mod metrics;
pub mod prelude;
pub mod resolution;
pub mod sample;
pub mod save;

pub use error::{Error, Result};
pub use resolution::Resolution;
pub use sample::SampleId;

#[cfg(test)]
pub(crate) mod fixture;
