//! IoU (Intersection over Union) 指标.
//!
//! 预测值是前景概率, 以 `threshold` 二值化; 真值是二值掩膜, `> 0` 即为前景.

use crate::{Error, Result};
use ndarray::{ArrayView, ArrayView4, Axis, Dimension, Zip};

/// 默认预测阈值.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// 交集与并集的像素计数.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Overlap {
    /// 交集像素数.
    pub intersection: usize,
    /// 并集像素数.
    pub union: usize,
}

impl Overlap {
    /// IoU 值. 并集为空 (预测和真值都没有前景) 时视为完全一致, 返回 `1.0`.
    #[inline]
    pub fn iou(&self) -> f64 {
        if self.union == 0 {
            1.0
        } else {
            self.intersection as f64 / self.union as f64
        }
    }
}

/// 统计 `pred` (阈值 `threshold`) 与 `truth` 的交集和并集.
///
/// 两者形状不同时返回 [`Error::ShapeMismatch`].
pub fn overlap<D: Dimension>(
    pred: ArrayView<f32, D>,
    truth: ArrayView<f32, D>,
    threshold: f32,
) -> Result<Overlap> {
    if pred.shape() != truth.shape() {
        return Err(Error::ShapeMismatch {
            expected: truth.shape().to_vec(),
            found: pred.shape().to_vec(),
        });
    }
    let mut ans = Overlap::default();
    Zip::from(&pred).and(&truth).for_each(|&p, &t| {
        let (p, t) = (p > threshold, t > 0.0);
        ans.intersection += (p && t) as usize;
        ans.union += (p || t) as usize;
    });
    Ok(ans)
}

/// 单个样本的 IoU.
#[inline]
pub fn iou<D: Dimension>(
    pred: ArrayView<f32, D>,
    truth: ArrayView<f32, D>,
    threshold: f32,
) -> Result<f64> {
    overlap(pred, truth, threshold).map(|o| o.iou())
}

/// 一批 `(N, H, W, C)` 样本逐个求 IoU 后的平均值. 批为空时返回 `None`.
pub fn mean_iou(
    preds: ArrayView4<f32>,
    truths: ArrayView4<f32>,
    threshold: f32,
) -> Result<Option<f64>> {
    if preds.shape() != truths.shape() {
        return Err(Error::ShapeMismatch {
            expected: truths.shape().to_vec(),
            found: preds.shape().to_vec(),
        });
    }
    let n = preds.len_of(Axis(0));
    if n == 0 {
        return Ok(None);
    }
    let mut sum = 0.0;
    for (p, t) in preds.outer_iter().zip(truths.outer_iter()) {
        sum += iou(p, t, threshold)?;
    }
    Ok(Some(sum / n as f64))
}
