//! npz 归档读写, 用于把图像和掩膜批交给外部训练组件.

use crate::consts::{IMAGE_CHANNELS, MASK_CHANNELS};
use crate::{Error, Result};
use ndarray::{Array4, Ix4, OwnedRepr};
use ndarray_npy::{NpzReader, NpzWriter};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// npz 归档中图像数组的条目名.
pub const IMAGES_ENTRY: &str = "images.npy";

/// npz 归档中掩膜数组的条目名.
pub const MASKS_ENTRY: &str = "masks.npy";

/// 将图像 `(N, H, W, 3)` 和掩膜 `(N, H, W, 1)` 写入 `path`.
///
/// 已存在的文件会被覆盖.
pub(crate) fn write_npz<P: AsRef<Path>>(
    path: P,
    images: &Array4<f32>,
    masks: &Array4<f32>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut npz = NpzWriter::new(file);
    npz.add_array(IMAGES_ENTRY, images)?;
    npz.add_array(MASKS_ENTRY, masks)?;
    npz.finish()?;
    log::info!("Wrote {} samples to `{}`", images.len_of(ndarray::Axis(0)), path.display());
    Ok(())
}

/// 从 `path` 读回 (图像, 掩膜).
///
/// 两者样本数、分辨率不一致或通道数不对时返回 [`Error::ShapeMismatch`].
pub fn read_npz<P: AsRef<Path>>(path: P) -> Result<(Array4<f32>, Array4<f32>)> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    let mut npz = NpzReader::new(file)?;
    let images = npz.by_name::<OwnedRepr<f32>, Ix4>(IMAGES_ENTRY)?;
    let masks = npz.by_name::<OwnedRepr<f32>, Ix4>(MASKS_ENTRY)?;

    let (n, h, w, c) = images.dim();
    if c != IMAGE_CHANNELS {
        return Err(Error::ShapeMismatch {
            expected: vec![n, h, w, IMAGE_CHANNELS],
            found: images.shape().to_vec(),
        });
    }
    if masks.dim() != (n, h, w, MASK_CHANNELS) {
        return Err(Error::ShapeMismatch {
            expected: vec![n, h, w, MASK_CHANNELS],
            found: masks.shape().to_vec(),
        });
    }
    Ok((images, masks))
}

#[cfg(test)]
mod tests {
    use super::{read_npz, IMAGES_ENTRY, MASKS_ENTRY};
    use crate::dataset::build_from_root;
    use crate::fixture::Fixture;
    use crate::{Error, Resolution};
    use ndarray::Array4;
    use ndarray_npy::NpzWriter;
    use std::fs::File;

    fn write_raw(path: &std::path::Path, images: &Array4<f32>, masks: &Array4<f32>) {
        let mut npz = NpzWriter::new(File::create(path).unwrap());
        npz.add_array(IMAGES_ENTRY, images).unwrap();
        npz.add_array(MASKS_ENTRY, masks).unwrap();
        npz.finish().unwrap();
    }

    #[test]
    fn test_npz_hand_off() {
        let fx = Fixture::new();
        fx.write_sample("n1", (10, 10), [100, 150, 200]);
        fx.write_sample("n2", (6, 12), [5, 5, 5]);
        let ds = build_from_root(fx.root(), Resolution::square(6)).unwrap();

        let out = fx.root().join("out.npz");
        ds.write_npz(&out).unwrap();
        let (images, masks) = read_npz(&out).unwrap();
        assert_eq!(&images, ds.images());
        assert_eq!(&masks, ds.masks());
    }

    #[test]
    fn test_read_npz_missing() {
        let fx = Fixture::new();
        assert!(read_npz(fx.root().join("none.npz")).is_err());
    }

    #[test]
    fn test_read_npz_wrong_image_channels() {
        let fx = Fixture::new();
        let out = fx.root().join("gray.npz");
        let gray = Array4::<f32>::zeros((2, 3, 3, 1));
        write_raw(&out, &gray, &gray);

        match read_npz(&out) {
            Err(Error::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, [2, 3, 3, 3]);
                assert_eq!(found, [2, 3, 3, 1]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_npz_misaligned_masks() {
        let fx = Fixture::new();
        let out = fx.root().join("short.npz");
        let images = Array4::<f32>::zeros((2, 3, 3, 3));
        let masks = Array4::<f32>::zeros((1, 3, 3, 1));
        write_raw(&out, &images, &masks);

        match read_npz(&out) {
            Err(Error::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, [2, 3, 3, 1]);
                assert_eq!(found, [1, 3, 3, 1]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
