//! 预处理结果.

use nuclei_prep::dataset::Dataset;
use nuclei_prep::Resolution;
use std::io::{self, Write};
use std::path::PathBuf;

/// 预处理结果摘要.
pub struct Summary {
    samples: usize,
    resolution: Option<Resolution>,
    empty_masks: usize,
    ratios: Vec<f64>,
    output: PathBuf,
}

impl Summary {
    pub fn new(ds: &Dataset, output: PathBuf) -> Self {
        let ratios = ds.foreground_ratio();
        Self {
            samples: ds.len(),
            resolution: ds.resolution(),
            empty_masks: ratios.iter().filter(|&&r| r == 0.0).count(),
            ratios,
            output,
        }
    }

    fn mean_ratio(&self) -> Option<f64> {
        if self.ratios.is_empty() {
            None
        } else {
            Some(self.ratios.iter().sum::<f64>() / self.ratios.len() as f64)
        }
    }

    fn max_ratio(&self) -> Option<f64> {
        self.ratios.iter().copied().reduce(f64::max)
    }

    /// 将摘要写进 `w` 中.
    pub fn describe_into<W: Write>(&self, w: &mut W) -> io::Result<()> {
        const S4: &str = "    ";

        #[inline]
        fn f64_to_display(f: Option<f64>) -> String {
            match f {
                Some(f) => format!("{f:.6}"),
                None => "/".to_string(),
            }
        }

        let res = self
            .resolution
            .map_or_else(|| "/".to_string(), |r| r.to_string());
        writeln!(w, "Dataset summary:")?;
        writeln!(w, "{S4}Samples: {}", self.samples)?;
        writeln!(w, "{S4}Resolution: {res}")?;
        writeln!(w, "{S4}Samples without nuclei: {}", self.empty_masks)?;
        writeln!(
            w,
            "{S4}Average foreground ratio: {}",
            f64_to_display(self.mean_ratio())
        )?;
        writeln!(
            w,
            "{S4}Largest foreground ratio: {}",
            f64_to_display(self.max_ratio())
        )?;
        write!(w, "{S4}Written to `{}`", self.output.display())?;
        Ok(())
    }

    fn print(&self) -> io::Result<()> {
        let mut lock = io::stdout().lock();
        utils::sep_to(&mut lock)?;
        self.describe_into(&mut lock)?;
        writeln!(lock)?;
        utils::sep_to(&mut lock)
    }

    /// 打印摘要.
    pub fn analyze(&self) {
        if let Err(e) = self.print() {
            log::warn!("cannot print summary: {e}");
        }
    }
}
