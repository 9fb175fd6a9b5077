//! 将细胞核数据集预处理为 npz 归档, 交给外部训练组件.
//!
//! 配置见 `utils::loader`: `$NUCLEI_TRAIN_DIR`, `$NUCLEI_RESOLUTION`, `$NUCLEI_NPZ_OUT`.
//! 日志级别可通过 `$RUST_LOG` 覆盖.

mod report;
mod runner;

use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::error::Error as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    // 全局日志配置只在此处初始化一次.
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("cannot initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match runner::run() {
        Ok(summary) => {
            summary.analyze();
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            let mut source = e.source();
            while let Some(s) = source {
                log::error!("  caused by: {s}");
                source = s.source();
            }
            ExitCode::FAILURE
        }
    }
}
