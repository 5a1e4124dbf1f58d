// src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ext_lines",
    version = crate::VERSION,
    about = "拡張子ごとの行数集計ツール",
    long_about = "Recursively scans ROOT and prints the total line count per extension.\n\
                  The extension of a file is everything from the first '.' in its full path.\n\
                  Directories under .git/ are skipped."
)]
pub struct Args {
    /// 走査するディレクトリ
    #[arg(env = "EXT_LINES_ROOT", default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// ログを詳細に出力 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level requested on the command line, if any.
    ///
    /// `None` means no `-v` was given and `RUST_LOG` decides.
    #[must_use]
    pub fn log_level(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}
