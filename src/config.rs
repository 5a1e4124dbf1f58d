// src/config.rs
use crate::args::Args;
pub use ext_lines_engine::config::Config;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(args.root)
    }
}
