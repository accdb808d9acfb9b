use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clahe", version, about = "Batch CLAHE image enhancement")]
pub struct CliArgs {
    /// Directory containing the input images (any decodable format)
    pub input_dir: PathBuf,

    /// Destination directory; created if absent
    pub output_dir: PathBuf,

    /// Histogram clip limit relative to the average bin height;
    /// 0 disables contrast limiting
    pub clip_limit: f64,

    /// Tile grid size, used as both row and column count
    pub window_size: usize,

    /// Number of worker threads for the batch
    pub thread_count: usize,
}
