use serde::{Deserialize, Serialize};

use crate::types::WindowSize;

/// Processing parameters suitable for config files and embedding callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaheParams {
    /// Clip limit relative to the average histogram bin height;
    /// `<= 0` disables contrast limiting entirely
    pub clip_limit: f64,
    /// Tile grid subdividing each image
    pub window_size: WindowSize,
    /// Worker threads for batch processing
    pub workers: usize,
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: 2.0,
            window_size: WindowSize::square(8),
            workers: 1,
        }
    }
}
