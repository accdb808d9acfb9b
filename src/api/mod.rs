//! High-level entry points: process a single image file, or a whole
//! directory over a bounded worker pool. Prefer these over the low-level
//! processing modules when embedding.
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::core::params::ClaheParams;
use crate::core::processing::pipeline;
use crate::error::{Error, Result};
use crate::io::{decode_image, encode_image};

/// Batch processing report.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    fn merge(self, other: BatchReport) -> BatchReport {
        BatchReport {
            processed: self.processed + other.processed,
            skipped: self.skipped + other.skipped,
            errors: self.errors + other.errors,
        }
    }
}

/// List the regular files of `input_dir` in sorted order, so runs are
/// reproducible. A missing directory is a fatal error.
pub fn list_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::InvalidInputDirectory {
            path: input_dir.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Process one image file to `output`: decode, normalize depth, equalize the
/// luminance, recombine, encode.
pub fn process_file_to_path(input: &Path, output: &Path, params: &ClaheParams) -> Result<()> {
    let decoded = decode_image(input)?;
    info!("the input image {} is a {}", input.display(), decoded.kind());
    let processed = pipeline::process_image(decoded, params);
    encode_image(&processed, output)
}

/// Process every file in `input_dir` into `output_dir` under the same base
/// filename, using a worker pool of exactly `params.workers` threads. Each
/// image is independent: decode failures and unsupported depths are skipped,
/// encode failures counted, and neither aborts sibling images.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ClaheParams,
) -> Result<BatchReport> {
    let files = list_input_files(input_dir)?;
    std::fs::create_dir_all(output_dir)?;

    let workers = params.workers.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::Processing(format!("worker pool init failed: {e}")))?;

    info!(
        "batch start: {} file(s), {} worker(s), clip limit {}, window {}",
        files.len(),
        workers,
        params.clip_limit,
        params.window_size
    );

    let report = pool.install(|| {
        files
            .par_iter()
            .map(|input| {
                let Some(name) = input.file_name() else {
                    return BatchReport {
                        skipped: 1,
                        ..BatchReport::default()
                    };
                };
                let output = output_dir.join(name);
                match process_file_to_path(input, &output, params) {
                    Ok(()) => BatchReport {
                        processed: 1,
                        ..BatchReport::default()
                    },
                    Err(e @ (Error::Decode { .. } | Error::UnsupportedSampleDepth { .. })) => {
                        warn!("skipping {}: {}", input.display(), e);
                        BatchReport {
                            skipped: 1,
                            ..BatchReport::default()
                        }
                    }
                    Err(e) => {
                        warn!("error processing {}: {}", input.display(), e);
                        BatchReport {
                            errors: 1,
                            ..BatchReport::default()
                        }
                    }
                }
            })
            .reduce(BatchReport::default, BatchReport::merge)
    });

    info!(
        "batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
