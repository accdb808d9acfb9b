use tracing::info;

use clahe::api::process_directory_to_path;
use clahe::{ClaheParams, WindowSize};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if !args.input_dir.is_dir() {
        return Err(AppError::MissingInputDirectory {
            path: args.input_dir,
        }
        .into());
    }
    if args.clip_limit < 0.0 {
        return Err(AppError::NegativeClipLimit {
            value: args.clip_limit,
        }
        .into());
    }
    if args.window_size == 0 {
        return Err(AppError::ZeroWindowSize {
            value: args.window_size,
        }
        .into());
    }
    if args.thread_count == 0 {
        return Err(AppError::ZeroThreadCount {
            value: args.thread_count,
        }
        .into());
    }

    info!("input images directory: {}", args.input_dir.display());
    info!("output images directory: {}", args.output_dir.display());

    let params = ClaheParams {
        clip_limit: args.clip_limit,
        window_size: WindowSize::square(args.window_size),
        workers: args.thread_count,
    };

    // Per-image failures are logged and counted inside the batch; only setup
    // errors propagate to a non-zero exit.
    process_directory_to_path(&args.input_dir, &args.output_dir, &params)?;

    Ok(())
}
