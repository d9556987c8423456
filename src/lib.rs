//! # Plasmapost
//!
//! A post-processor that turns CAM motion commands into G-code programs for
//! plasma cutting tables.
//!
//! ## Architecture
//!
//! Plasmapost is organized as a workspace with multiple crates:
//!
//! 1. **plasmapost-core** - Job data model, measurement systems, errors
//! 2. **plasmapost-settings** - Option resolution and saved post profiles
//! 3. **plasmapost-postprocessor** - Translation engine and torch handling
//! 4. **plasmapost** - Export orchestration and the command line binary
//!
//! ## Example
//!
//! ```no_run
//! use plasmapost::{export, Command, Job, MotionObject};
//!
//! let job = Job::new(vec![MotionObject::new("Profile", "Profile").with_commands(vec![
//!     Command::with_params("G0", [("X", 0.0), ("Y", 0.0)]),
//!     Command::with_params("G1", [("X", 10.0), ("F", 20.0)]),
//! ])]);
//! let gcode = export(&job, "part.nc", "--precision=2 --pierce-delay 0.8")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::Context;

pub use plasmapost_core::{
    Command, ConfigError, Error, FeedRateUnits, Job, MeasurementSystem, MotionObject, Parameters,
    TranslateError,
};
pub use plasmapost_postprocessor::{translate, PlasmaPostProcessor, PREVIEW_SIZE_LIMIT};
pub use plasmapost_settings::{PostConfig, PostOption, PostProfile, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Destination name meaning "do not write a file"
pub const STDOUT_DESTINATION: &str = "-";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so program text can go to stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Post-process `job` using options from a flat option string
///
/// The option string is resolved before anything is translated, so a bad
/// option never produces partial output. See [`export_with_config`] for the
/// destination handling.
pub fn export(job: &Job, destination: &str, option_string: &str) -> anyhow::Result<String> {
    let config = PostConfig::from_option_string(option_string)
        .with_context(|| format!("Invalid post-processor arguments: {}", option_string))?;
    export_with_config(job, destination, config)
}

/// Post-process `job` with an already resolved configuration
///
/// Stamps the header with the current local time, then writes the program
/// to `destination` unless it is [`STDOUT_DESTINATION`]. Returns the program
/// text either way.
pub fn export_with_config(
    job: &Job,
    destination: &str,
    config: PostConfig,
) -> anyhow::Result<String> {
    let config = config.with_timestamp(chrono::Local::now());
    let post = PlasmaPostProcessor::new(&config);
    let gcode = post.translate(&job.objects)?;

    if !post.should_preview(&gcode) {
        tracing::debug!("Preview not offered for this program");
    }

    if destination != STDOUT_DESTINATION {
        write_program(Path::new(destination), &gcode)?;
        tracing::info!("Wrote {} bytes to {}", gcode.len(), destination);
    }

    Ok(gcode)
}

fn write_program(path: &Path, gcode: &str) -> anyhow::Result<()> {
    std::fs::write(path, gcode)
        .with_context(|| format!("Failed to write G-code to {}", path.display()))
}
