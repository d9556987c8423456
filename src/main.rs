use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use plasmapost::{export_with_config, init_logging, Job, PostConfig, PostProfile};
use plasmapost_settings::parse_option_string;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Args {
    /// JSON job file with the motion objects to post-process.
    #[arg()]
    job: PathBuf,

    /// Where to write the program. `-` prints it to stdout.
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Saved post profile (.toml or .json) applied before --args.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Post-processor option string, e.g. "--inches --precision=2".
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    args: String,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();

    let job = Job::load_from_file(&args.job)
        .with_context(|| format!("Failed to load job {}", args.job.display()))?;

    let mut options = match &args.profile {
        Some(path) => PostProfile::load_from_file(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?
            .into_options(),
        None => Vec::new(),
    };
    options.extend(
        parse_option_string(&args.args)
            .with_context(|| format!("Invalid post-processor arguments: {}", args.args))?,
    );
    let config = PostConfig::resolve(options)?;

    let gcode = export_with_config(&job, &args.output, config)?;
    if args.output == plasmapost::STDOUT_DESTINATION {
        print!("{}", gcode);
    }

    Ok(())
}
