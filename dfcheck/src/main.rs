use clap::Parser;
use std::path::PathBuf;
use workflow::config::CheckConfig;
use workflow::runner::{FileStatus, Runner};

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Checks detection-format JSON files")]
struct Args {
    /// Files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Load check settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop at the first file that fails
    #[arg(long, default_value_t = false)]
    fail_fast: bool,
    /// Print every validation error instead of a count
    #[arg(long, default_value_t = false)]
    list_errors: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        let mut config = CheckConfig::load(path)?;
        config.fail_fast |= args.fail_fast;
        config.list_errors |= args.list_errors;
        config
    } else {
        CheckConfig::from_args(args.fail_fast, args.list_errors)
    };

    let runner = Runner::new(config);
    let result = runner.execute(&args.paths)?;

    for report in &result.reports {
        match &report.status {
            FileStatus::Valid => println!("ok      {} ({:?})", report.path.display(), report.format),
            FileStatus::Invalid(errors) => {
                println!(
                    "invalid {} ({:?}): {} error(s)",
                    report.path.display(),
                    report.format,
                    errors.len()
                );
                if runner.list_errors() {
                    for error in errors {
                        println!("        - {}", error);
                    }
                }
            }
            FileStatus::Unreadable(reason) => {
                println!("error   {}: {}", report.path.display(), reason)
            }
        }
    }

    let counts = result.counts;
    println!(
        "checked {}, valid {}, invalid {}, unreadable {}",
        counts.checked(),
        counts.valid,
        counts.invalid,
        counts.unreadable
    );

    if counts.failures() > 0 {
        anyhow::bail!("{} of {} files failed", counts.failures(), counts.checked());
    }
    Ok(())
}
