use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use workflow::config::RunConfig;
use workflow::input::load_document;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Pairwise H-score matrix for the rows of a numeric matrix")]
struct Args {
    /// Input matrix: `.json` (rows or {labels, rows}) or delimited text
    input: PathBuf,
    /// Write the JSON report here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Load run settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Spread the pairwise triangle over a worker pool
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Worker count for parallel mode (implies --parallel)
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .with_overrides(args.parallel, args.threads, args.pretty);

    info!("loading matrix from {}", args.input.display());
    let document = load_document(&args.input)?;

    let runner = Runner::new(config);
    let report = runner.execute(&document)?;
    let rendered = runner.render(&report)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, rendered + "\n")
                .with_context(|| format!("writing report {}", path.display()))?;
            info!(
                "wrote {}x{} H-score matrix to {}",
                report.rows,
                report.rows,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
