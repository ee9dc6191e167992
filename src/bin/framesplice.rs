use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "framesplice", version)]
struct Cli {
    /// Log pipeline decisions at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace leading/trailing frames and write the result as PNG frames.
    Splice(SpliceArgs),
    /// Print the fitted replacement counts for a sequence length as JSON.
    Plan(PlanArgs),
    /// Print the node descriptor as JSON.
    Describe,
}

#[derive(Parser, Debug)]
struct SpliceArgs {
    /// JSON job file; flags given alongside it override its values.
    #[arg(long)]
    job: Option<PathBuf>,

    /// Main sequence (image file or directory of images).
    #[arg(long)]
    main: Option<PathBuf>,

    /// Donor for the leading frames.
    #[arg(long)]
    start: Option<PathBuf>,

    /// Donor for the trailing frames.
    #[arg(long)]
    end: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    counts: CountArgs,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Main sequence length.
    #[arg(long)]
    frames: usize,

    #[command(flatten)]
    counts: CountArgs,
}

#[derive(clap::Args, Debug)]
struct CountArgs {
    /// Leading frames to replace (default 1).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10_000))]
    start_frames: Option<u32>,

    /// Trailing frames to replace (default 1).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=10_000))]
    end_frames: Option<u32>,
}

impl CountArgs {
    fn apply(&self, mut params: framesplice::SpliceParams) -> framesplice::SpliceParams {
        if let Some(v) = self.start_frames {
            params.start_frames = v;
        }
        if let Some(v) = self.end_frames {
            params.end_frames = v;
        }
        params
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Splice(args) => cmd_splice(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Describe => cmd_describe(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "framesplice=debug"
    } else {
        "framesplice=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_job(args: SpliceArgs) -> anyhow::Result<framesplice::SpliceJob> {
    let base = match &args.job {
        Some(path) => Some(
            framesplice::SpliceJob::from_json_file(path)
                .with_context(|| format!("load job '{}'", path.display()))?,
        ),
        None => None,
    };

    let pick = |flag: Option<PathBuf>, from_job: Option<PathBuf>, name: &str| {
        flag.or(from_job)
            .with_context(|| format!("--{name} is required when no --job file provides it"))
    };

    let params = args
        .counts
        .apply(base.as_ref().map(|j| j.params).unwrap_or_default());
    Ok(framesplice::SpliceJob {
        main: pick(args.main, base.as_ref().map(|j| j.main.clone()), "main")?,
        start: pick(args.start, base.as_ref().map(|j| j.start.clone()), "start")?,
        end: pick(args.end, base.as_ref().map(|j| j.end.clone()), "end")?,
        out: pick(args.out, base.as_ref().map(|j| j.out.clone()), "out")?,
        params,
    })
}

fn cmd_splice(args: SpliceArgs) -> anyhow::Result<()> {
    let job = build_job(args)?;
    let report = framesplice::run_job(&job)?;
    eprintln!(
        "wrote {} frames to {} (start {}, end {})",
        report.written.len(),
        job.out.display(),
        report.plan.counts.start,
        report.plan.counts.end
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let params = args.counts.apply(framesplice::SpliceParams::default());
    let plan = framesplice::plan_splice(args.frames, params)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn cmd_describe() -> anyhow::Result<()> {
    println!(
        "{}",
        framesplice::NodeDescriptor::replace_first_last_frames().to_json_pretty()?
    );
    Ok(())
}
