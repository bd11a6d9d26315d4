use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Log more (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reveal schedule of a page as JSON.
    Schedule(ScheduleArgs),
    /// Simulate a page session and print snapshots as JSON lines.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Stop at the first frame starting at or after this many seconds.
    #[arg(long, default_value_t = 3.0)]
    until: f64,

    /// Print one snapshot every N frames.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "folio_motion=debug",
        _ => "folio_motion=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_page_json(path: &Path) -> anyhow::Result<folio_motion::PageConfig> {
    let f = File::open(path).with_context(|| format!("open page '{}'", path.display()))?;
    let page = folio_motion::PageConfig::from_reader(BufReader::new(f))
        .with_context(|| "parse page JSON")?;
    page.validate()?;
    Ok(page)
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let page = read_page_json(&args.in_path)?;
    let plan = page.reveal_plan()?;
    let out = std::io::stdout().lock();
    serde_json::to_writer_pretty(out, &plan).with_context(|| "write schedule JSON")?;
    println!();
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    if !args.until.is_finite() || args.until < 0.0 {
        anyhow::bail!("--until must be a finite, non-negative number of seconds");
    }
    let page = read_page_json(&args.in_path)?;
    let layout = page.layout();
    let mut stage = folio_motion::Stage::new(&page)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    loop {
        let frame = stage.step(&layout)?;
        if frame.0 % args.every == 0 {
            serde_json::to_writer(&mut out, &stage.snapshot())
                .with_context(|| format!("write snapshot for frame {}", frame.0))?;
            writeln!(out)?;
        }
        if stage.now() + 1e-9 >= args.until {
            break;
        }
    }
    out.flush()?;

    tracing::info!(
        frames = stage.frame().0 + 1,
        settled = stage.is_settled(),
        "timeline finished"
    );
    Ok(())
}
