use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rarity-plate", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single plate as a PNG.
    Render(RenderArgs),
    /// Render every entry of a batch file into a directory.
    Batch(BatchArgs),
    /// Print the default parameters as JSON.
    Defaults,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Shade rows (or batch entries) on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker count for `--parallel`. Defaults to the number of CPUs.
    #[arg(long)]
    threads: Option<usize>,
}

impl ThreadingArgs {
    fn to_threading(&self) -> rarity_plate::RenderThreading {
        rarity_plate::RenderThreading {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Plate parameters JSON. Missing fields use their defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the output edge length.
    #[arg(long)]
    size: Option<u32>,

    /// Also write `<stem>.import.json` with default import settings.
    #[arg(long)]
    sidecar: bool,

    #[command(flatten)]
    threading: ThreadingArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Batch JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for PNGs and sidecars.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    threading: ThreadingArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Defaults => cmd_defaults(),
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut params = match &args.params {
        Some(path) => rarity_plate::PlateParams::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        None => rarity_plate::PlateParams::default(),
    };
    if let Some(size) = args.size {
        params.size = size;
    }

    let grid = rarity_plate::generate_with(params, &args.threading.to_threading())?;
    rarity_plate::write_png(&grid, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    tracing::info!(path = %args.out.display(), size = grid.size(), "wrote plate");
    eprintln!("wrote {}", args.out.display());

    if args.sidecar {
        let sidecar = rarity_plate::write_sidecar(
            &rarity_plate::ImportSettings::default(),
            &args.out,
            grid.size(),
        )?;
        eprintln!("wrote {}", sidecar.display());
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let batch = rarity_plate::BatchFile::from_path(&args.in_path)
        .with_context(|| format!("load batch '{}'", args.in_path.display()))?;

    let outputs = rarity_plate::generate_batch(&batch, &args.threading.to_threading())?;
    let written = rarity_plate::write_batch(&outputs, &batch.import, &args.out_dir)
        .with_context(|| format!("write batch into '{}'", args.out_dir.display()))?;

    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    println!("{}", rarity_plate::PlateParams::default().to_json_pretty()?);
    Ok(())
}
