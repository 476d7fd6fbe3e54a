use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "portray", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate portrait variations from a manifest.
    Generate(GenerateArgs),
    /// Print per-category candidate counts for a manifest.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the manifest's output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the manifest's variation count.
    #[arg(long)]
    count: Option<u32>,

    /// Override the manifest's RNG seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut manifest = portray::Manifest::from_path(&args.in_path)?;
    if let Some(out) = args.out {
        manifest.output_dir = out;
    }
    if let Some(count) = args.count {
        manifest.variations = count;
    }
    if let Some(seed) = args.seed {
        manifest.seed = Some(seed);
    }
    manifest.validate()?;

    let store = portray::PreparedLayerStore::prepare(&manifest)?;
    let mut rng = match manifest.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let stats = portray::generate_variations(
        &store,
        &manifest.output_dir,
        manifest.backing,
        manifest.variations,
        &mut rng,
    )?;

    eprintln!(
        "wrote {} variations to {}",
        stats.variations_written,
        manifest.output_dir.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let manifest = portray::Manifest::from_path(&args.in_path)?;
    let store = portray::PreparedLayerStore::prepare(&manifest)?;
    for (kind, count) in store.candidate_counts() {
        println!("{kind}: {count} candidates");
    }
    Ok(())
}
