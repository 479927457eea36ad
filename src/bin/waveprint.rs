use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng as _;
use tracing_subscriber::EnvFilter;

use waveprint::{ArtworkConfig, Preset, UniqueSuffix};

#[derive(Parser, Debug)]
#[command(name = "waveprint", version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one artwork and save it as a PNG.
    Render(RenderArgs),
    /// Render a batch of sharp artworks with randomized wave parameters.
    Random(RandomArgs),
    /// Print a preset as JSON, ready to edit and pass back via `--config`.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Artwork config JSON. Overrides `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in configuration to start from.
    #[arg(long, value_enum, default_value_t = PresetChoice::Bokeh)]
    preset: PresetChoice,

    /// Override the canvas resolution (`random` defaults to 300 unless `--config` is given).
    #[arg(long)]
    dpi: Option<u32>,

    /// Override the output directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Override the file name prefix.
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// How the saved file name is made unique.
    #[arg(long, value_enum)]
    suffix: Option<SuffixChoice>,

    /// Seed for the file name hash (entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct RandomArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of images to render.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Seed for wave parameters (entropy when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Preset to print.
    #[arg(long, value_enum, default_value_t = PresetChoice::Bokeh)]
    preset: PresetChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Bokeh,
    Lens,
}

impl From<PresetChoice> for Preset {
    fn from(c: PresetChoice) -> Self {
        match c {
            PresetChoice::Bokeh => Preset::Bokeh,
            PresetChoice::Lens => Preset::Lens,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SuffixChoice {
    Hash,
    Timestamp,
}

impl From<SuffixChoice> for UniqueSuffix {
    fn from(c: SuffixChoice) -> Self {
        match c {
            SuffixChoice::Hash => UniqueSuffix::Hash,
            SuffixChoice::Timestamp => UniqueSuffix::Timestamp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Random(args) => cmd_random(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(args: &CommonArgs) -> anyhow::Result<ArtworkConfig> {
    let mut config = match &args.config {
        Some(path) => ArtworkConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => Preset::from(args.preset).config(),
    };

    if let Some(dpi) = args.dpi {
        config.dpi = dpi;
    }
    if let Some(dir) = &args.out_dir {
        config.output.directory = dir.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.output.prefix = prefix.clone();
    }
    config.validate().context("invalid artwork config")?;
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> rand_pcg::Pcg64 {
    match seed {
        Some(s) => rand_pcg::Pcg64::seed_from_u64(s),
        None => rand_pcg::Pcg64::from_entropy(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.common)?;
    if let Some(suffix) = args.suffix {
        config.output.suffix = suffix.into();
    }

    let mut rng = make_rng(args.seed);
    let path = waveprint::render_and_save(&config, &mut rng).context("render artwork")?;

    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let mut config = load_config(&args.common)?;
    if args.common.dpi.is_none() && args.common.config.is_none() {
        config.dpi = waveprint::RANDOM_DPI;
    }
    let mut rng = make_rng(args.seed);
    let paths = waveprint::render_random_batch(&config, args.count, &mut rng)
        .context("render random batch")?;

    for path in &paths {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = Preset::from(args.preset).config();
    let json = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{json}");
    Ok(())
}
