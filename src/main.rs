use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tessera::models::{FormatName, MosaicConfig, CONFIG_ENV};
use tessera::services::{FsStore, MosaicService};
use tessera_core::{plan_tiles, Anchor};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Tessera - turn photos into RMS-averaged square-tile mosaics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image as a mosaic
    Render(RenderArgs),
    /// Print the tile grid for a working square without rendering
    Plan {
        /// Working square side length in pixels
        #[arg(short, long)]
        side: u32,

        /// Tile side length in pixels
        #[arg(short, long, default_value_t = 100)]
        tile_size: u32,

        /// List every tile origin in processing order
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Input image (JPEG or PNG)
    input: PathBuf,

    /// Output file; the extension picks the format unless --format is set
    #[arg(short, long, default_value = "NewHighRes.jpg")]
    output: PathBuf,

    /// Tile side length in pixels (default 100)
    #[arg(short, long)]
    tile_size: Option<u32>,

    /// Placement of the working square inside the input
    #[arg(short, long, value_enum)]
    anchor: Option<AnchorArg>,

    /// Working square side; defaults to the smaller input dimension
    #[arg(long)]
    side: Option<u32>,

    /// Average tiles on a single thread
    #[arg(long)]
    sequential: bool,

    /// JPEG quality, 1-100 (default 75)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Output format, overriding the output extension
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// YAML config file (falls back to $TESSERA_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    TopLeft,
    Centered,
}

impl From<AnchorArg> for Anchor {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::TopLeft => Anchor::TopLeft,
            AnchorArg::Centered => Anchor::Centered,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Jpeg,
    Png,
}

impl From<FormatArg> for FormatName {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpeg => FormatName::Jpeg,
            FormatArg::Png => FormatName::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => run_render_command(args),
        Some(Commands::Plan {
            side,
            tile_size,
            list,
        }) => run_plan_command(side, tile_size, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render one image to disk
fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    init_tracing("tessera=info");

    let config_path = args
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let mut config = MosaicConfig::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    // Command line flags win over the config file
    if let Some(tile_size) = args.tile_size {
        config.tile_size = tile_size;
    }
    if let Some(anchor) = args.anchor {
        config.anchor = anchor.into();
    }
    if args.side.is_some() {
        config.side = args.side;
    }
    if args.sequential {
        config.parallel = false;
    }
    if let Some(quality) = args.quality {
        config.jpeg_quality = quality;
    }
    if let Some(format) = args.format {
        config.format = Some(format.into());
    }
    config.validate().context("Invalid settings")?;

    let service = MosaicService::new(FsStore::new(), config);
    let summary = service
        .run(&args.input, &args.output)
        .with_context(|| format!("Failed to render {}", args.input.display()))?;

    println!(
        "Image size: {}x{}",
        summary.input_width, summary.input_height
    );
    println!(
        "Mosaic: {}x{} from {} tiles of {}px",
        summary.report.region.side,
        summary.report.region.side,
        summary.report.tile_count,
        summary.report.tile_size
    );
    println!(
        "Saved {} ({} bytes) in {:.2?}",
        args.output.display(),
        summary.bytes_written,
        summary.elapsed
    );

    Ok(())
}

/// Show how a working square would be tiled
fn run_plan_command(side: u32, tile_size: u32, list: bool) -> anyhow::Result<()> {
    init_tracing("tessera=warn");

    let plan = plan_tiles(side, tile_size)
        .with_context(|| format!("Cannot tile a {side}px square with {tile_size}px tiles"))?;

    println!("Working square: {side}x{side}");
    println!(
        "Tiles: {} ({} per side, {}px each)",
        plan.len(),
        plan.tiles_per_side(),
        plan.tile_size()
    );

    if list {
        for (index, tile) in plan.iter().enumerate() {
            println!("  {index:>6}  {}", tile.origin);
        }
    }

    Ok(())
}

/// Display version and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();
    let log_filter = std::env::var("RUST_LOG").ok();

    println!("Tessera v{VERSION}");
    println!("RMS-averaged square-tile mosaics\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG       = {}",
        log_filter.as_deref().unwrap_or("tessera=info (default)")
    );

    println!("\nSettings:");
    let config = match config_file {
        Some(ref path) => match MosaicConfig::load(Path::new(path)) {
            Ok(config) => {
                println!("  Source:       {path}");
                config
            }
            Err(e) => {
                println!("  Source:       defaults ({e})");
                MosaicConfig::default()
            }
        },
        None => {
            println!("  Source:       defaults");
            MosaicConfig::default()
        }
    };
    println!("  Tile size:    {}px", config.tile_size);
    println!("  Anchor:       {:?}", config.anchor);
    match config.side {
        Some(side) => println!("  Side:         {side}px"),
        None => println!("  Side:         smaller input dimension"),
    }
    println!(
        "  Parallel:     {}",
        if config.parallel { "yes" } else { "no" }
    );
    println!("  JPEG quality: {}", config.jpeg_quality);
    match config.format {
        Some(format) => println!("  Format:       {format:?}"),
        None => println!("  Format:       from output extension"),
    }

    println!("\nCommands:");
    println!("  tessera render <INPUT> -o <OUTPUT>   Render a mosaic");
    println!("  tessera plan --side <N> -t <SIZE>    Show the tile grid");
    println!("  tessera --help                       Show all options");
}
