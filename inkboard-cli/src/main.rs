use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use inkboard::{
    Canvas, Color, DashboardService, GridSpec, LayoutConfig, Overrides, ServiceOptions,
    WeatherProviderOptions,
};

#[derive(Parser, Debug)]
#[command(name = "inkboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a dashboard layout as a PNG.
    Render(RenderArgs),
    /// Write the built-in default layout JSON to a file.
    DumpLayout(DumpLayoutArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Layout name, resolved as `<layout-dir>/<name>.json`.
    #[arg(long, default_value = "weather")]
    layout: String,

    /// Directory of layout JSON files.
    #[arg(long, default_value = "layouts")]
    layout_dir: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override forecast latitude.
    #[arg(long)]
    lat: Option<f64>,

    /// Override forecast longitude.
    #[arg(long)]
    lon: Option<f64>,

    /// Override forecast timezone.
    #[arg(long)]
    timezone: Option<String>,

    /// Serve synthetic weather data without network IO.
    #[arg(long, default_value_t = false)]
    mock: bool,

    /// TTF/OTF font file used for text painting.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Weather cache directory.
    #[arg(long, default_value = "cache")]
    cache_dir: PathBuf,

    /// Draw grid calibration rules over the dashboard.
    #[arg(long, default_value_t = false)]
    grid: bool,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Canvas background color.
    #[arg(long, default_value = "white")]
    background: String,
}

#[derive(Parser, Debug)]
struct DumpLayoutArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args).await,
        Command::DumpLayout(args) => cmd_dump_layout(args),
    }
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let background: Color = args
        .background
        .parse()
        .with_context(|| format!("parse background color '{}'", args.background))?;

    let service = DashboardService::new(ServiceOptions {
        layout_dir: args.layout_dir,
        canvas: Canvas {
            width: args.width,
            height: args.height,
        },
        background,
        grid: GridSpec::default(),
        font_path: args.font,
        weather: WeatherProviderOptions {
            cache_dir: args.cache_dir,
            mock_mode: args.mock,
            ..WeatherProviderOptions::default()
        },
        grid_overlay: args.grid,
        ..ServiceOptions::default()
    });

    let overrides = Overrides {
        latitude: args.lat,
        longitude: args.lon,
        timezone: args.timezone,
    };
    let bytes = service.generate(&args.layout, &overrides).await?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump_layout(args: DumpLayoutArgs) -> anyhow::Result<()> {
    let layout = LayoutConfig::default_dashboard();
    let json = serde_json::to_string_pretty(&layout).context("serialize default layout")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write layout '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
