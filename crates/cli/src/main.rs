use anyhow::{anyhow, Context};
use config::{Config, File};
use hexnav::{timed, GridConfig, Hex, HexGrid, NavConfig, Navigator, Point2};
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use simple_logger::SimpleLogger;
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};
use validator::Validate;

/// CLI for running hex grid queries via the Hexnav library. All output is
/// printed to stdout as JSON. Hexes are written as `q,r` or `q,r,s`.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexnav",
    global_settings = &[AppSettings::AllowLeadingHyphen]
)]
struct Opt {
    /// Path to a config file that defines the grid and layout. Supported
    /// formats: JSON, TOML. If omitted, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON grid file, as printed by the `export` command. If
    /// given, this grid is used instead of generating one from the config
    #[structopt(short, long)]
    grid: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Find the cheapest path between two hexes. Prints an empty list if
    /// there is no path
    Path { from: Hex, to: Hex },
    /// Get every hex on the straight line between two hexes
    Line { from: Hex, to: Hex },
    /// Get every hex within some distance of a center hex, excluding the
    /// center
    Range { center: Hex, radius: u32 },
    /// Get every hex exactly some distance from a center hex
    Ring { center: Hex, radius: u32 },
    /// Get the adjacent hexes that exist in the grid
    Neighbors { hex: Hex },
    /// Get the number of steps between two hexes
    Distance { a: Hex, b: Hex },
    /// Find the hex under a 2D world position
    Locate { x: f64, y: f64 },
    /// Get the 3D world location of a hex's center
    Position { hex: Hex },
    /// Print the entire grid as JSON, which can be loaded back with `--grid`
    Export,
}

/// Everything that can be defined in a config file
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
struct CliConfig {
    /// Shape and terrain of the generated grid
    #[validate]
    grid: GridConfig,
    /// Tile geometry and search tuning
    #[validate]
    nav: NavConfig,
}

fn load_config(config_path: &Path) -> anyhow::Result<CliConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    let config: CliConfig =
        settings.try_into().context("error reading config")?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &CliConfig) -> anyhow::Result<()> {
    config.validate().context("invalid cli config")?;
    Ok(())
}

fn load_grid(grid_path: &Path) -> anyhow::Result<HexGrid> {
    let json = fs::read_to_string(grid_path).with_context(|| {
        format!("error opening grid file {:?}", grid_path)
    })?;
    let grid = HexGrid::from_json(&json)?;
    info!("Loaded grid with {} tiles from {:?}", grid.len(), grid_path);
    Ok(grid)
}

/// Hexes are printed as `[q, r, s]` arrays, which is more compact than the
/// serde representation and easier to read at a glance
fn hex_json(hex: Hex) -> Value {
    json!([hex.q(), hex.r(), hex.s()])
}

fn hexes_json(hexes: &[Hex]) -> Value {
    hexes.iter().copied().map(hex_json).collect()
}

/// Run a single command against the navigator, producing its JSON output
fn run_command(
    navigator: &Navigator<HexGrid>,
    command: Command,
) -> anyhow::Result<Value> {
    let output = match command {
        Command::Path { from, to } => {
            hexes_json(&navigator.shortest_path(from, to))
        }
        Command::Line { from, to } => hexes_json(&navigator.line(from, to)),
        Command::Range { center, radius } => {
            hexes_json(&navigator.range(center, radius))
        }
        Command::Ring { center, radius } => {
            hexes_json(&navigator.ring(center, radius))
        }
        Command::Neighbors { hex } => hexes_json(&navigator.neighbors(hex)),
        Command::Distance { a, b } => json!(navigator.distance(a, b)),
        Command::Locate { x, y } => {
            hex_json(navigator.world_to_hex(Point2::new(x, y)))
        }
        Command::Position { hex } => {
            serde_json::to_value(navigator.hex_to_world_location(hex))?
        }
        Command::Export => serde_json::from_str(&navigator.grid().to_json()?)?,
    };
    Ok(output)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => CliConfig::default(),
    };
    let grid = match &opt.grid {
        // Load existing grid from a file
        Some(grid_path) => load_grid(grid_path)?,
        None => HexGrid::from_config(&config.grid)?,
    };
    let navigator = Navigator::new(config.nav, grid)?;

    let label = format!("Running {:?}", opt.command);
    let output = timed!(
        label,
        log::Level::Info,
        run_command(&navigator, opt.command)?
    );
    println!("{}", output);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
