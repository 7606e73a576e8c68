//! U-Masonry command-line front end.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_masonry_core::{
    EngineConfig, Layout, LayoutDirection, LayoutEngine, LayoutSummary, Parameters, Pattern,
    DEFAULT_SEED,
};
use u_masonry_export::ExportDocument;
use u_masonry_preset::PresetLoader;

#[derive(Parser)]
#[command(name = "masonry")]
#[command(about = "Procedural stone wall layouts")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one layout
    Generate {
        #[command(flatten)]
        wall: WallArgs,

        /// Generator seed
        #[arg(short, long, default_value_t = DEFAULT_SEED, conflicts_with = "random_seed")]
        seed: u64,

        /// Pick a random seed instead
        #[arg(long)]
        random_seed: bool,

        /// Write the export JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every stone
        #[arg(long)]
        list: bool,
    },

    /// List presets found in a directory
    Presets {
        /// Directory holding preset files
        dir: PathBuf,
    },

    /// Generate layouts for a range of seeds in parallel
    Sweep {
        #[command(flatten)]
        wall: WallArgs,

        /// First seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        from: u64,

        /// Number of seeds
        #[arg(short = 'n', long, default_value = "8")]
        seeds: u64,
    },
}

/// Parameter sources shared by the layout commands. Explicit flags override
/// the preset, which overrides the defaults.
#[derive(Args)]
struct WallArgs {
    /// Preset file to start from
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Wall width
    #[arg(long)]
    wall_width: Option<f64>,

    /// Wall height
    #[arg(long)]
    wall_height: Option<f64>,

    /// Smallest stone width
    #[arg(long)]
    min_width: Option<f64>,

    /// Largest stone width
    #[arg(long)]
    max_width: Option<f64>,

    /// Smallest course height
    #[arg(long)]
    min_height: Option<f64>,

    /// Largest course height
    #[arg(long)]
    max_height: Option<f64>,

    /// Gap between stones in a course
    #[arg(long)]
    joint_width: Option<f64>,

    /// Gap between courses
    #[arg(long)]
    joint_height: Option<f64>,

    /// Size variation ratio (0-1)
    #[arg(short, long)]
    randomness: Option<f64>,

    /// Coursing pattern
    #[arg(long, value_enum)]
    pattern: Option<PatternArg>,

    /// Course orientation
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Stop before placing more than this many stones
    #[arg(long)]
    max_stones: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PatternArg {
    /// Running bond
    Running,
    /// Stack bond
    Stack,
    /// Randomized coursing
    Random,
}

impl From<PatternArg> for Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Running => Pattern::Running,
            PatternArg::Stack => Pattern::Stack,
            PatternArg::Random => Pattern::Random,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Horizontal courses
    Horizontal,
    /// Vertical columns
    Vertical,
}

impl From<DirectionArg> for LayoutDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Horizontal => LayoutDirection::Horizontal,
            DirectionArg::Vertical => LayoutDirection::Vertical,
        }
    }
}

impl WallArgs {
    fn parameters(&self) -> anyhow::Result<Parameters> {
        let mut params = match &self.preset {
            Some(path) => {
                let preset = PresetLoader::new()
                    .parse_file(path)
                    .with_context(|| format!("loading preset {}", path.display()))?;
                if !preset.ignored_keys.is_empty() {
                    log::warn!(
                        "Preset {} has unrecognized keys: {}",
                        preset.name,
                        preset.ignored_keys.join(", ")
                    );
                }
                log::info!("Using preset {}", preset.name);
                preset.parameters
            }
            None => Parameters::default(),
        };

        let overrides = [
            (&mut params.wall_width, self.wall_width),
            (&mut params.wall_height, self.wall_height),
            (&mut params.stone_min_width, self.min_width),
            (&mut params.stone_max_width, self.max_width),
            (&mut params.stone_min_height, self.min_height),
            (&mut params.stone_max_height, self.max_height),
            (&mut params.joint_width, self.joint_width),
            (&mut params.joint_height, self.joint_height),
            (&mut params.randomness, self.randomness),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
        if let Some(pattern) = self.pattern {
            params.pattern = pattern.into();
        }
        if let Some(direction) = self.direction {
            params.layout_direction = direction.into();
        }

        Ok(params)
    }

    fn engine_config(&self, seed: u64) -> EngineConfig {
        let config = EngineConfig::default().with_seed(seed);
        match self.max_stones {
            Some(max) => config.with_max_stones(max),
            None => config,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(params: &Parameters, layout: &Layout) {
    let summary = LayoutSummary::from(layout);
    println!(
        "Wall {} x {} ({}, {})",
        params.wall_width, params.wall_height, params.pattern, params.layout_direction
    );
    println!("==========================");
    println!("  Seed:        {}", summary.seed);
    println!("  Stones:      {}", summary.stone_count);
    println!("  Courses:     {}", summary.row_count);
    println!("  Total area:  {:.1}", summary.total_area);
    println!("  Coverage:    {:.1}%", summary.utilization_percent);
    if summary.truncated {
        println!("  Truncated:   yes (safety limit reached)");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            wall,
            seed,
            random_seed,
            output,
            list,
        } => {
            let params = wall.parameters()?;
            let seed = if random_seed {
                rand::random::<u32>() as u64
            } else {
                seed
            };

            let engine = LayoutEngine::new(wall.engine_config(seed));
            let layout = engine.generate(&params)?;
            print_summary(&params, &layout);

            if list {
                println!();
                for stone in &layout.stones {
                    println!(
                        "  {:>11}  x={:>9.1} y={:>9.1}  {:>7.1} x {:>7.1}",
                        stone.id, stone.x, stone.y, stone.width, stone.height
                    );
                }
            }

            if let Some(path) = output {
                ExportDocument::now(&params, &layout)
                    .write_to(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nExport saved to: {}", path.display());
            }
        }

        Commands::Presets { dir } => {
            let presets = PresetLoader::new()
                .load_dir(&dir)
                .with_context(|| format!("reading presets from {}", dir.display()))?;
            if presets.is_empty() {
                println!("No presets in {}", dir.display());
            }
            for preset in presets {
                let p = &preset.parameters;
                println!(
                    "  - {:<24} {} x {}  stones {}-{} x {}-{}  {} / {}",
                    preset.name,
                    p.wall_width,
                    p.wall_height,
                    p.stone_min_width,
                    p.stone_max_width,
                    p.stone_min_height,
                    p.stone_max_height,
                    p.pattern,
                    p.layout_direction
                );
            }
        }

        Commands::Sweep { wall, from, seeds } => {
            if seeds == 0 {
                bail!("--seeds must be at least 1");
            }
            let params = wall.parameters()?;
            let seed_list: Vec<u64> = (from..from.saturating_add(seeds)).collect();
            let engine = LayoutEngine::new(wall.engine_config(from));

            println!(
                "{:>12} {:>8} {:>8} {:>10} {:>10}",
                "seed", "stones", "courses", "coverage", "truncated"
            );
            for result in engine.generate_many(&params, &seed_list) {
                let layout = result?;
                println!(
                    "{:>12} {:>8} {:>8} {:>10} {:>10}",
                    layout.seed,
                    layout.stone_count,
                    layout.row_count,
                    layout.utilization_percent(),
                    layout.truncated
                );
            }
        }
    }

    Ok(())
}
