use clap::{Parser, Subcommand};
use log::LevelFilter;

use trailcam::core::init_with_level;
use trailcam::extract::{self, ExtractConfig};

#[derive(Parser)]
#[command(name = "trailcam", about = "Trail-camera training-data tools", version)]
struct Cli {
    /// Log more (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cut annotated sequences into labeled training tiles.
    Extract {
        /// Annotation-session JSON file.
        #[arg(long, default_value = "animals.json")]
        session: String,

        /// Output directory for the `true/` and `false/` tile folders.
        #[arg(long)]
        out_dir: String,

        /// Tile width in pixels.
        #[arg(long, default_value_t = 224)]
        block_width: u32,

        /// Tile height in pixels.
        #[arg(long, default_value_t = 224)]
        block_height: u32,

        /// Chance of keeping any one negative tile.
        #[arg(long, default_value_t = 0.075)]
        negative_keep: f64,

        /// Skip the rotated/flipped copies of positive tiles.
        #[arg(long)]
        no_augment: bool,
    },
    /// Print a summary of an annotation-session file.
    Stats {
        /// Annotation-session JSON file.
        #[arg(long, default_value = "animals.json")]
        session: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_with_level(level)?;

    match cli.command {
        Command::Extract {
            session,
            out_dir,
            block_width,
            block_height,
            negative_keep,
            no_augment,
        } => {
            let mut config = ExtractConfig::new(session, out_dir);
            config.block = trailcam::Size::new(block_width, block_height);
            config.negative_keep_probability = negative_keep;
            config.augment_positives = !no_augment;

            let stats = extract::run(&config)?;
            println!(
                "{} groups, {} images: {} positive / {} negative tiles ({} skipped)",
                stats.groups,
                stats.images_processed,
                stats.tiles_saved_true,
                stats.tiles_saved_false,
                stats.images_skipped
            );
        }
        Command::Stats { session } => {
            let collection = trailcam::ImagesCollection::load_json(session)?;
            let tagged = collection.images.iter().filter(|i| i.tagged).count();
            let regions: usize = collection.images.iter().map(|i| i.regions.len()).sum();
            println!(
                "{} images ({} tagged), {} regions, max viewed {}",
                collection.images.len(),
                tagged,
                regions,
                collection.max_viewed
            );
        }
    }

    Ok(())
}
