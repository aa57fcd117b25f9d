use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use worldbuilder::client::ScriptTransport;
use worldbuilder::itemlists::load_items;
use worldbuilder::shapes::{make_tunnel, polygon, Polygon, TunnelExtent, TunnelOptions};
use worldbuilder::{
    Anchor, Anchor3, CommandClient, Direction, FillMode, Item, Vec3, Volume, Walls, World,
};

mod preview;

use preview::Preview;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write the command script here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Also render a top-down PNG of the structure
    #[arg(long, global = true)]
    preview: Option<PathBuf>,

    /// Pixels per block when rendering the preview
    #[arg(long, default_value_t = 10, global = true)]
    scale: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extrude a saved profile along a straight line
    Tunnel {
        /// JSON profile written by save_items
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        start: Vec3,
        /// Last block of the tunnel, instead of --direction
        #[arg(long)]
        end: Option<Vec3>,
        #[arg(long)]
        direction: Option<Direction>,
        #[arg(long, default_value_t = 1)]
        length: usize,
        #[arg(long, default_value = "middle")]
        anchor: Anchor,
        /// Used for unset cells of the profile
        #[arg(long, default_value = "air")]
        default: Item,
        #[arg(long, default_value = "keep")]
        mode: FillMode,
        #[arg(long)]
        filter: Option<Item>,
    },

    /// Extrude a regular polygon from its centre
    Polygon {
        #[arg(long)]
        center: Vec3,
        #[arg(long)]
        height: usize,
        #[arg(long)]
        diameter: u32,
        #[arg(long, default_value_t = 4)]
        sides: usize,
        #[arg(long, default_value = "up")]
        direction: Direction,
        #[arg(long, default_value = "stone")]
        item: Item,
        #[arg(long)]
        fill_item: Option<Item>,
        #[arg(long, default_value = "keep")]
        mode: FillMode,
    },

    /// Fill a box, or just its walls
    #[command(name = "box")]
    Cuboid {
        #[arg(long)]
        position: Vec3,
        #[arg(long)]
        size: Option<Vec3>,
        /// Corner opposite --position, instead of --size
        #[arg(long)]
        corner: Option<Vec3>,
        #[arg(long, default_value = "bottom_nw")]
        anchor: Anchor3,
        #[arg(long, default_value = "stone")]
        item: Item,
        #[arg(long)]
        walls: bool,
        #[arg(long, default_value_t = 1)]
        thickness: u32,
    },
}

/// Runs the command against an in-memory world, so the script and the
/// preview come from the same calls.
fn build(command: Command) -> worldbuilder::Result<World> {
    let mut world = World::new();

    match command {
        Command::Tunnel {
            profile,
            start,
            end,
            direction,
            length,
            anchor,
            default,
            mode,
            filter,
        } => {
            let extent = TunnelExtent::from_parts(end, direction, length)?;
            let profile = load_items(&profile, Some(2))?.into_profile()?;
            let options = TunnelOptions {
                anchor,
                default,
                mode,
                filter,
            };
            make_tunnel(&mut world, &profile, start, extent, &options)?;
        }
        Command::Polygon {
            center,
            height,
            diameter,
            sides,
            direction,
            item,
            fill_item,
            mode,
        } => {
            let shape = Polygon {
                sides,
                diameter,
                height,
                direction,
                item,
                fill_item,
                offset: None,
                mode,
            };
            polygon(&mut world, center, &shape)?;
        }
        Command::Cuboid {
            position,
            size,
            corner,
            anchor,
            item,
            walls,
            thickness,
        } => {
            let volume = Volume::from_parts(position, size, corner, anchor)?;
            if walls {
                let walls = Walls {
                    thickness,
                    ..Walls::default()
                };
                volume.walls(&mut world, &item, walls)?;
            } else {
                volume.fill(&mut world, &item)?;
            }
        }
    }

    Ok(world)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let world = build(args.command)?;
    info!(
        "{} commands, {} blocks placed",
        world.history().len(),
        world.len()
    );

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut client = CommandClient::new(ScriptTransport::new(out));
    world.replay(&mut client)?;
    client.into_inner().into_inner().flush()?;

    if let Some(path) = &args.preview {
        Preview::new()?.save(&world, args.scale, path)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("wb: {e}");
        std::process::exit(1);
    }
}
