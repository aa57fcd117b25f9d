// src/itemlists.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::geometry::Vec3;
use crate::material::{Cuboid, Items};
use crate::shapes::{validate, Validate};
use crate::volume::Volume;

/// Writes a row, profile or cuboid as pretty printed JSON.
pub fn save_items<T>(items: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize + Validate + ?Sized,
{
    let path = path.as_ref();
    let rank = validate(items);
    if rank == 0 {
        return Err(Error::NotRectangular);
    }

    let writer = BufWriter::new(File::create(path)?);
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    items.serialize(&mut serializer)?;
    serializer.into_inner().flush()?;

    info!("saved {rank} dimensional items to {}", path.display());
    Ok(())
}

/// Reads items saved by [`save_items`]. With `dimensions`, anything but a
/// list of that rank is an error.
pub fn load_items(path: impl AsRef<Path>, dimensions: Option<usize>) -> Result<Items> {
    let path = path.as_ref();
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;

    let rank = validate(&value);
    if rank == 0 {
        return Err(Error::Format(format!(
            "{} does not hold a row, profile or cuboid of items",
            path.display()
        )));
    }
    if let Some(expected) = dimensions.filter(|&d| d != rank) {
        return Err(Error::RankMismatch {
            expected,
            found: rank,
        });
    }

    info!("loaded {rank} dimensional items from {}", path.display());
    let items = match rank {
        1 => Items::Row(serde_json::from_value(value)?),
        2 => Items::Profile(serde_json::from_value(value)?),
        _ => Items::Cuboid(serde_json::from_value(value)?),
    };
    Ok(items)
}

/// Reads every block of `volume` from the world, indexed `[x][y][z]` from
/// its start.
pub fn grab<C: Client + ?Sized>(client: &mut C, volume: &Volume) -> Result<Cuboid> {
    let [nx, ny, nz] = volume.size.dims();

    let mut cuboid = Vec::with_capacity(nx);
    for x in 0..nx {
        let mut profile = Vec::with_capacity(ny);
        for y in 0..ny {
            let row = (0..nz)
                .map(|z| client.get_block(volume.start + Vec3::from([x, y, z])))
                .collect::<Result<Vec<_>>>()?;
            profile.push(row);
        }
        cuboid.push(profile);
    }
    Ok(cuboid)
}
