// src/client/command.rs

use std::io::Write;

use log::debug;

use crate::client::{Client, FillMode};
use crate::error::{Error, Result};
use crate::geometry::Vec3;
use crate::material::Item;

/// Lowest block layer of the world. Loot spawned below it falls into the void.
const WORLD_BOTTOM: i64 = -64;

const NAMESPACE: &str = "minecraft:";

/// Carries one text command to the server and returns its reply.
pub trait Transport {
    fn send(&mut self, command: &str) -> Result<String>;
}

/// Speaks the server's text command protocol over a [`Transport`].
pub struct CommandClient<T> {
    transport: T,
}

impl<T: Transport> CommandClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn send(&mut self, command: String) -> Result<String> {
        debug!("> {command}");
        self.transport.send(&command)
    }
}

fn coords(position: Vec3) -> String {
    let [x, y, z] = position.block();
    format!("{x} {y} {z}")
}

impl<T: Transport> Client for CommandClient<T> {
    fn setblock(&mut self, position: Vec3, item: &Item) -> Result<()> {
        self.send(format!("setblock {} {item}", coords(position)))?;
        Ok(())
    }

    fn fill(
        &mut self,
        start: Vec3,
        end: Vec3,
        item: &Item,
        mode: FillMode,
        filter: Option<&Item>,
    ) -> Result<()> {
        let mut command = format!("fill {} {} {item} {mode}", coords(start), coords(end));
        if let (FillMode::Replace, Some(filter)) = (mode, filter) {
            command.push(' ');
            command.push_str(&filter.to_string());
        }
        self.send(command)?;
        Ok(())
    }

    /// Mines the block with a loot command and reads the drop back from the
    /// reply. The spawned loot lands below the world floor.
    fn get_block(&mut self, position: Vec3) -> Result<Item> {
        let [x, _, z] = position.block();
        let reply = self.send(format!(
            "loot spawn {x} {WORLD_BOTTOM} {z} mine {}",
            coords(position)
        ))?;
        parse_loot_response(&reply)
    }
}

/// Extracts the mined block from a `loot spawn ... mine` reply.
///
/// Accepts both `minecraft:<name>` and `minecraft:blocks/<name>`; an `empty`
/// drop means air.
pub fn parse_loot_response(reply: &str) -> Result<Item> {
    let unexpected = || Error::Format(format!("unexpected response from loot spawn: {reply:?}"));

    let at = reply.rfind(NAMESPACE).ok_or_else(unexpected)?;
    let rest = &reply[at + NAMESPACE.len()..];
    let name = rest.strip_prefix("blocks/").unwrap_or(rest).trim_end();
    if name.is_empty() {
        return Err(unexpected());
    }

    match name {
        "empty" => Ok(Item::AIR),
        name => Ok(Item::new(name)),
    }
}

/// Writes each command as a line of a function script. Nothing is ever read
/// back, so block queries through it fail.
pub struct ScriptTransport<W> {
    out: W,
    lines: usize,
}

impl<W: Write> ScriptTransport<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transport for ScriptTransport<W> {
    fn send(&mut self, command: &str) -> Result<String> {
        writeln!(self.out, "{command}")?;
        self.lines += 1;
        Ok(String::new())
    }
}
