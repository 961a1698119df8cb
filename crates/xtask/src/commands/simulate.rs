//! Run a scripted session
//!
//! Loads the map and config from the data directory, feeds an input script
//! through the runtime frame by frame, and prints every event published.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use runtime::{Event, Runtime, RuntimeConfig, Script, Topic};
use tokio::sync::broadcast::Receiver;

use crate::utils::MapArgs;

type EventReceivers = Vec<(Topic, Receiver<Event>)>;

/// Run an input script through a session and print its events
#[derive(Parser)]
pub struct Simulate {
    /// Input script (RON list of frames)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    #[command(flatten)]
    source: MapArgs,

    /// Start with the second player join disabled
    #[arg(long)]
    solo_only: bool,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let script = Script::load(&self.script)
            .with_context(|| format!("Failed to load script: {}", self.script.display()))?;

        let mut builder = Runtime::builder().config(RuntimeConfig {
            data_dir: self.source.data_dir.clone(),
            map_name: self.source.map.clone(),
            allow_second_player: !self.solo_only,
            ..RuntimeConfig::default()
        });
        if self.source.file.is_some() {
            builder = builder.map(std::sync::Arc::new(self.source.load()?));
        }
        let mut runtime = builder.build()?;
        let mut receivers: EventReceivers = runtime.event_bus().subscribe_multiple(&Topic::ALL);

        runtime.load()?;
        self.drain(0, &mut receivers)?;

        let mut transitions = 0usize;
        for (frame, commands) in script.ticks().enumerate() {
            if runtime.step(commands).is_transition() {
                transitions += 1;
            }
            self.drain(frame as u64 + 1, &mut receivers)?;
        }

        println!();
        println!(
            "{} {} frames, {} transitions, ended in room {}",
            style("Done:").bold().green(),
            runtime.frame(),
            transitions,
            runtime.navigator().current_room_position()
        );
        Ok(())
    }

    fn drain(&self, frame: u64, receivers: &mut EventReceivers) -> Result<()> {
        for (_, receiver) in receivers.iter_mut() {
            while let Ok(event) = receiver.try_recv() {
                if self.json {
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    print_event(frame, &event);
                }
            }
        }
        Ok(())
    }
}

fn print_event(frame: u64, event: &Event) {
    let topic = format!("{:?}", event.topic()).to_lowercase();
    let detail = match event {
        Event::Room(runtime::RoomEvent::Materialized { room, tiles }) => {
            format!("materialized {room} ({} tiles)", tiles.len())
        }
        Event::Room(runtime::RoomEvent::CameraMoved { room, origin }) => {
            format!("camera -> {room} at {origin}")
        }
        Event::Room(runtime::RoomEvent::Changed { from, to, .. }) => {
            format!("room {from} -> {to}")
        }
        Event::Player(runtime::PlayerEvent::Moved(change)) => {
            format!(
                "{} at {} (z {})",
                change.entity, change.position, change.z_index
            )
        }
        other => format!("{other:?}"),
    };

    println!(
        "{} {:<8} {}",
        style(format!("[{frame:>5}]")).dim(),
        style(topic).cyan(),
        detail
    );
}
