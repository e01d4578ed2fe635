//! Host-side handles shared between the input driver and the game loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use gallery_core::commands::PlayerCommand;
use gallery_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
pub struct LoopHandle {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Join handle of the loop thread.
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward a command. Returns false if the loop has already stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Clone of the most recent snapshot, if the loop has ticked yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) -> std::thread::Result<()> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread.join()
    }
}
