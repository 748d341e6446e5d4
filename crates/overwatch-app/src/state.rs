//! Host state shared between callers and the frame-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use overwatch_core::commands::HudCommand;
use overwatch_core::state::HudSnapshot;

/// Commands sent from callers to the frame-loop thread.
#[derive(Debug)]
pub enum HostCommand {
    /// A command to forward to the HUD engine.
    Command(HudCommand),
    /// Shut down the frame loop gracefully.
    Shutdown,
}

/// Shared host state.
///
/// `mpsc::Sender` is wrapped in a `Mutex` so the state is `Sync` and can be
/// shared across caller threads.
pub struct HostState {
    /// Channel sender to the frame loop. `None` until `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<HostCommand>>>,
    /// Latest snapshot, updated by the frame loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<HudSnapshot>>>,
    /// Join handle of the frame-loop thread while it runs.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl HostState {
    pub fn new() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new()
    }
}
