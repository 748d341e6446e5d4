//! Caller-facing handlers for the frame loop.
//!
//! These bridge caller requests to the frame-loop thread via channels.

use anyhow::{anyhow, bail, Context};

use overwatch_core::commands::HudCommand;
use overwatch_core::config::HudConfig;
use overwatch_core::state::HudSnapshot;
use overwatch_engine::HudEngine;

use crate::host_loop;
use crate::state::{HostCommand, HostState};

impl HostState {
    /// Start the frame loop. Fails if it is already running or the config
    /// is invalid.
    pub fn start<F>(&self, config: HudConfig, emit: F) -> anyhow::Result<()>
    where
        F: FnMut(&HudSnapshot) + Send + 'static,
    {
        let mut tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel poisoned: {e}"))?;
        if tx_lock.is_some() {
            bail!("frame loop already running");
        }

        let engine = HudEngine::new(config).context("invalid HUD config")?;
        let (cmd_tx, handle) =
            host_loop::spawn_host_loop(engine, self.latest_snapshot.clone(), emit)
                .context("failed to spawn frame loop thread")?;

        *tx_lock = Some(cmd_tx);
        if let Ok(mut handle_lock) = self.loop_handle.lock() {
            *handle_lock = Some(handle);
        }
        Ok(())
    }

    /// Send a command to the engine for the next frame.
    pub fn send(&self, command: HudCommand) -> anyhow::Result<()> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel poisoned: {e}"))?;

        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(HostCommand::Command(command))
                .context("frame loop has stopped"),
            None => bail!("frame loop not started"),
        }
    }

    /// Get the latest snapshot synchronously.
    pub fn snapshot(&self) -> Option<HudSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx.lock().map(|tx| tx.is_some()).unwrap_or(false)
    }

    /// Stop the frame loop and wait for the thread to exit. A no-op when
    /// the loop is not running.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel poisoned: {e}"))?
            .take();
        let Some(tx) = tx else {
            return Ok(());
        };
        // A disconnected channel means the loop already exited.
        let _ = tx.send(HostCommand::Shutdown);

        let handle = self
            .loop_handle
            .lock()
            .map_err(|e| anyhow!("loop handle poisoned: {e}"))?
            .take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow!("frame loop thread panicked"))?;
        }
        Ok(())
    }
}
