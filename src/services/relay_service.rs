use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelayCommand {
    On,
    Off,
}

impl RelayCommand {
    /// Normalizes operator/device input. Accepts case variants and surrounding
    /// whitespace, nothing else.
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        let trimmed = raw.trim();

        if trimmed.eq_ignore_ascii_case("on") {
            Ok(RelayCommand::On)
        } else if trimmed.eq_ignore_ascii_case("off") {
            Ok(RelayCommand::Off)
        } else {
            Err(RelayError::InvalidCommand(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelayCommand::On => "ON",
            RelayCommand::Off => "OFF",
        }
    }

    pub fn as_lowercase(&self) -> &'static str {
        match self {
            RelayCommand::On => "on",
            RelayCommand::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayMode {
    Auto,
    Manual,
}

impl RelayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayMode::Auto => "auto",
            RelayMode::Manual => "manual",
        }
    }
}

/// A committed `{command, mode, updated_at}` tuple. Copied out whole so callers
/// never hold a reference into the guarded state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelaySnapshot {
    pub command: RelayCommand,
    pub mode: RelayMode,
    #[serde(rename = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl RelaySnapshot {
    /// The two-token format the device firmware parses, e.g. `"auto off"`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.mode.as_str(), self.command.as_lowercase())
    }
}

/// Single source of truth for the irrigation relay. The whole snapshot sits
/// behind one lock; transitions replace the tuple as a unit, so a concurrent
/// reader sees either the old state or the new one, never a mix.
///
/// State is in-memory only. A restarted process comes back as
/// `(OFF, auto, process-start)`.
pub struct RelayService {
    state: RwLock<RelaySnapshot>,
}

impl RelayService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RelaySnapshot {
                command: RelayCommand::Off,
                mode: RelayMode::Auto,
                updated_at: Utc::now(),
            }),
        }
    }

    /// Consistent snapshot of the current state. Never fails, no I/O.
    pub async fn current(&self) -> RelaySnapshot {
        *self.state.read().await
    }

    /// Operator override: sets the command and switches to manual mode.
    ///
    /// Input is validated before the lock is taken, so an invalid command
    /// leaves the state completely untouched.
    pub async fn set_command(&self, raw: &str) -> Result<RelaySnapshot, RelayError> {
        let command = RelayCommand::parse(raw)?;

        let mut state = self.state.write().await;
        *state = RelaySnapshot {
            command,
            mode: RelayMode::Manual,
            updated_at: Utc::now(),
        };

        Ok(*state)
    }

    /// Returns control to the automatic controller. The last commanded value is
    /// retained as the standing signal emitted to the device.
    pub async fn force_auto(&self) -> RelaySnapshot {
        let mut state = self.state.write().await;
        state.mode = RelayMode::Auto;
        state.updated_at = Utc::now();

        *state
    }
}

impl Default for RelayService {
    fn default() -> Self {
        Self::new()
    }
}
