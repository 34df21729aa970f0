//! Error types for the collaborators around the simulation.
//!
//! The simulation itself has no failure modes. These errors come from the
//! audio backend, the render sink and the settings file, and are absorbed at
//! the boundary (logged, never propagated into a frame).

use std::fmt;
use std::io;

/// Failure reported by an audio backend
#[derive(Debug)]
pub enum AudioError {
    /// No output device or context could be obtained
    Unavailable,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Unavailable => write!(f, "audio output unavailable"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Failure reported by a render sink
#[derive(Debug)]
pub enum RenderError {
    /// Surface went away (window closed, device lost)
    SurfaceLost,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "render surface lost"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Failure reading or writing the settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings I/O error: {e}"),
            SettingsError::Parse(e) => write!(f, "settings parse error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
