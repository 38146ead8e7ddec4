//! Allophone device abstraction
//!
//! The speaker drives the chip through this trait. A board driver sets the
//! allophone address lines, pulses address-load, and reports the standby
//! line; this crate ships only a dry-run device that logs what it would send.

use crate::{Result, RetroSpeakError};
use log::{debug, info};

/// Highest board number that can be stacked
pub const MAX_BOARD: u8 = 3;

/// Hardware that speaks SP0256 allophones by address
pub trait AllophoneDevice: Send {
    /// Program the chip clock in MHz
    fn set_clock(&mut self, mhz: f32) -> Result<()>;

    /// Start speaking the allophone at `address`
    fn load(&mut self, address: u8) -> Result<()>;

    /// True once the chip has finished the current allophone
    fn is_standby(&mut self) -> Result<bool>;

    /// Toggle the chip's reset line
    fn reset(&mut self) -> Result<()>;

    /// Silence the chip and hold it in reset
    fn disable(&mut self) -> Result<()>;
}

/// Device that logs allophone addresses instead of speaking them
///
/// Always reports standby, so queued speech drains immediately.
#[derive(Debug, Default)]
pub struct DryRunDevice {
    board: u8,
    clock: Option<f32>,
    loaded: Vec<u8>,
    enabled: bool,
}

impl DryRunDevice {
    pub fn new(board: u8) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Addresses loaded so far, in order
    pub fn loaded(&self) -> &[u8] {
        &self.loaded
    }

    pub fn clock(&self) -> Option<f32> {
        self.clock
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl AllophoneDevice for DryRunDevice {
    fn set_clock(&mut self, mhz: f32) -> Result<()> {
        debug!("Board {}: clock set to {:.2}MHz", self.board, mhz);
        self.clock = Some(mhz);
        Ok(())
    }

    fn load(&mut self, address: u8) -> Result<()> {
        if address > 63 {
            return Err(RetroSpeakError::Speech(format!(
                "Allophone address {} out of range",
                address
            )));
        }
        debug!("Board {}: load allophone {}", self.board, address);
        self.loaded.push(address);
        Ok(())
    }

    fn is_standby(&mut self) -> Result<bool> {
        Ok(true)
    }

    fn reset(&mut self) -> Result<()> {
        debug!("Board {}: reset", self.board);
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        debug!("Board {}: disabled", self.board);
        self.enabled = false;
        Ok(())
    }
}

/// Create the device for a board number (0-3)
pub fn create_device(board: u8) -> Result<Box<dyn AllophoneDevice>> {
    if board > MAX_BOARD {
        return Err(RetroSpeakError::Speech(format!(
            "Board {} out of range 0-{}",
            board, MAX_BOARD
        )));
    }

    info!("Using dry-run allophone device for board {}", board);
    Ok(Box::new(DryRunDevice::new(board)))
}
