// Purpose - port-level types between the host and the engine, format conversions

pub mod converter;

use crate::NUM_PLAYHEADS;

/// One sample for every playhead: clock volts in, CV volts out.
pub type Frame = [f32; NUM_PLAYHEADS];

/// A voltage input jack.
///
/// An unpatched jack reads 0 V no matter what was last written to it, which
/// the clock conditioning treats like any other low signal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputPort {
    voltage: f32,
    connected: bool,
}

impl InputPort {
    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.voltage = 0.0;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn set_voltage(&mut self, volts: f32) {
        self.voltage = volts;
    }

    /// The voltage the engine should see this sample.
    #[inline]
    pub fn voltage(&self) -> f32 {
        if self.connected {
            self.voltage
        } else {
            0.0
        }
    }

    /// Mask a raw incoming sample by this port's connection state.
    #[inline]
    pub fn read(&self, volts: f32) -> f32 {
        if self.connected {
            volts
        } else {
            0.0
        }
    }
}
