//! Signal probes: map raw platform state into log status labels.

use crate::errors::AppResult;
use crate::models::signal_kind::SignalKind;

/// Raw platform capability behind a probe.
///
/// Hosts implement this over the real connectivity / settings / radio
/// APIs; tests drive it with flags.
pub trait StateSource: Send + Sync {
    fn is_active(&self) -> AppResult<bool>;
}

impl<F> StateSource for F
where
    F: Fn() -> AppResult<bool> + Send + Sync,
{
    fn is_active(&self) -> AppResult<bool> {
        self()
    }
}

/// A named signal the monitor reads on demand.
pub trait SignalProbe: Send + Sync {
    fn kind(&self) -> SignalKind;

    /// Raw boolean state as read from the platform.
    fn read(&self) -> AppResult<bool>;

    /// Human-readable status label recorded in the log.
    fn current_status(&self) -> AppResult<String> {
        Ok(self.kind().status_label(self.read()?).to_string())
    }
}

/// Internet reachability: "Connected" / "Disconnected".
pub struct InternetReachability {
    source: Box<dyn StateSource>,
}

impl InternetReachability {
    pub fn new(source: Box<dyn StateSource>) -> Self {
        Self { source }
    }
}

impl SignalProbe for InternetReachability {
    fn kind(&self) -> SignalKind {
        SignalKind::Internet
    }

    fn read(&self) -> AppResult<bool> {
        self.source.is_active()
    }
}

/// Airplane mode switch: "Airplane Mode ON" / "Airplane Mode OFF".
pub struct AirplaneModeState {
    source: Box<dyn StateSource>,
}

impl AirplaneModeState {
    pub fn new(source: Box<dyn StateSource>) -> Self {
        Self { source }
    }
}

impl SignalProbe for AirplaneModeState {
    fn kind(&self) -> SignalKind {
        SignalKind::AirplaneMode
    }

    fn read(&self) -> AppResult<bool> {
        self.source.is_active()
    }
}

/// Bluetooth radio power: "Bluetooth ON" / "Bluetooth OFF".
pub struct BluetoothPowerState {
    source: Box<dyn StateSource>,
}

impl BluetoothPowerState {
    pub fn new(source: Box<dyn StateSource>) -> Self {
        Self { source }
    }
}

impl SignalProbe for BluetoothPowerState {
    fn kind(&self) -> SignalKind {
        SignalKind::Bluetooth
    }

    fn read(&self) -> AppResult<bool> {
        self.source.is_active()
    }
}
