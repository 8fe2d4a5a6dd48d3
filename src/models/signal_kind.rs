use serde::Serialize;

/// Named device-state signals the monitor can track.
///
/// The set is open at the log level (the file stores plain strings); these
/// are the three signals the monitor ships probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SignalKind {
    Internet,
    AirplaneMode,
    Bluetooth,
}

impl SignalKind {
    /// Value recorded under "Connection type".
    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Internet => "Internet",
            SignalKind::AirplaneMode => "Airplane Mode",
            SignalKind::Bluetooth => "Bluetooth",
        }
    }

    /// Convert a persisted "Connection type" value back to a kind.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Internet" => Some(SignalKind::Internet),
            "Airplane Mode" => Some(SignalKind::AirplaneMode),
            "Bluetooth" => Some(SignalKind::Bluetooth),
            _ => None,
        }
    }

    /// Map the raw boolean read from the platform into the status label
    /// recorded under "Status".
    pub fn status_label(&self, active: bool) -> &'static str {
        match (self, active) {
            (SignalKind::Internet, true) => "Connected",
            (SignalKind::Internet, false) => "Disconnected",
            (SignalKind::AirplaneMode, true) => "Airplane Mode ON",
            (SignalKind::AirplaneMode, false) => "Airplane Mode OFF",
            (SignalKind::Bluetooth, true) => "Bluetooth ON",
            (SignalKind::Bluetooth, false) => "Bluetooth OFF",
        }
    }
}
