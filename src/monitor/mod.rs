pub mod connectivity;
pub mod probes;
pub mod scheduler;
pub mod subscription;

pub use connectivity::{ConnectivityMonitor, ObserverId};
pub use probes::{
    AirplaneModeState, BluetoothPowerState, InternetReachability, SignalProbe, StateSource,
};
pub use scheduler::{PeriodicScheduler, TaskHandle, ThreadScheduler};
pub use subscription::{SignalSubscription, SubscriptionHandle};
