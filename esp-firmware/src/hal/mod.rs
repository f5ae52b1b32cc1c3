// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul enthält die konkreten Implementierungen der esp-core
// Capability-Traits für die ESP32-C6 Hardware.

pub mod device_id;
pub mod log_sink;
pub mod network;
pub mod status_led;

pub use device_id::EfuseDeviceId;
pub use log_sink::SerialLogSink;
pub use network::WifiNetwork;
pub use status_led::GpioStatusLed;
