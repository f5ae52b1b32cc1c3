// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    BootError, BootMode, DeviceIdProvider, DeviceInterface, DeviceMode, LedDescriptor, LogSink,
    MAX_HOSTNAME_LENGTH, ModeContext, NetworkControl, PinLevel, StatusLedPin, build_hostname,
    format_device_id,
};

/// Hostname-Typ mit der Kapazität des Netzwerk-Subsystems
///
/// Der Boot-Modus garantiert via `build_hostname()`, dass der Inhalt in
/// diese Kapazität passt.
pub type Hostname = heapless::String<MAX_HOSTNAME_LENGTH>;
