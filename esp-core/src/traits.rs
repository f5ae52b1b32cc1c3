//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für die externen Collaborators
//! der Betriebsmodi, ohne konkrete Implementierung.

use crate::types::PinLevel;

/// Fehler-Typ für Modus-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    /// setup() wurde aufgerufen bevor attach_interface() die
    /// Geräte-Konfiguration injiziert hat
    InterfaceNotAttached,
    /// brand + "-" + device_id überschreitet die maximale Hostname-Länge
    HostnameTooLong,
}

/// Trait für den Status-LED Pin
///
/// Abstrahiert den digitalen GPIO-Zugriff auf die Status-LED.
///
/// # Implementierungen
/// - **Production:** GpioStatusLed (ESP32 GPIO Output)
/// - **Testing:** MockLedPin (in-memory Mock)
///
/// Die Aufrufe sind synchron und aus Sicht des Modus unfehlbar,
/// Rückgabewerte des darunterliegenden Treibers werden nicht inspiziert.
pub trait StatusLedPin {
    /// Konfiguriert den Pin als digitalen Output
    fn configure_output(&mut self, pin: u8);

    /// Treibt den Pin auf den angegebenen Pegel
    fn write(&mut self, pin: u8, level: PinLevel);
}

/// Trait für das Netzwerk-Subsystem
///
/// # Implementierungen
/// - **Production:** WifiNetwork (esp-radio WifiController)
/// - **Testing:** MockNetwork (in-memory Mock)
pub trait NetworkControl {
    /// Schaltet die Persistenz der Netzwerk-Credentials im
    /// nichtflüchtigen Speicher an oder aus
    fn set_persistence(&mut self, enabled: bool);

    /// Trennt eine eventuell bestehende Association und setzt den
    /// Verbindungszustand zurück
    fn disconnect(&mut self);

    /// Setzt den Netzwerk-Hostnamen des Geräts
    fn set_hostname(&mut self, hostname: &str);
}

/// Trait für die Log-Senke
///
/// Fire-and-forget Diagnose-Ausgabe für den Operator. Wird nie
/// programmatisch ausgewertet.
pub trait LogSink {
    /// Schreibt einen String ohne Zeilenende
    fn log(&mut self, message: &str);

    /// Schreibt einen String mit Zeilenende
    fn logln(&mut self, message: &str);
}

/// Trait für die Geräte-Kennung
///
/// Liefert eine prozessweit stabile, eindeutige Kennung des Geräts
/// (in der Firmware aus der Basis-MAC-Adresse abgeleitet).
pub trait DeviceIdProvider {
    fn device_id(&self) -> &str;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BootError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BootError::InterfaceNotAttached => defmt::write!(fmt, "Interface not attached"),
            BootError::HostnameTooLong => defmt::write!(fmt, "Hostname too long"),
        }
    }
}
