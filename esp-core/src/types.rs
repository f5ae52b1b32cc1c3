//! Core Types für die Geräte-Konfiguration
//!
//! Datenstrukturen ohne Hardware-Dependencies

use heapless::String;

use crate::logic::MAX_HOSTNAME_LENGTH;

/// Logischer Pegel eines GPIO-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// Liefert den komplementären Pegel
    ///
    /// Der "Aus"-Zustand der LED ist als Komplement des konfigurierten
    /// "An"-Pegels definiert. Damit funktioniert die Ansteuerung sowohl
    /// für active-high als auch für active-low verdrahtete LEDs.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use esp_core::PinLevel;
    /// assert_eq!(PinLevel::High.inverse(), PinLevel::Low);
    /// assert_eq!(PinLevel::Low.inverse(), PinLevel::High);
    /// ```
    pub const fn inverse(self) -> Self {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

impl core::ops::Not for PinLevel {
    type Output = PinLevel;

    fn not(self) -> PinLevel {
        self.inverse()
    }
}

/// Beschreibung der Status-LED
///
/// Teil der geteilten Geräte-Konfiguration. `on` gibt an, bei welchem
/// Pegel die LED sichtbar leuchtet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedDescriptor {
    pub enabled: bool,
    pub pin: u8,
    pub on: PinLevel,
}

/// Geteilte Geräte-Konfiguration
///
/// Wird vom Framework einmal erstellt und von allen Betriebsmodi
/// konsultiert. Die Modi halten nur eine Referenz, keine eigene Kopie.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInterface {
    /// Status-LED Beschreibung
    pub led: LedDescriptor,
    /// Brand-String, Präfix des generierten Hostnamens
    pub brand: String<MAX_HOSTNAME_LENGTH>,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::Low => defmt::write!(fmt, "Low"),
            PinLevel::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedDescriptor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedDescriptor {{ enabled: {}, pin: {}, on: {} }}",
            self.enabled,
            self.pin,
            self.on
        )
    }
}
