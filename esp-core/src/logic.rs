//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::Write;

use heapless::String;

use crate::traits::BootError;

/// Maximale Hostname-Länge in Zeichen
///
/// Entspricht der maximalen WiFi-SSID-Länge der Plattform (32 Zeichen).
/// Der generierte Hostname muss in diese Grenze passen, sonst würde das
/// Netzwerk-Subsystem ihn abschneiden oder ablehnen.
pub const MAX_HOSTNAME_LENGTH: usize = 32;

/// Länge der Geräte-Kennung in Zeichen (6 MAC-Bytes als Hex)
pub const DEVICE_ID_LENGTH: usize = 12;

/// Baut den Netzwerk-Hostnamen aus Brand und Geräte-Kennung
///
/// Format: `<brand>-<device_id>`. Die Länge wird gegen
/// `MAX_HOSTNAME_LENGTH` geprüft bevor geschrieben wird, statt in einen
/// fixen Buffer hinein zu konkatenieren.
///
/// # Beispiele
///
/// ```
/// # use esp_core::build_hostname;
/// let hostname = build_hostname("myhome", "A1B2C3").unwrap();
/// assert_eq!(hostname.as_str(), "myhome-A1B2C3");
/// ```
///
/// # Fehlerbehandlung
/// Gibt `BootError::HostnameTooLong` zurück wenn die Gesamtlänge die
/// Kapazität überschreitet.
pub fn build_hostname(
    brand: &str,
    device_id: &str,
) -> Result<String<MAX_HOSTNAME_LENGTH>, BootError> {
    let mut hostname = String::new();
    hostname
        .push_str(brand)
        .map_err(|_| BootError::HostnameTooLong)?;
    hostname
        .push_str("-")
        .map_err(|_| BootError::HostnameTooLong)?;
    hostname
        .push_str(device_id)
        .map_err(|_| BootError::HostnameTooLong)?;
    Ok(hostname)
}

/// Formatiert eine MAC-Adresse als Geräte-Kennung
///
/// 6 Bytes werden zu 12 Hex-Zeichen in Grossbuchstaben, z.B.
/// `[0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6]` → `"A1B2C3D4E5F6"`.
pub fn format_device_id(mac: [u8; 6]) -> String<DEVICE_ID_LENGTH> {
    let mut id = String::new();
    for byte in mac {
        // 12 Zeichen Kapazität reichen immer für 6 Bytes
        let _ = write!(id, "{:02X}", byte);
    }
    id
}
