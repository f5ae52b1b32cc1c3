// Geräte-Kennung aus der Basis-MAC-Adresse
use esp_core::{DEVICE_ID_LENGTH, DeviceIdProvider, format_device_id};
use esp_hal::efuse::Efuse;

/// Geräte-Kennung aus dem eFuse
///
/// Liest die werkseitig programmierte Basis-MAC einmal beim Start und
/// formatiert sie als 12-stellige Hex-Kennung. Die Kennung ist damit für
/// die Lebensdauer des Geräts stabil und eindeutig.
pub struct EfuseDeviceId {
    id: heapless::String<DEVICE_ID_LENGTH>,
}

impl EfuseDeviceId {
    pub fn read() -> Self {
        Self {
            id: format_device_id(Efuse::mac_address()),
        }
    }
}

impl DeviceIdProvider for EfuseDeviceId {
    fn device_id(&self) -> &str {
        self.id.as_str()
    }
}
