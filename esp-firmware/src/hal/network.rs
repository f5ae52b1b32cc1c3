// Netzwerk-Steuerung über den esp-radio WifiController
use defmt::info;
use esp_core::NetworkControl;
use esp_radio::wifi::WifiController;

use crate::Hostname;

/// NetworkControl Implementierung für den WiFi-Stack
///
/// Leiht sich den WifiController für die Dauer des Boot-Setups; danach
/// übernimmt die connection_task den Controller. Der gesetzte Hostname
/// wird zwischengespeichert und nach dem Setup vom mDNS Responder
/// advertised.
pub struct WifiNetwork<'c> {
    controller: &'c mut WifiController<'static>,
    persistence: bool,
    hostname: Hostname,
}

impl<'c> WifiNetwork<'c> {
    pub fn new(controller: &'c mut WifiController<'static>) -> Self {
        Self {
            controller,
            persistence: true,
            hostname: Hostname::new(),
        }
    }

    /// Gibt den während des Setups gesetzten Hostnamen heraus
    pub fn take_hostname(self) -> Hostname {
        self.hostname
    }
}

impl NetworkControl for WifiNetwork<'_> {
    fn set_persistence(&mut self, enabled: bool) {
        // esp-radio schreibt Credentials nie in den NVS, abzuschalten gibt
        // es dort nichts. Das Flag wird für den Modus-Contract geführt.
        self.persistence = enabled;
        info!(
            "WiFi: Credential persistence {}",
            if enabled { "on" } else { "off" }
        );
    }

    fn disconnect(&mut self) {
        // Reset auf bekannten sauberen Zustand. Vor dem ersten Connect gibt
        // es nichts zu trennen, der Rückgabewert wird nicht ausgewertet.
        let _ = self.controller.disconnect();
        info!("WiFi: Network state reset");
    }

    fn set_hostname(&mut self, hostname: &str) {
        self.hostname.clear();
        // Kapazität ist durch build_hostname() garantiert
        let _ = self.hostname.push_str(hostname);
        info!("WiFi: Hostname set to '{}'", hostname);
    }
}
