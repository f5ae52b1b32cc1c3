// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::PinLevel;

// ============================================================================
// Geräte-Konfiguration
// ============================================================================

/// Brand-String des Geräts
/// Präfix des generierten Hostnamens: <DEVICE_BRAND>-<device_id>
pub const DEVICE_BRAND: &str = "myhome";

/// Name des Boot-Modus (für das Boot-Banner)
pub const BOOT_MODE_NAME: &str = "boot";

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED
/// Muss zur Pin-Zuordnung in main.rs passen (peripherals.GPIO2)
pub const LED_GPIO_PIN: u8 = 2;

/// Status-LED aktiviert?
/// Auf Boards ohne Status-LED auf false setzen
pub const LED_ENABLED: bool = true;

/// Pegel bei dem die Status-LED sichtbar leuchtet
/// Low = active-low Verdrahtung (LED zwischen Pin und VCC)
pub const LED_ON_LEVEL: PinLevel = PinLevel::Low;

// ============================================================================
// Scheduler Konfiguration
// ============================================================================

/// Tick-Intervall des Modus-Loops in Millisekunden
/// Der Boot-Modus hat keine Per-Tick-Arbeit, das Intervall darf grob sein
pub const MODE_TICK_INTERVAL_MS: u64 = 1000;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

/// Wartezeit nach WiFi-Fehler vor erneutem Versuch in Sekunden
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS TTL (Time To Live) in Sekunden
/// Gibt an, wie lange andere Geräte die mDNS-Antwort cachen dürfen
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
/// Wartezeit nach Fehler vor erneutem Versuch
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353)
/// Multicast DNS nutzt Port 5353 laut RFC 6762
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251)
/// Standard mDNS Multicast-Gruppe laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
/// edge-nal-embassy benötigt Buffer für UDP-Pakete
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;
