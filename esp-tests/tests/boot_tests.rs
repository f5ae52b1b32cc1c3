//! Integration Tests für den Boot-Modus
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Implementierungen
//! der esp-core Capability-Traits

use esp_core::{
    BootError, BootMode, DeviceIdProvider, DeviceInterface, DeviceMode, LedDescriptor, LogSink,
    MAX_HOSTNAME_LENGTH, ModeContext, NetworkControl, PinLevel, StatusLedPin, build_hostname,
};

// ============================================================================
// Mock Status-LED Pin
// ============================================================================

#[derive(Default)]
pub struct MockLedPin {
    /// Pins die als Output konfiguriert wurden (für Assertions in Tests)
    pub configured_pins: Vec<u8>,
    /// Alle write() Aufrufe als (pin, level)
    pub writes: Vec<(u8, PinLevel)>,
}

impl MockLedPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusLedPin for MockLedPin {
    fn configure_output(&mut self, pin: u8) {
        self.configured_pins.push(pin);
    }

    fn write(&mut self, pin: u8, level: PinLevel) {
        self.writes.push((pin, level));
    }
}

// ============================================================================
// Mock Network
// ============================================================================

#[derive(Default)]
pub struct MockNetwork {
    /// Zuletzt gesetzter Persistenz-Wert
    pub persistence: Option<bool>,
    /// Anzahl der set_persistence() Aufrufe
    pub persistence_calls: usize,
    /// Anzahl der disconnect() Aufrufe
    pub disconnect_calls: usize,
    /// Zuletzt gesetzter Hostname
    pub hostname: Option<String>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NetworkControl for MockNetwork {
    fn set_persistence(&mut self, enabled: bool) {
        self.persistence = Some(enabled);
        self.persistence_calls += 1;
    }

    fn disconnect(&mut self) {
        self.disconnect_calls += 1;
    }

    fn set_hostname(&mut self, hostname: &str) {
        self.hostname = Some(hostname.to_string());
    }
}

// ============================================================================
// Mock Log Sink
// ============================================================================

#[derive(Default)]
pub struct MockLogSink {
    /// Angefangene, noch nicht abgeschlossene Zeile
    current: String,
    /// Abgeschlossene Zeilen
    pub lines: Vec<String>,
}

impl MockLogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogSink for MockLogSink {
    fn log(&mut self, message: &str) {
        self.current.push_str(message);
    }

    fn logln(&mut self, message: &str) {
        self.current.push_str(message);
        self.lines.push(std::mem::take(&mut self.current));
    }
}

// ============================================================================
// Fixed Device Id
// ============================================================================

pub struct FixedDeviceId(pub &'static str);

impl DeviceIdProvider for FixedDeviceId {
    fn device_id(&self) -> &str {
        self.0
    }
}

// ============================================================================
// Test-Helpers
// ============================================================================

/// Erstellt eine 'static Geräte-Konfiguration für einen Test
///
/// Die Modi halten die Konfiguration als 'static Referenz (in der Firmware
/// via StaticCell), im Test wird sie geleakt.
fn leak_interface(led: LedDescriptor, brand: &str) -> &'static DeviceInterface {
    Box::leak(Box::new(DeviceInterface {
        led,
        brand: heapless::String::try_from(brand).unwrap(),
    }))
}

fn run_setup(
    boot: &mut BootMode,
    led: &mut MockLedPin,
    network: &mut MockNetwork,
    log: &mut MockLogSink,
    device_id: &FixedDeviceId,
) -> Result<(), BootError> {
    let mut ctx = ModeContext {
        led,
        network,
        log,
        device_id,
    };
    boot.setup(&mut ctx)
}

const LED_ON_HIGH: LedDescriptor = LedDescriptor {
    enabled: true,
    pin: 7,
    on: PinLevel::High,
};

const LED_DISABLED: LedDescriptor = LedDescriptor {
    enabled: false,
    pin: 7,
    on: PinLevel::High,
};

// ============================================================================
// Tests: Precondition (Interface muss attached sein)
// ============================================================================

#[test]
fn test_setup_without_interface_fails() {
    let mut boot = BootMode::new("boot");
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    let result = run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id);
    assert_eq!(result, Err(BootError::InterfaceNotAttached));

    // Keine Seiteneffekte vor der Precondition-Prüfung
    assert!(led.configured_pins.is_empty());
    assert!(led.writes.is_empty());
    assert_eq!(network.persistence_calls, 0);
    assert_eq!(network.disconnect_calls, 0);
    assert_eq!(network.hostname, None);
    assert!(log.lines.is_empty());
}

#[test]
fn test_setup_succeeds_after_attach() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    let result = run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id);
    assert!(result.is_ok());
}

#[test]
fn test_attach_interface_overwrites() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_DISABLED, "first"));
    boot.attach_interface(leak_interface(LED_DISABLED, "second"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    // Der zweite attach_interface() Aufruf gewinnt
    assert_eq!(network.hostname.as_deref(), Some("second-A1B2C3"));
}

// ============================================================================
// Tests: Status-LED
// ============================================================================

#[test]
fn test_led_disabled_skips_gpio() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_DISABLED, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    assert!(led.configured_pins.is_empty());
    assert!(led.writes.is_empty());
}

#[test]
fn test_led_active_high_driven_low() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    // "Aus" ist das Komplement des "An"-Pegels
    assert_eq!(led.configured_pins, vec![7]);
    assert_eq!(led.writes, vec![(7, PinLevel::Low)]);
}

#[test]
fn test_led_active_low_driven_high() {
    let descriptor = LedDescriptor {
        enabled: true,
        pin: 5,
        on: PinLevel::Low,
    };
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(descriptor, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    assert_eq!(led.configured_pins, vec![5]);
    assert_eq!(led.writes, vec![(5, PinLevel::High)]);
}

// ============================================================================
// Tests: Netzwerk-Reset
// ============================================================================

#[test]
fn test_network_reset_exactly_once() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    assert_eq!(network.persistence, Some(false));
    assert_eq!(network.persistence_calls, 1);
    assert_eq!(network.disconnect_calls, 1);
}

#[test]
fn test_network_reset_independent_of_led_config() {
    // Der Netzwerk-Reset läuft auch wenn die LED deaktiviert ist
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_DISABLED, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    assert_eq!(network.persistence, Some(false));
    assert_eq!(network.persistence_calls, 1);
    assert_eq!(network.disconnect_calls, 1);
}

// ============================================================================
// Tests: Hostname
// ============================================================================

#[test]
fn test_hostname_applied() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    assert_eq!(network.hostname.as_deref(), Some("myhome-A1B2C3"));
}

#[test]
fn test_hostname_at_capacity_applied() {
    // 25 + 1 + 6 = 32 Zeichen, exakt an der Grenze
    let brand = "abcdefghijklmnopqrstuvwxy";
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_DISABLED, brand));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    let hostname = network.hostname.unwrap();
    assert_eq!(hostname.len(), MAX_HOSTNAME_LENGTH);
    assert_eq!(hostname, format!("{}-A1B2C3", brand));
}

#[test]
fn test_hostname_too_long_fails() {
    // 26 + 1 + 6 = 33 Zeichen, ein Zeichen über der Grenze
    let brand = "abcdefghijklmnopqrstuvwxyz";
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_DISABLED, brand));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    let result = run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id);
    assert_eq!(result, Err(BootError::HostnameTooLong));

    // Hostname wird nicht gesetzt, Banner nicht geloggt. Der vorher
    // gelaufene Netzwerk-Reset ist extern und nicht transaktional.
    assert_eq!(network.hostname, None);
    assert!(log.lines.is_empty());
    assert_eq!(network.disconnect_calls, 1);
}

// ============================================================================
// Tests: tick()
// ============================================================================

#[test]
fn test_tick_is_noop() {
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    // tick() vor setup() ruft keine Collaborators auf
    boot.tick();
    boot.tick();
    assert!(led.writes.is_empty());
    assert_eq!(network.disconnect_calls, 0);

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();
    let writes_after_setup = led.writes.len();
    let lines_after_setup = log.lines.len();

    // tick() nach setup() verändert nichts Beobachtbares
    for _ in 0..10 {
        boot.tick();
    }
    assert_eq!(led.writes.len(), writes_after_setup);
    assert_eq!(log.lines.len(), lines_after_setup);
    assert_eq!(network.persistence_calls, 1);
    assert_eq!(network.disconnect_calls, 1);
}

// ============================================================================
// Tests: Polymorpher Modus-Contract
// ============================================================================

#[test]
fn test_mode_as_trait_object() {
    // Das Framework hält den aktiven Modus als Trait-Objekt
    let mut mode: Box<dyn DeviceMode> = Box::new(BootMode::new("boot"));
    assert_eq!(mode.name(), "boot");

    mode.attach_interface(leak_interface(LED_ON_HIGH, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    let mut ctx = ModeContext {
        led: &mut led,
        network: &mut network,
        log: &mut log,
        device_id: &device_id,
    };
    mode.setup(&mut ctx).unwrap();
    mode.tick();

    assert_eq!(network.hostname.as_deref(), Some("myhome-A1B2C3"));
}

// ============================================================================
// Tests: End-to-End Boot-Szenario
// ============================================================================

#[test]
fn test_boot_scenario_end_to_end() {
    // Active-low LED auf Pin 2, Brand "myhome", Kennung "A1B2C3"
    let descriptor = LedDescriptor {
        enabled: true,
        pin: 2,
        on: PinLevel::Low,
    };
    let mut boot = BootMode::new("boot");
    boot.attach_interface(leak_interface(descriptor, "myhome"));
    let mut led = MockLedPin::new();
    let mut network = MockNetwork::new();
    let mut log = MockLogSink::new();
    let device_id = FixedDeviceId("A1B2C3");

    run_setup(&mut boot, &mut led, &mut network, &mut log, &device_id).unwrap();

    // Pin 2 als Output konfiguriert und auf High getrieben (LED aus)
    assert_eq!(led.configured_pins, vec![2]);
    assert_eq!(led.writes, vec![(2, PinLevel::High)]);

    // Netzwerk: Persistenz aus, Verbindung getrennt, Hostname gesetzt
    assert_eq!(network.persistence, Some(false));
    assert_eq!(network.disconnect_calls, 1);
    assert_eq!(network.hostname.as_deref(), Some("myhome-A1B2C3"));

    // Boot-Banner als eine Zeile
    assert_eq!(log.lines, vec!["** Booting into boot mode **".to_string()]);
}

// ============================================================================
// Tests: build_hostname()
// ============================================================================

#[test]
fn test_build_hostname_simple() {
    let hostname = build_hostname("myhome", "A1B2C3").unwrap();
    assert_eq!(hostname.as_str(), "myhome-A1B2C3");
}

#[test]
fn test_build_hostname_too_long() {
    let brand = "abcdefghijklmnopqrstuvwxyz";
    let result = build_hostname(brand, "A1B2C3");
    assert_eq!(result, Err(BootError::HostnameTooLong));
}
