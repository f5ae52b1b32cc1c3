// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Pin;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_boot_modus::config::{
    BOOT_MODE_NAME, DEVICE_BRAND, EXTRA_HEAP_SIZE, LED_ENABLED, LED_GPIO_PIN, LED_ON_LEVEL,
    MODE_TICK_INTERVAL_MS, WIFI_HEAP_SIZE,
};
use esp_boot_modus::hal::{EfuseDeviceId, GpioStatusLed, SerialLogSink, WifiNetwork};
use esp_boot_modus::tasks::{connection_task, dhcp_task, mdns_responder_task, net_task};
use esp_boot_modus::{
    BootMode, DeviceInterface, DeviceMode, Hostname, LedDescriptor, ModeContext,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert die Hardware, führt den Boot-Modus aus, startet danach
/// die Netzwerk-Tasks und treibt den aktiven Modus im Tick-Loop.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (mut wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net
    // 4 Sockets: DHCP (1) + mDNS (1) + Reserve
    static RESOURCES: static_cell::StaticCell<StackResources<4>> = static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Geteilte Geräte-Konfiguration
    // In diesem Firmware-Stand kommt sie aus config.rs, das Framework
    // kann sie später aus persistiertem JSON laden (serde Feature)
    static INTERFACE: static_cell::StaticCell<DeviceInterface> = static_cell::StaticCell::new();
    let interface = &*INTERFACE.init(DeviceInterface {
        led: LedDescriptor {
            enabled: LED_ENABLED,
            pin: LED_GPIO_PIN,
            on: LED_ON_LEVEL,
        },
        brand: Hostname::try_from(DEVICE_BRAND).expect("Brand exceeds hostname capacity"),
    });

    // HAL Capabilities für den Boot-Modus
    // Die Pin-Zuordnung muss zu config::LED_GPIO_PIN passen
    let mut led = GpioStatusLed::new(peripherals.GPIO2.degrade());
    let mut log = SerialLogSink;
    let device_id = EfuseDeviceId::read();

    // Boot-Modus ausführen: LED aus, Netzwerk-Reset, Hostname, Banner
    let mut boot = BootMode::new(BOOT_MODE_NAME);
    boot.attach_interface(interface);

    let hostname: Hostname = {
        let mut network = WifiNetwork::new(&mut wifi_controller);
        let mut ctx = ModeContext {
            led: &mut led,
            network: &mut network,
            log: &mut log,
            device_id: &device_id,
        };
        boot.setup(&mut ctx).expect("Boot mode setup failed");
        network.take_hostname()
    };

    // Hostname für den mDNS Responder 'static machen
    static HOSTNAME: static_cell::StaticCell<Hostname> = static_cell::StaticCell::new();
    let hostname: &'static str = HOSTNAME.init(hostname).as_str();

    // Spawn WiFi Tasks (übernehmen den Controller nach dem Boot-Setup)
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // Spawn mDNS Responder (advertised <brand>-<device_id>.local)
    spawner.spawn(mdns_responder_task(stack, hostname)).unwrap();

    // Main-Loop: treibt den aktiven Modus
    // Der Boot-Modus hat keine Per-Tick-Arbeit, der Aufruf erfüllt den
    // einheitlichen Modus-Contract
    loop {
        boot.tick();
        Timer::after(Duration::from_millis(MODE_TICK_INTERVAL_MS)).await;
    }
}
