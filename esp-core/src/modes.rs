//! Betriebsmodi des Geräts
//!
//! Definiert den einheitlichen Modus-Contract (`DeviceMode`) und den
//! Boot-Modus als Implementierung. Das Framework hält den jeweils aktiven
//! Modus als Trait-Objekt und treibt ihn, ohne die konkrete Art zu kennen.

use crate::logic::build_hostname;
use crate::traits::{BootError, DeviceIdProvider, LogSink, NetworkControl, StatusLedPin};
use crate::types::DeviceInterface;

/// Capability-Bundle für Modus-Operationen
///
/// Bündelt die externen Collaborators, die ein Modus während `setup()`
/// konsumiert. Die Referenzen sind nur für die Dauer des Aufrufs geliehen,
/// danach gehören die Treiber wieder dem Aufrufer.
pub struct ModeContext<'a> {
    pub led: &'a mut dyn StatusLedPin,
    pub network: &'a mut dyn NetworkControl,
    pub log: &'a mut dyn LogSink,
    pub device_id: &'a dyn DeviceIdProvider,
}

/// Einheitlicher Contract für alle Betriebsmodi (boot/normal/configuration)
///
/// Object-safe, damit das Framework eine polymorphe Sammlung von Modi
/// halten und den aktiven per Modus-Wechsel-Event austauschen kann.
pub trait DeviceMode {
    /// Menschenlesbarer Modus-Name (für Logging)
    fn name(&self) -> &'static str;

    /// Injiziert die geteilte Geräte-Konfiguration
    ///
    /// Muss vor `setup()` aufgerufen werden. Ein erneuter Aufruf
    /// überschreibt die vorherige Referenz.
    fn attach_interface(&mut self, interface: &'static DeviceInterface);

    /// Führt die einmalige Initialisierung des Modus aus
    fn setup(&mut self, ctx: &mut ModeContext<'_>) -> Result<(), BootError>;

    /// Wird bei jedem Scheduler-Durchlauf aufgerufen, solange der Modus
    /// aktiv ist
    fn tick(&mut self);
}

/// Boot-Modus
///
/// Einmalige Initialisierung direkt nach dem Einschalten:
/// - Status-LED in den sichtbaren "Aus"-Zustand schalten (falls aktiviert)
/// - Netzwerk-Persistenz deaktivieren und alte Association trennen
/// - Hostname aus Brand und Geräte-Kennung ableiten und setzen
/// - Boot-Banner loggen
pub struct BootMode {
    name: &'static str,
    interface: Option<&'static DeviceInterface>,
}

impl BootMode {
    /// Erstellt einen neuen Boot-Modus
    ///
    /// Keine Validierung, keine Seiteneffekte. Die Geräte-Konfiguration
    /// wird später via `attach_interface()` injiziert, weil sie zum
    /// Konstruktionszeitpunkt noch nicht zwingend geladen ist.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            interface: None,
        }
    }
}

impl DeviceMode for BootMode {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attach_interface(&mut self, interface: &'static DeviceInterface) {
        self.interface = Some(interface);
    }

    fn setup(&mut self, ctx: &mut ModeContext<'_>) -> Result<(), BootError> {
        // Ohne injizierte Konfiguration wird gar nichts angefasst
        let interface = self.interface.ok_or(BootError::InterfaceNotAttached)?;

        // LED aus: invers zum konfigurierten "An"-Pegel
        if interface.led.enabled {
            ctx.led.configure_output(interface.led.pin);
            ctx.led.write(interface.led.pin, interface.led.on.inverse());
        }

        // Netzwerk in bekannten sauberen Zustand bringen.
        // Credentials persistiert das Framework selbst, nicht das Subsystem.
        ctx.network.set_persistence(false);
        ctx.network.disconnect();

        // Hostname: <brand>-<device_id>, begrenzt auf MAX_HOSTNAME_LENGTH
        let hostname = build_hostname(interface.brand.as_str(), ctx.device_id.device_id())?;
        ctx.network.set_hostname(hostname.as_str());

        ctx.log.log("** Booting into ");
        ctx.log.log(self.name);
        ctx.log.logln(" mode **");

        Ok(())
    }

    fn tick(&mut self) {
        // Der Boot-Modus hat keine wiederkehrende Arbeit
    }
}
