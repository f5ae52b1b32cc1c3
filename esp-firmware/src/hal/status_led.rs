// Status-LED Treiber über esp-hal GPIO
//
// Implementiert den StatusLedPin Trait aus esp-core für einen
// digitalen GPIO-Output.

use esp_core::{PinLevel, StatusLedPin};
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};

/// Status-LED an einem GPIO-Pin
///
/// Der Pin wird erst bei `configure_output()` als Output konfiguriert,
/// vorher bleibt er im Reset-Zustand. Der Treiber ist fest an den bei der
/// Konstruktion übergebenen Pin gebunden; die Pin-Nummer aus dem
/// LedDescriptor wird nicht erneut aufgelöst (esp-hal Pins sind typisiert,
/// die Zuordnung passiert in main.rs).
pub struct GpioStatusLed {
    pin: Option<AnyPin<'static>>,
    output: Option<Output<'static>>,
}

impl GpioStatusLed {
    /// Erstellt den Treiber für den LED-Pin
    ///
    /// # Parameter
    /// - `pin`: degradeter GPIO-Pin (z.B. `peripherals.GPIO2.degrade()`)
    pub fn new(pin: AnyPin<'static>) -> Self {
        Self {
            pin: Some(pin),
            output: None,
        }
    }
}

/// Konvertiert den logischen Pegel in den esp-hal Pegel
///
/// Freie Funktion statt From-Impl: beide Typen sind fremd, die
/// Orphan Rule verbietet das Trait-Impl hier.
fn to_hal_level(level: PinLevel) -> Level {
    match level {
        PinLevel::Low => Level::Low,
        PinLevel::High => Level::High,
    }
}

impl StatusLedPin for GpioStatusLed {
    fn configure_output(&mut self, _pin: u8) {
        if let Some(pin) = self.pin.take() {
            // Der Initialpegel wird direkt danach per write() überschrieben
            self.output = Some(Output::new(pin, Level::Low, OutputConfig::default()));
        }
    }

    fn write(&mut self, _pin: u8, level: PinLevel) {
        if let Some(output) = &mut self.output {
            output.set_level(to_hal_level(level));
        }
    }
}
