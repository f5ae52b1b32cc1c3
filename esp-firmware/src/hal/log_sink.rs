// Serielle Log-Senke über esp-println
use esp_core::LogSink;

/// Log-Senke auf der seriellen Konsole
///
/// Fire-and-forget und synchron. `log()` schreibt Teil-Strings ohne
/// Zeilenende, `logln()` schliesst die Zeile ab.
pub struct SerialLogSink;

impl LogSink for SerialLogSink {
    fn log(&mut self, message: &str) {
        esp_println::print!("{}", message);
    }

    fn logln(&mut self, message: &str) {
        esp_println::println!("{}", message);
    }
}
