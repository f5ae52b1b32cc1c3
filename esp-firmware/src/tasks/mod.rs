// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Die Tasks starten erst,
// nachdem der Boot-Modus das Netzwerk in einen sauberen Zustand gebracht
// und den Hostnamen abgeleitet hat.

pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use mdns::mdns_responder_task;
pub use wifi::{connection_task, dhcp_task, net_task};
