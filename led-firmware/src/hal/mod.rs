// Hardware Abstraction Layer (HAL) Module
//
// Kapselt die On-Board Status-LED hinter einem Trait,
// damit die Lauflicht-Logik ohne RMT-Hardware auskommt.

pub mod led_writer;

pub use led_writer::{RmtLedWriter, StatusLedError, StatusLedWriter};
