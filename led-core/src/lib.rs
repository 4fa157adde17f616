//! LED Core - Platform-agnostic LED Register Controller
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie steuert bis zu 16 LEDs über ein einzelnes 16-Bit-Register,
//! das der Aufrufer bereitstellt (MMIO-Adresse oder einfache Speicherzelle).

#![no_std]

pub mod controller;
pub mod logic;
pub mod register;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::LedController;
pub use logic::{led_is_on, lit_count, next_position, with_led_off, with_led_on};
pub use register::MmioRegister;
pub use traits::{LedError, LedRegister};
pub use types::{ALL_OFF, ALL_ON, LED_COUNT, LedIndex};
