// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von led-core
pub use led_core::{LedController, LedError, LedIndex, LedRegister, lit_count, next_position};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal, RMT).
// Die testbare Logik liegt deshalb in led-core:
// - LedController, LedRegister, Bit-Logik → Unit Tests in led-core
// - Szenarien mit Mock-Register → led-tests (läuft auf dem Host)
//
// led_chase_logic() ist generisch über LedRegister und StatusLedWriter,
// hängt aber über embassy-time am Target.
