// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Status-LED Konfiguration (On-Board WS2812)
// ============================================================================

/// GPIO-Pin für die RGB Status-LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// LED-Register Konfiguration
// ============================================================================

/// Startwert der Register-Zelle vor dem Binden
/// Absichtlich "alle an", damit sichtbar ist, dass bind() alles ausschaltet
pub const REGISTER_POWER_ON_VALUE: u16 = 0xFFFF;

/// Register-LED, deren Zustand auf der Status-LED gespiegelt wird (1..=16)
pub const MIRROR_LED_INDEX: u8 = 1;

/// Intervall des Lauflichts in Millisekunden
pub const CHASE_INTERVAL_MS: u64 = 250;

/// Dauer des "alle an"-Blitzes nach jeder Runde in Millisekunden
pub const ROUND_FLASH_MS: u64 = 500;
