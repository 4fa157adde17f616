//! Pure Business Logic Functions
//!
//! Bit-Operationen auf Registerwerten, ohne Hardware-Dependencies (testbar!)

use crate::types::LedIndex;

/// Setzt das Bit einer LED (OR mit Maske)
///
/// # Beispiele
///
/// ```
/// # use led_core::{LedIndex, with_led_on};
/// let led = LedIndex::new(4).unwrap();
/// assert_eq!(with_led_on(0x0000, led), 0x0008);
/// ```
pub fn with_led_on(value: u16, led: LedIndex) -> u16 {
    value | led.mask()
}

/// Löscht das Bit einer LED (AND mit invertierter Maske)
pub fn with_led_off(value: u16, led: LedIndex) -> u16 {
    value & !led.mask()
}

/// Prüft, ob das Bit einer LED gesetzt ist
pub fn led_is_on(value: u16, led: LedIndex) -> bool {
    value & led.mask() != 0
}

/// Anzahl der eingeschalteten LEDs
pub fn lit_count(value: u16) -> u8 {
    value.count_ones() as u8
}

/// Nächste LED für ein Lauflicht: 1 → 2 → … → 16 → 1
///
/// # Beispiele
///
/// ```
/// # use led_core::{LedIndex, next_position};
/// assert_eq!(next_position(LedIndex::LAST), LedIndex::FIRST);
/// ```
pub fn next_position(led: LedIndex) -> LedIndex {
    LedIndex::new(led.get() + 1).unwrap_or(LedIndex::FIRST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ALL_OFF, ALL_ON};

    fn led(n: u8) -> LedIndex {
        LedIndex::new(n).unwrap()
    }

    #[test]
    fn test_with_led_on_keeps_other_bits() {
        assert_eq!(with_led_on(0x0200, led(2)), 0x0202);
    }

    #[test]
    fn test_with_led_on_is_idempotent() {
        let once = with_led_on(ALL_OFF, led(7));
        assert_eq!(with_led_on(once, led(7)), once);
    }

    #[test]
    fn test_with_led_off_keeps_other_bits() {
        assert_eq!(with_led_off(0x020A, led(4)), 0x0202);
        assert_eq!(with_led_off(ALL_ON, led(16)), 0x7FFF);
    }

    #[test]
    fn test_led_is_on() {
        assert!(led_is_on(0x0008, led(4)));
        assert!(!led_is_on(0x0008, led(3)));
        assert!(!led_is_on(ALL_OFF, led(1)));
    }

    #[test]
    fn test_lit_count() {
        assert_eq!(lit_count(ALL_OFF), 0);
        assert_eq!(lit_count(0x020A), 3);
        assert_eq!(lit_count(ALL_ON), 16);
    }

    #[test]
    fn test_next_position_full_cycle() {
        let mut position = LedIndex::FIRST;
        for _ in 0..16 {
            position = next_position(position);
        }
        assert_eq!(position, LedIndex::FIRST);
        assert_eq!(next_position(led(9)), led(10));
    }
}
