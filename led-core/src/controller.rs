//! LED Register Controller
//!
//! Übersetzt LED-Nummern (1..=16) in Bit-Operationen auf einem
//! gebundenen 16-Bit-Register.

use crate::logic::{led_is_on, with_led_off, with_led_on};
use crate::traits::{LedError, LedRegister};
use crate::types::{ALL_OFF, ALL_ON, LedIndex};

/// Controller für ein LED-Register
///
/// Zustand ist entweder "ungebunden" oder "gebunden an `R`". Im
/// ungebundenen Zustand sind alle Operationen No-ops und `is_set` liefert
/// `false`. Ungültige LED-Nummern werden ebenso stillschweigend ignoriert
/// (fail-quiet), damit Aufrufer in Schleifen keine Fehler prüfen müssen.
///
/// Mit dem Feature `strict` gibt es zusätzlich `try_*`-Varianten, die
/// stattdessen `LedError::NotBound` bzw. `LedError::InvalidIndex` liefern.
///
/// # Nebenläufigkeit
/// Der Controller synchronisiert nichts. Zugriff aus mehreren Threads oder
/// Interrupt-Kontexten muss der Aufrufer selbst absichern.
///
/// # Beispiele
///
/// ```
/// # use core::cell::Cell;
/// # use led_core::LedController;
/// let register = Cell::new(0xFFFF);
/// let mut leds = LedController::new();
///
/// leds.bind(Some(&register)).unwrap(); // → 0x0000
/// leds.set(4);
/// assert_eq!(register.get(), 0x0008);
/// assert!(leds.is_set(4));
/// ```
pub struct LedController<R: LedRegister> {
    register: Option<R>,
}

impl<R: LedRegister> LedController<R> {
    /// Erstellt einen ungebundenen Controller
    pub const fn new() -> Self {
        Self { register: None }
    }

    /// Bindet ein Register und schaltet alle LEDs aus
    ///
    /// `None` steht für eine ungültige Registerreferenz (z.B. ein
    /// Null-Zeiger aus [`MmioRegister::from_ptr`](crate::MmioRegister::from_ptr))
    /// und wird mit `LedError::InvalidArgument` abgelehnt. Ein bereits
    /// gebundenes Register bleibt dann unverändert gebunden.
    ///
    /// Ein vorher gebundenes Register wird ersetzt, ohne darauf zu schreiben.
    pub fn bind(&mut self, register: Option<R>) -> Result<(), LedError> {
        let Some(mut register) = register else {
            #[cfg(feature = "defmt")]
            defmt::warn!("LED-Register abgelehnt: ungültige Referenz");
            return Err(LedError::InvalidArgument);
        };

        register.write(ALL_OFF);
        self.register = Some(register);

        #[cfg(feature = "defmt")]
        defmt::debug!("LED-Register gebunden, alle LEDs aus");
        Ok(())
    }

    /// Schaltet alle LEDs aus und gibt das Register wieder frei
    ///
    /// Liefert das freigegebene Register zurück, damit der Aufrufer
    /// seinen Borrow zurückbekommt. Ohne gebundenes Register: `None`.
    pub fn unbind(&mut self) -> Option<R> {
        let mut register = self.register.take()?;
        register.write(ALL_OFF);

        #[cfg(feature = "defmt")]
        defmt::debug!("LED-Register freigegeben");
        Some(register)
    }

    /// Ist ein Register gebunden?
    pub fn is_bound(&self) -> bool {
        self.register.is_some()
    }

    /// Das gebundene Register (nur lesend)
    pub fn register(&self) -> Option<&R> {
        self.register.as_ref()
    }

    /// Aktueller Registerwert, `None` wenn ungebunden
    pub fn value(&self) -> Option<u16> {
        self.register.as_ref().map(LedRegister::read)
    }

    /// Schaltet eine LED ein
    pub fn set(&mut self, led: u8) {
        ignored("set", led, self.set_checked(led));
    }

    /// Schaltet eine LED aus
    pub fn clear(&mut self, led: u8) {
        ignored("clear", led, self.clear_checked(led));
    }

    /// Schaltet alle LEDs ein
    pub fn set_all(&mut self) {
        ignored("set_all", 0, self.write_all_checked(ALL_ON));
    }

    /// Schaltet alle LEDs aus
    ///
    /// Entspricht dem Effekt von `bind`, nutzt aber das bereits gebundene
    /// Register.
    pub fn clear_all(&mut self) {
        ignored("clear_all", 0, self.write_all_checked(ALL_OFF));
    }

    /// Ist die LED eingeschaltet?
    ///
    /// `false` bei ungültiger LED-Nummer oder ohne gebundenes Register.
    pub fn is_set(&self, led: u8) -> bool {
        self.is_set_checked(led).unwrap_or(false)
    }

    // ========================================================================
    // Gemeinsame Prüfungen (fail-quiet und strict)
    // ========================================================================

    fn bound_mut(&mut self, led: u8) -> Result<(&mut R, LedIndex), LedError> {
        let register = self.register.as_mut().ok_or(LedError::NotBound)?;
        let index = LedIndex::new(led).ok_or(LedError::InvalidIndex)?;
        Ok((register, index))
    }

    fn set_checked(&mut self, led: u8) -> Result<(), LedError> {
        let (register, index) = self.bound_mut(led)?;
        register.modify(|value| with_led_on(value, index));
        Ok(())
    }

    fn clear_checked(&mut self, led: u8) -> Result<(), LedError> {
        let (register, index) = self.bound_mut(led)?;
        register.modify(|value| with_led_off(value, index));
        Ok(())
    }

    fn write_all_checked(&mut self, value: u16) -> Result<(), LedError> {
        let register = self.register.as_mut().ok_or(LedError::NotBound)?;
        register.write(value);
        Ok(())
    }

    fn is_set_checked(&self, led: u8) -> Result<bool, LedError> {
        let register = self.register.as_ref().ok_or(LedError::NotBound)?;
        let index = LedIndex::new(led).ok_or(LedError::InvalidIndex)?;
        Ok(led_is_on(register.read(), index))
    }
}

// ============================================================================
// Strict Mode (optional feature)
// ============================================================================

#[cfg(feature = "strict")]
impl<R: LedRegister> LedController<R> {
    /// Wie [`set`](Self::set), meldet aber `NotBound` / `InvalidIndex`
    pub fn try_set(&mut self, led: u8) -> Result<(), LedError> {
        self.set_checked(led)
    }

    /// Wie [`clear`](Self::clear), meldet aber `NotBound` / `InvalidIndex`
    pub fn try_clear(&mut self, led: u8) -> Result<(), LedError> {
        self.clear_checked(led)
    }

    /// Wie [`set_all`](Self::set_all), meldet aber `NotBound`
    pub fn try_set_all(&mut self) -> Result<(), LedError> {
        self.write_all_checked(ALL_ON)
    }

    /// Wie [`clear_all`](Self::clear_all), meldet aber `NotBound`
    pub fn try_clear_all(&mut self) -> Result<(), LedError> {
        self.write_all_checked(ALL_OFF)
    }

    /// Wie [`is_set`](Self::is_set), meldet aber `NotBound` / `InvalidIndex`
    pub fn try_is_set(&self, led: u8) -> Result<bool, LedError> {
        self.is_set_checked(led)
    }
}

impl<R: LedRegister> Default for LedController<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn ignored(operation: &str, led: u8, result: Result<(), LedError>) {
    if let Err(e) = result {
        #[cfg(feature = "defmt")]
        defmt::trace!("{}({}) ignoriert: {}", operation, led, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    fn bound(register: &Cell<u16>) -> LedController<&Cell<u16>> {
        let mut leds = LedController::new();
        leds.bind(Some(register)).unwrap();
        leds
    }

    #[test]
    fn test_bind_turns_all_off() {
        let register = Cell::new(0xFFFF);
        let leds = bound(&register);
        assert!(leds.is_bound());
        assert_eq!(register.get(), 0x0000);
        assert_eq!(leds.value(), Some(0x0000));
    }

    #[test]
    fn test_bind_none_keeps_previous_register() {
        let register = Cell::new(0xFFFF);
        let mut leds = bound(&register);
        leds.set(3);

        assert_eq!(leds.bind(None), Err(LedError::InvalidArgument));
        assert!(leds.is_bound());
        assert_eq!(register.get(), 0x0004);
    }

    #[test]
    fn test_bind_none_while_unbound() {
        let mut leds: LedController<&Cell<u16>> = LedController::new();
        assert_eq!(leds.bind(None), Err(LedError::InvalidArgument));
        assert!(!leds.is_bound());
    }

    #[test]
    fn test_rebind_leaves_old_register_untouched() {
        let first = Cell::new(0xFFFF);
        let second = Cell::new(0xFFFF);
        let mut leds = bound(&first);
        leds.set(1);

        leds.bind(Some(&second)).unwrap();
        leds.set(2);

        assert_eq!(first.get(), 0x0001);
        assert_eq!(second.get(), 0x0002);
    }

    #[test]
    fn test_set_and_clear_single_led() {
        let register = Cell::new(0);
        let mut leds = bound(&register);

        leds.set(4);
        assert_eq!(register.get(), 0x0008);
        leds.clear(4);
        assert_eq!(register.get(), 0x0000);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let register = Cell::new(0);
        let mut leds = bound(&register);

        leds.set(0);
        leds.set(17);
        assert_eq!(register.get(), 0x0000);

        leds.set_all();
        leds.clear(0);
        leds.clear(20);
        assert_eq!(register.get(), 0xFFFF);
        assert!(!leds.is_set(0));
        assert!(!leds.is_set(17));
    }

    #[test]
    fn test_unbound_is_noop() {
        let mut leds: LedController<&Cell<u16>> = LedController::new();
        leds.set(1);
        leds.clear(1);
        leds.set_all();
        leds.clear_all();
        assert!(!leds.is_set(1));
        assert_eq!(leds.value(), None);
    }

    #[test]
    fn test_unbind_turns_all_off_and_returns_register() {
        let register = Cell::new(0);
        let mut leds = bound(&register);
        leds.set_all();

        let released = leds.unbind();
        assert!(released.is_some());
        assert_eq!(register.get(), 0x0000);
        assert!(!leds.is_bound());
        assert!(leds.unbind().is_none());
    }

    #[test]
    fn test_mut_ref_register_is_given_back() {
        let mut cell = 0xFFFFu16;
        let mut leds = LedController::new();
        leds.bind(Some(&mut cell)).unwrap();
        leds.set(16);
        assert_eq!(leds.value(), Some(0x8000));
        drop(leds);
        assert_eq!(cell, 0x8000);
    }

    #[cfg(feature = "strict")]
    #[test]
    fn test_strict_reports_not_bound_before_invalid_index() {
        let mut leds: LedController<&Cell<u16>> = LedController::new();
        assert_eq!(leds.try_set(0), Err(LedError::NotBound));
        assert_eq!(leds.try_is_set(99), Err(LedError::NotBound));
        assert_eq!(leds.try_set_all(), Err(LedError::NotBound));
    }

    #[cfg(feature = "strict")]
    #[test]
    fn test_strict_reports_invalid_index() {
        let register = Cell::new(0);
        let mut leds = bound(&register);
        assert_eq!(leds.try_set(17), Err(LedError::InvalidIndex));
        assert_eq!(leds.try_clear(0), Err(LedError::InvalidIndex));
        assert_eq!(leds.try_set(5), Ok(()));
        assert_eq!(leds.try_is_set(5), Ok(true));
        assert_eq!(register.get(), 0x0010);
    }
}
