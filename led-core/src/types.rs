//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der LEDs im Register (ein Bit pro LED)
pub const LED_COUNT: u8 = 16;

/// Registerwert: alle LEDs aus
pub const ALL_OFF: u16 = 0x0000;

/// Registerwert: alle LEDs an
pub const ALL_ON: u16 = 0xFFFF;

/// Gültige LED-Nummer (1-basiert, 1..=16)
///
/// LED `n` entspricht Bit `n - 1` im Register. Jede Operation, die eine
/// LED-Nummer annimmt, prüft sie über [`LedIndex::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Erste LED
    pub const FIRST: Self = Self(1);

    /// Letzte LED
    pub const LAST: Self = Self(LED_COUNT);

    /// Prüft eine LED-Nummer. Gibt `None` für 0 und alles über 16 zurück.
    pub const fn new(led: u8) -> Option<Self> {
        if led >= 1 && led <= LED_COUNT {
            Some(Self(led))
        } else {
            None
        }
    }

    /// Die LED-Nummer (1..=16)
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Bitmaske dieser LED im Register
    pub const fn mask(self) -> u16 {
        1 << (self.0 - 1)
    }

    /// Alle LEDs in aufsteigender Reihenfolge
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=LED_COUNT).map(Self)
    }
}

impl core::convert::TryFrom<u8> for LedIndex {
    type Error = crate::LedError;

    fn try_from(led: u8) -> Result<Self, Self::Error> {
        Self::new(led).ok_or(crate::LedError::InvalidIndex)
    }
}

impl From<LedIndex> for u8 {
    fn from(index: LedIndex) -> Self {
        index.0
    }
}

impl core::fmt::Display for LedIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LED {}", self.0)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED {}", self.0)
    }
}
