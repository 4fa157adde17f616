//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Register-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
///
/// `InvalidArgument` tritt nur beim Binden auf. `NotBound` und
/// `InvalidIndex` liefern nur die `try_*`-Operationen (Feature `strict`),
/// die normalen Operationen ignorieren diese Fälle stillschweigend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedError {
    /// Ungültige (Null-)Registerreferenz beim Binden
    InvalidArgument,
    /// Kein Register gebunden
    NotBound,
    /// LED-Nummer außerhalb von 1..=16
    InvalidIndex,
}

impl core::fmt::Display for LedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::InvalidArgument => f.write_str("invalid register reference"),
            LedError::NotBound => f.write_str("no register bound"),
            LedError::InvalidIndex => f.write_str("LED index out of range"),
        }
    }
}

impl core::error::Error for LedError {}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InvalidArgument => defmt::write!(fmt, "InvalidArgument"),
            LedError::NotBound => defmt::write!(fmt, "NotBound"),
            LedError::InvalidIndex => defmt::write!(fmt, "InvalidIndex"),
        }
    }
}

/// Trait für den Zugriff auf ein 16-Bit LED-Register
///
/// Abstrahiert die Speicherzelle, deren Bits die LEDs schalten.
/// Der Controller besitzt den Speicher nie, Implementierungen sind
/// Borrows oder nicht-besitzende Zeiger.
///
/// # Implementierungen
/// - **Production:** [`MmioRegister`](crate::MmioRegister) (volatile Zugriff auf eine Hardware-Adresse)
/// - **Hosted:** `&mut u16` und `&Cell<u16>` (einfache Speicherzelle)
/// - **Testing:** MockRegister (zählt Lese-/Schreibzugriffe)
pub trait LedRegister {
    /// Liest den aktuellen Registerwert
    fn read(&self) -> u16;

    /// Schreibt den kompletten Registerwert
    fn write(&mut self, value: u16);

    /// Read-Modify-Write
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(u16) -> u16,
    {
        let value = self.read();
        self.write(f(value));
    }
}
