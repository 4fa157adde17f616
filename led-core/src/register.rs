//! LedRegister Implementierungen
//!
//! Speicherzellen, an die der Controller gebunden werden kann.

use core::cell::Cell;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::traits::LedRegister;

impl LedRegister for &mut u16 {
    fn read(&self) -> u16 {
        **self
    }

    fn write(&mut self, value: u16) {
        **self = value;
    }
}

impl LedRegister for &Cell<u16> {
    fn read(&self) -> u16 {
        self.get()
    }

    fn write(&mut self, value: u16) {
        self.set(value);
    }
}

/// Memory-mapped Hardware-Register
///
/// Nicht-besitzender Zeiger auf eine 16-Bit-Zelle. Alle Zugriffe sind
/// volatile, damit der Compiler keine Register-Schreibzugriffe
/// zusammenfasst oder entfernt. Der Speicher wird nie freigegeben.
pub struct MmioRegister<'a> {
    ptr: NonNull<u16>,
    _register: PhantomData<&'a mut u16>,
}

impl<'a> MmioRegister<'a> {
    /// Erstellt ein Register aus einer rohen Adresse
    ///
    /// Gibt `None` für einen Null-Zeiger zurück. Das Ergebnis kann direkt
    /// an [`LedController::bind`](crate::LedController::bind) übergeben
    /// werden, das `None` mit `LedError::InvalidArgument` ablehnt.
    ///
    /// # Safety
    /// `ptr` muss auf ein korrekt ausgerichtetes, les- und schreibbares
    /// 16-Bit-Register zeigen, das für `'a` gültig bleibt. Während dieser
    /// Zeit darf niemand sonst (auch kein Interrupt-Handler) ohne externe
    /// Synchronisation darauf zugreifen.
    pub unsafe fn from_ptr(ptr: *mut u16) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            _register: PhantomData,
        })
    }

    /// Erstellt ein Register aus einer normalen Speicherzelle
    pub fn from_mut(cell: &'a mut u16) -> Self {
        Self {
            ptr: NonNull::from(cell),
            _register: PhantomData,
        }
    }

    /// Adresse des Registers
    pub fn as_ptr(&self) -> *mut u16 {
        self.ptr.as_ptr()
    }
}

impl LedRegister for MmioRegister<'_> {
    fn read(&self) -> u16 {
        // SAFETY: Gültigkeit und exklusiver Zugriff sind durch from_ptr/from_mut garantiert
        unsafe { self.ptr.as_ptr().read_volatile() }
    }

    fn write(&mut self, value: u16) {
        // SAFETY: siehe read()
        unsafe { self.ptr.as_ptr().write_volatile(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mut_ref_register_read_write() {
        let mut cell = 0x1234u16;
        {
            let mut register = &mut cell;
            assert_eq!(register.read(), 0x1234);
            register.write(0x00FF);
            register.modify(|value| value | 0x0100);
        }
        assert_eq!(cell, 0x01FF);
    }

    #[test]
    fn test_cell_register_is_observable() {
        let cell = Cell::new(0);
        let mut register = &cell;
        register.write(0xABCD);
        assert_eq!(cell.get(), 0xABCD);
    }

    #[test]
    fn test_mmio_from_null_is_rejected() {
        let register = unsafe { MmioRegister::from_ptr(core::ptr::null_mut()) };
        assert!(register.is_none());
    }

    #[test]
    fn test_mmio_from_ptr_accesses_memory() {
        let mut cell = 0xFFFFu16;
        let ptr: *mut u16 = &mut cell;
        {
            let mut register = unsafe { MmioRegister::from_ptr(ptr) }.unwrap();
            assert_eq!(register.as_ptr(), ptr);
            assert_eq!(register.read(), 0xFFFF);
            register.write(0x0002);
        }
        assert_eq!(cell, 0x0002);
    }
}
