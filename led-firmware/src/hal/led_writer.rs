// Status-LED Writer Trait und Implementierung
//
// Die On-Board WS2812 LED zeigt den Zustand einer Register-LED an.
// Der Trait erlaubt, die Lauflicht-Logik ohne RMT-Peripheral zu betreiben.

use rgb::RGB8;

/// Fehler-Typ für Status-LED Schreiboperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum StatusLedError {
    WriteFailed,
}

/// Trait für die Status-LED
pub trait StatusLedWriter {
    /// Schreibt eine RGB-Farbe auf die Status-LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `StatusLedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), StatusLedError>;
}

// ============================================================================
// Real Hardware Implementation
// ============================================================================

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
const LED_BUFFER_SIZE: usize = 25;

/// Status-LED über das RMT Peripheral
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    ///
    /// Gibt `None` zurück, wenn das RMT Peripheral nicht initialisiert werden kann.
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Option<Self> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).ok()?;
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Some(Self { led })
    }
}

impl StatusLedWriter for RmtLedWriter<'_> {
    fn write(&mut self, color: RGB8) -> Result<(), StatusLedError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| StatusLedError::WriteFailed)
    }
}
