// LED Chase Task - Lauflicht über das 16-Bit LED-Register
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;
use static_cell::StaticCell;

use crate::config::{
    CHASE_INTERVAL_MS, LED_BRIGHTNESS, MIRROR_LED_INDEX, REGISTER_POWER_ON_VALUE, RMT_CLOCK_MHZ,
    ROUND_FLASH_MS,
};
use crate::hal::{RmtLedWriter, StatusLedWriter};
use crate::{LedController, LedIndex, LedRegister, lit_count, next_position};

/// Register-Zelle, an die der Controller gebunden wird
static REGISTER: StaticCell<u16> = StaticCell::new();

/// Spiegelt den Zustand der Mirror-LED auf die Status-LED
fn mirror<R: LedRegister, L: StatusLedWriter>(leds: &LedController<R>, status_led: &mut L) {
    let color = if leds.is_set(MIRROR_LED_INDEX) {
        RGB8 {
            r: 0,
            g: LED_BRIGHTNESS,
            b: 0,
        }
    } else {
        RGB8::default()
    };

    if let Err(e) = status_led.write(color) {
        error!("Failed to write status LED: {}", e);
    }
}

/// LED Chase Logic - Testbare Logik ohne RMT-Abhängigkeit
///
/// - Bindet das Register (alle LEDs aus)
/// - Schaltet reihum genau eine LED ein (1 → 16)
/// - Nach jeder Runde kurz alle LEDs an, dann alle aus
/// - Spiegelt nach jedem Schritt `MIRROR_LED_INDEX` auf die Status-LED
///
/// # Parameter
/// - `status_led`: Status-LED Writer (Hardware oder Mock)
/// - `register`: Register, das der Controller steuert
pub async fn led_chase_logic<R: LedRegister, L: StatusLedWriter>(mut status_led: L, register: R) {
    let mut leds = LedController::new();
    if let Err(e) = leds.bind(Some(register)) {
        error!("Failed to bind LED register: {}", e);
        return;
    }

    let mut position = LedIndex::FIRST;
    leds.set(position.get());

    loop {
        mirror(&leds, &mut status_led);
        Timer::after(Duration::from_millis(CHASE_INTERVAL_MS)).await;

        let next = next_position(position);
        if next == LedIndex::FIRST {
            leds.set_all();
            mirror(&leds, &mut status_led);
            info!("Round complete, all LEDs on");
            Timer::after(Duration::from_millis(ROUND_FLASH_MS)).await;
            leds.clear_all();
        } else {
            leds.clear(position.get());
        }

        leds.set(next.get());
        position = next;

        if let Some(value) = leds.value() {
            info!(
                "Chase: {} (register {=u16:#x}, {} lit)",
                position,
                value,
                lit_count(value)
            );
        }
    }
}

/// LED Chase Task - Embassy Task
///
/// Initialisiert Status-LED und Register-Zelle und ruft dann
/// `led_chase_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn led_chase_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    let Some(status_led) = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
    else {
        error!("Failed to initialize RMT peripheral");
        return;
    };

    let register: &'static mut u16 = REGISTER.init(REGISTER_POWER_ON_VALUE);
    led_chase_logic(status_led, register).await;
}
