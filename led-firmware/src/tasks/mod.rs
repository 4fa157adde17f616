// Task-Modul: Enthält alle Embassy Tasks

pub mod led_chase;

// Re-export Tasks für einfachen Import
pub use led_chase::led_chase_task;
