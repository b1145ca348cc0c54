//! Altitude tokens
//!
//! Altitudes are box shadows for raised surfaces, from barely lifted (`100`)
//! to floating overlays (`700`).

use crate::theme::ThemeSection;

pub fn altitudes() -> ThemeSection {
    super::table(&[
        ("100", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
        ("200", "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)"),
        ("300", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"),
        ("400", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)"),
        ("500", "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)"),
        ("600", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
        ("700", "0 35px 60px -15px rgba(0, 0, 0, 0.3)"),
    ])
}
