//! Border tokens

use crate::theme::ThemeSection;

pub fn borders() -> ThemeSection {
    super::table(&[("default", "1px solid"), ("thick", "2px solid")])
}

pub fn border_radii() -> ThemeSection {
    super::table(&[
        ("1", "2px"),
        ("2", "4px"),
        ("3", "8px"),
        ("default", "4px"),
        ("round", "9999px"),
    ])
}
