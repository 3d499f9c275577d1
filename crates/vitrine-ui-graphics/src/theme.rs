//! Light/dark theme palettes for the storefront widgets.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Resolved color roles for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub on_surface: Color,
    pub surface_variant: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub price: Color,
    pub price_original: Color,
    pub discount_badge: Color,
    pub on_discount_badge: Color,
    pub rating_star: Color,
    pub skeleton_base: Color,
    pub skeleton_highlight: Color,
    pub outline: Color,
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            surface: Color::from_hex(0xffffff),
            on_surface: Color::from_hex(0x1c1b1f),
            surface_variant: Color::from_hex(0xf4f4f5),
            primary: Color::from_hex(0x2563eb),
            on_primary: Color::WHITE,
            price: Color::from_hex(0x111827),
            price_original: Color::from_hex(0x9ca3af),
            discount_badge: Color::from_hex(0xdc2626),
            on_discount_badge: Color::WHITE,
            rating_star: Color::from_hex(0xf59e0b),
            skeleton_base: Color::from_hex(0xe5e7eb),
            skeleton_highlight: Color::from_hex(0xf9fafb),
            outline: Color::from_hex(0xd4d4d8),
        }
    }

    pub fn dark() -> Self {
        Self {
            surface: Color::from_hex(0x18181b),
            on_surface: Color::from_hex(0xe4e4e7),
            surface_variant: Color::from_hex(0x27272a),
            primary: Color::from_hex(0x60a5fa),
            on_primary: Color::from_hex(0x0b1021),
            price: Color::from_hex(0xf4f4f5),
            price_original: Color::from_hex(0x71717a),
            discount_badge: Color::from_hex(0xef4444),
            on_discount_badge: Color::WHITE,
            rating_star: Color::from_hex(0xfbbf24),
            skeleton_base: Color::from_hex(0x27272a),
            skeleton_highlight: Color::from_hex(0x3f3f46),
            outline: Color::from_hex(0x3f3f46),
        }
    }
}

/// Theme handed into widget specs; owns the active mode and its palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ColorScheme,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ColorScheme::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ColorScheme::dark(),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn toggled(self) -> Self {
        Self::for_mode(self.mode.toggled())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
