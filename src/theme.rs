use iced::Color;

// ── Background colors ──
pub const BG_PRIMARY: Color = Color::from_rgb(
    0x0a as f32 / 255.0,
    0x0a as f32 / 255.0,
    0x12 as f32 / 255.0,
);
pub const BG_SECONDARY: Color = Color::from_rgb(
    0x13 as f32 / 255.0,
    0x13 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const BG_TERTIARY: Color = Color::from_rgb(
    0x1d as f32 / 255.0,
    0x1d as f32 / 255.0,
    0x2e as f32 / 255.0,
);
pub const BG_HOVER: Color = Color::from_rgb(
    0x28 as f32 / 255.0,
    0x28 as f32 / 255.0,
    0x3e as f32 / 255.0,
);

// ── Border colors ──
pub const BORDER: Color = Color::from_rgb(
    0x2a as f32 / 255.0,
    0x2a as f32 / 255.0,
    0x42 as f32 / 255.0,
);

// ── Text colors ──
pub const TEXT_PRIMARY: Color = Color::from_rgb(
    0xf1 as f32 / 255.0,
    0xf1 as f32 / 255.0,
    0xf5 as f32 / 255.0,
);
pub const TEXT_SECONDARY: Color = Color::from_rgb(
    0xa6 as f32 / 255.0,
    0xa6 as f32 / 255.0,
    0xb8 as f32 / 255.0,
);
pub const TEXT_MUTED: Color = Color::from_rgb(
    0x6e as f32 / 255.0,
    0x6e as f32 / 255.0,
    0x84 as f32 / 255.0,
);

// ── Brand accent (the red the whole app hangs off) ──
pub const BRAND: Color = Color::from_rgb(
    0xe5 as f32 / 255.0,
    0x0a as f32 / 255.0,
    0x3c as f32 / 255.0,
);
pub const BRAND_HOVER: Color = Color::from_rgb(
    0xf4 as f32 / 255.0,
    0x2c as f32 / 255.0,
    0x5b as f32 / 255.0,
);

// ── Semantic ──
pub const SUCCESS: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xc5 as f32 / 255.0,
    0x5e as f32 / 255.0,
);
pub const WARNING: Color = Color::from_rgb(
    0xf5 as f32 / 255.0,
    0x9e as f32 / 255.0,
    0x0b as f32 / 255.0,
);
pub const ERROR: Color = Color::from_rgb(
    0xef as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const INFO: Color = Color::from_rgb(
    0x3b as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xf6 as f32 / 255.0,
);

// ── Badge colors ──
pub const BADGE_VIP: Color = Color::from_rgb(
    0xea as f32 / 255.0,
    0xb3 as f32 / 255.0,
    0x08 as f32 / 255.0,
);
pub const BADGE_NEW: Color = SUCCESS;
pub const BADGE_TRENDING: Color = BRAND;

/// Rating color: green >= 8.5, yellow >= 7.0, muted below.
pub fn rating_color(rating: f64) -> Color {
    if rating >= 8.5 {
        SUCCESS
    } else if rating >= 7.0 {
        WARNING
    } else {
        TEXT_MUTED
    }
}
