//! Color token resolution: maps raw device color tokens to a display color
//! and a contrasting foreground. Every function here is total — malformed
//! tokens fall back to a neutral swatch, never to an error.

use crate::domain::model::Rgb;

/// Neutral swatch used for empty, "unknown" and unrecognized tokens.
pub const FALLBACK_GRAY: Rgb = Rgb {
    red: 209.0 / 255.0,
    green: 209.0 / 255.0,
    blue: 214.0 / 255.0,
};

const GRAY: Rgb = Rgb {
    red: 142.0 / 255.0,
    green: 142.0 / 255.0,
    blue: 147.0 / 255.0,
};

const BLUE: Rgb = Rgb {
    red: 0.0,
    green: 122.0 / 255.0,
    blue: 1.0,
};

const GREEN: Rgb = Rgb {
    red: 52.0 / 255.0,
    green: 199.0 / 255.0,
    blue: 89.0 / 255.0,
};

const YELLOW: Rgb = Rgb {
    red: 1.0,
    green: 204.0 / 255.0,
    blue: 0.0,
};

const PINK: Rgb = Rgb {
    red: 1.0,
    green: 45.0 / 255.0,
    blue: 85.0 / 255.0,
};

const RED: Rgb = Rgb {
    red: 1.0,
    green: 59.0 / 255.0,
    blue: 48.0 / 255.0,
};

/// Tokens treated as dark without evaluating their luminance. The two hex
/// values are the enclosure colors space-gray hardware actually reports.
const KNOWN_DARK_TOKENS: [&str; 4] = ["black", "slate", "#3b3b3c", "#99989b"];

/// Backgrounds with luminance below this get white foreground text.
const DARK_LUMINANCE_THRESHOLD: f64 = 0.45;

/// Canonical form of a raw color token: trimmed and lowercased. Idempotent.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Resolves a token to the swatch color to display. Accepts an optionally
/// hash-prefixed 6-digit hex value or one of the fixed color names; anything
/// else yields [`FALLBACK_GRAY`].
pub fn display_color(token: &str) -> Rgb {
    let normalized = normalize_token(token);
    if normalized.is_empty() || normalized == "unknown" {
        return FALLBACK_GRAY;
    }

    if let Some(rgb) = rgb_from_hex(&normalized) {
        return rgb;
    }

    match normalized.as_str() {
        "black" | "slate" => Rgb::BLACK,
        "white" | "silver" => Rgb::WHITE,
        "gray" | "grey" => GRAY,
        "blue" => BLUE,
        "green" => GREEN,
        "yellow" => YELLOW,
        "pink" => PINK,
        "red" => RED,
        _ => FALLBACK_GRAY,
    }
}

/// Black or white, whichever contrasts with the token's swatch color.
///
/// Named colors other than the known-dark set always get a black foreground
/// even when visually dark (e.g. "blue"). Downstream rendering depends on
/// that asymmetry, so it is kept as-is.
pub fn foreground_color(token: &str) -> Rgb {
    if is_dark(token) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

fn is_dark(token: &str) -> bool {
    let normalized = normalize_token(token);
    if KNOWN_DARK_TOKENS.contains(&normalized.as_str()) {
        return true;
    }

    match rgb_from_hex(&normalized) {
        Some(rgb) => rgb.relative_luminance() < DARK_LUMINANCE_THRESHOLD,
        None => false,
    }
}

/// Parses a token that is exactly six hex digits after stripping one
/// optional leading `#`. Anything else returns `None`.
pub fn rgb_from_hex(token: &str) -> Option<Rgb> {
    let hex = token.strip_prefix('#').unwrap_or(token);

    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Rgb::from_bytes(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}
