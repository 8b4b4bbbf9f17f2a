use serde::{Deserialize, Serialize};

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    pub const WHITE: Rgb = Rgb {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }

    /// Approximate WCAG relative luminance.
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue
    }

    pub fn to_hex_string(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8
        )
    }
}

/// One entry of the static device-type declarations table, associating a
/// human-readable description with the hardware model codes it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeDeclaration {
    pub description: String,
    pub identifier: String,
    #[serde(default)]
    pub model_codes: Vec<String>,
}

/// The report assembled from one load: raw color tokens plus the resolved
/// device identity. Recomputed on every load, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceColorReport {
    pub device_name: String,
    pub model_name: String,
    pub model_code: String,
    pub device_color: String,
    pub device_enclosure_color: String,
}

impl DeviceColorReport {
    /// The token the UI should render a swatch for: the enclosure color when
    /// it carries real data, otherwise the device color.
    pub fn preferred_color_token(&self) -> &str {
        let enclosure = self.device_enclosure_color.trim();

        if enclosure.is_empty() || enclosure.eq_ignore_ascii_case("unknown") {
            return &self.device_color;
        }

        enclosure
    }

    /// Fixed-format multi-line summary for the share/export action.
    pub fn share_text(&self) -> String {
        format!(
            "DeviceColor Report\n\n{}\nModel: {}\nType: {}\nDeviceColor: {}\nDeviceEnclosureColor: {}\n\nhttps://github.com/device-colors/device-colors",
            self.device_name,
            self.model_code,
            self.model_name,
            self.device_color,
            self.device_enclosure_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(device_color: &str, enclosure_color: &str) -> DeviceColorReport {
        DeviceColorReport {
            device_name: "Test Device".to_string(),
            model_name: "Test Model".to_string(),
            model_code: "Test1,1".to_string(),
            device_color: device_color.to_string(),
            device_enclosure_color: enclosure_color.to_string(),
        }
    }

    #[test]
    fn test_preferred_token_uses_enclosure_when_present() {
        assert_eq!(report("black", "blue").preferred_color_token(), "blue");
        assert_eq!(report("black", "  blue \n").preferred_color_token(), "blue");
    }

    #[test]
    fn test_preferred_token_falls_back_to_device_color() {
        assert_eq!(report("black", "").preferred_color_token(), "black");
        assert_eq!(report("black", "unknown").preferred_color_token(), "black");
        assert_eq!(report("black", "UNKNOWN").preferred_color_token(), "black");
        assert_eq!(report("black", "   ").preferred_color_token(), "black");
    }

    #[test]
    fn test_rgb_from_bytes() {
        let red = Rgb::from_bytes(255, 0, 0);
        assert_eq!(red.red, 1.0);
        assert_eq!(red.green, 0.0);
        assert_eq!(red.blue, 0.0);
        assert_eq!(red.to_hex_string(), "#ff0000");
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
    }
}
