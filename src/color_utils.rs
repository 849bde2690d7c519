// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

// expects already validated channel values, no clamping happens here
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

pub fn hex_to_color(hex: &str) -> Option<iced::Color> {
    hex_to_rgb(hex).map(|[r, g, b]| iced::Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_is_uppercase_and_zero_padded() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(200, 0, 64), "#C80040");
        assert_eq!(rgb_to_hex(10, 171, 255), "#0AABFF");
    }

    #[test]
    fn test_every_channel_value_survives_formatting() {
        for value in 0..=255u8 {
            let hex = rgb_to_hex(value, 0, 0);
            assert_eq!(u8::from_str_radix(&hex[1..3], 16), Ok(value));

            let hex = rgb_to_hex(0, 0, value);
            assert_eq!(u8::from_str_radix(&hex[5..7], 16), Ok(value));
        }
    }

    #[test]
    fn test_hex_to_rgb_reads_swatch_strings() {
        assert_eq!(hex_to_rgb("#C80040"), Some([200, 0, 64]));
        assert_eq!(hex_to_rgb("#0aabff"), Some([10, 171, 255]));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_strings() {
        assert_eq!(hex_to_rgb("C80040"), None);
        assert_eq!(hex_to_rgb("#C8004"), None);
        assert_eq!(hex_to_rgb("#C800400"), None);
        assert_eq!(hex_to_rgb("#C8004G"), None);
        assert_eq!(hex_to_rgb("#C80é0"), None);
    }
}
