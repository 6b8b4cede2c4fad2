use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Canada red.
pub const CANADA: Color32 = Color32::from_rgb(0xCC, 0x00, 0x00);
/// OECD average light blue.
pub const OECD_AVERAGE: Color32 = Color32::from_rgb(0x7E, 0xC8, 0xE3);

/// Fixed pastel colours for the first four cluster labels, matching the
/// palette of the upstream clustering report.
const CLUSTER_PASTELS: [Color32; 4] = [
    Color32::from_rgb(0xAE, 0xC6, 0xCF), // pastel blue
    Color32::from_rgb(0xFF, 0xB3, 0xBA), // pastel red
    Color32::from_rgb(0xB5, 0xEA, 0xD7), // pastel green
    Color32::from_rgb(0xFF, 0xDA, 0xC1), // pastel peach
];

/// Colour for a cluster label. Labels 0–3 use the fixed pastels; anything
/// beyond gets a hue-spaced pastel so extra clusters still look distinct.
pub fn cluster_color(label: u32) -> Color32 {
    if let Some(c) = CLUSTER_PASTELS.get(label as usize) {
        return *c;
    }
    let extra = label as usize - CLUSTER_PASTELS.len();
    let hue = (extra as f32 * 73.0) % 360.0;
    let hsl = Hsl::new(hue, 0.55, 0.75);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pastels_then_generated_hues() {
        assert_eq!(cluster_color(0), CLUSTER_PASTELS[0]);
        assert_eq!(cluster_color(3), CLUSTER_PASTELS[3]);
        // beyond the fixed palette, neighbouring labels stay distinct
        assert_ne!(cluster_color(4), cluster_color(5));
    }
}
