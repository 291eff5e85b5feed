/// Vibrant segment colors, cycled when there are more entrants than colors.
pub const VIBRANT_PALETTE: [&str; 12] = [
    "#FF6B6B", // red
    "#FF8C42", // orange
    "#FFD93D", // yellow
    "#6BCB77", // green
    "#4D96FF", // blue
    "#9D84B7", // purple
    "#FF6B9D", // pink
    "#00D9FF", // cyan
    "#FF4757", // deep red
    "#FFA502", // bold orange
    "#00BCD4", // teal
    "#FF006E", // magenta
];

pub fn segment_color(index: usize) -> &'static str {
    VIBRANT_PALETTE[index % VIBRANT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(segment_color(0), "#FF6B6B");
        assert_eq!(segment_color(2), "#FFD93D");
        assert_eq!(segment_color(12), "#FF6B6B");
        assert_eq!(segment_color(13), segment_color(1));
    }
}
