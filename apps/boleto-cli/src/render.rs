//! Terminal rendering of a barcode.
//!
//! Each element becomes a run of columns: `█` for bars, blank for spaces.
//! The same row is repeated `height` times.

use boleto_core::{BarColor, BarWidths};

use crate::config::RenderSettings;

const BAR: char = '█';
const SPACE: char = ' ';

/// Renders one row of the symbol.
pub fn render_row(barcode: &BarWidths, settings: &RenderSettings) -> String {
    barcode
        .elements()
        .iter()
        .zip(barcode.module_widths(settings.narrow, settings.wide))
        .flat_map(|(element, width)| {
            let glyph = match element.color {
                BarColor::Bar => BAR,
                BarColor::Space => SPACE,
            };
            std::iter::repeat(glyph).take(width as usize)
        })
        .collect()
}

/// Renders the full symbol, `height` rows separated by newlines.
pub fn render_barcode(barcode: &BarWidths, settings: &RenderSettings) -> String {
    let row = render_row(barcode, settings);
    vec![row; settings.height as usize].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boleto_core::barcode::encode_interleaved_2of5;

    #[test]
    fn test_guards_render() {
        let barcode = encode_interleaved_2of5("00").unwrap();
        let row = render_row(&barcode, &RenderSettings::default());

        assert!(row.starts_with("█ █ "));
        assert!(row.ends_with("███ █"));
    }

    #[test]
    fn test_row_width() {
        // "00": each digit has two wide elements, so 4 wide + 6 narrow data elements
        let barcode = encode_interleaved_2of5("00").unwrap();
        let settings = RenderSettings { narrow: 1, wide: 3, height: 1 };

        let guards = 4 + (3 + 1 + 1);
        let data = 4 * 3 + 6;
        assert_eq!(render_row(&barcode, &settings).chars().count(), guards + data);
    }

    #[test]
    fn test_height() {
        let barcode = encode_interleaved_2of5("1234").unwrap();
        let settings = RenderSettings { height: 3, ..RenderSettings::default() };

        let rendered = render_barcode(&barcode, &settings);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| *row == rows[0]));
    }
}
