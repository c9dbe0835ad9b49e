use palette::Srgb;

use crate::palettes::Palette16;

const RESET: &str = "\x1b[0m";

/// Renders pixels as a row of ANSI truecolor blocks, two cells per pixel.
pub fn render(pixels: &[Srgb<u8>]) -> String {
    let mut line: String = pixels
        .iter()
        .map(|pixel| format!("\x1b[48;2;{};{};{}m  ", pixel.red, pixel.green, pixel.blue))
        .collect();

    line.push_str(RESET);
    line
}

pub fn render_palette(palette: &Palette16) -> String {
    render(palette.entries())
}
