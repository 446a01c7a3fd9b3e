//! Interactive window for the figure, used when no output file is given.

use crate::error::{Error, Result};

#[cfg(feature = "window")]
pub const BACKEND_NAME: &str = "minifb";
#[cfg(not(feature = "window"))]
pub const BACKEND_NAME: &str = "none";

/// packs RGB triplets into the 0RGB words the window expects
pub fn pack_rgb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|c| (u32::from(c[0]) << 16) | (u32::from(c[1]) << 8) | u32::from(c[2]))
        .collect()
}

/// Opens a window with the rendered figure and blocks until it is closed
/// or Escape is pressed.
#[cfg(feature = "window")]
pub fn show(title: &str, rgb: &[u8], size: (u32, u32)) -> Result<()> {
    use minifb::{Key, Window, WindowOptions};

    let (w, h) = (size.0 as usize, size.1 as usize);
    let pixels = pack_rgb(rgb);
    let mut window = Window::new(title, w, h, WindowOptions::default())
        .map_err(|e| Error::Window(e.to_string()))?;
    window.set_target_fps(30);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&pixels, w, h)
            .map_err(|e| Error::Window(e.to_string()))?;
    }
    Ok(())
}

#[cfg(not(feature = "window"))]
pub fn show(_title: &str, _rgb: &[u8], _size: (u32, u32)) -> Result<()> {
    Err(Error::NoDisplay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_rgb_words() {
        let words = pack_rgb(&[0xff, 0x00, 0x00, 0x12, 0x34, 0x56]);
        assert_eq!(words, vec![0x00ff_0000, 0x0012_3456]);
    }

    #[test]
    fn pack_rgb_ignores_a_partial_pixel() {
        assert_eq!(pack_rgb(&[1, 2, 3, 4]), vec![0x0001_0203]);
    }
}
