//! Built-in demo: a synthetic image rendered with every charset.

use crate::ascii::Charset;
use crate::error::RenderError;
use crate::frame::PixelBuffer;
use crate::options::RenderOptions;
use crate::render::render;

/// Size of the synthetic demo image in pixels.
pub const DEMO_SIZE: (u32, u32) = (160, 96);

/// Build the demo image: a warm horizontal gradient with a white disc.
pub fn demo_image() -> Result<PixelBuffer, RenderError> {
    let (width, height) = DEMO_SIZE;
    let cx = width as f32 * 0.65;
    let cy = height as f32 * 0.5;
    let radius = height as f32 * 0.3;

    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let t = x as f32 / (width - 1) as f32;
            let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let rgb = if dist <= radius {
                [255, 255, 255]
            } else {
                let v = t * 200.0;
                [v as u8, (v * 0.6) as u8, (60.0 + v * 0.3) as u8]
            };
            data.extend_from_slice(&rgb);
        }
    }

    PixelBuffer::from_rgb(data, width, height)
}

/// Render the demo image once per charset, each under a heading line.
pub fn run_demo(base: &RenderOptions) -> Result<String, RenderError> {
    let image = demo_image()?;
    let mut out = String::new();

    for charset in Charset::ALL {
        let options = RenderOptions { charset, ..*base };
        out.push_str(&format!("== {} ==\n", charset));
        out.push_str(render(&image, &options)?.as_str());
        out.push('\n');
    }

    Ok(out)
}
