//! Renders the personalized pledge card.
//!
//! The card is the configured template PNG with the pledger's name and the
//! amount (plus currency label) drawn at configured offsets. Template and
//! font are read fresh per request.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, ImageFormat, Rgba};
use imageproc::drawing::draw_text_mut;
use lazy_static::lazy_static;
use thiserror::Error;
use tracing::warn;

use crate::config::{AssetConfig, CardConfig, TextStyle};

/// Size used when the configured font is unavailable and text is drawn with
/// the bundled fallback face instead.
const FALLBACK_SIZE: f32 = 32.0;

static FALLBACK_FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

lazy_static! {
    static ref FALLBACK_FONT: FontArc =
        FontArc::try_from_slice(FALLBACK_FONT_BYTES).expect("bundled fallback font parses");
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error("template image not found at {}", .path.display())]
    TemplateMissing { path: PathBuf },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid text color '{color}'")]
    Color { color: String },
}

#[derive(Clone)]
pub struct CardRenderer {
    assets: AssetConfig,
    layout: CardConfig,
}

impl CardRenderer {
    pub fn new(assets: AssetConfig, layout: CardConfig) -> Self {
        Self { assets, layout }
    }

    /// Composite the card and return it as PNG bytes.
    pub fn render(&self, name: &str, amount: &str) -> Result<Vec<u8>, CardError> {
        let template = &self.assets.template_path;
        if !template.exists() {
            return Err(CardError::TemplateMissing {
                path: template.clone(),
            });
        }

        let mut canvas = image::open(template)?.to_rgba8();
        let (font, fixed_size) = self.load_font();

        self.draw(&mut canvas, &font, fixed_size, &self.layout.name, name)?;
        let amount_text = format!("{} {}", amount, self.layout.currency);
        self.draw(&mut canvas, &font, fixed_size, &self.layout.amount, &amount_text)?;

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(canvas).write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    fn draw(
        &self,
        canvas: &mut image::RgbaImage,
        font: &FontArc,
        fixed_size: bool,
        style: &TextStyle,
        text: &str,
    ) -> Result<(), CardError> {
        let [r, g, b] = style.rgb().ok_or_else(|| CardError::Color {
            color: style.color.clone(),
        })?;
        let scale = if fixed_size {
            PxScale::from(FALLBACK_SIZE)
        } else {
            PxScale::from(style.size)
        };

        draw_text_mut(canvas, Rgba([r, g, b, 255]), style.x, style.y, scale, font, text);
        Ok(())
    }

    /// Load the configured font, or fall back to the bundled face at a
    /// fixed size.
    fn load_font(&self) -> (FontArc, bool) {
        match fs::read(&self.assets.font_path)
            .ok()
            .and_then(|bytes| FontArc::try_from_vec(bytes).ok())
        {
            Some(font) => (font, false),
            None => {
                warn!(
                    "Font {} unavailable, using bundled fallback at fixed size",
                    self.assets.font_path.display()
                );
                (FALLBACK_FONT.clone(), true)
            }
        }
    }
}
