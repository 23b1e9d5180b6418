//! Bildnormalisierung für eingebettete Fotos
//!
//! Dekodiert ein aufgenommenes Foto, verkleinert es auf die gegebenen
//! Grenzmaße (nie vergrößern) und kodiert es neu als Data-URL. Das
//! Neu-Rendern in einen frischen Pixelpuffer entfernt dabei sämtliche
//! eingebetteten Metadaten (EXIF, GPS) — für Garantiefotos erwünscht.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::{Error, Result};

/// Zielformat der Neukodierung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    WebP,
}

impl PhotoFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            PhotoFormat::Jpeg => "image/jpeg",
            PhotoFormat::WebP => "image/webp",
        }
    }
}

/// Optionen der Normalisierung
///
/// `quality` (1–100) wirkt nur bei JPEG; WebP wird verlustfrei kodiert.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
    pub format: PhotoFormat,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_width: 1600,
            max_height: 1080,
            quality: 82,
            format: PhotoFormat::Jpeg,
        }
    }
}

/// Passt Quellmaße in die Grenzmaße ein
///
/// Skalierungsfaktor = min(max_w/w, max_h/h, 1) — es wird nie
/// vergrößert. Jede Achse wird auf mindestens 1 Pixel begrenzt, damit
/// extreme Seitenverhältnisse keine Null-Dimension erzeugen.
pub fn fit_inside(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height))
        .min(1.0);

    let fitted_width = (f64::from(width) * scale).round() as u32;
    let fitted_height = (f64::from(height) * scale).round() as u32;
    (fitted_width.max(1), fitted_height.max(1))
}

/// Dekodiert `bytes`, verkleinert auf die Grenzmaße und liefert eine
/// eingebettete `data:<mime>;base64,…`-URL
///
/// Beide Fehlerfälle sind behebbar: der Aufrufer fordert den Techniker
/// zu einer neuen Aufnahme auf und lässt den Store unverändert.
pub fn normalize_to_data_url(bytes: &[u8], options: &NormalizeOptions) -> Result<String> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| Error::ImageDecode(e.to_string()))?;

    let (width, height) = (decoded.width(), decoded.height());
    let (target_width, target_height) =
        fit_inside(width, height, options.max_width, options.max_height);

    let resized = if (target_width, target_height) == (width, height) {
        decoded
    } else {
        decoded.resize_exact(target_width, target_height, FilterType::Triangle)
    };

    let encoded = encode(&resized, options)?;
    Ok(format!(
        "data:{};base64,{}",
        options.format.mime_type(),
        STANDARD.encode(encoded)
    ))
}

fn encode(image: &DynamicImage, options: &NormalizeOptions) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match options.format {
        PhotoFormat::Jpeg => {
            // Neuer RGB-Puffer: JPEG kennt kein Alpha, und das Umkopieren
            // lässt alle Metadaten des Originals zurück
            let pixels = DynamicImage::ImageRgb8(image.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, options.quality);
            pixels
                .write_with_encoder(encoder)
                .map_err(|e| Error::ImageEncode(e.to_string()))?;
        }
        PhotoFormat::WebP => {
            let pixels = DynamicImage::ImageRgba8(image.to_rgba8());
            let encoder = WebPEncoder::new_lossless(&mut buffer);
            pixels
                .write_with_encoder(encoder)
                .map_err(|e| Error::ImageEncode(e.to_string()))?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    /// Erzeugt ein PNG mit den gegebenen Maßen im Speicher
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, Rgb::<u8>([120, 130, 140]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(buffer)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("PNG-Fixture fehlgeschlagen");
        bytes
    }

    fn decode_data_url(data_url: &str) -> DynamicImage {
        let base64_part = data_url.split(',').nth(1).expect("keine Data-URL");
        let bytes = STANDARD.decode(base64_part).expect("Base64 ungültig");
        image::load_from_memory(&bytes).expect("Ergebnis nicht dekodierbar")
    }

    #[test]
    fn test_fit_inside_downscales_preserving_aspect() {
        // scale = min(1600/3000, 1080/2000, 1) = 0.5333…
        assert_eq!(fit_inside(3000, 2000, 1600, 1080), (1600, 1067));
    }

    #[test]
    fn test_fit_inside_never_upscales() {
        assert_eq!(fit_inside(800, 600, 1600, 1080), (800, 600));
        assert_eq!(fit_inside(1, 1, 1600, 1080), (1, 1));
    }

    #[test]
    fn test_fit_inside_floors_at_one_pixel() {
        // extremes Seitenverhältnis: die schmale Achse darf nicht auf 0 fallen
        assert_eq!(fit_inside(10_000, 2, 100, 100).1, 1);
        assert_eq!(fit_inside(2, 10_000, 100, 100).0, 1);
    }

    #[test]
    fn test_normalize_downscales_to_bounds() {
        let bytes = png_bytes(3000, 2000);
        let options = NormalizeOptions::default();

        let data_url = normalize_to_data_url(&bytes, &options).expect("Normalisierung fehlgeschlagen");
        assert!(data_url.starts_with("data:image/jpeg;base64,"));

        let result = decode_data_url(&data_url);
        assert_eq!((result.width(), result.height()), (1600, 1067));
    }

    #[test]
    fn test_normalize_keeps_small_images_unscaled() {
        let bytes = png_bytes(320, 240);
        let options = NormalizeOptions::default();

        let data_url = normalize_to_data_url(&bytes, &options).expect("Normalisierung fehlgeschlagen");
        let result = decode_data_url(&data_url);
        assert_eq!((result.width(), result.height()), (320, 240));
    }

    #[test]
    fn test_normalize_webp_output() {
        let bytes = png_bytes(64, 64);
        let options = NormalizeOptions {
            format: PhotoFormat::WebP,
            ..Default::default()
        };

        let data_url = normalize_to_data_url(&bytes, &options).expect("Normalisierung fehlgeschlagen");
        assert!(data_url.starts_with("data:image/webp;base64,"));
    }

    #[test]
    fn test_normalize_rejects_undecodable_input() {
        let result = normalize_to_data_url(b"kein Bild", &NormalizeOptions::default());
        assert!(matches!(result, Err(Error::ImageDecode(_))));
    }

    #[test]
    fn test_normalize_output_is_never_empty() {
        let bytes = png_bytes(1, 1);
        let data_url =
            normalize_to_data_url(&bytes, &NormalizeOptions::default()).expect("1×1 fehlgeschlagen");
        let (prefix, base64_part) = data_url.split_once(',').expect("keine Data-URL");
        assert_eq!(prefix, "data:image/jpeg;base64");
        assert!(!base64_part.is_empty());
    }
}
