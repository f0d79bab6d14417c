//! Legacy-format detection and conversion to JPEG.

use std::future::Future;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use super::UploadedFile;
use crate::error::{CardError, CardResult};

const LEGACY_MEDIA_TYPES: [&str; 2] = ["image/heic", "image/heif"];
const LEGACY_EXTENSIONS: [&str; 2] = [".heic", ".heif"];

/// Quality used for converted uploads, 0-100
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Whether `file` is in a legacy format browsers and webviews cannot show.
///
/// Matches on declared media type or on the (case-insensitive) extension.
pub fn needs_conversion(file: &UploadedFile) -> bool {
    let media_type = file.media_type.to_ascii_lowercase();
    let name = file.name.to_ascii_lowercase();
    LEGACY_MEDIA_TYPES.contains(&media_type.as_str())
        || LEGACY_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// `photo.HEIC` -> `photo.jpg`. Names without a legacy extension are kept.
pub fn converted_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    for ext in LEGACY_EXTENSIONS {
        if lower.ends_with(ext) {
            return format!("{}.jpg", &name[..name.len() - ext.len()]);
        }
    }
    name.to_string()
}

/// Converts a legacy-format upload to a web-displayable raster image.
pub trait FormatConverter: Send + Sync {
    /// Fails with [`CardError::Conversion`] on malformed or unsupported input.
    fn convert(&self, file: UploadedFile) -> impl Future<Output = CardResult<UploadedFile>> + Send;
}

/// Decodes on a blocking worker and re-encodes as JPEG.
///
/// HEIF containers go through libheif when the `heic` feature is enabled;
/// everything else (mislabeled PNG, JPEG, WebP) through the `image` crate.
/// Inputs neither decoder understands fail conversion, and the pipeline
/// reports them by name instead of aborting the batch.
#[derive(Debug, Clone, Copy)]
pub struct JpegConverter {
    quality: u8,
}

impl JpegConverter {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for JpegConverter {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl FormatConverter for JpegConverter {
    async fn convert(&self, file: UploadedFile) -> CardResult<UploadedFile> {
        let quality = self.quality;
        let UploadedFile { name, bytes, .. } = file;

        let encoded = {
            let name = name.clone();
            tokio::task::spawn_blocking(move || encode_jpeg(&name, &bytes, quality)).await?
        };
        let bytes = encoded?;

        Ok(UploadedFile {
            name: converted_name(&name),
            media_type: "image/jpeg".to_string(),
            bytes,
        })
    }
}

fn encode_jpeg(name: &str, bytes: &[u8], quality: u8) -> CardResult<Vec<u8>> {
    let decoded = if is_heif_container(bytes) {
        decode_heif(name, bytes)?
    } else {
        image::load_from_memory(bytes).map_err(|e| CardError::conversion(name, e))?
    };
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut buffer = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
        .map_err(|e| CardError::conversion(name, e))?;
    Ok(buffer)
}

/// ISO-BMFF `ftyp` box with a HEIF image brand
fn is_heif_container(bytes: &[u8]) -> bool {
    const BRANDS: [&[u8; 4]; 8] = [
        b"heic", b"heix", b"hevc", b"hevx", b"heim", b"heis", b"mif1", b"msf1",
    ];
    match (bytes.get(4..8), bytes.get(8..12)) {
        (Some(tag), Some(brand)) if tag == b"ftyp" => {
            BRANDS.iter().any(|known| known.as_slice() == brand)
        }
        _ => false,
    }
}

#[cfg(feature = "heic")]
fn decode_heif(name: &str, bytes: &[u8]) -> CardResult<DynamicImage> {
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let failed = |e: libheif_rs::HeifError| CardError::conversion(name, e);

    let lib = LibHeif::new();
    let context = HeifContext::read_from_bytes(bytes).map_err(failed)?;
    let handle = context.primary_image_handle().map_err(failed)?;
    let image = lib
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(failed)?;

    let (width, height) = (handle.width(), handle.height());
    let plane = image
        .planes()
        .interleaved
        .ok_or_else(|| CardError::conversion(name, "no interleaved RGB plane"))?;

    // Rows are padded out to `stride`
    let row_len = width as usize * 3;
    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for row in plane.data.chunks(plane.stride).take(height as usize) {
        let row = row
            .get(..row_len)
            .ok_or_else(|| CardError::conversion(name, "truncated RGB plane"))?;
        pixels.extend_from_slice(row);
    }

    image::RgbImage::from_raw(width, height, pixels)
        .map(DynamicImage::ImageRgb8)
        .ok_or_else(|| CardError::conversion(name, "truncated RGB plane"))
}

#[cfg(not(feature = "heic"))]
fn decode_heif(name: &str, _bytes: &[u8]) -> CardResult<DynamicImage> {
    Err(CardError::conversion(
        name,
        "HEIF decoding not built in (enable the `heic` feature)",
    ))
}


#[cfg(all(test, feature = "heic"))]
mod heic_tests {
    use libheif_rs::{
        Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif,
        RgbChroma,
    };

    use super::*;

    /// Encode a small solid-red HEIC with libheif
    fn heic_fixture(width: u32, height: u32) -> Vec<u8> {
        let lib = LibHeif::new();
        let mut image = Image::new(width, height, ColorSpace::Rgb(RgbChroma::Rgb)).unwrap();
        image
            .create_plane(Channel::Interleaved, width, height, 8)
            .unwrap();

        let planes = image.planes_mut();
        let plane = planes.interleaved.unwrap();
        let stride = plane.stride;
        let data = plane.data;
        for y in 0..height as usize {
            for x in 0..width as usize {
                let at = y * stride + x * 3;
                data[at..at + 3].copy_from_slice(&[230, 20, 40]);
            }
        }

        let mut context = HeifContext::new().unwrap();
        let mut encoder = lib.encoder_for_format(CompressionFormat::Hevc).unwrap();
        encoder.set_quality(EncoderQuality::Lossy(90)).unwrap();
        context.encode_image(&image, &mut encoder, None).unwrap();
        context.write_to_bytes().unwrap()
    }

    #[tokio::test]
    async fn test_real_heic_converts_to_jpeg() {
        let heic = heic_fixture(64, 48);
        assert!(is_heif_container(&heic));

        let converted = JpegConverter::default()
            .convert(UploadedFile::new("IMG_0001.HEIC", "image/heic", heic))
            .await
            .unwrap();

        assert_eq!(converted.name, "IMG_0001.jpg");
        assert_eq!(converted.media_type, "image/jpeg");

        let decoded = image::load_from_memory(&converted.bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (64, 48));
        let [r, g, b] = decoded.get_pixel(32, 24).0;
        assert!(r > 180 && g < 80 && b < 90, "unexpected colour {r},{g},{b}");
    }
}
