//! PNG encoding and data-URI thumbnails.

use crate::surface::{RenderResult, RendererError, Snapshot};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Cursor;

/// Prefix of every thumbnail produced by [`to_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode a snapshot as an 8-bit RGBA PNG.
pub fn encode_png(snapshot: &Snapshot) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, snapshot.width, snapshot.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RendererError::Encode(e.to_string()))?;
        writer
            .write_image_data(&snapshot.rgba)
            .map_err(|e| RendererError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RendererError::Encode(e.to_string()))?;
    }
    Ok(png_data)
}

/// Decode a PNG into an RGBA snapshot.
///
/// Palette and grayscale images are expanded; 16-bit channels are stripped.
pub fn decode_png(bytes: &[u8]) -> RenderResult<Snapshot> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| RendererError::Decode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RendererError::Decode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        other => {
            return Err(RendererError::Decode(format!(
                "unsupported color type {:?}",
                other
            )));
        }
    };
    Snapshot::new(info.width, info.height, rgba)
}

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn to_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png))
}

/// Encode a snapshot straight to a PNG data URI.
pub fn snapshot_to_data_uri(snapshot: &Snapshot) -> RenderResult<String> {
    encode_png(snapshot).map(|png| to_data_uri(&png))
}

/// Decode a PNG data URI back into a snapshot.
pub fn decode_data_uri(uri: &str) -> RenderResult<Snapshot> {
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).ok_or_else(|| {
        RendererError::Decode(format!("expected a {} URI", PNG_DATA_URI_PREFIX))
    })?;
    let png = STANDARD
        .decode(payload.trim())
        .map_err(|e| RendererError::Decode(e.to_string()))?;
    decode_png(&png)
}
