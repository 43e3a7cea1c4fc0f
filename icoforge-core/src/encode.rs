//! ICO container encoding.
//!
//! Byte layout is left to `image`'s ICO encoder; this module only decides
//! frame order and payload format (PNG, 32-bit RGBA).

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use tracing::debug;

use crate::error::IconError;
use crate::sizes::IconSize;

/// Encode square RGBA variants into ICO bytes.
///
/// The first variant becomes the first directory entry; the rest follow in
/// slice order.
pub fn encode_ico(variants: &[RgbaImage]) -> crate::Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(IconError::NoFrames);
    }

    let frames = variants
        .iter()
        .map(encode_frame)
        .collect::<crate::Result<Vec<_>>>()?;

    let mut out = Vec::new();
    IcoEncoder::new(&mut out)
        .encode_images(&frames)
        .map_err(IconError::Encode)?;

    debug!("Encoded {} frames into {} bytes", frames.len(), out.len());
    Ok(out)
}

fn encode_frame(variant: &RgbaImage) -> crate::Result<IcoFrame<'static>> {
    let (width, height) = variant.dimensions();
    if width != height {
        return Err(IconError::InvalidFrame {
            width,
            height,
            reason: "frame must be square",
        });
    }
    if IconSize::new(width).is_err() {
        return Err(IconError::InvalidFrame {
            width,
            height,
            reason: "edge must be in 1..=256",
        });
    }
    IcoFrame::as_png(variant.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(IconError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(edge: u32) -> RgbaImage {
        RgbaImage::from_pixel(edge, edge, Rgba([1, 2, 3, 255]))
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(encode_ico(&[]), Err(IconError::NoFrames)));
    }

    #[test]
    fn non_square_frame_is_rejected() {
        let err = encode_ico(&[RgbaImage::new(16, 32)]).unwrap_err();
        assert!(matches!(
            err,
            IconError::InvalidFrame {
                width: 16,
                height: 32,
                ..
            }
        ));
    }

    #[test]
    fn oversize_frame_is_rejected() {
        let err = encode_ico(&[solid(300)]).unwrap_err();
        assert!(matches!(err, IconError::InvalidFrame { width: 300, .. }));
    }

    #[test]
    fn output_starts_with_ico_header() {
        let bytes = encode_ico(&[solid(16), solid(32)]).expect("encode");
        // reserved = 0, type = 1 (icon), count = 2
        assert_eq!(&bytes[..6], &[0, 0, 1, 0, 2, 0]);
    }
}
