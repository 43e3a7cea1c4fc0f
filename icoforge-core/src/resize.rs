use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::sizes::{IconSize, SizeSet};

/// Resampling filter used for every variant.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resample `image` to exactly `size × size`, ignoring its aspect ratio.
pub fn resize_variant(image: &DynamicImage, size: IconSize) -> RgbaImage {
    resize_rgba(&image.to_rgba8(), size)
}

/// One variant per entry of `sizes`, in the set's (ascending) order.
pub fn resize_all(image: &DynamicImage, sizes: &SizeSet) -> Vec<RgbaImage> {
    let rgba = image.to_rgba8();
    sizes
        .iter()
        .map(|size| {
            debug!("Resizing {}×{} → {size}", rgba.width(), rgba.height());
            resize_rgba(&rgba, size)
        })
        .collect()
}

fn resize_rgba(rgba: &RgbaImage, size: IconSize) -> RgbaImage {
    let edge = size.edge();
    imageops::resize(rgba, edge, edge, RESAMPLE_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn forces_square_dimensions() {
        let wide = DynamicImage::ImageRgba8(RgbaImage::from_pixel(300, 100, Rgba([0, 0, 0, 255])));
        let out = resize_variant(&wide, IconSize::new(48).unwrap());
        assert_eq!(out.dimensions(), (48, 48));
    }

    #[test]
    fn variants_follow_set_order() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255])));
        let variants = resize_all(&src, &SizeSet::standard());
        let edges: Vec<u32> = variants.iter().map(|v| v.width()).collect();
        assert_eq!(edges, SizeSet::STANDARD_EDGES.to_vec());
        assert!(variants.iter().all(|v| v.width() == v.height()));
    }

    #[test]
    fn solid_colour_survives_resampling() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            512,
            512,
            Rgba([40, 120, 200, 255]),
        ));
        let out = resize_variant(&src, IconSize::new(16).unwrap());
        let px = out.get_pixel(8, 8);
        assert!(px.0[0].abs_diff(40) <= 1);
        assert!(px.0[1].abs_diff(120) <= 1);
        assert!(px.0[2].abs_diff(200) <= 1);
        assert_eq!(px.0[3], 255);
    }
}
