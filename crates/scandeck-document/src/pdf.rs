// SPDX-License-Identifier: MIT
//
// Single-page PDF rendering for scanned images, via `printpdf` 0.8.
//
// printpdf 0.8 is data-oriented: a page is a `Vec<Op>` operation list inside
// a `PdfPage`, serialised with `PdfDocument::save()`.

use std::path::Path;

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use scandeck_core::error::{Result, ScandeckError};
use tracing::{debug, info};

// A4 page, portrait.
const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

/// Assumed raster resolution when placing the scan on the page.
const RENDER_DPI: f32 = 150.0;

/// Render the image at `image_path` onto a single A4 page and return the PDF
/// bytes.
///
/// The image is centred and scaled to fit inside the page margins while
/// preserving its aspect ratio; it is never upscaled.
pub fn render_image_pdf(image_path: &Path, title: &str) -> Result<Vec<u8>> {
    let decoded = image::open(image_path).map_err(|e| {
        ScandeckError::Image(format!("decode {}: {e}", image_path.display()))
    })?;
    let img_w = decoded.width() as usize;
    let img_h = decoded.height() as usize;
    info!(img_w, img_h, title, "rendering scanned image to PDF");

    let rgb = decoded.to_rgb8();
    let raw = RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: img_w,
        height: img_h,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };

    let mut doc = PdfDocument::new(title);
    let xobject_id = doc.add_image(&raw);

    let usable_w_pt = Mm(PAGE_W_MM - 2.0 * MARGIN_MM).into_pt().0;
    let usable_h_pt = Mm(PAGE_H_MM - 2.0 * MARGIN_MM).into_pt().0;
    let img_w_pt = img_w as f32 / RENDER_DPI * 72.0;
    let img_h_pt = img_h as f32 / RENDER_DPI * 72.0;

    let scale = (usable_w_pt / img_w_pt)
        .min(usable_h_pt / img_h_pt)
        .min(1.0);

    let margin_pt = Mm(MARGIN_MM).into_pt().0;
    let x_offset = margin_pt + (usable_w_pt - img_w_pt * scale) / 2.0;
    let y_offset = margin_pt + (usable_h_pt - img_h_pt * scale) / 2.0;

    let ops = vec![Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x_offset)),
            translate_y: Some(Pt(y_offset)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(RENDER_DPI),
            rotate: None,
        },
    }];

    doc.with_pages(vec![PdfPage::new(Mm(PAGE_W_MM), Mm(PAGE_H_MM), ops)]);
    debug!(scale, "image placed on page");

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Render and write the PDF to `out_path`.
pub fn write_image_pdf(image_path: &Path, title: &str, out_path: &Path) -> Result<()> {
    let bytes = render_image_pdf(image_path, title)?;
    std::fs::write(out_path, &bytes)
        .map_err(|e| ScandeckError::Render(format!("write {}: {e}", out_path.display())))?;
    info!(out = %out_path.display(), bytes = bytes.len(), "PDF written");
    Ok(())
}
