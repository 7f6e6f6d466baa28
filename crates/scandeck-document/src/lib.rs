// SPDX-License-Identifier: MIT
//
// Scandeck — On-device document processing: OCR text extraction and
// single-image PDF rendering.

#[cfg(feature = "ocr")]
pub mod ocr;
pub mod pdf;
