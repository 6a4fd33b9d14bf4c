//! # qrmint
//!
//! A Rust library for generating byte-mode QR codes from text.
//!
//! `qrmint` encodes Unicode text into QR Code Model 2 symbols, versions 1 to 40, at any of
//! the four error correction levels. It picks the smallest version that fits, tries all eight
//! mask patterns and keeps the one with the lowest penalty score. Finished symbols can be
//! rendered as console art, SVG, in-memory image buffers or PNG files.
//!
//! ## Features
//!
//! - Encode any text in byte mode (UTF-8, with a byte order mark for non-ASCII input).
//! - Support four error correction levels: Low, Medium, Quartile, High.
//! - Build payloads for plain text, vCard contacts and Wi-Fi credentials.
//! - Render QR codes as ASCII art, PNG images, SVGs, or in-memory image buffers.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrmint = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Encode a URL and render it as SVG:
//!
//! ```rust
//! use qrmint::helper::to_svg_string;
//! use qrmint::qrcode::{ErrorCorrectionLevel, ModuleGrid, QrModel};
//!
//! let qr = QrModel::encode_text("https://example.com", ErrorCorrectionLevel::M).unwrap();
//! assert_eq!(qr.version().value(), 2);
//! assert_eq!(qr.module_count(), 25);
//!
//! let svg = to_svg_string(&qr, 4).unwrap();
//! assert!(svg.contains("viewBox=\"0 0 33 33\""));
//! ```
//!
//! Drive the model by hand for a fixed version:
//!
//! ```rust
//! use qrmint::qrcode::{ErrorCorrectionLevel, ModuleGrid, QrModel};
//! use qrmint::version::Version;
//!
//! let mut qr = QrModel::new(Version::new(3), ErrorCorrectionLevel::H);
//! qr.add_data("part one, ");
//! qr.add_data("part two");
//! qr.make().unwrap();
//! assert_eq!(qr.module_count(), 29);
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: The QR model, error correction levels and the `ModuleGrid` trait.
//! - [`helper`]: Utilities for rendering QR codes in various formats.
//! - [`payload`]: vCard and Wi-Fi payload builders.
//! - The remaining modules are the encoding pipeline: GF(256) arithmetic, polynomials,
//!   block tables, segments, codewords, BCH codes, matrix layout and masking.

pub mod bch;
pub mod bit_buffer;
pub mod codewords;
pub mod error;
pub mod gf256;
pub mod helper;
pub mod mask;
pub mod matrix;
pub mod payload;
pub mod polynomial;
pub mod qrcode;
pub mod segment;
pub mod tables;
pub mod version;

pub use error::{QrError, Result};
pub use helper::RenderOptions;
pub use mask::MaskPattern;
pub use payload::{ContactCard, Payload, WifiCredentials, WifiSecurity};
pub use qrcode::{EncodeOptions, ErrorCorrectionLevel, ModuleGrid, QrModel};
pub use version::Version;
