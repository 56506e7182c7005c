//! Decoder for the legacy **Targa** (`.tga`) raster image container.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! asset pipelines, inspectors, and tests without pulling in any engine or
//! GPU code. File I/O and GPU upload belong to the caller; `decode` is a
//! pure function from bytes to pixels.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`header`] | `TargaHeader`, `DataType` |
//! | [`error`] | `DecodeError` |
//! | [`decode`](mod@decode) | `decode` entry point, `DecodedImage`, format pair |
//!
//! # Quick start
//!
//! ```rust
//! use orrery_targa::decode;
//!
//! // 1×1 uncompressed true-color image; the single pixel is stored
//! // blue-first, as the container demands.
//! let mut file = vec![0u8; 18];
//! file[2] = 2;    // data type: true-color
//! file[12] = 1;   // width
//! file[14] = 1;   // height
//! file[16] = 24;  // bits per pixel
//! file.extend_from_slice(&[255, 0, 0]);
//!
//! let image = decode(&file).unwrap();
//! assert_eq!((image.width, image.height), (1, 1));
//! assert_eq!(image.pixels, [255, 0, 0]);
//! ```

pub mod decode;
pub mod error;
pub mod header;

pub use decode::{decode, DecodedImage, StorageFormat, TransferFormat};
pub use error::DecodeError;
pub use header::{DataType, TargaHeader};
