use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use orrery_targa::{decode, DecodedImage};

/// Reads and decodes one `.tga` texture file.
///
/// Decoding is pure and per-call, so independent textures may be loaded from
/// any thread; nothing here is shared.
pub fn load_texture(path: impl AsRef<Path>) -> Result<DecodedImage> {
    let path = path.as_ref();

    let bytes = fs::read(path)
        .with_context(|| format!("failed to read texture file {}", path.display()))?;

    let image = decode(&bytes)
        .with_context(|| format!("failed to decode texture {}", path.display()))?;

    log::debug!(
        "loaded texture {} ({}x{}, {:?}/{:?}, {} bytes)",
        path.display(),
        image.width,
        image.height,
        image.storage,
        image.transfer,
        image.pixels.len(),
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_decodes_a_file() {
        // 2×1 uncompressed true-color.
        let mut file = vec![0u8; 18];
        file[2] = 2;
        file[12] = 2;
        file[14] = 1;
        file[16] = 24;
        file.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let path = std::env::temp_dir().join("orrery-loader-test.tga");
        fs::write(&path, &file).unwrap();

        let image = load_texture(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_texture("/nonexistent/orrery.tga").unwrap_err();
        assert!(err.to_string().contains("orrery.tga"));
    }

    #[test]
    fn decode_failure_error_names_the_path() {
        let path = std::env::temp_dir().join("orrery-loader-short.tga");
        fs::write(&path, [0u8; 4]).unwrap();

        let err = load_texture(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(err.to_string().contains("orrery-loader-short.tga"));
        assert!(err.chain().any(|c| c.to_string().contains("truncated header")));
    }
}
