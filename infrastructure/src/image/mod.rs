//! Image intake from files and data URLs

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use wardrobe_application::{ImageLoader, ImageSource, IntakeError};
use wardrobe_domain::{ImageBlob, InlineImage, MAX_IMAGE_BYTES};

/// Turns a user-supplied source (file path or `data:` URL) into an image payload.
///
/// Size limits are enforced by the wardrobe state; the loader only avoids
/// reading more than one byte past the limit.
#[derive(Debug, Clone)]
pub struct ImageFileLoader {
    limit: usize,
}

impl Default for ImageFileLoader {
    fn default() -> Self {
        Self::new(MAX_IMAGE_BYTES)
    }
}

impl ImageFileLoader {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn load_file(&self, path: &Path) -> Result<ImageBlob, IntakeError> {
        let mime = mime_guess::from_path(path)
            .first()
            .filter(|m| m.type_().as_str() == "image")
            .map(|m| m.essence_str().to_owned())
            .ok_or_else(|| IntakeError::UnsupportedType {
                path: path.to_path_buf(),
                mime: mime_guess::from_path(path)
                    .first_raw()
                    .unwrap_or("unknown type")
                    .to_string(),
            })?;

        let io_error = |source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let size = file.metadata().map_err(io_error)?.len();
        let mut bytes = Vec::new();
        file.take(self.limit as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(io_error)?;

        debug!(path = %path.display(), size, read = bytes.len(), %mime, "Loaded image file");
        Ok(ImageBlob::new(bytes, mime).with_source_len(usize::try_from(size).unwrap_or(usize::MAX)))
    }
}

impl ImageLoader for ImageFileLoader {
    fn load(&self, source: &str) -> Result<ImageSource, IntakeError> {
        let source = source.trim();
        if source.starts_with("data:") {
            return Ok(ImageSource::Inline(InlineImage::from_data_url(source)?));
        }
        self.load_file(Path::new(source)).map(ImageSource::Blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_domain::{Category, DomainError, WardrobeState};

    #[test]
    fn test_loads_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shirt.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let loaded = ImageFileLoader::default()
            .load(path.to_str().unwrap())
            .unwrap();
        match loaded {
            ImageSource::Blob(blob) => {
                assert_eq!(blob.mime_type, "image/png");
                assert_eq!(blob.len(), 4);
            }
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn test_reads_at_most_one_byte_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boots.jpg");
        std::fs::write(&path, vec![0u8; 64]).unwrap();

        let blob = ImageFileLoader::new(16).load_file(&path).unwrap();
        assert_eq!(blob.bytes.len(), 17);
        assert_eq!(blob.mime_type, "image/jpeg");
    }

    #[test]
    fn test_oversized_file_reports_real_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coat.png");
        std::fs::write(&path, vec![0u8; 64]).unwrap();

        let blob = ImageFileLoader::new(16).load_file(&path).unwrap();
        assert_eq!(blob.len(), 64);

        let mut state = WardrobeState::new().with_max_image_bytes(16);
        assert_eq!(
            state.add_item(Category::Tops, &blob).unwrap_err(),
            DomainError::PayloadTooLarge { size: 64, limit: 16 }
        );
    }

    #[test]
    fn test_rejects_non_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = ImageFileLoader::default().load_file(&path).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::UnsupportedType { ref mime, .. } if mime == "text/plain"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFileLoader::default()
            .load_file(&dir.path().join("ghost.webp"))
            .unwrap_err();
        assert!(matches!(err, IntakeError::Io { .. }));
    }

    #[test]
    fn test_data_url_is_inline() {
        let loaded = ImageFileLoader::default()
            .load("data:image/png;base64,iVBORw0KGgo=")
            .unwrap();
        assert!(matches!(
            loaded,
            ImageSource::Inline(ref image) if image.mime_type == "image/png"
        ));
    }

    #[test]
    fn test_broken_data_url_is_invalid() {
        let err = ImageFileLoader::default()
            .load("data:image/png;base64")
            .unwrap_err();
        assert!(matches!(err, IntakeError::Rejected(DomainError::InvalidImage(_))));
    }
}
