//! Client-side file gating.
//!
//! A candidate is accepted when its declared MIME type is one of
//! [`ACCEPTED_MIME_TYPES`] and its size is at most [`MAX_FILE_SIZE`].
//! Exactly 50 MiB passes; one byte more does not.

use crate::config::{ACCEPTED_MIME_TYPES, MAX_FILE_SIZE};
use crate::error::{ValidationError, ValidationResult};
use crate::models::FileLike;

/// Check a candidate file.
///
/// The type check runs first, so an oversized GIF reports the type.
pub fn validate_file<F: FileLike>(file: &F) -> ValidationResult<()> {
    let mime_type = file.mime_type();
    if !is_accepted_type(&mime_type) {
        return Err(ValidationError::UnsupportedType(mime_type));
    }

    let size = file.size();
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge(size));
    }

    Ok(())
}

/// Exact match against the accepted list (no parameters, case-sensitive).
pub fn is_accepted_type(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalFile;

    /// File with a declared size but no real content.
    #[derive(Clone)]
    struct SizedFile {
        mime_type: &'static str,
        size: u64,
    }

    impl FileLike for SizedFile {
        fn name(&self) -> String {
            "big.png".into()
        }
        fn mime_type(&self) -> String {
            self.mime_type.into()
        }
        fn size(&self) -> u64 {
            self.size
        }
    }

    #[test]
    fn test_accepted_types() {
        for mime in ["image/png", "image/jpeg", "image/webp"] {
            let file = LocalFile::new("x", mime, vec![1, 2, 3]);
            assert!(validate_file(&file).is_ok(), "{mime} should be accepted");
        }
    }

    #[test]
    fn test_rejected_types() {
        for mime in ["image/gif", "image/svg+xml", "text/plain", "", "IMAGE/PNG", "image/jpg"] {
            let file = LocalFile::new("x", mime, vec![1]);
            assert_eq!(
                validate_file(&file),
                Err(ValidationError::UnsupportedType(mime.to_string()))
            );
        }
    }

    #[test]
    fn test_size_boundary() {
        let at_limit = SizedFile { mime_type: "image/png", size: MAX_FILE_SIZE };
        assert!(validate_file(&at_limit).is_ok());

        let over = SizedFile { mime_type: "image/png", size: MAX_FILE_SIZE + 1 };
        assert_eq!(validate_file(&over), Err(ValidationError::TooLarge(MAX_FILE_SIZE + 1)));
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = SizedFile { mime_type: "image/gif", size: MAX_FILE_SIZE * 2 };
        assert!(matches!(validate_file(&file), Err(ValidationError::UnsupportedType(_))));
    }

    #[test]
    fn test_empty_file_is_accepted() {
        let file = LocalFile::new("empty.webp", "image/webp", Vec::new());
        assert!(validate_file(&file).is_ok());
    }
}
