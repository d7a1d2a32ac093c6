//! Image types accepted by the photo picker.

pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/gif", "image/jpeg", "image/png"];

/// Warning shown when a picked file is not an accepted image.
pub const INVALID_IMAGE_MESSAGE: &str = "Invalid Image.";

/// Exact match against the browser-reported MIME type.
#[must_use]
pub fn is_accepted_image(mime: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_jpeg_png_are_accepted() {
        assert!(is_accepted_image("image/gif"));
        assert!(is_accepted_image("image/jpeg"));
        assert!(is_accepted_image("image/png"));
    }

    #[test]
    fn other_types_are_rejected() {
        assert!(!is_accepted_image("image/webp"));
        assert!(!is_accepted_image("application/pdf"));
        assert!(!is_accepted_image(""));
        assert!(!is_accepted_image("IMAGE/PNG"));
    }
}
