//! Tests for decoding images into pixel matrices

#[cfg(test)]
mod tests {
    use ::image::{ImageFormat, Rgba, RgbaImage};
    use stitchgrid::io::image::load_source;
    use stitchgrid::PatternError;
    use stitchgrid::analysis::color::Color;
    use stitchgrid::io::image::load_pixels;

    // Tests a PNG decodes into a row-major matrix of its pixels
    // Verified by transposing the matrix
    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(2, 0, Rgba([9, 8, 7, 255]));
        source.put_pixel(0, 1, Rgba([1, 2, 3, 128]));
        source.save(&path).unwrap();

        let pixels = load_pixels(&path).unwrap();

        assert_eq!(pixels.dim(), (2, 3));
        assert_eq!(pixels.get((0, 2)), Some(&Color::new(9, 8, 7, 255)));
        assert_eq!(pixels.get((1, 0)), Some(&Color::new(1, 2, 3, 128)));
        assert_eq!(pixels.get((1, 1)), Some(&Color::new(0, 0, 0, 0)));
    }

    // Tests the format is taken from the content, not the extension
    // Verified by choosing the decoder from the extension
    #[test]
    fn test_load_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.dat");
        RgbaImage::from_pixel(2, 2, Rgba([5, 5, 5, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let pixels = load_pixels(&path).unwrap();

        assert_eq!(pixels.dim(), (2, 2));
    }

    // Tests missing and corrupt files fail with the input path
    // Verified by mapping read errors to FileSystem
    #[test]
    fn test_decode_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not an image at all").unwrap();

        for path in [&missing, &corrupt] {
            match load_pixels(path) {
                Err(PatternError::DecodeFailure { path: failed, .. }) => {
                    assert_eq!(&failed, path);
                }
                other => unreachable!("Expected DecodeFailure, got {other:?}"),
            }
        }
    }

    // Tests the source keeps the file bytes and the sniffed format
    // Verified by taking the format from the file extension
    #[test]
    fn test_load_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picture.jpg");
        RgbaImage::from_pixel(2, 3, Rgba([7, 7, 7, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let source = load_source(&path).unwrap();

        assert_eq!(source.format, ImageFormat::Png);
        assert_eq!(source.mime_type(), "image/png");
        assert_eq!(source.bytes, std::fs::read(&path).unwrap());
        assert_eq!(source.pixels.dim(), (3, 2));
    }
}
