//! Tests for the image-backed and recording drawing surfaces

#[cfg(test)]
mod tests {
    use image::Rgba;
    use std::path::Path;
    use stitchgrid::PatternError;
    use stitchgrid::analysis::color::Color;
    use stitchgrid::render::canvas::{Canvas, DrawCommand, ImageCanvas, LabelFont, RecordingCanvas};

    const STROKE: Color = Color::rgb(0, 0, 0);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    // Tests a vertical line colors exactly one pixel column
    // Verified by offsetting the line by one pixel
    #[test]
    fn test_image_canvas_vertical_line() {
        let mut canvas = ImageCanvas::new(20, 20, STROKE);

        canvas.draw_line((10, 0), (10, 19)).unwrap();
        let image = canvas.image();

        for y in 0..20 {
            assert_eq!(image.get_pixel(10, y), &Rgba([0, 0, 0, 255]));
            assert_eq!(image.get_pixel(9, y), &CLEAR);
            assert_eq!(image.get_pixel(11, y), &CLEAR);
        }
    }

    // Tests lines past the canvas edge are rejected
    // Verified by removing the bounds check
    #[test]
    fn test_image_canvas_rejects_outside_points() {
        let mut canvas = ImageCanvas::new(10, 10, STROKE);

        assert!(canvas.draw_line((0, 0), (10, 10)).is_ok());
        assert!(matches!(
            canvas.draw_line((0, 0), (11, 0)),
            Err(PatternError::Surface { .. })
        ));
    }

    // Tests the border outlines the outermost pixels only
    // Verified by filling the rectangle
    #[test]
    fn test_image_canvas_border() {
        let mut canvas = ImageCanvas::new(6, 4, STROKE);

        canvas.draw_border().unwrap();
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(5, 3), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(5, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(2, 2), &CLEAR);
    }

    // Tests labels need a font
    // Verified by silently skipping labels without a font
    #[test]
    fn test_image_canvas_label_without_font() {
        let mut canvas = ImageCanvas::new(10, 10, STROKE);

        assert!(matches!(
            canvas.draw_label("a", 1, 1),
            Err(PatternError::Surface { .. })
        ));
    }

    // Tests invalid font data and sizes are reported with the font path
    // Verified by accepting any byte buffer as a font
    #[test]
    fn test_label_font_errors() {
        let origin = Path::new("fonts/missing.ttf");

        let garbage = LabelFont::from_bytes(vec![0, 1, 2, 3], 12.0, origin);
        assert!(matches!(garbage, Err(PatternError::FontLoad { ref path, .. }) if path == origin));

        let zero = LabelFont::from_bytes(Vec::new(), 0.0, origin);
        assert!(matches!(zero, Err(PatternError::FontLoad { .. })));

        let missing = LabelFont::load(origin, 12.0);
        assert!(matches!(missing, Err(PatternError::FileSystem { .. })));
    }

    // Tests saving writes a decodable PNG of the canvas size
    // Verified by saving with the wrong dimensions
    #[test]
    fn test_image_canvas_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("grid.png");
        let mut canvas = ImageCanvas::new(8, 5, STROKE);
        canvas.draw_border().unwrap();

        canvas.save(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 5));
    }

    // Tests the recording canvas keeps calls in order and classifies lines
    // Verified by classifying lines on the wrong axis
    #[test]
    fn test_recording_canvas() {
        let mut canvas = RecordingCanvas::new(20, 20);

        canvas.draw_line((10, 0), (10, 10)).unwrap();
        canvas.draw_label("Σ", 2, 2).unwrap();
        canvas.draw_line((0, 10), (10, 10)).unwrap();
        canvas.draw_border().unwrap();

        assert_eq!(canvas.size(), (20, 20));
        assert_eq!(canvas.vertical_lines(), vec![((10, 0), (10, 10))]);
        assert_eq!(canvas.horizontal_lines(), vec![((0, 10), (10, 10))]);
        assert_eq!(canvas.labels(), vec![("Σ", 2, 2)]);
        assert_eq!(canvas.borders(), 1);
        assert_eq!(
            canvas.commands().last(),
            Some(&DrawCommand::Border {
                width: 20,
                height: 20
            })
        );
    }
}
