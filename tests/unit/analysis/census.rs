//! Tests for the exact-color census

#[cfg(test)]
mod tests {
    use stitchgrid::analysis::census::ColorCensus;
    use stitchgrid::analysis::color::{Color, pixel_matrix_from_rows};

    // Tests counts and totals for a small image
    // Verified by counting only distinct colors into the total
    #[test]
    fn test_counts_every_pixel() {
        let a = Color::rgb(255, 0, 0);
        let b = Color::rgb(0, 0, 255);
        let pixels = pixel_matrix_from_rows(&[vec![a, b, a], vec![a, a, b]]).unwrap();

        let census = ColorCensus::from_pixels(&pixels);

        assert_eq!(census.total(), 6);
        assert_eq!(census.distinct(), 2);
        assert_eq!(census.count(a), 4);
        assert_eq!(census.count(b), 2);
        assert_eq!(census.count(Color::rgb(1, 2, 3)), 0);
    }

    // Tests colors are listed in the order the row-major scan first met them
    // Verified by iterating the hash map directly
    #[test]
    fn test_first_seen_order() {
        let colors: Vec<Color> = (0..20).map(|i| Color::rgb(i, 255 - i, i / 2)).collect();
        let pixels = pixel_matrix_from_rows(&[
            colors.get(0..10).unwrap().to_vec(),
            colors.get(10..20).unwrap().to_vec(),
        ])
        .unwrap();

        let census = ColorCensus::from_pixels(&pixels);
        let order: Vec<Color> = census.iter().map(|(color, _)| color).collect();

        assert_eq!(order, colors);
    }

    // Tests manual recording matches scanning
    // Verified by not incrementing the total on repeated colors
    #[test]
    fn test_record() {
        let mut census = ColorCensus::default();
        census.record(Color::rgb(9, 9, 9));
        census.record(Color::rgb(9, 9, 9));
        census.record(Color::rgb(1, 1, 1));

        assert_eq!(census.total(), 3);
        assert_eq!(
            census.iter().collect::<Vec<_>>(),
            vec![(Color::rgb(9, 9, 9), 2), (Color::rgb(1, 1, 1), 1)]
        );
    }
}
