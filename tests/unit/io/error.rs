//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::{Path, PathBuf};
    use stitchgrid::PatternError;
    use stitchgrid::analysis::color::Color;
    use stitchgrid::io::error::{WithPath, file_system_error, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error(Path::new("/tmp/test.png"), "read", io_error);

        assert!(error.source().is_some());
        assert!(
            PatternError::TooManyColors {
                count: 36,
                limit: 35
            }
            .source()
            .is_none()
        );
    }

    // Tests TooManyColors names both numbers
    // Verified by omitting the limit from the message
    #[test]
    fn test_too_many_colors_message() {
        let message = PatternError::TooManyColors {
            count: 40,
            limit: 35,
        }
        .to_string();

        assert!(message.contains("Too many colors"));
        assert!(message.contains("40 colors"));
        assert!(message.contains("limit 35"));
    }

    // Tests grid errors carry their coordinates
    // Verified by swapping column and row in the message
    #[test]
    fn test_grid_error_messages() {
        let missing = PatternError::GridLookupInconsistency { column: 3, row: 7 }.to_string();
        assert!(missing.contains("(3, 7)"));

        let outside = PatternError::CellOutOfBounds {
            column: 9,
            row: 1,
            width: 4,
            height: 2,
        }
        .to_string();
        assert!(outside.contains("(9, 1)"));
        assert!(outside.contains("4x2"));

        let unknown = PatternError::UnknownColor {
            color: Color::new(1, 2, 3, 4),
        }
        .to_string();
        assert!(unknown.contains("rgba(1,2,3,4)"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("alphabet", &"a,,b", &"symbols must not be empty");

        let message = error.to_string();
        assert!(message.contains("alphabet"));
        assert!(message.contains("a,,b"));
        assert!(message.contains("symbols must not be empty"));
    }

    // Tests converted errors receive the real path
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_with_path_replaces_placeholder() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));

        let error = result.with_path(Path::new("out/pattern.csv")).unwrap_err();

        match error {
            PatternError::FileSystem { path, .. } => {
                assert_eq!(path, PathBuf::from("out/pattern.csv"));
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }

    // Tests with_path keeps a path that is already known
    // Verified by overwriting every path
    #[test]
    fn test_with_path_keeps_known_path() {
        let known = file_system_error(
            Path::new("first.csv"),
            "write",
            std::io::Error::other("broken pipe"),
        );
        let result: Result<(), PatternError> = Err(known);

        let error = result.with_path(Path::new("second.csv")).unwrap_err();

        assert!(error.to_string().contains("first.csv"));
    }
}
