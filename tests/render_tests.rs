//! Render tests - encoded frame layout

use tui_rain::core::{RainMatrix, SimpleRng};
use tui_rain::term::encode_frame_into;

const CURSOR_HOME: &str = "\x1b[1;1H";

fn encode(matrix: &RainMatrix) -> String {
    let mut out = Vec::new();
    encode_frame_into(matrix, &mut out).unwrap();
    String::from_utf8(out).expect("frame should be valid UTF-8")
}

#[test]
fn test_frame_starts_with_cursor_home() {
    let mut rng = SimpleRng::new(8);
    let matrix = RainMatrix::new(4, 3, &mut rng).unwrap();

    let frame = encode(&matrix);
    assert!(frame.starts_with(CURSOR_HOME));
}

#[test]
fn test_4x3_frame_layout() {
    let mut rng = SimpleRng::new(8);
    let matrix = RainMatrix::new(4, 3, &mut rng).unwrap();

    let frame = encode(&matrix);
    let body = frame.strip_prefix(CURSOR_HOME).unwrap();
    let lines: Vec<&str> = body.split("\r\n").collect();

    assert_eq!(lines.len(), 3, "height 3 should produce exactly 3 lines");
    for line in &lines {
        assert_eq!(line.chars().count(), 4, "width 4 should produce 4 chars per line");
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[1], ' ', "2nd character of every line is the blank marker");
        assert_eq!(chars[3], ' ', "4th character of every line is the blank marker");
    }
}

#[test]
fn test_no_line_break_after_final_row() {
    let mut rng = SimpleRng::new(8);
    let matrix = RainMatrix::new(6, 5, &mut rng).unwrap();

    let frame = encode(&matrix);
    assert!(!frame.ends_with('\n'));
    assert!(!frame.ends_with("\r\n"));
}

#[test]
fn test_single_row_frame_has_no_line_breaks_at_all() {
    let mut rng = SimpleRng::new(8);
    let matrix = RainMatrix::new(5, 1, &mut rng).unwrap();

    let frame = encode(&matrix);
    let body = frame.strip_prefix(CURSOR_HOME).unwrap();
    assert!(!body.contains("\r\n"));
    assert_eq!(body.chars().count(), 5);
}

#[test]
fn test_frame_body_matches_matrix_rows() {
    let mut rng = SimpleRng::new(21);
    let matrix = RainMatrix::new(8, 4, &mut rng).unwrap();

    let frame = encode(&matrix);
    let body = frame.strip_prefix(CURSOR_HOME).unwrap();

    for (y, line) in body.split("\r\n").enumerate() {
        let expected: String = matrix.row(y as u16).iter().collect();
        assert_eq!(line, expected, "Line {} should mirror matrix row {}", y, y);
    }
}
