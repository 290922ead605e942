//! Buffer-match assertions for render tests.

use crate::{geom::Point, screen::Screen, termbuf::TermBuf};

/// Returns true if the buffer content matches the expected lines.
///
/// Comparison ignores styling. The character 'X' in an expected line matches
/// an untouched cell, which makes it possible to assert that a region was
/// left transparent. Trailing whitespace on both sides is ignored.
pub fn buffer_matches(buf: &TermBuf, expected: &[&str]) -> bool {
    if expected.len() != buf.size().h as usize {
        return false;
    }
    for (y, expected_line) in expected.iter().enumerate() {
        let mut actual = String::new();
        for x in 0..buf.size().w {
            let p = Point { x, y: y as u32 };
            if buf.touched(p) {
                actual.push(buf.get(p).map_or(' ', |c| c.ch));
            } else {
                actual.push('X');
            }
        }
        if actual.trim_end() != expected_line.trim_end() {
            return false;
        }
    }
    true
}

/// Assert that the buffer matches the expected lines, with both grids
/// printed on failure. 'X' in an expected line matches an untouched cell.
pub fn assert_matches(buf: &TermBuf, expected: &[&str]) {
    if !buffer_matches(buf, expected) {
        let width = expected.first().map(|l| l.len()).unwrap_or(10).max(10);

        println!("\nExpected:");
        println!("┌{}┐", "─".repeat(width));
        for line in expected {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));

        println!("\nActual:");
        println!("┌{}┐", "─".repeat(width));
        for line in buf.lines() {
            println!("│{line:width$}│");
        }
        println!("└{}┘", "─".repeat(width));

        panic!("Buffer contents did not match expected pattern");
    }
}
