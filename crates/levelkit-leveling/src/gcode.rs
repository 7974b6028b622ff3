//! Probe G-code synthesis
//!
//! This module provides utilities for rendering single protocol lines from a
//! command token and named numeric parameters. The output is an opaque
//! instruction for the external streaming engine; nothing here validates
//! numeric ranges or interprets controller responses.

/// Render a command token with its present parameters
///
/// Each parameter whose value is present is formatted as the axis letter
/// immediately followed by its numeric value, space-joined in insertion
/// order. Absent parameters are dropped entirely; a command with no present
/// parameters renders as the bare token.
///
/// # Examples
/// ```
/// use levelkit_leveling::gcode::format_command;
///
/// let line = format_command("G0", &[('X', Some(10.0)), ('Y', None), ('F', Some(500.0))]);
/// assert_eq!(line, "G0 X10 F500");
/// ```
pub fn format_command(command: &str, params: &[(char, Option<f64>)]) -> String {
    let mut line = command.to_string();
    for (letter, value) in params {
        if let Some(value) = value {
            line.push_str(&format!(" {}{}", letter, value));
        }
    }
    line
}

/// Render the non-motion marker emitted before each probe target
///
/// The streaming engine echoes comment lines back, which lets the
/// integration layer correlate probe reports with grid indices.
pub fn probe_index_marker(index: usize) -> String {
    format!("; probe point {}", index)
}

/// Absolute positioning mode
pub const ABSOLUTE_MODE: &str = "G90";

/// Rapid/positioning move token
pub const RAPID_MOVE: &str = "G0";

/// Probe-toward-surface token (stop on contact, report position)
pub const PROBE_TOWARD: &str = "G38.2";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command_all_present() {
        assert_eq!(
            format_command("G0", &[('X', Some(1.5)), ('Y', Some(-2.0))]),
            "G0 X1.5 Y-2"
        );
    }

    #[test]
    fn test_format_command_drops_absent() {
        assert_eq!(
            format_command("G0", &[('X', Some(3.0)), ('F', None)]),
            "G0 X3"
        );
    }

    #[test]
    fn test_format_command_bare() {
        assert_eq!(format_command("G90", &[]), "G90");
        assert_eq!(format_command("G90", &[('F', None)]), "G90");
    }

    #[test]
    fn test_format_command_insertion_order() {
        assert_eq!(
            format_command("G38.2", &[('Z', Some(-5.0)), ('F', Some(10.0))]),
            "G38.2 Z-5 F10"
        );
    }

    #[test]
    fn test_probe_index_marker_is_comment() {
        let marker = probe_index_marker(4);
        assert!(marker.starts_with(';'));
        assert!(marker.contains('4'));
    }
}
