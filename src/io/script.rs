//! Command script parsing.
//!
//! A script is a sequence of lines, each one of:
//!
//! - `add X Y` - append a sample
//! - `X Y` - shorthand for `add X Y`
//! - `clear` - remove all samples
//!
//! Blank lines and lines starting with `#` are ignored. Coordinates are
//! integers, separated by whitespace or a comma.
//!
//! # Example
//!
//! ```
//! use bowyer::io::parse_commands;
//! use bowyer::{Command, Point};
//!
//! let commands = parse_commands("# demo\nadd 100 100\n300,100\nclear\n").unwrap();
//! assert_eq!(
//!     commands,
//!     vec![
//!         Command::AddPoint(Point::new(100, 100)),
//!         Command::AddPoint(Point::new(300, 100)),
//!         Command::Clear,
//!     ]
//! );
//! ```

use crate::config::TriangulatorConfig;
use crate::error::BowyerError;
use crate::primitives::Point;
use crate::triangulation::{Command, Triangulator};

fn invalid(line: usize, reason: impl Into<String>) -> BowyerError {
    BowyerError::InvalidCommand {
        line,
        reason: reason.into(),
    }
}

fn parse_coordinate(token: &str, line: usize) -> Result<i32, BowyerError> {
    token
        .parse::<i32>()
        .map_err(|_| invalid(line, format!("expected integer coordinate, found '{}'", token)))
}

fn parse_point(tokens: &[&str], line: usize) -> Result<Point, BowyerError> {
    match tokens {
        [x, y] => Ok(Point::new(
            parse_coordinate(x, line)?,
            parse_coordinate(y, line)?,
        )),
        _ => Err(invalid(
            line,
            format!("expected two coordinates, found {}", tokens.len()),
        )),
    }
}

fn parse_line(text: &str, line: usize) -> Result<Option<Command>, BowyerError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let command = match tokens.as_slice() {
        ["clear"] => Command::Clear,
        ["clear", ..] => return Err(invalid(line, "'clear' takes no arguments")),
        ["add", rest @ ..] => Command::AddPoint(parse_point(rest, line)?),
        rest => Command::AddPoint(parse_point(rest, line)?),
    };
    Ok(Some(command))
}

/// Parses a command script.
///
/// Fails with [`BowyerError::InvalidCommand`] on the first malformed line and
/// with [`BowyerError::EmptyInput`] if the script holds no commands.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, BowyerError> {
    let mut commands = Vec::new();
    for (index, text) in input.lines().enumerate() {
        if let Some(command) = parse_line(text, index + 1)? {
            commands.push(command);
        }
    }
    if commands.is_empty() {
        return Err(BowyerError::EmptyInput);
    }
    Ok(commands)
}

/// Parses `input` and applies every command to `triangulator` in order.
///
/// Nothing is applied if any line fails to parse or any sample lies outside
/// the super-triangle.
pub fn run_script(triangulator: &mut Triangulator, input: &str) -> Result<usize, BowyerError> {
    let commands = parse_commands(input)?;
    let config = triangulator.config();
    if let Some(p) = commands.iter().find_map(|c| match *c {
        Command::AddPoint(p) if !config.encloses(p) => Some(p),
        _ => None,
    }) {
        return Err(BowyerError::OutsideSuperTriangle { x: p.x, y: p.y });
    }
    for &command in &commands {
        triangulator.apply(command)?;
    }
    tracing::debug!(commands = commands.len(), "applied script");
    Ok(commands.len())
}

/// Builds a triangulator with `config` and replays the script `input` on it.
pub fn load_triangulator(input: &str, config: TriangulatorConfig) -> Result<Triangulator, BowyerError> {
    let mut triangulator = Triangulator::with_config(config)?;
    run_script(&mut triangulator, input)?;
    Ok(triangulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;

    #[test]
    fn test_parse_forms() {
        let commands = parse_commands("add 1 2\n  3 4  \n5,6\nadd -7, 8\nclear").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::AddPoint(Point::new(1, 2)),
                Command::AddPoint(Point::new(3, 4)),
                Command::AddPoint(Point::new(5, 6)),
                Command::AddPoint(Point::new(-7, 8)),
                Command::Clear,
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let commands = parse_commands("\n# header\n\n10 20\n   # indented\n").unwrap();
        assert_eq!(commands, vec![Command::AddPoint(Point::new(10, 20))]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_commands(""), Err(BowyerError::EmptyInput));
        assert_eq!(parse_commands("# nothing\n\n"), Err(BowyerError::EmptyInput));
    }

    #[test]
    fn test_reports_line_number() {
        let err = parse_commands("1 2\n3 4\nadd 5\n").unwrap_err();
        assert!(matches!(err, BowyerError::InvalidCommand { line: 3, .. }));
    }

    #[test]
    fn test_rejects_non_integer() {
        let err = parse_commands("1.5 2").unwrap_err();
        match err {
            BowyerError::InvalidCommand { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("1.5"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_rejects_clear_with_arguments() {
        assert!(parse_commands("clear 1").is_err());
    }

    #[test]
    fn test_rejects_unknown_word() {
        assert!(parse_commands("remove 1 2").is_err());
    }

    #[test]
    fn test_run_script() {
        let mut tri = Triangulator::new();
        let applied = run_script(&mut tri, "100 100\n300 100\n200 300\n").unwrap();
        assert_eq!(applied, 3);
        assert_eq!(tri.points().len(), 3);

        run_script(&mut tri, "clear\n50 50").unwrap();
        assert_eq!(tri.points(), &[Point::new(50, 50)]);
    }

    #[test]
    fn test_run_script_is_all_or_nothing() {
        let mut tri = Triangulator::new();
        assert!(run_script(&mut tri, "1 1\nbad\n").is_err());
        assert!(tri.points().is_empty());
    }

    #[test]
    fn test_run_script_rejects_sample_outside_super_triangle() {
        let mut tri = Triangulator::new();
        tri.add_point(10, 10);
        let err = run_script(&mut tri, "1400 1000\nclear\n6000 6000\n").unwrap_err();
        assert_eq!(err, BowyerError::OutsideSuperTriangle { x: 6000, y: 6000 });
        assert_eq!(tri.points(), &[Point::new(10, 10)]);
    }

    #[test]
    fn test_load_triangulator() {
        let config = TriangulatorConfig::default().with_boundary(BoundaryPolicy::Strip);
        let tri = load_triangulator("100 100\n300 100\n200 300\n", config).unwrap();
        assert_eq!(tri.points().len(), 3);
        assert_eq!(tri.triangles().len(), 1);
        assert_eq!(tri.stats().interior_triangles, 1);
    }

    #[test]
    fn test_load_triangulator_rejects_bad_config() {
        let config = TriangulatorConfig::default().with_epsilon(0.0);
        assert_eq!(
            load_triangulator("1 1", config).unwrap_err(),
            BowyerError::InvalidTolerance { value: 0.0 }
        );
    }
}
