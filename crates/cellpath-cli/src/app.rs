//! Parse → build → search → check, as one call.

use cellpath_paths::{GridGraph, Path, Selection, ShortestPath};

use crate::error::CliError;
use crate::input::parse_input;
use crate::output::OutputFormat;
use crate::validate::ValidationPolicy;

/// Settings for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub policy: ValidationPolicy,
    pub selection: Selection,
    pub format: OutputFormat,
    pub show_cost: bool,
}

/// Solve the query described by `input`.
///
/// An unreachable end is reported as [`CliError::Unreachable`] rather than
/// a one-node path.
pub fn run(config: &RunConfig, input: &str) -> Result<Path, CliError> {
    let problem = parse_input(input, &config.policy)?;
    let graph = GridGraph::build(&problem.grid);
    let path = ShortestPath::new(&graph)
        .with_selection(config.selection)
        .search(problem.start, problem.end);

    if !path.is_reachable_from(problem.start) {
        return Err(CliError::Unreachable {
            start: problem.start,
            end: problem.end,
        });
    }
    log::info!(
        "path of {} nodes, cost {}",
        path.len(),
        path.cost().unwrap_or_default()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use cellpath_core::Point;

    #[test]
    fn solves_the_ascending_grid() {
        let path = run(&RunConfig::default(), "3 3\n1 2 3\n4 5 6\n7 8 9\n0 0 2 2\n").unwrap();
        assert_eq!(path.cost(), Some(12));
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.end(), Some(Point::new(2, 2)));
    }

    #[test]
    fn heap_selection_gives_same_cost() {
        let config = RunConfig {
            selection: Selection::BinaryHeap,
            ..RunConfig::default()
        };
        let path = run(&config, "3 3\n1 2 3\n4 5 6\n7 8 9\n0 0 2 2\n").unwrap();
        assert_eq!(path.cost(), Some(12));
    }

    #[test]
    fn unreachable_is_an_error() {
        let err = run(&RunConfig::default(), "2 2\n0 0\n0 0\n0 0 1 1\n").unwrap_err();
        match err {
            CliError::Unreachable { start, end } => {
                assert_eq!(start, Point::new(0, 0));
                assert_eq!(end, Point::new(1, 1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn walled_off_target_is_an_error() {
        let input = "3 1\n1 0 1\n0 0 0 2\n";
        assert!(matches!(
            run(&RunConfig::default(), input),
            Err(CliError::Unreachable { .. })
        ));
    }

    #[test]
    fn same_start_and_end() {
        let path = run(&RunConfig::default(), "2 2\n0 0\n0 0\n1 1 1 1\n").unwrap();
        assert_eq!(path.nodes(), &[Point::new(1, 1)]);
        assert_eq!(path.cost(), Some(0));
    }

    #[test]
    fn input_errors_pass_through() {
        let err = run(&RunConfig::default(), "2 2\n1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::RowLength { .. })
        ));
        assert_eq!(err.exit_code(), 1);
    }
}
