//! Rendering a found path.

use std::io::{self, Write};

use cellpath_core::Point;
use cellpath_paths::{Cost, Path};
use clap::ValueEnum;
use serde::Serialize;

/// Marker printed on its own line after the last coordinate.
pub const END_MARKER: &str = ".";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<row> <col>` line per node, then a `.` line.
    #[default]
    Text,
    /// A single JSON object: `{"path": [{"row": r, "col": c}, ...], "cost": n}`.
    Json,
}

#[derive(Serialize)]
struct JsonPath<'a> {
    path: &'a [Point],
    cost: Option<Cost>,
}

/// Write `path` to `w` in the given format.
///
/// With `show_cost` the text format adds a `cost <n>` line before the end
/// marker. The JSON format always carries the cost.
pub fn write_path<W: Write>(
    w: &mut W,
    path: &Path,
    format: OutputFormat,
    show_cost: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for p in path.nodes() {
                writeln!(w, "{p}")?;
            }
            if show_cost {
                if let Some(cost) = path.cost() {
                    writeln!(w, "cost {cost}")?;
                }
            }
            writeln!(w, "{END_MARKER}")?;
        }
        OutputFormat::Json => {
            let out = JsonPath {
                path: path.nodes(),
                cost: path.cost(),
            };
            serde_json::to_writer(&mut *w, &out).map_err(io::Error::from)?;
            writeln!(w)?;
        }
    }
    w.flush()
}
