//! Text collaborators around the triangulator.
//!
//! Command scripts stand in for pointer input, SVG export for the renderer.

mod script;
mod svg;

pub use script::{load_triangulator, parse_commands, run_script};
pub use svg::{render_svg, SvgStyle};
