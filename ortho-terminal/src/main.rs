/// Ortho - orthographic ASCII viewer
///
/// Shows a 2×3×4 wireframe cuboid from the top, front or side.
/// Commands:
///   - v / vx / vy / vz: change the view axis
///   - cx5 / cy / cz-2: place the camera on one axis
///   - s / s3: change the scale divisor
///   - x / x3, y, z: move the camera
///   - b: select the next vertex
///   - q / quit / exit: quit

use clap::Parser;
use std::io;
use ortho_core::Model;
use ortho_terminal::{AppError, Config, TerminalApp};

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    config.init_logging()?;

    let model = Model::default();
    let state = config.initial_state(&model)?;
    tracing::debug!(?state, "initial view");

    let stdin = io::stdin();
    let mut app = TerminalApp::new(model, state, stdin.lock(), io::stdout())
        .with_clear_screen(!config.no_clear);
    app.run()?;

    Ok(())
}
