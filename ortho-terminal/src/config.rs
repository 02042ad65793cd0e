//! Command-line configuration.

use clap::Parser;
use nalgebra::Point3;
use ortho_core::{Model, Scale, ViewAxis, ViewState};
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

#[derive(Parser, Debug, Clone)]
#[command(name = "ortho")]
#[command(about = "Orthographic ASCII viewer for a wireframe cuboid", long_about = None)]
pub struct Config {
    /// Initial view axis (x, y or z)
    #[arg(long, default_value = "z")]
    pub axis: ViewAxis,

    /// Initial scale divisor
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
    pub scale: i64,

    /// Initial camera X offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub camera_x: i64,

    /// Initial camera Y offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub camera_y: i64,

    /// Initial camera Z offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub camera_z: i64,

    /// Index of the initially selected vertex
    #[arg(long, default_value_t = 0)]
    pub select: usize,

    /// Keep previous frames on screen instead of clearing before each redraw
    #[arg(long)]
    pub no_clear: bool,

    /// Log filter for stderr output, e.g. `debug` or `ortho_terminal=trace`
    #[arg(long, default_value = "off")]
    pub log: String,
}

impl Config {
    /// Build the starting view state, checking the selection against `model`
    pub fn initial_state(&self, model: &Model) -> Result<ViewState> {
        if self.select >= model.vertex_count() {
            return Err(AppError::InvalidSelection {
                index: self.select,
                count: model.vertex_count(),
            });
        }

        Ok(ViewState::new(
            self.axis,
            Scale::new(self.scale),
            Point3::new(self.camera_x, self.camera_y, self.camera_z),
            self.select,
        ))
    }

    pub fn log_filter(&self) -> Result<EnvFilter> {
        Ok(EnvFilter::try_new(&self.log)?)
    }

    /// Install the global stderr subscriber. Call once, from `main`.
    pub fn init_logging(&self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(self.log_filter()?)
            .init();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["ortho"]);
        let state = config.initial_state(&Model::default()).unwrap();
        assert_eq!(state, ViewState::default());
        assert!(!config.no_clear);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "ortho",
            "--axis",
            "X",
            "--scale",
            "3",
            "--camera-y",
            "-4",
            "--select",
            "7",
            "--no-clear",
        ]);
        let state = config.initial_state(&Model::default()).unwrap();
        assert_eq!(state.axis, ViewAxis::X);
        assert_eq!(state.scale.get(), 3);
        assert_eq!(state.camera, Point3::new(0, -4, 0));
        assert_eq!(state.selected, 7);
        assert!(config.no_clear);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::try_parse_from(["ortho", "--scale", "0"]).is_err());
        assert!(Config::try_parse_from(["ortho", "--axis", "w"]).is_err());

        let config = Config::parse_from(["ortho", "--select", "8"]);
        assert!(matches!(
            config.initial_state(&Model::default()),
            Err(AppError::InvalidSelection { index: 8, count: 8 })
        ));
    }

    #[test]
    fn test_log_filter() {
        let config = Config::parse_from(["ortho", "--log", "debug"]);
        assert!(config.log_filter().is_ok());
    }
}
