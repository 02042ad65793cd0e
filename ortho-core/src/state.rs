/// Mutable viewer state: view axis, zoom, camera and selection
use nalgebra::Point3;

use crate::geometry::{Model, Vertex};
use crate::line::GridPoint;
use crate::projection::{project, Scale, ViewAxis};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub axis: ViewAxis,
    pub scale: Scale,
    pub camera: Point3<i64>,
    /// Index of the highlighted vertex
    pub selected: usize,
}

impl ViewState {
    pub fn new(axis: ViewAxis, scale: Scale, camera: Point3<i64>, selected: usize) -> Self {
        Self {
            axis,
            scale,
            camera,
            selected,
        }
    }

    /// Project a vertex with the current axis, camera and scale
    pub fn project(&self, vertex: &Vertex) -> GridPoint {
        project(vertex, self.axis, &self.camera, self.scale)
    }

    pub fn set_axis(&mut self, axis: ViewAxis) {
        self.axis = axis;
    }

    pub fn set_scale(&mut self, value: i64) {
        self.scale = Scale::new(value);
    }

    pub fn camera_component(&self, axis: ViewAxis) -> i64 {
        match axis {
            ViewAxis::X => self.camera.x,
            ViewAxis::Y => self.camera.y,
            ViewAxis::Z => self.camera.z,
        }
    }

    /// Place the camera absolutely along one axis
    pub fn set_camera(&mut self, axis: ViewAxis, value: i64) {
        match axis {
            ViewAxis::X => self.camera.x = value,
            ViewAxis::Y => self.camera.y = value,
            ViewAxis::Z => self.camera.z = value,
        }
    }

    /// Move the camera along one axis, saturating at the integer bounds
    pub fn offset_camera(&mut self, axis: ViewAxis, delta: i64) {
        let current = self.camera_component(axis);
        self.set_camera(axis, current.saturating_add(delta));
    }

    /// Advance the selection, wrapping after the last vertex
    pub fn select_next(&mut self, model: &Model) {
        let count = model.vertex_count().max(1);
        self.selected = (self.selected + 1) % count;
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    pub fn header(&self) -> String {
        format!(
            "View Axis: {}, Scale: {}, Camera: ({}, {}, {})",
            self.axis, self.scale, self.camera.x, self.camera.y, self.camera.z
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewAxis::Z, Scale::default(), Point3::origin(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.axis, ViewAxis::Z);
        assert_eq!(state.scale.get(), 1);
        assert_eq!(state.camera, Point3::new(0, 0, 0));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_wraps_after_vertex_count() {
        let model = Model::default();
        let mut state = ViewState::default();
        for expected in 1..8 {
            state.select_next(&model);
            assert_eq!(state.selected, expected);
        }
        state.select_next(&model);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_camera_set_and_offset() {
        let mut state = ViewState::default();
        state.set_camera(ViewAxis::X, 5);
        state.offset_camera(ViewAxis::X, 3);
        assert_eq!(state.camera.x, 8);
        state.offset_camera(ViewAxis::X, -10);
        assert_eq!(state.camera.x, -2);

        state.set_camera(ViewAxis::Z, i64::MAX);
        state.offset_camera(ViewAxis::Z, 1);
        assert_eq!(state.camera.z, i64::MAX);
    }

    #[test]
    fn test_header() {
        let mut state = ViewState::default();
        state.set_camera(ViewAxis::Y, -2);
        state.set_scale(3);
        assert_eq!(state.header(), "View Axis: Z, Scale: 3, Camera: (0, -2, 0)");
    }
}
