/// ASCII rasterizer for terminal rendering
use crossterm::{style::Print, QueueableCommand};
use std::fmt;
use std::io::Write;
use ortho_core::{interpolate, GridPoint, Model, ViewState};

/// Width and height of the canvas in cells
pub const GRID_SIZE: usize = 20;

pub const BLANK: char = ' ';
pub const VERTICAL: char = '│';
pub const HORIZONTAL: char = '─';
pub const DIAGONAL: char = '.';
pub const VERTEX: char = '•';
pub const SELECTED: char = '★';

/// Result of rasterizing one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Whether the selected vertex landed inside the canvas
    pub selection_visible: bool,
}

/// Fixed-size character canvas that wireframe models are drawn into
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![BLANK; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(BLANK);
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Rasterize every edge, then every vertex, of `model` as seen from `state`.
    ///
    /// The canvas is cleared first. Cells written later win, so vertex marks
    /// always sit on top of edges.
    pub fn render_model(&mut self, model: &Model, state: &ViewState) -> Frame {
        self.clear();

        for (a, b) in model.segments() {
            let p1 = state.project(&a);
            let p2 = state.project(&b);
            let glyph = edge_glyph(p1, p2);
            for point in interpolate(p1, p2) {
                self.plot(point, glyph);
            }
        }

        let mut selection_visible = false;
        for (index, vertex) in model.vertices.iter().enumerate() {
            let point = state.project(vertex);
            let glyph = if index == state.selected { SELECTED } else { VERTEX };
            if self.plot(point, glyph) && index == state.selected {
                selection_visible = true;
            }
        }

        Frame { selection_visible }
    }

    /// Write `glyph` at `point` if it lies on the canvas
    fn plot(&mut self, point: GridPoint, glyph: char) -> bool {
        match self.index_of(point) {
            Some(idx) => {
                self.char_buffer[idx] = glyph;
                true
            }
            None => false,
        }
    }

    fn index_of(&self, point: GridPoint) -> Option<usize> {
        let x = usize::try_from(point.x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(point.y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.char_buffer
            .chunks(self.width)
            .map(|row| row.iter().collect())
    }

    /// Queue the canvas inside a `+--+` / `|..|` border
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let border = format!("+{}+\n", "-".repeat(self.width));
        writer.queue(Print(&border))?;
        for row in self.rows() {
            writer.queue(Print(format!("|{row}|\n")))?;
        }
        writer.queue(Print(&border))?;
        Ok(())
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}

/// One line per row, top row first
impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Glyph for an edge between two projected endpoints
fn edge_glyph(p1: GridPoint, p2: GridPoint) -> char {
    if p1.x == p2.x {
        VERTICAL
    } else if p1.y == p2.y {
        HORIZONTAL
    } else {
        DIAGONAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use ortho_core::{Edge, Scale, ViewAxis};

    fn render(state: &ViewState) -> (AsciiRenderer, Frame) {
        let mut renderer = AsciiRenderer::default();
        let frame = renderer.render_model(&Model::default(), state);
        (renderer, frame)
    }

    #[test]
    fn test_top_view_default() {
        let (renderer, frame) = render(&ViewState::default());
        assert!(frame.selection_visible);

        let rows: Vec<String> = renderer.rows().collect();
        assert_eq!(rows.len(), GRID_SIZE);
        assert!(rows.iter().all(|r| r.chars().count() == GRID_SIZE));

        // Top view of the 2×3 footprint: corners at (0,0), (2,0), (2,3), (0,3).
        // Vertex 4 projects onto vertex 0 and is drawn after it.
        assert_eq!(rows[0].chars().take(4).collect::<String>(), "•─• ");
        assert_eq!(rows[1].chars().take(4).collect::<String>(), "│ │ ");
        assert_eq!(rows[2].chars().take(4).collect::<String>(), "│ │ ");
        assert_eq!(rows[3].chars().take(4).collect::<String>(), "•─• ");
        assert!(rows[4].chars().all(|c| c == BLANK));
    }

    #[test]
    fn test_side_view_dimensions() {
        let state = ViewState::new(ViewAxis::X, Scale::default(), Point3::origin(), 1);
        let (renderer, frame) = render(&state);
        assert!(frame.selection_visible);
        // Side view spans y in 0..=3 and z in 0..=4
        assert_eq!(renderer.cell(3, 4), VERTEX);
        assert_eq!(renderer.cell(0, 2), VERTICAL);
        assert_eq!(renderer.cell(1, 0), HORIZONTAL);
        assert_eq!(renderer.cell(4, 0), BLANK);
        // Vertices 0 and 1 share (0,0) in this view; the selected one is drawn last
        assert_eq!(renderer.cell(0, 0), SELECTED);
    }

    #[test]
    fn test_selection_out_of_view() {
        let state = ViewState::new(ViewAxis::Z, Scale::default(), Point3::new(1, 0, 0), 0);
        let (renderer, frame) = render(&state);
        // Vertex 0 projects to x = -1
        assert!(!frame.selection_visible);
        assert!(!renderer.to_string().contains(SELECTED));
    }

    #[test]
    fn test_diagonal_edges() {
        let model = Model::new(
            vec![Point3::new(0, 0, 0), Point3::new(4, 2, 0)],
            vec![Edge::new(0, 1)],
        );
        let mut renderer = AsciiRenderer::default();
        renderer.render_model(&model, &ViewState::default());
        assert_eq!(renderer.cell(0, 0), SELECTED);
        assert_eq!(renderer.cell(1, 0), DIAGONAL);
        assert_eq!(renderer.cell(2, 1), DIAGONAL);
        assert_eq!(renderer.cell(3, 2), DIAGONAL);
        assert_eq!(renderer.cell(4, 2), VERTEX);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut renderer = AsciiRenderer::default();
        let model = Model::default();
        renderer.render_model(&model, &ViewState::default());
        let far = ViewState::new(ViewAxis::Z, Scale::default(), Point3::new(-100, 0, 0), 0);
        renderer.render_model(&model, &far);
        assert!(renderer.to_string().chars().all(|c| c == BLANK || c == '\n'));
    }

    #[test]
    fn test_draw_border() {
        let renderer = AsciiRenderer::new(3, 2);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        out.flush().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "+---+\n|   |\n|   |\n+---+\n");
    }
}
