/// Wireframe model primitives
use nalgebra::Point3;

/// A model vertex on the integer lattice
pub type Vertex = Point3<i64>;

/// An edge between two vertices, stored as indices into [`Model::vertices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A wireframe model composed of vertices and the edges joining them
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Model {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| e.start < vertices.len() && e.end < vertices.len()));
        Self { vertices, edges }
    }

    /// Create an axis-aligned cuboid with one corner at the origin.
    ///
    /// Vertices 0-3 walk the `z = 0` face counter-clockwise starting at the
    /// origin, and vertices 4-7 repeat that walk on the `z = depth` face.
    /// Edges are listed bottom face, top face, then the four verticals.
    pub fn cuboid(width: i64, height: i64, depth: i64) -> Self {
        let vertices = vec![
            Vertex::new(0, 0, 0),
            Vertex::new(width, 0, 0),
            Vertex::new(width, height, 0),
            Vertex::new(0, height, 0),
            Vertex::new(0, 0, depth),
            Vertex::new(width, 0, depth),
            Vertex::new(width, height, depth),
            Vertex::new(0, height, depth),
        ];

        let edges = vec![
            // Bottom face
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            // Top face
            Edge::new(4, 5),
            Edge::new(5, 6),
            Edge::new(6, 7),
            Edge::new(7, 4),
            // Verticals
            Edge::new(0, 4),
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];

        Self::new(vertices, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate the edges as pairs of vertex positions
    pub fn segments(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.edges
            .iter()
            .map(|edge| (self.vertices[edge.start], self.vertices[edge.end]))
    }
}

/// The 2×3×4 cuboid shown by the viewer
impl Default for Model {
    fn default() -> Self {
        Self::cuboid(2, 3, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_shape() {
        let model = Model::default();
        assert_eq!(model.vertex_count(), 8);
        assert_eq!(model.edges.len(), 12);
        assert_eq!(model.vertices[1], Vertex::new(2, 0, 0));
        assert_eq!(model.vertices[6], Vertex::new(2, 3, 4));
    }

    #[test]
    fn test_every_vertex_has_three_edges() {
        let model = Model::default();
        for index in 0..model.vertex_count() {
            let degree = model
                .edges
                .iter()
                .filter(|e| e.start == index || e.end == index)
                .count();
            assert_eq!(degree, 3, "vertex {index}");
        }
    }

    #[test]
    fn test_edges_are_axis_aligned() {
        let model = Model::default();
        for (a, b) in model.segments() {
            let delta = b - a;
            let moving = [delta.x, delta.y, delta.z]
                .iter()
                .filter(|c| **c != 0)
                .count();
            assert_eq!(moving, 1, "edge {a} -> {b}");
        }
    }
}
