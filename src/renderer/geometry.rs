//! Vertex data for the demo scenes: the 2D and 3D "F" letter and the random
//! rectangle field.

use rand::Rng;

use crate::math::mat4::Mat4;

/// The 2D "F": three rectangles (left column, top rung, middle rung), two
/// triangles each, in pixel coordinates with the origin at the top-left of
/// the letter.
pub fn f_positions_2d() -> Vec<f32> {
    vec![
        // left column
        0.0, 0.0, //
        30.0, 0.0, //
        0.0, 150.0, //
        0.0, 150.0, //
        30.0, 0.0, //
        30.0, 150.0, //
        // top rung
        30.0, 0.0, //
        100.0, 0.0, //
        30.0, 30.0, //
        30.0, 30.0, //
        100.0, 0.0, //
        100.0, 30.0, //
        // middle rung
        30.0, 60.0, //
        67.0, 60.0, //
        30.0, 90.0, //
        30.0, 90.0, //
        67.0, 60.0, //
        67.0, 90.0, //
    ]
}

/// The 16 faces of the extruded "F", 6 vertices each, authored in the
/// 2D-style coordinate system where +Y points down.
#[rustfmt::skip]
fn f_raw_positions_3d() -> [f32; 16 * 6 * 3] {
    [
        // left column front
        0.0, 0.0, 0.0,
        0.0, 150.0, 0.0,
        30.0, 0.0, 0.0,
        0.0, 150.0, 0.0,
        30.0, 150.0, 0.0,
        30.0, 0.0, 0.0,
        // top rung front
        30.0, 0.0, 0.0,
        30.0, 30.0, 0.0,
        100.0, 0.0, 0.0,
        30.0, 30.0, 0.0,
        100.0, 30.0, 0.0,
        100.0, 0.0, 0.0,
        // middle rung front
        30.0, 60.0, 0.0,
        30.0, 90.0, 0.0,
        67.0, 60.0, 0.0,
        30.0, 90.0, 0.0,
        67.0, 90.0, 0.0,
        67.0, 60.0, 0.0,
        // left column back
        0.0, 0.0, 30.0,
        30.0, 0.0, 30.0,
        0.0, 150.0, 30.0,
        0.0, 150.0, 30.0,
        30.0, 0.0, 30.0,
        30.0, 150.0, 30.0,
        // top rung back
        30.0, 0.0, 30.0,
        100.0, 0.0, 30.0,
        30.0, 30.0, 30.0,
        30.0, 30.0, 30.0,
        100.0, 0.0, 30.0,
        100.0, 30.0, 30.0,
        // middle rung back
        30.0, 60.0, 30.0,
        67.0, 60.0, 30.0,
        30.0, 90.0, 30.0,
        30.0, 90.0, 30.0,
        67.0, 60.0, 30.0,
        67.0, 90.0, 30.0,
        // top
        0.0, 0.0, 0.0,
        100.0, 0.0, 0.0,
        100.0, 0.0, 30.0,
        0.0, 0.0, 0.0,
        100.0, 0.0, 30.0,
        0.0, 0.0, 30.0,
        // top rung right
        100.0, 0.0, 0.0,
        100.0, 30.0, 0.0,
        100.0, 30.0, 30.0,
        100.0, 0.0, 0.0,
        100.0, 30.0, 30.0,
        100.0, 0.0, 30.0,
        // under top rung
        30.0, 30.0, 0.0,
        30.0, 30.0, 30.0,
        100.0, 30.0, 30.0,
        30.0, 30.0, 0.0,
        100.0, 30.0, 30.0,
        100.0, 30.0, 0.0,
        // between top rung and middle
        30.0, 30.0, 0.0,
        30.0, 60.0, 30.0,
        30.0, 30.0, 30.0,
        30.0, 30.0, 0.0,
        30.0, 60.0, 0.0,
        30.0, 60.0, 30.0,
        // top of middle rung
        30.0, 60.0, 0.0,
        67.0, 60.0, 30.0,
        30.0, 60.0, 30.0,
        30.0, 60.0, 0.0,
        67.0, 60.0, 0.0,
        67.0, 60.0, 30.0,
        // right of middle rung
        67.0, 60.0, 0.0,
        67.0, 90.0, 30.0,
        67.0, 60.0, 30.0,
        67.0, 60.0, 0.0,
        67.0, 90.0, 0.0,
        67.0, 90.0, 30.0,
        // bottom of middle rung
        30.0, 90.0, 0.0,
        30.0, 90.0, 30.0,
        67.0, 90.0, 30.0,
        30.0, 90.0, 0.0,
        67.0, 90.0, 30.0,
        67.0, 90.0, 0.0,
        // right of bottom
        30.0, 90.0, 0.0,
        30.0, 150.0, 30.0,
        30.0, 90.0, 30.0,
        30.0, 90.0, 0.0,
        30.0, 150.0, 0.0,
        30.0, 150.0, 30.0,
        // bottom
        0.0, 150.0, 0.0,
        0.0, 150.0, 30.0,
        30.0, 150.0, 30.0,
        0.0, 150.0, 0.0,
        30.0, 150.0, 30.0,
        30.0, 150.0, 0.0,
        // left side
        0.0, 0.0, 0.0,
        0.0, 0.0, 30.0,
        0.0, 150.0, 30.0,
        0.0, 0.0, 0.0,
        0.0, 150.0, 30.0,
        0.0, 150.0, 0.0,
    ]
}

/// The 3D "F", re-centered and flipped so +Y points up. The raw data was
/// authored with +Y down; the flip keeps the triangle winding front-facing
/// under back-face culling.
pub fn f_positions_3d() -> Vec<f32> {
    let flip = Mat4::translation(-50.0, -75.0, -15.0).multiply(&Mat4::rotation_x(180.0));

    let raw = f_raw_positions_3d();
    let mut positions = Vec::with_capacity(raw.len());
    for vertex in raw.chunks_exact(3) {
        let p = flip.transform_point([vertex[0], vertex[1], vertex[2], 1.0]);
        positions.extend_from_slice(&p[..3]);
    }
    positions
}

/// One RGB color per face of the 3D "F".
const F_FACE_COLORS: [[u8; 3]; 16] = [
    [200, 70, 120], // left column front
    [200, 70, 120], // top rung front
    [200, 70, 120], // middle rung front
    [80, 70, 200],  // left column back
    [80, 70, 200],  // top rung back
    [80, 70, 200],  // middle rung back
    [70, 200, 210], // top
    [200, 200, 70], // top rung right
    [210, 100, 70], // under top rung
    [210, 160, 70], // between top rung and middle
    [70, 180, 210], // top of middle rung
    [100, 70, 210], // right of middle rung
    [76, 210, 100], // bottom of middle rung
    [140, 210, 80], // right of bottom
    [90, 130, 110], // bottom
    [160, 160, 220],// left side
];

/// Per-vertex RGBA colors for the 3D "F": each face color repeated for its 6
/// vertices, alpha fixed at 255.
pub fn f_colors_3d() -> Vec<u8> {
    let mut colors = Vec::with_capacity(16 * 6 * 4);
    for [r, g, b] in F_FACE_COLORS {
        for _ in 0..6 {
            colors.extend_from_slice(&[r, g, b, 255]);
        }
    }
    colors
}

/// A solid RGBA color repeated for `vertex_count` vertices.
pub fn solid_colors(color: [u8; 4], vertex_count: usize) -> Vec<u8> {
    let mut colors = Vec::with_capacity(vertex_count * 4);
    for _ in 0..vertex_count {
        colors.extend_from_slice(&color);
    }
    colors
}

pub fn random_color(rng: &mut impl Rng) -> [u8; 4] {
    [
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        255,
    ]
}

/// `count` axis-aligned rectangles with random position and size in 0..300
/// pixels, each in a random solid color. Returns (positions, colors) with 6
/// vertices per rectangle.
pub fn random_rectangles(rng: &mut impl Rng, count: usize) -> (Vec<f32>, Vec<u8>) {
    let mut positions = Vec::with_capacity(count * 6 * 2);
    let mut colors = Vec::with_capacity(count * 6 * 4);

    for _ in 0..count {
        let x = rng.gen_range(0..300) as f32;
        let y = rng.gen_range(0..300) as f32;
        let width = rng.gen_range(0..300) as f32;
        let height = rng.gen_range(0..300) as f32;

        let (x1, y1, x2, y2) = (x, y, x + width, y + height);
        positions.extend_from_slice(&[
            x1, y1, x2, y1, x1, y2, //
            x1, y2, x2, y1, x2, y2, //
        ]);

        colors.extend_from_slice(&solid_colors(random_color(rng), 6));
    }

    (positions, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_f_2d_vertex_count() {
        assert_eq!(f_positions_2d().len(), 18 * 2);
    }

    #[test]
    fn test_f_3d_vertex_count() {
        assert_eq!(f_positions_3d().len(), 96 * 3);
        assert_eq!(f_colors_3d().len(), 96 * 4);
    }

    /// Tests the flip pass: the raw front-top-left corner (0, 0, 0) lands at
    /// (-50, 75, 15) once re-centered and rotated so +Y is up.
    #[test]
    fn test_f_3d_flip() {
        let positions = f_positions_3d();
        assert!((positions[0] + 50.0).abs() < 1e-4);
        assert!((positions[1] - 75.0).abs() < 1e-4);
        assert!((positions[2] - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_random_rectangles_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let (positions, colors) = random_rectangles(&mut rng, 50);
        assert_eq!(positions.len(), 50 * 6 * 2);
        assert_eq!(colors.len(), 50 * 6 * 4);
        // all alpha bytes opaque
        assert!(colors.chunks_exact(4).all(|c| c[3] == 255));
    }
}
