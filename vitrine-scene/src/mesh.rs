/// Triangle-list box with per-face normals, interleaved as
/// `[x, y, z, nx, ny, nz]` per vertex. 24 vertices, 36 indices.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

/// Line-list box outline. 8 corner positions, 24 indices (12 edges).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMesh {
    pub positions: Vec<f32>,
    pub indices: Vec<u16>,
}

/// Floats per [`BoxMesh`] vertex: position + normal.
pub const BOX_VERTEX_STRIDE: usize = 6;

/// Builds an axis-aligned box centered on the origin.
pub fn cuboid(width: f32, height: f32, depth: f32) -> BoxMesh {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);

    // (normal, four corners wound counter-clockwise seen from outside)
    #[rustfmt::skip]
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([ 1.0,  0.0,  0.0], [[ hw, -hh,  hd], [ hw, -hh, -hd], [ hw,  hh, -hd], [ hw,  hh,  hd]]),
        ([-1.0,  0.0,  0.0], [[-hw, -hh, -hd], [-hw, -hh,  hd], [-hw,  hh,  hd], [-hw,  hh, -hd]]),
        ([ 0.0,  1.0,  0.0], [[-hw,  hh,  hd], [ hw,  hh,  hd], [ hw,  hh, -hd], [-hw,  hh, -hd]]),
        ([ 0.0, -1.0,  0.0], [[-hw, -hh, -hd], [ hw, -hh, -hd], [ hw, -hh,  hd], [-hw, -hh,  hd]]),
        ([ 0.0,  0.0,  1.0], [[-hw, -hh,  hd], [ hw, -hh,  hd], [ hw,  hh,  hd], [-hw,  hh,  hd]]),
        ([ 0.0,  0.0, -1.0], [[ hw, -hh, -hd], [-hw, -hh, -hd], [-hw,  hh, -hd], [ hw,  hh, -hd]]),
    ];

    let mut vertices = Vec::with_capacity(24 * BOX_VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);
    for (face, (normal, corners)) in faces.iter().enumerate() {
        for corner in corners {
            vertices.extend_from_slice(corner);
            vertices.extend_from_slice(normal);
        }
        let base = (face * 4) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    BoxMesh { vertices, indices }
}

/// Builds the 12-edge outline of an axis-aligned box.
pub fn cuboid_edges(width: f32, height: f32, depth: f32) -> EdgeMesh {
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);

    let mut positions = Vec::with_capacity(8 * 3);
    for corner in 0..8u16 {
        positions.push(if corner & 1 == 0 { -hw } else { hw });
        positions.push(if corner & 2 == 0 { -hh } else { hh });
        positions.push(if corner & 4 == 0 { -hd } else { hd });
    }

    // pairs of corner ids differing in exactly one axis bit
    #[rustfmt::skip]
    let indices = vec![
        0, 1,  2, 3,  4, 5,  6, 7, // x-aligned
        0, 2,  1, 3,  4, 6,  5, 7, // y-aligned
        0, 4,  1, 5,  2, 6,  3, 7, // z-aligned
    ];

    EdgeMesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_counts() {
        let mesh = cuboid(2.0, 0.8, 3.0);
        assert_eq!(mesh.vertices.len(), 24 * BOX_VERTEX_STRIDE);
        assert_eq!(mesh.indices.len(), 36);
        let max = *mesh.indices.iter().max().unwrap();
        assert!((max as usize) < 24);
    }

    #[test]
    fn test_cuboid_extents() {
        let mesh = cuboid(2.0, 0.8, 3.0);
        let mut max = [f32::MIN; 3];
        for vertex in mesh.vertices.chunks(BOX_VERTEX_STRIDE) {
            for axis in 0..3 {
                max[axis] = max[axis].max(vertex[axis].abs());
            }
        }
        assert_eq!(max, [1.0, 0.4, 1.5]);
    }

    #[test]
    fn test_cuboid_normals_are_axis_aligned_units() {
        let mesh = cuboid(1.0, 1.0, 1.0);
        for vertex in mesh.vertices.chunks(BOX_VERTEX_STRIDE) {
            let n = &vertex[3..6];
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
            assert_eq!(n.iter().filter(|c| c.abs() > 0.0).count(), 1);
        }
    }

    #[test]
    fn test_edges_counts_and_lengths() {
        let edges = cuboid_edges(2.5, 1.2, 3.5);
        assert_eq!(edges.positions.len(), 8 * 3);
        assert_eq!(edges.indices.len(), 24);

        // every edge spans exactly one axis of the box
        for pair in edges.indices.chunks(2) {
            let a = &edges.positions[pair[0] as usize * 3..pair[0] as usize * 3 + 3];
            let b = &edges.positions[pair[1] as usize * 3..pair[1] as usize * 3 + 3];
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1);
        }
    }
}
