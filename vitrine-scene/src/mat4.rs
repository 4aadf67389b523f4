/// Column-major 4x4 matrix, laid out the way GL uniform uploads expect.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Right-handed perspective projection mapping to the GL clip cube.
    /// `fov_y` is in radians.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let range = 1.0 / (near - far);
        Mat4([
            f / aspect,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            (near + far) * range,
            -1.0,
            0.0,
            0.0,
            2.0 * near * far * range,
            0.0,
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.0[12] = x;
        m.0[13] = y;
        m.0[14] = z;
        m
    }

    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Mat4([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// `self * rhs`, applying `rhs` first.
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += a[k * 4 + row] * b[col * 4 + k];
                }
                out[col * 4 + row] = acc;
            }
        }
        Mat4(out)
    }

    /// Transforms a point (w = 1) including the perspective divide.
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        let x = m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12];
        let y = m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13];
        let z = m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14];
        let w = m[3] * p[0] + m[7] * p[1] + m[11] * p[2] + m[15];
        if w.abs() > f32::EPSILON && (w - 1.0).abs() > f32::EPSILON {
            [x / w, y / w, z / w]
        } else {
            [x, y, z]
        }
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_identity_and_translation() {
        assert_close(Mat4::IDENTITY.transform_point([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
        assert_close(
            Mat4::translation(1.0, -2.0, 0.5).transform_point([0.0, 0.0, 0.0]),
            [1.0, -2.0, 0.5],
        );
    }

    #[test]
    fn test_rotations_quarter_turn() {
        let quarter = std::f32::consts::FRAC_PI_2;
        // +z spins toward +x around the y axis
        assert_close(
            Mat4::rotation_y(quarter).transform_point([0.0, 0.0, 1.0]),
            [1.0, 0.0, 0.0],
        );
        // +y spins toward +z around the x axis
        assert_close(
            Mat4::rotation_x(quarter).transform_point([0.0, 1.0, 0.0]),
            [0.0, 0.0, 1.0],
        );
    }

    #[test]
    fn test_multiply_applies_rhs_first() {
        let spin = Mat4::rotation_y(std::f32::consts::FRAC_PI_2);
        let shift = Mat4::translation(5.0, 0.0, 0.0);
        // shift * spin: rotate into +x, then translate along x
        assert_close(
            shift.multiply(&spin).transform_point([0.0, 0.0, 1.0]),
            [6.0, 0.0, 0.0],
        );
        // spin * shift: translate first, then the offset rotates too
        assert_close(
            spin.multiply(&shift).transform_point([0.0, 0.0, 1.0]),
            [1.0, 0.0, -5.0],
        );
    }

    #[test]
    fn test_perspective_maps_near_and_far_to_clip_bounds() {
        let proj = Mat4::perspective(75f32.to_radians(), 1.0, 0.1, 1000.0);
        let near = proj.transform_point([0.0, 0.0, -0.1]);
        let far = proj.transform_point([0.0, 0.0, -1000.0]);
        assert!((near[2] - -1.0).abs() < 1e-4);
        assert!((far[2] - 1.0).abs() < 1e-3);
    }
}
