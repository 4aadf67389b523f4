use crate::material::unpack_rgb;

/// The hero light rig: a dim ambient fill, a cyan key light from above and
/// a magenta accent light off to the side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub ambient_color: u32,
    pub ambient_intensity: f32,
    pub directional_color: u32,
    pub directional_intensity: f32,
    /// Direction pointing from the scene toward the light.
    pub directional_dir: [f32; 3],
    pub point_color: u32,
    pub point_intensity: f32,
    pub point_position: [f32; 3],
    /// Distance at which the point light's falloff reaches zero.
    pub point_range: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_color: 0x404040,
            ambient_intensity: 0.6,
            directional_color: 0x00D4FF,
            directional_intensity: 1.0,
            directional_dir: [10.0, 10.0, 5.0],
            point_color: 0xFF006E,
            point_intensity: 0.8,
            point_position: [-10.0, 5.0, 5.0],
            point_range: 100.0,
        }
    }
}

impl LightRig {
    /// Ambient contribution premultiplied by intensity.
    pub fn ambient_rgb(&self) -> [f32; 3] {
        scale(unpack_rgb(self.ambient_color), self.ambient_intensity)
    }

    /// Key light color premultiplied by intensity.
    pub fn directional_rgb(&self) -> [f32; 3] {
        scale(unpack_rgb(self.directional_color), self.directional_intensity)
    }

    /// Accent light color premultiplied by intensity.
    pub fn point_rgb(&self) -> [f32; 3] {
        scale(unpack_rgb(self.point_color), self.point_intensity)
    }

    /// Unit vector toward the key light.
    pub fn directional_unit(&self) -> [f32; 3] {
        let [x, y, z] = self.directional_dir;
        let len = (x * x + y * y + z * z).sqrt().max(f32::EPSILON);
        [x / len, y / len, z / len]
    }
}

fn scale(rgb: [f32; 3], s: f32) -> [f32; 3] {
    [rgb[0] * s, rgb[1] * s, rgb[2] * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_unit_is_normalized() {
        let rig = LightRig::default();
        let [x, y, z] = rig.directional_unit();
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
        // pointing up and toward the viewer
        assert!(x > 0.0 && y > 0.0 && z > 0.0);
    }

    #[test]
    fn test_premultiplied_intensities() {
        let rig = LightRig::default();
        let ambient = rig.ambient_rgb();
        let expected = 64.0 / 255.0 * 0.6;
        for channel in ambient {
            assert!((channel - expected).abs() < 1e-6);
        }
    }
}
