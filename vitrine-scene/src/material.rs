/// Surface parameters for one hero part. Colors use 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: u32,
    pub opacity: f32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub shininess: f32,
}

impl Material {
    /// Lit surface without highlights or glow.
    pub fn solid(color: u32, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            emissive: 0,
            emissive_intensity: 0.0,
            shininess: 30.0,
        }
    }

    pub fn shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Adds a self-illumination term on top of the lit response.
    pub fn emissive(mut self, color: u32, intensity: f32) -> Self {
        self.emissive = color;
        self.emissive_intensity = intensity;
        self
    }

    /// Diffuse color as floats, `0.0..=1.0` per channel.
    pub fn color_rgb(&self) -> [f32; 3] {
        unpack_rgb(self.color)
    }

    /// Emissive color scaled by its intensity.
    pub fn emissive_rgb(&self) -> [f32; 3] {
        let [r, g, b] = unpack_rgb(self.emissive);
        let s = self.emissive_intensity;
        [r * s, g * s, b * s]
    }
}

/// Unpacks 0xRRGGBB into `[r, g, b]` floats.
pub fn unpack_rgb(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_rgb_channels() {
        assert_eq!(unpack_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(unpack_rgb(0x00FF00), [0.0, 1.0, 0.0]);
        assert_eq!(unpack_rgb(0x0000FF), [0.0, 0.0, 1.0]);
        let [r, g, b] = unpack_rgb(0x00D4FF);
        assert_eq!(r, 0.0);
        assert!((g - 212.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn test_emissive_rgb_scales_by_intensity() {
        let accent = Material::solid(0x8AC926, 1.0).emissive(0x8AC926, 0.3);
        let glow = accent.emissive_rgb();
        let base = unpack_rgb(0x8AC926);
        for i in 0..3 {
            assert!((glow[i] - base[i] * 0.3).abs() < 1e-6);
        }
    }
}
