use crate::{
    mat4::Mat4,
    material::Material,
    mesh::{BoxMesh, EdgeMesh, cuboid, cuboid_edges},
};

/// Geometry of one hero part.
#[derive(Debug, Clone, PartialEq)]
pub enum PartGeometry {
    /// Lit, filled box.
    Solid(BoxMesh),
    /// Unlit line-list outline.
    Wire(EdgeMesh),
}

/// One primitive of the composite hero object.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPart {
    pub geometry: PartGeometry,
    pub offset: [f32; 3],
    pub material: Material,
}

/// The composite hero object: a stylized sneaker assembled from boxes, plus
/// a wireframe shell floating around it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroModel {
    parts: Vec<HeroPart>,
}

impl HeroModel {
    /// Builds the sneaker: body, offset sole, three glowing accent stripes
    /// across the toe, and the enclosing outline.
    pub fn sneaker() -> Self {
        let mut parts = Vec::with_capacity(6);

        parts.push(HeroPart {
            geometry: PartGeometry::Solid(cuboid(2.0, 0.8, 3.0)),
            offset: [0.0, 0.0, 0.0],
            material: Material::solid(0x00D4FF, 0.9).shininess(100.0),
        });

        parts.push(HeroPart {
            geometry: PartGeometry::Solid(cuboid(2.2, 0.3, 3.2)),
            offset: [0.0, -0.55, 0.0],
            material: Material::solid(0xFF006E, 0.8),
        });

        for i in 0..3 {
            parts.push(HeroPart {
                geometry: PartGeometry::Solid(cuboid(2.1, 0.05, 0.1)),
                offset: [0.0, 0.2 - i as f32 * 0.2, 1.5],
                material: Material::solid(0x8AC926, 1.0).emissive(0x8AC926, 0.3),
            });
        }

        parts.push(HeroPart {
            geometry: PartGeometry::Wire(cuboid_edges(2.5, 1.2, 3.5)),
            offset: [0.0, 0.0, 0.0],
            material: Material::solid(0x00D4FF, 0.3),
        });

        Self { parts }
    }

    pub fn parts(&self) -> &[HeroPart] {
        &self.parts
    }
}

/// Per-frame motion state of the hero object.
///
/// Yaw accumulates continuously; tilt and bob oscillate as functions of the
/// animated-time clock. While the page is still behind its loading overlay
/// the pose stays frozen, which keeps the object visible but still.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeroMotion {
    yaw: f32,
    elapsed: f32,
}

impl HeroMotion {
    /// Yaw speed in rad/s: one 0.01 rad step per frame at 60 fps.
    pub const YAW_RATE: f32 = 0.6;
    /// Tilt amplitude in radians.
    pub const TILT_AMPLITUDE: f32 = 0.1;
    /// Vertical bob amplitude in world units.
    pub const BOB_AMPLITUDE: f32 = 0.2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the motion clock by `dt` seconds. With `animate` false the
    /// pose holds in place.
    pub fn advance(&mut self, dt: f32, animate: bool) {
        if !animate {
            return;
        }
        self.elapsed += dt;
        self.yaw += Self::YAW_RATE * dt;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn tilt(&self) -> f32 {
        Self::TILT_AMPLITUDE * self.elapsed.sin()
    }

    pub fn bob(&self) -> f32 {
        Self::BOB_AMPLITUDE * (2.0 * self.elapsed).sin()
    }

    /// Group transform shared by every part: bob, then tilt, then yaw.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(0.0, self.bob(), 0.0)
            .multiply(&Mat4::rotation_x(self.tilt()))
            .multiply(&Mat4::rotation_y(self.yaw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_sneaker_part_inventory() {
        let model = HeroModel::sneaker();
        let solids = model
            .parts()
            .iter()
            .filter(|p| matches!(p.geometry, PartGeometry::Solid(_)))
            .count();
        let wires = model
            .parts()
            .iter()
            .filter(|p| matches!(p.geometry, PartGeometry::Wire(_)))
            .count();
        assert_eq!(solids, 5);
        assert_eq!(wires, 1);

        // the sole hangs below the body
        assert_eq!(model.parts()[1].offset[1], -0.55);
        // accent stripes sit on the toe, stepping downward
        let accent_heights: Vec<f32> = model.parts()[2..5].iter().map(|p| p.offset[1]).collect();
        assert!(accent_heights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_yaw_accumulates_after_a_second() {
        let mut motion = HeroMotion::new();
        for _ in 0..60 {
            motion.advance(FRAME, true);
        }
        assert!(motion.yaw() > 0.0);
        assert!((motion.yaw() - 0.6).abs() < 1e-3);
    }

    #[test]
    fn test_pose_holds_while_loading() {
        let mut motion = HeroMotion::new();
        for _ in 0..120 {
            motion.advance(FRAME, false);
        }
        assert_eq!(motion.yaw(), 0.0);
        assert_eq!(motion.tilt(), 0.0);
        assert_eq!(motion.bob(), 0.0);
    }

    #[test]
    fn test_oscillations_stay_in_amplitude() {
        let mut motion = HeroMotion::new();
        for _ in 0..600 {
            motion.advance(FRAME, true);
            assert!(motion.tilt().abs() <= HeroMotion::TILT_AMPLITUDE + 1e-6);
            assert!(motion.bob().abs() <= HeroMotion::BOB_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_model_matrix_carries_bob() {
        let mut motion = HeroMotion::new();
        for _ in 0..30 {
            motion.advance(FRAME, true);
        }
        let origin = motion.model_matrix().transform_point([0.0, 0.0, 0.0]);
        assert!((origin[1] - motion.bob()).abs() < 1e-5);
    }
}
