use crate::mat4::Mat4;

/// Perspective camera parked in front of the hero object.
///
/// The page keeps the aspect ratio pinned to 1.0 (the canvas is a clamped
/// square), so resize handling only ever re-asserts that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 5.0],
        }
    }
}

impl Camera {
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// The camera never rotates, so the view is a bare inverse translation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(-self.position[0], -self.position[1], -self.position[2])
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix().multiply(&self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_framing() {
        let camera = Camera::default();
        assert_eq!(camera.fov_y_deg, 75.0);
        assert_eq!(camera.aspect, 1.0);
        assert_eq!(camera.position, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = Camera::default();
        let clip = camera.view_projection().transform_point([0.0, 0.0, 0.0]);
        assert!(clip[0].abs() < 1e-5);
        assert!(clip[1].abs() < 1e-5);
        // five units in front of the camera sits inside the clip cube
        assert!(clip[2] > -1.0 && clip[2] < 1.0);
    }

    #[test]
    fn test_aspect_clamps_to_positive() {
        let mut camera = Camera::default();
        camera.set_aspect(0.0);
        assert!(camera.aspect > 0.0);
    }
}
