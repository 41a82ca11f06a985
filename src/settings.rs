//! The demo settings object.
//!
//! One plain struct holds every tunable parameter of the demo: it is mutated
//! by input callbacks and read once at the start of every frame to rebuild
//! the light and shadow uniforms. Every mutator clamps to its documented
//! range.

/// Light, shadow-projection and filtering parameters.
///
/// The camera's x/y position is not part of this struct; it lives on
/// [`crate::camera::Camera`] and is moved by the
/// [`crate::camera::CameraController`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowSettings {
    /// World-space position of the light.
    pub light_pos: cgmath::Point3<f32>,
    /// World-space point the light looks at.
    pub light_target: cgmath::Point3<f32>,
    /// Width of the light's projection volume.
    pub proj_width: f32,
    /// Height of the light's projection volume.
    pub proj_height: f32,
    /// Spot-style perspective light projection instead of the directional
    /// orthographic one.
    pub perspective: bool,
    /// Field of view of the perspective light projection, in degrees.
    pub fov_deg: f32,
    /// Depth bias added to the reference depth before the shadow compare.
    pub bias: f32,
    /// PCF kernel radius r; the filter averages (2r+1)^2 taps.
    pub pcf_radius: u32,
    /// Spin the scene objects around the y axis.
    pub rotate: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            light_pos: cgmath::Point3::new(2.5, 4.8, 7.0),
            light_target: cgmath::Point3::new(3.5, 0.0, 3.5),
            proj_width: 10.0,
            proj_height: 10.0,
            perspective: false,
            fov_deg: 120.0,
            bias: -0.006,
            pcf_radius: 4,
            rotate: false,
        }
    }
}

impl ShadowSettings {
    pub const PCF_RADIUS_MAX: u32 = 8;

    pub fn nudge_light_x(&mut self, delta: f32) {
        self.light_pos.x = (self.light_pos.x + delta).clamp(-10.0, 10.0);
    }

    pub fn nudge_light_y(&mut self, delta: f32) {
        self.light_pos.y = (self.light_pos.y + delta).clamp(1.0, 20.0);
    }

    pub fn nudge_light_z(&mut self, delta: f32) {
        self.light_pos.z = (self.light_pos.z + delta).clamp(1.0, 20.0);
    }

    pub fn nudge_target_x(&mut self, delta: f32) {
        self.light_target.x = (self.light_target.x + delta).clamp(-10.0, 10.0);
    }

    pub fn nudge_target_y(&mut self, delta: f32) {
        self.light_target.y = (self.light_target.y + delta).clamp(0.0, 20.0);
    }

    pub fn nudge_target_z(&mut self, delta: f32) {
        self.light_target.z = (self.light_target.z + delta).clamp(-10.0, 20.0);
    }

    // A zero-sized projection volume makes the light matrices singular, so
    // the lower bound stays off zero.
    pub fn nudge_proj_width(&mut self, delta: f32) {
        self.proj_width = (self.proj_width + delta).clamp(0.1, 100.0);
    }

    pub fn nudge_proj_height(&mut self, delta: f32) {
        self.proj_height = (self.proj_height + delta).clamp(0.1, 100.0);
    }

    pub fn toggle_perspective(&mut self) {
        self.perspective = !self.perspective;
    }

    pub fn nudge_fov(&mut self, delta: f32) {
        self.fov_deg = (self.fov_deg + delta).clamp(1.0, 179.0);
    }

    pub fn nudge_bias(&mut self, delta: f32) {
        self.bias = (self.bias + delta).clamp(-0.01, 0.00001);
    }

    pub fn nudge_pcf_radius(&mut self, delta: i32) {
        self.pcf_radius = self
            .pcf_radius
            .saturating_add_signed(delta)
            .min(Self::PCF_RADIUS_MAX);
    }

    pub fn toggle_rotate(&mut self) {
        self.rotate = !self.rotate;
    }
}
