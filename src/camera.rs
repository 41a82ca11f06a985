//! Camera types, controller and uniforms for view/projection.
//!
//! The camera is a simple look-at camera: it sits at a position and always
//! faces a fixed target. Only its x and y coordinates are adjustable; the
//! [`CameraController`] binds those two axes to the arrow keys.

use instant::Duration;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Converts cgmath's OpenGL clip space (z in -1..1) to wgpu's (z in 0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A look-at camera: position, target, and up vector.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: cgmath::Point3<f32>,
    pub target: cgmath::Point3<f32>,
    pub up: cgmath::Vector3<f32>,
}

impl Camera {
    pub fn new(
        position: impl Into<cgmath::Point3<f32>>,
        target: impl Into<cgmath::Point3<f32>>,
    ) -> Self {
        Self {
            position: position.into(),
            target: target.into(),
            up: cgmath::Vector3::unit_y(),
        }
    }

    /// The view matrix (world-to-camera).
    pub fn calc_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::look_at_rh(self.position, self.target, self.up)
    }
}

/// Perspective projection, kept separate from the camera so resizing the
/// window only touches the aspect ratio.
#[derive(Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: cgmath::Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new(
        width: u32,
        height: u32,
        fovy: impl Into<cgmath::Rad<f32>>,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> cgmath::Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The camera data as it is laid out in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: cgmath::Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        use cgmath::EuclideanSpace;
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves the camera along the world x and y axes via the arrow keys, clamped
/// so the scene stays in view.
#[derive(Debug)]
pub struct CameraController {
    speed: f32,
    amount_left: f32,
    amount_right: f32,
    amount_up: f32,
    amount_down: f32,
}

impl CameraController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            amount_left: 0.0,
            amount_right: 0.0,
            amount_up: 0.0,
            amount_down: 0.0,
        }
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(key),
                    state,
                    ..
                },
            ..
        } = event
        {
            let amount = if *state == ElementState::Pressed {
                1.0
            } else {
                0.0
            };
            match key {
                KeyCode::ArrowLeft => self.amount_left = amount,
                KeyCode::ArrowRight => self.amount_right = amount,
                KeyCode::ArrowUp => self.amount_up = amount,
                KeyCode::ArrowDown => self.amount_down = amount,
                _ => (),
            }
        }
    }

    pub fn update(&self, camera: &mut Camera, dt: Duration) {
        let dt = dt.as_secs_f32();
        camera.position.x =
            (camera.position.x + (self.amount_right - self.amount_left) * self.speed * dt)
                .clamp(-10.0, 10.0);
        camera.position.y = (camera.position.y
            + (self.amount_up - self.amount_down) * self.speed * dt)
            .clamp(1.0, 20.0);
    }
}

/// All GPU-facing camera state bundled for the [`crate::context::Context`].
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: CameraController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}
