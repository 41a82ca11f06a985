//! The shadow-mapping demo scene: a sphere, a cube and a ground plane lit by
//! a single movable light, with the light's frustum drawn as a wireframe.
//!
//! Controls:
//! - arrow keys: move the camera along x/y (it always faces the origin)
//! - J/L, K/I, O/U: move the light along x/y/z
//! - F/H, G/T, R/Y: move the light's target along x/y/z
//! - [ / ] and - / =: shrink/grow the projection width and height
//! - P: toggle between orthographic and perspective light projection
//! - , / .: narrow/widen the perspective field of view
//! - Z/X: decrease/increase the shadow bias
//! - N/M: shrink/grow the PCF kernel radius
//! - Space: toggle scene rotation

use umbra_ngin::{
    Quaternion, Rad, Rotation3, Vector3,
    context::{BufferWriter, Context, InitContext},
    data_structures::{instance::Instance, prop::Prop},
    flow::{FlowConsturctor, GraphicsFlow, Out},
    pipelines::{shadow, wire},
    render::{Render, Wire},
    resources,
    util::DeviceExt,
};
use winit::{
    event::{KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

#[derive(Default)]
struct State;

enum Event {}

/// The light-frustum overlay: the unit clip cube plus a uniform holding the
/// matrix that stretches it over the light's view volume.
struct Frustum {
    vertex_buffer: umbra_ngin::Buffer,
    index_buffer: umbra_ngin::Buffer,
    amount: usize,
    uniform_buffer: umbra_ngin::Buffer,
    bind_group: umbra_ngin::BindGroup,
}

impl Frustum {
    fn new(ctx: &InitContext) -> Self {
        let (vertex_buffer, index_buffer, amount) = resources::create_frustum_lines(&ctx.device);

        let uniform = wire::WireUniform {
            world: shadow::frustum_world_matrix(&Default::default()).into(),
            color: [1.0, 1.0, 1.0, 1.0],
        };
        let uniform_buffer = ctx
            .device
            .create_buffer_init(&umbra_ngin::util::BufferInitDescriptor {
                label: Some("Frustum Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: umbra_ngin::BufferUsages::UNIFORM | umbra_ngin::BufferUsages::COPY_DST,
            });

        let layout = wire::mk_wire_bind_group_layout(&ctx.device);
        let bind_group = ctx.device.create_bind_group(&umbra_ngin::BindGroupDescriptor {
            layout: &layout,
            entries: &[umbra_ngin::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("frustum_bind_group"),
        });

        Self {
            vertex_buffer,
            index_buffer,
            amount,
            uniform_buffer,
            bind_group,
        }
    }
}

struct ShadowScene {
    sphere: Prop,
    cube: Prop,
    plane: Prop,
    frustum: Frustum,
    angle: f32,
}

impl ShadowScene {
    async fn new(ctx: &InitContext) -> Self {
        let sphere_model = resources::create_sphere_model(
            1.0,
            32,
            24,
            [1.0, 0.5, 0.5, 1.0], // pink
            &ctx.device,
            &ctx.queue,
        );
        let sphere = Prop::new(
            &ctx.device,
            sphere_model,
            vec![Instance::from(Vector3::new(2.0, 3.0, 4.0))],
        );

        let cube_model = resources::create_cube_model(
            2.0,
            [0.5, 1.0, 0.5, 1.0], // lightgreen
            &ctx.device,
            &ctx.queue,
        );
        let cube = Prop::new(
            &ctx.device,
            cube_model,
            vec![Instance::from(Vector3::new(3.0, 1.0, 0.0))],
        );

        let plane_model = resources::create_plane_model(
            20.0,
            20.0,
            [0.5, 0.5, 1.0, 1.0], // lightblue
            &ctx.device,
            &ctx.queue,
        );
        let plane = Prop::new(&ctx.device, plane_model, vec![Instance::new()]);

        let frustum = Frustum::new(ctx);

        Self {
            sphere,
            cube,
            plane,
            frustum,
            angle: 0.0,
        }
    }
}

impl GraphicsFlow<State, Event> for ShadowScene {
    fn on_init(&mut self, _: &mut Context, _: &mut State) -> Out<State, Event> {
        log::info!(
            "arrows: camera | J/L K/I O/U: light | F/H G/T R/Y: target | [/] -/=: projection \
             | P: perspective | ,/.: fov | Z/X: bias | N/M: pcf | Space: rotate"
        );
        Out::Empty
    }

    fn on_update(
        &mut self,
        ctx: &Context,
        _: &mut State,
        dt: std::time::Duration,
    ) -> Out<State, Event> {
        if ctx.settings.rotate {
            self.angle += 0.5 * dt.as_secs_f32();
            let rotation = Quaternion::from_axis_angle(Vector3::unit_y(), Rad(self.angle));
            for instance in self
                .sphere
                .instances
                .iter_mut()
                .chain(self.cube.instances.iter_mut())
            {
                instance.rotation = rotation;
            }
            self.sphere.write_to_buffer(ctx);
            self.cube.write_to_buffer(ctx);
        }

        // Keep the overlay in sync with the light settings
        let uniform = wire::WireUniform {
            world: shadow::frustum_world_matrix(&ctx.settings).into(),
            color: [1.0, 1.0, 1.0, 1.0],
        };
        ctx.queue
            .write_buffer(&self.frustum.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut State) -> Out<State, Event> {
        Out::Empty
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut State,
        _: &umbra_ngin::DeviceEvent,
    ) -> Out<State, Event> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut State,
        event: &WindowEvent,
    ) -> Out<State, Event> {
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
            if !state.is_pressed() {
                return Out::Empty;
            }
            let key = *key;
            return Out::Configure(Box::new(move |ctx| {
                let settings = &mut ctx.settings;
                match key {
                    KeyCode::KeyJ => settings.nudge_light_x(-0.25),
                    KeyCode::KeyL => settings.nudge_light_x(0.25),
                    KeyCode::KeyK => settings.nudge_light_y(-0.25),
                    KeyCode::KeyI => settings.nudge_light_y(0.25),
                    KeyCode::KeyO => settings.nudge_light_z(-0.25),
                    KeyCode::KeyU => settings.nudge_light_z(0.25),
                    KeyCode::KeyF => settings.nudge_target_x(-0.25),
                    KeyCode::KeyH => settings.nudge_target_x(0.25),
                    KeyCode::KeyG => settings.nudge_target_y(-0.25),
                    KeyCode::KeyT => settings.nudge_target_y(0.25),
                    KeyCode::KeyR => settings.nudge_target_z(-0.25),
                    KeyCode::KeyY => settings.nudge_target_z(0.25),
                    KeyCode::BracketLeft => settings.nudge_proj_width(-0.5),
                    KeyCode::BracketRight => settings.nudge_proj_width(0.5),
                    KeyCode::Minus => settings.nudge_proj_height(-0.5),
                    KeyCode::Equal => settings.nudge_proj_height(0.5),
                    KeyCode::KeyP => settings.toggle_perspective(),
                    KeyCode::Comma => settings.nudge_fov(-2.0),
                    KeyCode::Period => settings.nudge_fov(2.0),
                    KeyCode::KeyZ => settings.nudge_bias(-0.0005),
                    KeyCode::KeyX => settings.nudge_bias(0.0005),
                    KeyCode::KeyN => settings.nudge_pcf_radius(-1),
                    KeyCode::KeyM => settings.nudge_pcf_radius(1),
                    KeyCode::Space => settings.toggle_rotate(),
                    _ => (),
                }
            }));
        }
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut State, event: Event) -> Option<Event> {
        Some(event)
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        Render::Composed(vec![
            (&self.sphere).into(),
            (&self.cube).into(),
            (&self.plane).into(),
            Render::Wire(Wire {
                vertex: &self.frustum.vertex_buffer,
                index: &self.frustum.index_buffer,
                group: &self.frustum.bind_group,
                amount: self.frustum.amount,
            }),
        ])
    }
}

fn main() {
    let scene: FlowConsturctor<State, Event> = Box::new(|ctx| {
        Box::pin(async move {
            Box::new(ShadowScene::new(&ctx).await) as Box<dyn GraphicsFlow<_, _>>
        })
    });

    let _ = umbra_ngin::flow::run(vec![scene]);
}
