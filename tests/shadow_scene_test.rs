#[cfg(feature = "integration-tests")]
mod common;

/// A cube hovering over the ground plane, lit from the side: the patch of
/// plane behind the cube must come out darker than an unoccluded patch.
#[test]
#[cfg(feature = "integration-tests")]
fn should_darken_plane_behind_cube() {
    use cgmath::EuclideanSpace;
    use umbra_ngin::{
        context::{Context, InitContext},
        data_structures::{instance::Instance, prop::Prop},
        render::Render,
        resources,
    };

    use crate::common::test_utils::{FrameCounter, RenderSource, TestRender};

    struct Scene {
        cube: Prop,
        plane: Prop,
    }
    impl RenderSource for Scene {
        fn render<'a, 'pass>(&'a self) -> Render<'a, 'pass> {
            Render::Composed(vec![(&self.cube).into(), (&self.plane).into()])
        }
    }

    /// Projects a world-space point through the camera and samples the
    /// rendered texture there.
    fn pixel_at(
        ctx: &Context,
        texture: &image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        world: cgmath::Point3<f32>,
    ) -> image::Rgba<u8> {
        let view_proj = ctx.projection.calc_matrix() * ctx.camera.camera.calc_matrix();
        let clip = view_proj * world.to_homogeneous();
        let ndc = clip.truncate() / clip.w;
        let x = ((ndc.x + 1.0) / 2.0 * ctx.config.width as f32) as u32;
        let y = ((1.0 - ndc.y) / 2.0 * ctx.config.height as f32) as u32;
        *texture.get_pixel(x, y)
    }

    golden_image_test!(async move |ctx: InitContext| {
        let cube_model =
            resources::create_cube_model(2.0, [1.0, 1.0, 1.0, 1.0], &ctx.device, &ctx.queue);
        let cube = Prop::new(
            &ctx.device,
            cube_model,
            vec![Instance::from(cgmath::Vector3::new(0.0, 1.0, 0.0))],
        );
        let plane_model =
            resources::create_plane_model(20.0, 20.0, [0.5, 0.5, 1.0, 1.0], &ctx.device, &ctx.queue);
        let plane = Prop::new(&ctx.device, plane_model, vec![Instance::new()]);

        TestRender::new(
            Scene { cube, plane },
            &|ctx: &mut Context, _: &mut FrameCounter| {
                ctx.camera.camera.position = [0.0, 10.0, 12.0].into();
                ctx.settings.light_pos = [6.0, 6.0, 0.0].into();
                ctx.settings.light_target = [0.0, 0.0, 0.0].into();
                ctx.settings.pcf_radius = 2;
            },
            &|ctx, state: &mut FrameCounter, texture| {
                // The settings only reach the GPU uniforms after the first
                // presented frame, so wait two frames before asserting.
                if state.frame() > 1 {
                    let shadowed = pixel_at(ctx, texture, [-2.0, 0.0, 0.0].into());
                    let lit = pixel_at(ctx, texture, [3.0, 0.0, 3.0].into());
                    assert!(
                        lit[2] > shadowed[2].saturating_add(50),
                        "expected the occluded plane pixel {:?} to be darker than the lit one {:?}",
                        shadowed,
                        lit
                    );
                    return Ok(umbra_ngin::flow::ImageTestResult::Passed);
                } else {
                    return Ok(umbra_ngin::flow::ImageTestResult::Waiting);
                }
            },
        )
    });
}
