#[cfg(feature = "integration-tests")]
use wgpu::Color;

#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use umbra_ngin::{
        context::{Context, InitContext},
        render::Render,
    };

    use crate::common::test_utils::{FrameCounter, RenderSource, TestRender};

    struct Empty();
    impl RenderSource for Empty {
        fn render<'a, 'pass>(&'a self) -> Render<'a, 'pass> {
            Render::None
        }
    }

    golden_image_test!(async move |_: InitContext| {
        TestRender::new(
            Empty(),
            &|ctx: &mut Context, _: &mut FrameCounter| {
                ctx.clear_colour = Color::WHITE;
            },
            &|_, state: &mut FrameCounter, texture| {
                if state.frame() > 0 {
                    let colour = Color::WHITE;
                    let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                    let desired_pixel = image::Rgba([
                        f_to_u8(colour.r),
                        f_to_u8(colour.g),
                        f_to_u8(colour.b),
                        f_to_u8(colour.a),
                    ]);
                    let pixels = texture.pixels();

                    for pixel in pixels {
                        assert_eq!(*pixel, desired_pixel);
                    }
                    return Ok(umbra_ngin::flow::ImageTestResult::Passed);
                } else {
                    return Ok(umbra_ngin::flow::ImageTestResult::Waiting);
                }
            },
        )
    });
}
