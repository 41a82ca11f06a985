#[cfg(feature = "integration-tests")]
use umbra_ngin::flow::ImageTestResult;
#[cfg(feature = "integration-tests")]
use umbra_ngin::{
    context::Context,
    flow::{GraphicsFlow, Out},
    render::Render,
};

pub(crate) struct FrameCounter(pub(crate) u32);
impl Default for FrameCounter {
    fn default() -> Self {
        Self(0)
    }
}
impl FrameCounter {
    #[allow(dead_code)]
    pub(crate) fn frame(&self) -> u32 {
        return self.0;
    }

    #[allow(dead_code)]
    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

/// Provides the render for a [`TestRender`] each frame.
#[cfg(feature = "integration-tests")]
pub(crate) trait RenderSource {
    fn render<'a, 'pass>(&'a self) -> Render<'a, 'pass>;
}

/// A minimal flow for golden-image tests: a render source, a one-time
/// context setup, and a per-frame validation of the rendered texture.
#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender<'a, R: RenderSource> {
    source: R,
    setup: &'a dyn Fn(&mut Context, &mut FrameCounter),
    validate: &'a dyn Fn(
        &Context,
        &mut FrameCounter,
        &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>,
}

#[cfg(feature = "integration-tests")]
impl<'a, R: RenderSource> TestRender<'a, R> {
    pub(crate) fn new(
        source: R,
        setup: &'a dyn Fn(&mut Context, &mut FrameCounter),
        validate: &'a dyn Fn(
            &Context,
            &mut FrameCounter,
            &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error>,
    ) -> Self {
        Self {
            source,
            setup,
            validate,
        }
    }
}

#[cfg(feature = "integration-tests")]
impl<'a, R: RenderSource> GraphicsFlow<FrameCounter, ()> for TestRender<'a, R> {
    fn on_init(&mut self, ctx: &mut Context, state: &mut FrameCounter) -> Out<FrameCounter, ()> {
        (self.setup)(ctx, state);
        Out::Empty
    }

    fn on_update(
        &mut self,
        _: &Context,
        state: &mut FrameCounter,
        _: std::time::Duration,
    ) -> Out<FrameCounter, ()> {
        state.progress();
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut FrameCounter) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &umbra_ngin::DeviceEvent,
    ) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &umbra_ngin::WindowEvent,
    ) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut FrameCounter, event: ()) -> Option<()> {
        Some(event)
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        self.source.render()
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

/// Runs the event loop with a single flow built by the given async
/// constructor until every frame assertion reports `Passed`.
#[macro_export]
macro_rules! golden_image_test {
    ($flow_constructor:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use umbra_ngin::flow::FlowConsturctor;
        use umbra_ngin::flow::GraphicsFlow;
        let flow_constructor: FlowConsturctor<FrameCounter, ()> = Box::new(|ctx| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<FrameCounter, ()>> =
                    Box::new(($flow_constructor)(ctx).await);
                g_flow
            })
        });

        umbra_ngin::flow::run(vec![flow_constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
