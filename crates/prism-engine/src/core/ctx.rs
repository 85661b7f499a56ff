use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::{encode, FramePlan, RenderState};

use super::app::AppControl;

/// Window handle for the current tick.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-tick context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
    pub tick:   u64,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the next surface texture, records `plan` with `state` and presents it.
    ///
    /// Surface errors skip the tick, except fatal ones which ask the runtime to exit.
    pub fn render(&mut self, plan: &FramePlan, state: RenderState<'_>) -> AppControl {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("surface lost beyond recovery; stopping render loop");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        encode(
            &mut frame.encoder,
            &frame.view,
            self.gpu.targets(),
            plan,
            state,
        );

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        log::trace!(
            "tick {}: {} draw(s) in {}x{}",
            self.tick,
            plan.draws.len(),
            plan.viewport.width,
            plan.viewport.height
        );

        AppControl::Continue
    }
}
