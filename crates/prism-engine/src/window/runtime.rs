use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::alert::{Alert, LogAlert};
use crate::core::{App, AppControl, CancelToken, FrameCtx, Startup, WindowCtx, CONTEXT_UNAVAILABLE};
use crate::device::{ContextConfig, Gpu};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glcanvas".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the render loop.
pub struct Runtime;

impl Runtime {
    /// Opens the window, acquires the drawing context and runs `app` until the
    /// window is closed.
    pub fn run<A>(config: RuntimeConfig, context: ContextConfig, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        Self::run_with(config, context, app, Box::new(LogAlert), CancelToken::new())
    }

    /// Like [`Runtime::run`], with a custom alert sink and an external stop handle.
    ///
    /// Cancelling `cancel` ends the loop after the tick in flight.
    pub fn run_with<A>(
        config: RuntimeConfig,
        context: ContextConfig,
        app: A,
        alert: Box<dyn Alert>,
        cancel: CancelToken,
    ) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState {
            config,
            context,
            app,
            alert,
            cancel,
            slot: None,
            tick: 0,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

type WindowSlot = Startup<WindowEntry, Window>;

fn slot_window(slot: &WindowSlot) -> &Window {
    match slot {
        Startup::Live(entry) | Startup::Stalled(entry) => entry.borrow_window(),
        Startup::Inert(window) => window,
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    context: ContextConfig,
    app: A,
    alert: Box<dyn Alert>,
    cancel: CancelToken,

    slot: Option<WindowSlot>,
    tick: u64,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowSlot> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let context = self.context.clone();
        let attempt = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, context)),
        }
        .try_build_or_recover()
        .map_err(|(err, heads)| (err, heads.window));

        let app = &mut self.app;
        let slot = Startup::resolve(attempt, self.alert.as_mut(), |entry: &mut WindowEntry| {
            entry.with_gpu(|gpu| app.setup(gpu))
        });

        if let Startup::Inert(window) = &slot {
            window.set_title(&format!("{} - {CONTEXT_UNAVAILABLE}", self.config.title));
        }
        Ok(slot)
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.cancel.cancel();
        self.slot = None;
        event_loop.exit();
    }

    fn draw_tick(&mut self) -> AppControl {
        let Some(slot) = self.slot.as_mut() else {
            return AppControl::Continue;
        };

        let (app, tick) = (&mut self.app, self.tick);
        let control = slot.tick(|entry| {
            entry.with_mut(|fields| {
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        window: fields.window,
                    },
                    gpu: fields.gpu,
                    tick,
                };
                app.on_frame(&mut ctx)
            })
        });

        self.tick = self.tick.wrapping_add(1);
        control
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.slot.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        match self.open_window(event_loop) {
            Ok(slot) => {
                slot_window(&slot).request_redraw();
                self.slot = Some(slot);
            }
            Err(e) => {
                log::error!("failed to open window: {e:#}");
                self.shutdown(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.cancel.is_cancelled() {
            self.shutdown(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.app.on_window_event(&event) == AppControl::Exit {
            self.cancel.cancel();
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.shutdown(event_loop);
                return;
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.slot.as_mut().and_then(WindowSlot::context_mut) {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.slot.as_mut().and_then(WindowSlot::context_mut) {
                    let new_size = entry.borrow_window().inner_size();
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => {
                if self.draw_tick() == AppControl::Exit {
                    self.cancel.cancel();
                }

                // Reschedule only while the loop is live and nobody asked it to stop.
                if self.cancel.is_cancelled() {
                    self.shutdown(event_loop);
                    return;
                }
                if let Some(slot) = self.slot.as_ref().filter(|slot| slot.is_live()) {
                    slot_window(slot).request_redraw();
                }
            }

            _ => {}
        }

        if self.cancel.is_cancelled() {
            self.shutdown(event_loop);
        }
    }
}
