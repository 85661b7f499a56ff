use std::fmt;

use anyhow::Result;

use crate::alert::Alert;

use super::app::AppControl;

/// Message shown when no drawing context could be acquired.
pub const CONTEXT_UNAVAILABLE: &str = "Graphics context not available";

/// Where a window ends up after startup.
///
/// `C` is the window bound to its drawing context, `W` the bare window kept
/// when acquisition failed.
pub enum Startup<C, W> {
    /// Context acquired and the app set up; ticks render.
    Live(C),

    /// Context acquired but app setup failed; nothing is drawn.
    Stalled(C),

    /// No context; the window stays open, nothing GPU-related runs.
    Inert(W),
}

impl<C, W> Startup<C, W> {
    /// Settles a context acquisition attempt.
    ///
    /// On failure the user is alerted once and `setup` is never called; the
    /// error must hand back the window so it can stay open. On success `setup`
    /// runs exactly once and its outcome decides between `Live` and `Stalled`.
    pub fn resolve<E>(
        attempt: std::result::Result<C, (E, W)>,
        alert: &mut dyn Alert,
        setup: impl FnOnce(&mut C) -> Result<()>,
    ) -> Self
    where
        E: fmt::Display,
    {
        let mut context = match attempt {
            Ok(context) => context,
            Err((err, window)) => {
                alert.alert(&format!("{CONTEXT_UNAVAILABLE}: {err:#}"));
                return Self::Inert(window);
            }
        };

        match setup(&mut context) {
            Ok(()) => Self::Live(context),
            Err(e) => {
                log::error!("application setup failed: {e:#}");
                Self::Stalled(context)
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// The acquired context, whether or not setup succeeded.
    pub fn context_mut(&mut self) -> Option<&mut C> {
        match self {
            Self::Live(context) | Self::Stalled(context) => Some(context),
            Self::Inert(_) => None,
        }
    }

    /// Runs one tick through `frame`, only for a live window.
    pub fn tick(&mut self, frame: impl FnOnce(&mut C) -> AppControl) -> AppControl {
        match self {
            Self::Live(context) => frame(context),
            Self::Stalled(_) | Self::Inert(_) => AppControl::Continue,
        }
    }
}
