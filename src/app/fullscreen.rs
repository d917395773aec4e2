//! Fullscreen toggling across platform variants.
//!
//! Each backend wraps one way of taking over the screen. The toggle asks the
//! backends in order and uses the first one the platform supports.

use egui::{Context, ViewportCommand};
use log::{info, warn};

pub trait FullscreenBackend: Send {
    fn name(&self) -> &'static str;
    fn is_supported(&self, ctx: &Context) -> bool;
    fn is_active(&self, ctx: &Context) -> bool;
    fn set_active(&self, ctx: &Context, active: bool);
}

/// True borderless fullscreen of the native window.
pub struct NativeFullscreen;

impl FullscreenBackend for NativeFullscreen {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_supported(&self, ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().fullscreen.is_some())
    }

    fn is_active(&self, ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().fullscreen.unwrap_or(false))
    }

    fn set_active(&self, ctx: &Context, active: bool) {
        ctx.send_viewport_cmd(ViewportCommand::Fullscreen(active));
    }
}

/// Maximizes the window where the platform does not report fullscreen state.
pub struct MaximizeFallback;

impl FullscreenBackend for MaximizeFallback {
    fn name(&self) -> &'static str {
        "maximize"
    }

    fn is_supported(&self, ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().maximized.is_some())
    }

    fn is_active(&self, ctx: &Context) -> bool {
        ctx.input(|i| i.viewport().maximized.unwrap_or(false))
    }

    fn set_active(&self, ctx: &Context, active: bool) {
        ctx.send_viewport_cmd(ViewportCommand::Maximized(active));
    }
}

pub struct FullscreenToggle {
    backends: Vec<Box<dyn FullscreenBackend>>,
}

impl FullscreenToggle {
    pub fn new(backends: Vec<Box<dyn FullscreenBackend>>) -> Self {
        Self { backends }
    }

    fn backend(&self, ctx: &Context) -> Option<&dyn FullscreenBackend> {
        self.backends
            .iter()
            .map(|b| b.as_ref())
            .find(|b| b.is_supported(ctx))
    }

    pub fn is_active(&self, ctx: &Context) -> bool {
        self.backend(ctx).map(|b| b.is_active(ctx)).unwrap_or(false)
    }

    /// Flip fullscreen. Returns false when no backend is available.
    pub fn toggle(&self, ctx: &Context) -> bool {
        match self.backend(ctx) {
            Some(backend) => {
                let active = !backend.is_active(ctx);
                info!("Setting fullscreen to {} via {} backend", active, backend.name());
                backend.set_active(ctx, active);
                true
            }
            None => {
                warn!("Fullscreen is not available on this platform");
                false
            }
        }
    }
}

impl Default for FullscreenToggle {
    fn default() -> Self {
        Self::new(vec![Box::new(NativeFullscreen), Box::new(MaximizeFallback)])
    }
}
