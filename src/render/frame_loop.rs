// src/render/frame_loop.rs
// Frame scheduling: the renderer asks for its next frame, the host decides when it runs.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Single pending-frame flag consumed by the host's update loop.
/// Repeated requests before the host runs collapse into one frame.
#[derive(Debug, Default)]
pub struct PendingFrame {
    pending: bool,
}

impl PendingFrame {
    pub fn new() -> Self {
        Self { pending: false }
    }

    /// Returns true once per request.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for PendingFrame {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}

/// Owner-side stop switch for a frame loop. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    stopped: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time advanced and the frame was drawn.
    Drawn,
    /// Host reported hidden: nothing drawn, time unchanged, next frame requested.
    Hidden,
    /// Loop stopped by its owner: nothing drawn and nothing requested.
    Stopped,
}
