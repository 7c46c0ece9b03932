use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared flag that tears the frame loop down on the next tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Running/stopped bookkeeping for the animation-frame loop.
///
/// The loop only ever moves Stopped -> Running (on `start`) and
/// Running -> Stopped (when the token is cancelled). A cancelled loop cannot
/// be restarted.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    token: CancelToken,
    frames: u64,
}

impl FrameLoop {
    pub fn new(token: CancelToken) -> Self {
        Self {
            state: LoopState::Stopped,
            token,
            frames: 0,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    /// Apply a pending cancellation without running a frame.
    pub fn poll(&mut self) -> LoopState {
        if self.state == LoopState::Running && self.token.is_cancelled() {
            self.state = LoopState::Stopped;
        }
        self.state
    }

    /// Called at the top of every tick. Returns `false` once the loop must
    /// neither run this frame nor schedule another.
    pub fn begin_frame(&mut self) -> bool {
        if self.poll() == LoopState::Running {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

/// Single-threaded message queue between host callbacks and the frame tick.
pub struct Inbox<T>(Rc<RefCell<VecDeque<T>>>);

impl<T> Clone for Inbox<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Inbox<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(VecDeque::new())))
    }
}

impl<T> Inbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, msg: T) {
        self.0.borrow_mut().push_back(msg);
    }

    /// Take everything queued so far, in arrival order. Messages posted while
    /// the caller processes the batch land in the next one.
    pub fn drain(&self) -> VecDeque<T> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}
