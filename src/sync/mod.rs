//! Live two-buffer diff session
//!
//! [`DiffSyncController`] owns the left and right texts, recomputes the diff
//! after edits settle, and answers the questions a two-pane renderer asks
//! (where the placeholders are, where the partner pane should scroll).
//! Everything runs on the caller's thread: the owner calls
//! [`DiffSyncController::poll`] from its event loop, for example once per
//! frame or when [`DiffSyncController::next_deadline`] passes.

mod clock;
mod scroll;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scroll::{scroll_top_for_visual_index, visual_index_for_scroll_top};

use crate::constant::{DEFAULT_DEBOUNCE_MS, DEFAULT_ROW_HEIGHT};
use crate::diff::{DiffResult, DiffRow, Side, compute_line_diff};
use crate::messages::SyncEvent;
use crate::transform::{ContentTransform, TransformError};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncOptions {
    /// Quiet period after the last edit before recomputing
    pub debounce: Duration,
    /// Assumed uniform row height in pixels
    pub row_height: f32,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

/// The single scheduled recomputation; replacing it cancels the previous one
#[derive(Debug, Clone, Copy)]
struct PendingRecompute {
    deadline: Instant,
    computing_marked: bool,
}

pub struct DiffSyncController<C: Clock = SystemClock> {
    left_content: String,
    right_content: String,
    diff_result: Arc<DiffResult>,
    left_placeholders: Vec<usize>,
    right_placeholders: Vec<usize>,
    is_computing: bool,
    options: SyncOptions,
    pending: Option<PendingRecompute>,
    generation: u64,
    disposed: bool,
    clock: C,
    subscribers: Vec<Sender<SyncEvent>>,
}

impl DiffSyncController<SystemClock> {
    pub fn new(
        initial_left: impl Into<String>,
        initial_right: impl Into<String>,
        options: SyncOptions,
    ) -> Self {
        Self::with_clock(initial_left, initial_right, options, SystemClock)
    }
}

impl<C: Clock> DiffSyncController<C> {
    /// Create a session and compute the first diff right away, so a freshly
    /// opened view has rows without waiting for the debounce.
    pub fn with_clock(
        initial_left: impl Into<String>,
        initial_right: impl Into<String>,
        options: SyncOptions,
        clock: C,
    ) -> Self {
        let left_content = initial_left.into();
        let right_content = initial_right.into();
        let result = compute_line_diff(&left_content, &right_content);

        let mut controller = Self {
            left_content,
            right_content,
            diff_result: Arc::new(DiffResult::default()),
            left_placeholders: Vec::new(),
            right_placeholders: Vec::new(),
            is_computing: false,
            options,
            pending: None,
            generation: 0,
            disposed: false,
            clock,
            subscribers: Vec::new(),
        };
        controller.install(result);
        controller
    }

    pub fn left_content(&self) -> &str {
        &self.left_content
    }

    pub fn right_content(&self) -> &str {
        &self.right_content
    }

    pub fn content(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_content,
            Side::Right => &self.right_content,
        }
    }

    pub fn diff_result(&self) -> &Arc<DiffResult> {
        &self.diff_result
    }

    pub fn rows(&self) -> &[DiffRow] {
        &self.diff_result.rows
    }

    pub fn is_computing(&self) -> bool {
        self.is_computing
    }

    /// Number of debounced recomputations that have completed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the scheduled recomputation becomes due, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Visual indices where the left pane shows a placeholder
    pub fn left_placeholders(&self) -> &[usize] {
        &self.left_placeholders
    }

    /// Visual indices where the right pane shows a placeholder
    pub fn right_placeholders(&self) -> &[usize] {
        &self.right_placeholders
    }

    pub fn placeholders(&self, side: Side) -> &[usize] {
        match side {
            Side::Left => &self.left_placeholders,
            Side::Right => &self.right_placeholders,
        }
    }

    pub fn subscribe(&mut self) -> Receiver<SyncEvent> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        receiver
    }

    pub fn set_left_content(&mut self, text: impl Into<String>) {
        self.set_content(Side::Left, text);
    }

    pub fn set_right_content(&mut self, text: impl Into<String>) {
        self.set_content(Side::Right, text);
    }

    /// Replace one buffer and (re)schedule the recomputation
    pub fn set_content(&mut self, side: Side, text: impl Into<String>) {
        if self.disposed {
            debug!("Ignoring {:?} edit on a disposed diff session", side);
            return;
        }

        let text = text.into();
        let buffer = match side {
            Side::Left => &mut self.left_content,
            Side::Right => &mut self.right_content,
        };
        if *buffer == text {
            return;
        }
        *buffer = text;
        self.schedule();
    }

    /// Change the debounce interval; a scheduled recomputation is re-armed with it
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.options.debounce = debounce;
        if self.pending.is_some() {
            self.schedule();
        }
    }

    /// Run a toolbar transform over the right buffer, and the left one too
    /// when `both_sides` is set.
    ///
    /// A side whose content cannot be transformed is left untouched; the first
    /// such error is returned after the other side has been handled.
    pub fn apply_transform(
        &mut self,
        transform: ContentTransform,
        both_sides: bool,
    ) -> Result<(), TransformError> {
        let sides: &[Side] = if both_sides {
            &[Side::Left, Side::Right]
        } else {
            &[Side::Right]
        };

        let mut first_error = None;
        for &side in sides {
            match transform.apply(self.content(side)) {
                Ok(text) => self.set_content(side, text),
                Err(e) => {
                    warn!("Cannot {} {:?} content: {}", transform.name(), side, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Do whatever work is due.
    ///
    /// The first poll after an edit raises `is_computing`; the poll at or past
    /// the deadline recomputes from the latest buffers and lowers it again.
    /// Returns whether a recomputation ran. A no-op once disposed.
    pub fn poll(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let Some(mut pending) = self.pending else {
            return false;
        };

        if !pending.computing_marked {
            pending.computing_marked = true;
            self.pending = Some(pending);
            self.set_computing(true);
        }

        if self.clock.now() < pending.deadline {
            return false;
        }

        self.pending = None;
        self.recompute();
        true
    }

    /// Recompute immediately if a recomputation is scheduled
    pub fn flush(&mut self) -> bool {
        if self.disposed || self.pending.take().is_none() {
            return false;
        }
        self.recompute();
        true
    }

    /// Cancel any scheduled work and stop reacting to edits. Safe to call twice.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.pending.take().is_some() {
            debug!("Cancelled pending diff recomputation on dispose");
        }
    }

    /// Scroll offset the right pane should adopt when the left pane scrolls.
    ///
    /// Every row occupies one line in both panes, so with uniform row heights
    /// the offsets coincide.
    pub fn handle_left_scroll(&self, scroll_top: f32) -> f32 {
        scroll_top
    }

    /// Scroll offset the left pane should adopt when the right pane scrolls
    pub fn handle_right_scroll(&self, scroll_top: f32) -> f32 {
        scroll_top
    }

    /// Scroll offset that brings source line `line` of `side` to the top
    pub fn scroll_top_for_line(&self, side: Side, line: usize) -> Option<f32> {
        self.diff_result
            .visual_index_for_line(side, line)
            .map(|index| scroll_top_for_visual_index(index, self.options.row_height))
    }

    /// Visual row shown at a pane's scroll offset
    pub fn visual_index_at(&self, scroll_top: f32) -> usize {
        visual_index_for_scroll_top(scroll_top, self.options.row_height)
    }

    fn schedule(&mut self) {
        let deadline = self.clock.now() + self.options.debounce;
        self.pending = Some(PendingRecompute {
            deadline,
            computing_marked: false,
        });
        debug!(
            "Diff recomputation scheduled in {:?}",
            self.options.debounce
        );
    }

    fn recompute(&mut self) {
        let started = Instant::now();
        let result = compute_line_diff(&self.left_content, &self.right_content);
        self.generation += 1;
        self.install(result);
        debug!(
            "Diff generation {} computed: {} rows in {:?}",
            self.generation,
            self.diff_result.rows.len(),
            started.elapsed()
        );

        self.publish(SyncEvent::DiffUpdated {
            generation: self.generation,
            result: Arc::clone(&self.diff_result),
        });
        self.set_computing(false);
    }

    fn install(&mut self, result: DiffResult) {
        self.left_placeholders = result.placeholders(Side::Left);
        self.right_placeholders = result.placeholders(Side::Right);
        self.diff_result = Arc::new(result);
    }

    fn set_computing(&mut self, value: bool) {
        if self.is_computing != value {
            self.is_computing = value;
            self.publish(SyncEvent::ComputingChanged(value));
        }
    }

    fn publish(&mut self, event: SyncEvent) {
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
    }
}

impl<C: Clock> Drop for DiffSyncController<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
