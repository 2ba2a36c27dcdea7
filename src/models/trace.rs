use std::iter::FusedIterator;

use super::{ScheduledProcess, TimeStep, TraceFrame};

/// Lazily synthesized frames for `t = 0..=max(finish)`.
///
/// Each frame is derived from the schedule on demand, so nothing beyond the
/// current frame is held in memory. Cloning yields an independent sequence,
/// which makes the trace restartable.
#[derive(Clone, Debug)]
pub struct Frames<'a> {
    processes: &'a [ScheduledProcess],
    next: TimeStep,
    end: TimeStep, // One past the last frame, 0 when there is nothing to trace
}

impl<'a> Frames<'a> {
    pub fn new(processes: &'a [ScheduledProcess]) -> Self {
        let end = processes
            .iter()
            .map(|p| p.finish() + 1)
            .max()
            .unwrap_or(0);

        Self {
            processes,
            next: 0,
            end,
        }
    }

    /// Total number of frames in the full sequence, regardless of progress.
    pub fn frame_count(&self) -> usize {
        self.end
    }

    /// Frame at instant `t` without walking the earlier ones.
    pub fn nth_frame(&self, t: TimeStep) -> Option<TraceFrame> {
        (t < self.end).then(|| TraceFrame::at(t, self.processes))
    }
}

impl Iterator for Frames<'_> {
    type Item = TraceFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let frame = TraceFrame::at(self.next, self.processes);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}

/// Step-through position over a materialized trace.
///
/// Stepping never moves past either end; a step that would leave the trace
/// returns `None` and leaves the position unchanged.
#[derive(Debug)]
pub struct TraceCursor<'a> {
    frames: &'a [TraceFrame],
    position: usize,
}

impl<'a> TraceCursor<'a> {
    pub fn new(frames: &'a [TraceFrame]) -> Self {
        Self { frames, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&'a TraceFrame> {
        self.frames.get(self.position)
    }

    pub fn step_forward(&mut self) -> Option<&'a TraceFrame> {
        if self.position + 1 >= self.frames.len() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    pub fn step_backward(&mut self) -> Option<&'a TraceFrame> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    /// Jumps to frame `t`. Out of range leaves the cursor where it was.
    pub fn seek(&mut self, t: usize) -> Option<&'a TraceFrame> {
        if t >= self.frames.len() {
            return None;
        }
        self.position = t;
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// True on the last frame, or when there are no frames at all.
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.frames.len()
    }
}
