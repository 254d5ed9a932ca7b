use foundation::time::Millis;

/// Frame metadata derived from display-refresh timestamps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index since the loop was (re)started.
    pub index: u64,
    /// Timestamp handed to the frame callback.
    pub time: Millis,
}

impl Frame {
    pub fn first(time: Millis) -> Self {
        Self { index: 0, time }
    }

    pub fn next(self, time: Millis) -> Self {
        Self {
            index: self.index + 1,
            time,
        }
    }
}

/// Turns the raw `requestAnimationFrame` timestamps into [`Frame`]s.
///
/// Restarting the loop (after a resize or a drag start) resets the clock so
/// indexing starts over.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<Frame>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn tick(&mut self, timestamp: Millis) -> Frame {
        let frame = match self.last {
            Some(prev) => prev.next(timestamp),
            None => Frame::first(timestamp),
        };
        self.last = Some(frame);
        frame
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, FrameClock};
    use foundation::time::Millis;

    #[test]
    fn next_advances_index_and_time() {
        let f0 = Frame::first(Millis(1_000.0));
        let f1 = f0.next(Millis(1_016.5));
        assert_eq!(f1.index, 1);
        assert_eq!(f1.time, Millis(1_016.5));
    }

    #[test]
    fn clock_reset_restarts_indexing() {
        let mut clock = FrameClock::new();
        clock.tick(Millis(0.0));
        assert_eq!(clock.tick(Millis(16.0)).index, 1);
        clock.reset();
        let f = clock.tick(Millis(500.0));
        assert_eq!(f, Frame::first(Millis(500.0)));
    }
}
