/// An event stamped with the frame it was raised in.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamped<E> {
    pub frame_index: u64,
    pub event: E,
}

/// Append-only queue of component events.
///
/// Components push while handling input or frames; the host drains once per
/// frame (for logging, or to forward signals to other components).
#[derive(Debug)]
pub struct EventBus<E> {
    events: Vec<Stamped<E>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, frame_index: u64, event: E) {
        self.events.push(Stamped { frame_index, event });
    }

    pub fn drain(&mut self) -> Vec<Stamped<E>> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventBus, Stamped};

    #[test]
    fn records_events_with_frame_index() {
        let mut bus = EventBus::new();
        bus.emit(2, "hello");
        assert_eq!(
            bus.drain(),
            vec![Stamped {
                frame_index: 2,
                event: "hello"
            }]
        );
    }

    #[test]
    fn drain_clears_events() {
        let mut bus = EventBus::new();
        bus.emit(0, 1u8);
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }
}
