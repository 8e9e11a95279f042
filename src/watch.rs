//! Discovery of elements the host page renders late
//!
//! A watch runs a probe on every tick until it finds something, hands the
//! result to its callback once, and then goes quiet. Ticks come from a
//! browser interval in `platform`, or straight from a test.

/// Lifecycle of a watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Still probing
    Watching,
    /// Probe succeeded and the callback ran
    Found,
    /// Stopped before anything was found
    Stopped,
}

/// One-shot element discovery
pub struct ElementWatch<T> {
    probe: Box<dyn FnMut() -> Option<T>>,
    on_found: Option<Box<dyn FnOnce(T)>>,
    state: WatchState,
    attempts: u32,
}

impl<T> ElementWatch<T> {
    pub fn new(
        probe: impl FnMut() -> Option<T> + 'static,
        on_found: impl FnOnce(T) + 'static,
    ) -> Self {
        Self {
            probe: Box::new(probe),
            on_found: Some(Box::new(on_found)),
            state: WatchState::Watching,
            attempts: 0,
        }
    }

    /// Run one probe. No-op once the watch has found or stopped.
    pub fn poll(&mut self) -> WatchState {
        if self.state != WatchState::Watching {
            return self.state;
        }

        self.attempts += 1;
        if let Some(found) = (self.probe)() {
            self.state = WatchState::Found;
            if let Some(on_found) = self.on_found.take() {
                on_found(found);
            }
        }
        self.state
    }

    /// Stop probing without calling back
    pub fn stop(&mut self) {
        if self.state == WatchState::Watching {
            self.state = WatchState::Stopped;
            self.on_found = None;
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == WatchState::Watching
    }

    /// Probes run so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_found_after_delay_calls_back_once() {
        let ticks = Rc::new(Cell::new(0u32));
        let found = Rc::new(Cell::new(0u32));

        let probe_ticks = ticks.clone();
        let found_count = found.clone();
        let mut watch = ElementWatch::new(
            move || {
                probe_ticks.set(probe_ticks.get() + 1);
                (probe_ticks.get() >= 5).then_some("input")
            },
            move |el| {
                assert_eq!(el, "input");
                found_count.set(found_count.get() + 1);
            },
        );

        for _ in 0..4 {
            assert_eq!(watch.poll(), WatchState::Watching);
        }
        assert_eq!(found.get(), 0);

        assert_eq!(watch.poll(), WatchState::Found);
        assert_eq!(found.get(), 1);

        // Further ticks neither probe nor call back
        for _ in 0..10 {
            assert_eq!(watch.poll(), WatchState::Found);
        }
        assert_eq!(found.get(), 1);
        assert_eq!(ticks.get(), 5);
        assert_eq!(watch.attempts(), 5);
    }

    #[test]
    fn test_stop_prevents_callback() {
        let found = Rc::new(Cell::new(false));
        let flag = found.clone();
        let mut watch = ElementWatch::new(|| Some(()), move |_| flag.set(true));

        watch.stop();
        assert!(!watch.is_active());
        assert_eq!(watch.poll(), WatchState::Stopped);
        assert!(!found.get());
        assert_eq!(watch.attempts(), 0);
    }

    #[test]
    fn test_stop_after_found_keeps_found() {
        let mut watch = ElementWatch::new(|| Some(1), |_| {});
        assert_eq!(watch.poll(), WatchState::Found);
        watch.stop();
        assert_eq!(watch.state(), WatchState::Found);
    }
}
