//! Observers receive every `GameEvent` as it happens.

use super::event::GameEvent;

/// Hook for presentation layers.
///
/// Observers cannot influence play; they only see what happened.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Count events of one kind (see [`GameEvent::kind`]).
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeatMap;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::WarDeclared { counts: SeatMap::with_value(4) });
        log.on_event(&GameEvent::RoundStarted { round: 2, counts: SeatMap::with_value(4) });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.events()[0].kind(), "war_declared");
        assert_eq!(log.count("round_started"), 1);

        log.clear();
        assert!(log.events().is_empty());
    }
}
