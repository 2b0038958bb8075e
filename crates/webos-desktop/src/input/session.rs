/// Token for one pointer interaction session
///
/// Returned when a session begins and handed back with every move, release
/// or cancel. Once a session has ended or been displaced its token no
/// longer matches, so late events for it are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Single-occupancy holder of the live pointer session
///
/// Drag and resize (or icon drag and marquee) are mutually exclusive:
/// beginning a session hands back whatever session was still attached so
/// the caller can wind it down first.
#[derive(Debug)]
pub struct SessionSlot<K> {
    next_id: u64,
    active: Option<(SessionId, K)>,
}

impl<K> Default for SessionSlot<K> {
    fn default() -> Self {
        Self {
            next_id: 1,
            active: None,
        }
    }
}

impl<K> SessionSlot<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session, returning its token and any displaced session
    pub fn begin(&mut self, kind: K) -> (SessionId, Option<K>) {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        let displaced = self.active.replace((id, kind)).map(|(_, k)| k);
        (id, displaced)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current(&self) -> Option<(SessionId, &K)> {
        self.active.as_ref().map(|(id, k)| (*id, k))
    }

    pub fn current_mut(&mut self) -> Option<(SessionId, &mut K)> {
        self.active.as_mut().map(|(id, k)| (*id, k))
    }

    /// End the session if `id` is still the live one
    pub fn end(&mut self, id: SessionId) -> Option<K> {
        match &self.active {
            Some((active, _)) if *active == id => self.active.take().map(|(_, k)| k),
            _ => None,
        }
    }

    /// End whatever session is live
    pub fn take(&mut self) -> Option<(SessionId, K)> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_end() {
        let mut slot = SessionSlot::new();
        let (id, displaced) = slot.begin("drag");
        assert!(displaced.is_none());
        assert_eq!(slot.current().map(|(_, k)| *k), Some("drag"));
        assert_eq!(slot.end(id), Some("drag"));
        assert!(!slot.is_active());
    }

    #[test]
    fn test_begin_displaces_previous_session() {
        let mut slot = SessionSlot::new();
        let (first, _) = slot.begin("drag");
        let (second, displaced) = slot.begin("resize");
        assert_eq!(displaced, Some("drag"));
        assert_ne!(first, second);

        // The stale token no longer ends anything
        assert_eq!(slot.end(first), None);
        assert_eq!(slot.end(second), Some("resize"));
    }
}
