//! Virtual desktop list
//!
//! Desktops are kept in display order with exactly one active. The list is
//! never empty: deleting the last desktop is refused.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::types::{DesktopId, WrapId};
use crate::wrap::DesktopWrap;

/// A virtual desktop and the wrap it renders
#[derive(Clone, Debug)]
pub struct Desktop {
    /// Unique identifier, minted from the creation time
    pub id: DesktopId,
    /// Human-readable name
    pub name: String,
    /// Icons and window namespace of this desktop
    pub wrap: DesktopWrap,
}

impl Desktop {
    pub fn wrap_id(&self) -> &WrapId {
        self.wrap.id()
    }
}

/// Persisted identity of a desktop, in display order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopEntry {
    pub id: DesktopId,
    pub name: String,
}

/// Ordered desktops with an active index
#[derive(Clone, Debug)]
pub struct MissionControl {
    desktops: Vec<Desktop>,
    active: usize,
    last_id: u64,
}

impl MissionControl {
    /// Start with a single desktop created at `now`
    pub fn new(now: f64, make_wrap: impl FnOnce(DesktopId) -> DesktopWrap) -> Self {
        let mut mc = Self {
            desktops: Vec::new(),
            active: 0,
            last_id: 0,
        };
        mc.create_desktop(now, make_wrap);
        mc
    }

    /// Rebuild a saved desktop list; the first desktop becomes active
    ///
    /// Entries repeating an earlier id are skipped. Returns `None` when
    /// nothing is left to restore.
    pub fn restore(
        entries: Vec<DesktopEntry>,
        mut make_wrap: impl FnMut(DesktopId) -> DesktopWrap,
    ) -> Option<Self> {
        let mut mc = Self {
            desktops: Vec::with_capacity(entries.len()),
            active: 0,
            last_id: 0,
        };
        for entry in entries {
            if mc.index_of(entry.id).is_some() {
                tracing::warn!(desktop = %entry.id, "skipping duplicate saved desktop");
                continue;
            }
            mc.last_id = mc.last_id.max(entry.id.0);
            mc.desktops.push(Desktop {
                id: entry.id,
                name: entry.name,
                wrap: make_wrap(entry.id),
            });
        }
        if mc.desktops.is_empty() {
            return None;
        }
        tracing::debug!(count = mc.desktops.len(), "desktops restored");
        Some(mc)
    }

    /// Ids and names in display order, for saving
    pub fn entries(&self) -> Vec<DesktopEntry> {
        self.desktops
            .iter()
            .map(|d| DesktopEntry {
                id: d.id,
                name: d.name.clone(),
            })
            .collect()
    }

    /// Wrap id used for a desktop id
    pub fn wrap_id_for(id: DesktopId) -> WrapId {
        WrapId::new(format!("desktop-{}", id))
    }

    fn mint_id(&mut self, now: f64) -> DesktopId {
        let stamp = now.max(0.0) as u64;
        let id = if stamp > self.last_id { stamp } else { self.last_id + 1 };
        self.last_id = id;
        DesktopId(id)
    }

    /// Append a desktop and make it active
    pub fn create_desktop(
        &mut self,
        now: f64,
        make_wrap: impl FnOnce(DesktopId) -> DesktopWrap,
    ) -> DesktopId {
        let id = self.mint_id(now);
        let name = format!("Desktop {}", self.desktops.len() + 1);
        self.desktops.push(Desktop {
            id,
            name,
            wrap: make_wrap(id),
        });
        self.active = self.desktops.len() - 1;
        tracing::debug!(desktop = %id, index = self.active, "desktop created");
        id
    }

    /// Make `index` active; out-of-range indices are ignored
    pub fn switch_desktop(&mut self, index: usize) -> bool {
        if index < self.desktops.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Remove the desktop at `index`
    ///
    /// Refused (returns `None`) for the last remaining desktop and for
    /// out-of-range indices. Deleting at or before the active index moves
    /// the active index back by one, floored at zero.
    pub fn delete_desktop(&mut self, index: usize) -> Option<Desktop> {
        if self.desktops.len() <= 1 {
            tracing::debug!("refusing to delete the last desktop");
            return None;
        }
        if index >= self.desktops.len() {
            return None;
        }

        let removed = self.desktops.remove(index);
        if index <= self.active {
            self.active = self.active.saturating_sub(1);
        }
        tracing::debug!(desktop = %removed.id, active = self.active, "desktop deleted");
        Some(removed)
    }

    /// Checked variant of [`Self::delete_desktop`]
    pub fn try_delete_desktop(&mut self, index: usize) -> DesktopResult<Desktop> {
        let count = self.desktops.len();
        if count <= 1 {
            return Err(DesktopError::LastDesktop);
        }
        self.delete_desktop(index)
            .ok_or(DesktopError::DesktopIndexOutOfBounds { index, count })
    }

    /// Move a desktop within the list; the moved desktop becomes active
    pub fn reorder_desktops(&mut self, from: usize, to: usize) -> bool {
        let len = self.desktops.len();
        if from >= len || to >= len {
            return false;
        }
        let desktop = self.desktops.remove(from);
        self.desktops.insert(to, desktop);
        self.active = to;
        true
    }

    pub fn rename_desktop(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.desktops.get_mut(index) {
            Some(desktop) => {
                desktop.name = name.into();
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn desktops(&self) -> &[Desktop] {
        &self.desktops
    }

    pub fn desktops_mut(&mut self) -> &mut [Desktop] {
        &mut self.desktops
    }

    pub fn len(&self) -> usize {
        self.desktops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desktops.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_desktop(&self) -> &Desktop {
        &self.desktops[self.active]
    }

    pub fn active_desktop_mut(&mut self) -> &mut Desktop {
        &mut self.desktops[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Desktop> {
        self.desktops.get(index)
    }

    pub fn try_get(&self, index: usize) -> DesktopResult<&Desktop> {
        self.desktops
            .get(index)
            .ok_or(DesktopError::DesktopIndexOutOfBounds {
                index,
                count: self.desktops.len(),
            })
    }

    pub fn index_of(&self, id: DesktopId) -> Option<usize> {
        self.desktops.iter().position(|d| d.id == id)
    }

    pub fn desktop_for_wrap(&self, wrap: &WrapId) -> Option<&Desktop> {
        self.desktops.iter().find(|d| d.wrap_id() == wrap)
    }

    pub fn desktop_for_wrap_mut(&mut self, wrap: &WrapId) -> Option<&mut Desktop> {
        self.desktops.iter_mut().find(|d| d.wrap_id() == wrap)
    }
}
