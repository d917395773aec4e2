use crate::types::Variation;

/// Ordered set of selected variation ids. Never emptied by toggling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<String>,
    /// Every id that may be selected
    known: Vec<String>,
}

impl Selection {
    /// Select every variation, in the given order.
    pub fn all(variations: &[Variation]) -> Self {
        let ids: Vec<String> = variations.iter().map(|v| v.id.clone()).collect();
        Self {
            known: ids.clone(),
            ids,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// The one remaining selected id cannot be removed.
    pub fn is_locked(&self, id: &str) -> bool {
        self.ids.len() == 1 && self.contains(id)
    }

    /// Remove `id` if selected, append it otherwise. Returns whether anything changed.
    ///
    /// Ids that are not a known variation are ignored.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_locked(id) || !self.known.iter().any(|k| k == id) {
            return false;
        }
        if self.contains(id) {
            self.ids.retain(|s| s != id);
        } else {
            self.ids.push(id.to_string());
        }
        true
    }

    /// Text shown on the closed variation dropdown.
    pub fn summary(&self, variations: &[Variation]) -> String {
        let selected: Vec<&Variation> = variations
            .iter()
            .filter(|v| self.contains(&v.id))
            .collect();
        if !variations.is_empty() && selected.len() == variations.len() {
            return "All variations selected".to_string();
        }
        match selected.as_slice() {
            [only] => only.name.clone(),
            _ => format!("{} variations", selected.len()),
        }
    }
}
