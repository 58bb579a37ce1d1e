use std::collections::BTreeSet;

/// User ids with a write request awaiting its response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight {
    ids: BTreeSet<String>,
}

impl InFlight {
    /// Claim `id`. Returns false if a write for it is already outstanding.
    pub fn try_begin(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
