//! Transient success notices.
//!
//! Each notice gets a fresh generation. A deferred clear is armed with the
//! generation it belongs to and [`NoticeBoard::expire`] ignores stale ones, so
//! a clear armed for an older notice never hides a newer one.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub generation: u64,
}

impl Notice {
    pub fn deleted(name: &str) -> String {
        format!("{name} deleted successfully")
    }

    pub fn updated(name: &str) -> String {
        format!("{name} updated successfully")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    last_generation: u64,
}

impl NoticeBoard {
    /// Show `message`, replacing any current notice. Returns its generation.
    pub fn show(&mut self, message: String) -> u64 {
        self.last_generation += 1;
        self.current = Some(Notice {
            message,
            generation: self.last_generation,
        });
        self.last_generation
    }

    /// Clear the notice if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
