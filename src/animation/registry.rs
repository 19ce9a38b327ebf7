//! Ordered collection of per-frame updates

use super::traits::FrameUpdate;
use crate::gfx::scene::SceneGraph;

/// Per-frame callbacks, invoked in registration order
///
/// Entries live as long as the registry; a static scene never removes them.
#[derive(Default)]
pub struct UpdateRegistry {
    entries: Vec<Box<dyn FrameUpdate>>,
}

impl UpdateRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an update; it runs after every update registered before it
    pub fn register<U>(&mut self, update: U)
    where
        U: FrameUpdate + 'static,
    {
        log::debug!("Registered frame update '{}'", update.name());
        self.entries.push(Box::new(update));
    }

    /// Invoke every entry once with the same `time`
    pub fn run(&mut self, time: f64, scene: &mut SceneGraph) {
        for entry in self.entries.iter_mut() {
            entry.update(time, scene);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name())
    }
}
