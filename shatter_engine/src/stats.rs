/// Named numeric counters reported to the profiling collaborator
///
/// Resource counts accumulate over the registry's lifetime, per-frame values
/// (draw calls, queue sizes) are overwritten every frame.

use rustc_hash::FxHashMap;

/// Counter names shared between the engine and profiling tools
pub mod names {
    pub const MESHES: &str = "Meshes";
    pub const SHADERS: &str = "Shaders";
    pub const TEXTURES: &str = "Textures";
    pub const DRAW_CALLS: &str = "Draw Calls";
    pub const RENDERABLES: &str = "Renderables";
    pub const DYNAMIC_RENDERABLES: &str = "Renderables (Dynamic)";
}

/// A set of named counters
#[derive(Debug, Clone, Default)]
pub struct Counters {
    values: FxHashMap<String, i64>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to a counter, creating it at zero if needed
    pub fn increment(&mut self, name: &str, delta: i64) {
        *self.values.entry(name.to_string()).or_insert(0) += delta;
    }

    /// Overwrite a counter
    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    /// Current value, zero for counters never touched
    pub fn get(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }

    /// Iterate over all counters in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
