//! Local mirror of host cvars
//!
//! The runtime registers its variables once at init and then pulls their
//! current values every frame. Values flow from the store to the mirror
//! only; writes go straight to the store through [`CvarStore::set`].

use crate::config::CvarSpec;
use crate::host::{CvarFlags, CvarStore};

/// Mirrored copy of one host cvar
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedCvar {
    /// Variable name
    pub name: String,
    /// Registration flags
    pub flags: CvarFlags,
    /// Last pulled string value
    pub string: String,
    /// `string` parsed as a float, zero when unparsable
    pub value: f32,
    /// Number of times the value changed since registration
    pub modification_count: u32,
}

impl TrackedCvar {
    fn new(name: &str, flags: CvarFlags, string: String) -> Self {
        let mut cvar = Self {
            name: name.to_string(),
            flags,
            string: String::new(),
            value: 0.0,
            modification_count: 0,
        };
        cvar.store(string);
        cvar
    }

    fn store(&mut self, string: String) {
        self.value = string.trim().parse().unwrap_or(0.0);
        self.string = string;
    }
}

/// Registered cvars, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvarRegistry {
    entries: Vec<TrackedCvar>,
}

impl CvarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every spec with the store and mirror the resulting values
    pub fn register_all<S: CvarStore + ?Sized>(&mut self, store: &mut S, specs: &[CvarSpec]) {
        for spec in specs {
            let flags = CvarFlags::from_bits_truncate(spec.flags);
            let current = store.register(&spec.name, &spec.default, flags);
            log::debug!("registered cvar {} = {:?}", spec.name, current);

            match self.entries.iter_mut().find(|c| c.name == spec.name) {
                Some(existing) => existing.store(current),
                None => self.entries.push(TrackedCvar::new(&spec.name, flags, current)),
            }
        }
    }

    /// Pull current values from the store, returning how many changed
    pub fn update<S: CvarStore + ?Sized>(&mut self, store: &S) -> usize {
        let mut changed = 0;
        for cvar in &mut self.entries {
            let current = store.variable_string(&cvar.name);
            if current != cvar.string {
                log::trace!("cvar {} changed {:?} -> {:?}", cvar.name, cvar.string, current);
                cvar.store(current);
                cvar.modification_count += 1;
                changed += 1;
            }
        }
        changed
    }

    /// Look up a mirrored cvar
    pub fn get(&self, name: &str) -> Option<&TrackedCvar> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Mirrored float value, zero when not registered
    pub fn value(&self, name: &str) -> f32 {
        self.get(name).map_or(0.0, |c| c.value)
    }

    /// Number of registered cvars
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over mirrored cvars
    pub fn iter(&self) -> impl Iterator<Item = &TrackedCvar> {
        self.entries.iter()
    }
}
