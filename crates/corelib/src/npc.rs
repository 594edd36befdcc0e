//! NPC prototypes: values that copy themselves, plus a small registry that
//! hands out fresh copies of stored templates.

use std::collections::HashMap;
use std::fmt;

/// Base monster with nothing but hit points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub health: u32,
}

impl Monster {
    pub fn new(health: u32) -> Self {
        Self { health }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goblin {
    pub name: String,
    pub health: u32,
}

impl Goblin {
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }
}

/// Any NPC variant. `clone()` always yields the receiver's own variant and
/// owns all of its fields, so edits to a copy never reach the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Npc {
    Monster(Monster),
    Goblin(Goblin),
}

impl Npc {
    pub fn monster(health: u32) -> Self {
        Npc::Monster(Monster::new(health))
    }

    pub fn goblin(name: impl Into<String>, health: u32) -> Self {
        Npc::Goblin(Goblin::new(name, health))
    }

    #[inline]
    pub fn health(&self) -> u32 {
        match self {
            Npc::Monster(m) => m.health,
            Npc::Goblin(g) => g.health,
        }
    }

    pub fn set_health(&mut self, health: u32) {
        match self {
            Npc::Monster(m) => m.health = health,
            Npc::Goblin(g) => g.health = health,
        }
    }

    /// `None` for variants without a name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Npc::Monster(_) => None,
            Npc::Goblin(g) => Some(&g.name),
        }
    }

    /// Rename the NPC. Returns `false` (and changes nothing) when the
    /// variant carries no name.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        match self {
            Npc::Monster(_) => false,
            Npc::Goblin(g) => {
                g.name = name.into();
                true
            }
        }
    }

    /// Summary of the current field values.
    pub fn describe(&self) -> String {
        match self {
            Npc::Monster(m) => format!("Monster has {} HP", m.health),
            Npc::Goblin(g) => format!("Goblin {} has {} HP", g.name, g.health),
        }
    }
}

impl fmt::Display for Npc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Monster> for Npc {
    fn from(m: Monster) -> Self {
        Npc::Monster(m)
    }
}

impl From<Goblin> for Npc {
    fn from(g: Goblin) -> Self {
        Npc::Goblin(g)
    }
}

/// Named catalogue of prototypes. Lookups clone; stored templates are never
/// lent out mutably.
#[derive(Default, Debug)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Npc>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `npc` under `key`, returning the prototype it replaced.
    pub fn register(&mut self, key: impl Into<String>, npc: impl Into<Npc>) -> Option<Npc> {
        let key = key.into();
        let npc = npc.into();
        log::debug!("Registry: '{key}' -> {npc}");
        self.prototypes.insert(key, npc)
    }

    /// Fresh copy of the prototype under `key`, or `None` if unknown.
    pub fn spawn(&self, key: &str) -> Option<Npc> {
        let npc = self.prototypes.get(key).cloned();
        if npc.is_none() {
            log::debug!("Registry: no prototype named '{key}'");
        }
        npc
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
