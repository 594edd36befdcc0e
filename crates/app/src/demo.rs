//! Demonstration runners. Each returns the lines `main` prints.

use anyhow::{Context, Result};
use corelib::{Npc, create_enemy};

/// Which demonstration(s) to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Factory,
    Prototype,
    All,
}

impl Demo {
    pub fn runs_factory(self) -> bool {
        matches!(self, Demo::Factory | Demo::All)
    }

    pub fn runs_prototype(self) -> bool {
        matches!(self, Demo::Prototype | Demo::All)
    }
}

/// One attack line per tag, in order. Stops at the first unknown tag.
pub fn factory_demo<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>> {
    tags.iter()
        .map(|tag| {
            let tag = tag.as_ref();
            create_enemy(tag)
                .map(|enemy| enemy.attack().to_owned())
                .with_context(|| format!("Factory demo failed on tag '{tag}'"))
        })
        .collect()
}

/// Clone a goblin, rename the copy, describe both.
pub fn prototype_demo() -> Vec<String> {
    let original = Npc::goblin("Bill", 100);
    let mut copy = original.clone();
    copy.set_name("Ted");
    vec![original.describe(), copy.describe()]
}
