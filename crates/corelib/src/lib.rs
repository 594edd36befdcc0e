//! Core types: enemy factory, NPC prototypes, shared error.

pub mod enemy;
pub mod error;
pub mod npc;

pub use enemy::{Enemy, EnemyKind, create_enemy};
pub use error::{CoreError, CoreResult};
pub use npc::{Goblin, Monster, Npc, PrototypeRegistry};
