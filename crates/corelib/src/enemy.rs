//! Enemy factory: string tag in, freshly built enemy out.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Closed set of tags the factory understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Goblin,
    Troll,
}

impl EnemyKind {
    /// Every constructible kind, in declaration order.
    pub const ALL: [EnemyKind; 2] = [EnemyKind::Goblin, EnemyKind::Troll];

    /// Canonical factory tag.
    pub const fn tag(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "goblin",
            EnemyKind::Troll => "troll",
        }
    }

    pub fn spawn(self) -> Enemy {
        match self {
            EnemyKind::Goblin => Enemy::Goblin,
            EnemyKind::Troll => Enemy::Troll,
        }
    }
}

impl FromStr for EnemyKind {
    type Err = CoreError;

    // Exact match only: "GOBLIN" and " goblin" are rejected.
    fn from_str(tag: &str) -> CoreResult<Self> {
        EnemyKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| CoreError::UnknownEnemyType(tag.to_owned()))
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Stateless enemy value; the variant is its whole identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enemy {
    Goblin,
    Troll,
}

impl Enemy {
    #[inline]
    pub fn kind(&self) -> EnemyKind {
        match self {
            Enemy::Goblin => EnemyKind::Goblin,
            Enemy::Troll => EnemyKind::Troll,
        }
    }

    /// Fixed attack line for this variant. Never empty.
    pub fn attack(&self) -> &'static str {
        match self {
            Enemy::Goblin => "Goblin attacks!",
            Enemy::Troll => "Troll attacks",
        }
    }
}

/// Build the enemy named by `tag`.
///
/// The tag is validated against [`EnemyKind`] before anything is built, so an
/// unknown tag never yields a default enemy.
pub fn create_enemy(tag: &str) -> CoreResult<Enemy> {
    let kind: EnemyKind = tag.parse()?;
    log::debug!("Factory: spawning {kind}");
    Ok(kind.spawn())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_attack_with_fixed_lines() {
        assert_eq!(create_enemy("goblin").unwrap().attack(), "Goblin attacks!");
        assert_eq!(create_enemy("troll").unwrap().attack(), "Troll attacks");
    }

    #[test]
    fn repeated_creation_gives_separate_values() {
        let a = create_enemy("goblin").unwrap();
        let b = create_enemy("goblin").unwrap();
        assert_eq!(a.attack(), b.attack());
        assert!(!std::ptr::eq(&a, &b));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        for tag in ["dragon", "", "GOBLIN", "Troll", " goblin"] {
            assert_eq!(
                create_enemy(tag),
                Err(CoreError::UnknownEnemyType(tag.to_owned())),
                "tag {tag:?} should not build an enemy"
            );
        }
    }

    #[test]
    fn every_kind_round_trips_through_its_tag() {
        for kind in EnemyKind::ALL {
            let parsed: EnemyKind = kind.tag().parse().unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(kind.spawn().kind(), kind);
            assert!(!kind.spawn().attack().is_empty());
        }
    }
}
