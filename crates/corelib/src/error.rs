//! Library error type shared by the patterns in this crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The factory was asked for a tag outside `EnemyKind::ALL`.
    #[error("unknown enemy type: '{0}'")]
    UnknownEnemyType(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_enemy_message_names_the_tag() {
        let err = CoreError::UnknownEnemyType("dragon".to_owned());
        assert_eq!(err.to_string(), "unknown enemy type: 'dragon'");
    }
}
