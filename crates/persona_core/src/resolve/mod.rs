//! Champion name resolution

pub mod alias;
pub mod canon;
pub mod resolver;

pub use alias::{alias_target, aliases};
pub use canon::canonicalize;
pub use resolver::{resolve_champion, resolve_champion_id, MatchMethod, Resolution};
