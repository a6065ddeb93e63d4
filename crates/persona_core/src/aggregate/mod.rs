//! Team-level aggregation

pub mod aggregator;
pub mod composition;

pub use aggregator::{aggregate_team, RoleAggregator, TeamAggregate, EASING_EXPONENT, TEAM_SIZE};
pub use composition::{composition_nudge, infer_class_tag, CompositionCount, FieldNudge};
