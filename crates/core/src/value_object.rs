//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. The
/// dashboard view-models (snapshots, badges, presentation rows) are all value
/// objects: they are rebuilt on every load and two equal rows are
/// interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Badge { icon: BadgeIcon, tone: BadgeTone }
///
/// impl ValueObject for Badge {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
