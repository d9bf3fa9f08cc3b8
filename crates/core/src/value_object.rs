//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `CommodityGroup { category: "IT", name: "Software" }` is a value object
/// - `ProcurementRequestStored { id: RequestId(...), ... }` is an entity
///
/// ## Immutability
///
/// Value objects should be **immutable** - once created, they don't change. To "modify"
/// a value object, create a new one with the new values. This ensures:
/// - **Thread safety**: Immutable objects are safe to share across threads
/// - **Predictability**: Value objects can't be unexpectedly modified
/// - **Value semantics**: Values behave like primitives (can be copied, compared)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
