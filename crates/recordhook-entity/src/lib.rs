//! # recordhook-entity
//!
//! [`Entity`] owns field state, an identity key and two hook chains, and
//! exposes a single guarded mutation: [`Entity::update`]. Concrete entity
//! types embed an `Entity` and register their own hooks when constructed;
//! [`Person`] is one such type.

pub mod entity;
pub mod person;

pub use entity::{Entity, UpdatePhase};
pub use person::Person;
