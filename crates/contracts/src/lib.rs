//! Wire contracts shared between the catalog console and its REST backend.

pub mod domain;
pub mod shared;
pub mod usecases;
