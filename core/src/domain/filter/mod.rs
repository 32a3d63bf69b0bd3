//! Declarative filter-to-query translation.
//!
//! A back-office list screen describes what it wants as plain data: a list of
//! [`FilterDescriptor`](value_objects::FilterDescriptor)s, sort descriptors, a
//! page request and the columns it needs facet counts for. This module turns
//! that description into predicates on any [`Queryable`](ports::Queryable),
//! runs them through a [`CollectionRepository`](ports::CollectionRepository)
//! and folds the facet projections into value counts.
//!
//! Entities only declare a [`ColumnTable`](columns::ColumnTable); everything
//! else is shared.

pub mod columns;
pub mod entities;
pub mod logging;
pub mod operators;
pub mod ports;
pub mod services;
pub mod value_objects;
pub mod values;

#[cfg(test)]
pub(crate) mod test_support;
