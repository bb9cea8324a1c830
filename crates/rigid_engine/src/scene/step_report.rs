//! Per-step diagnostics

use super::BodyHandle;
use crate::physics::{BodyError, CollisionError};

/// A body pair whose collision test could not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFailure {
    /// Body whose collider was tested
    pub first: BodyHandle,
    /// Body it was tested against
    pub second: BodyHandle,
    /// Why the test failed
    pub error: CollisionError,
}

/// Summary of one [`Scene::step`](super::Scene::step).
///
/// Failures never abort a step; they are collected here and logged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Pairs that were in contact and went through the resolver
    pub contacts_resolved: usize,
    /// Bodies whose integration failed (singular world inertia)
    pub integration_failures: Vec<(BodyHandle, BodyError)>,
    /// Collider pairs with no contact algorithm
    pub unsupported_pairs: Vec<PairFailure>,
}

impl StepReport {
    /// True when nothing failed during the step
    pub fn is_clean(&self) -> bool {
        self.integration_failures.is_empty() && self.unsupported_pairs.is_empty()
    }
}
