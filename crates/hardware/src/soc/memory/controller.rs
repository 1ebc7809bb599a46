//! Request grant policies.
//!
//! The core's memory port is request-granted-or-denied per cycle; the grant
//! policy decides which. `Ideal` grants everything. `FixedWait` makes each
//! distinct request (address plus direction) cold: it is denied
//! `wait_states` times and then granted, with later repeats of the same
//! request served immediately. Tracking progress per request keeps every
//! interleaving of fetch and data traffic live: a retried request always
//! moves closer to its grant no matter what other requests land in between.

use std::collections::HashMap;

/// Decides whether a memory request is granted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GrantPolicy {
    /// Every request is granted immediately.
    #[default]
    Ideal,
    /// Each distinct request is denied `wait_states` times, then granted.
    FixedWait {
        /// Denials before the first grant of a request.
        wait_states: u32,
    },
}

/// Request identity: address plus direction.
type RequestKey = (u32, bool, bool);

/// Stateful grant logic wrapping a [`GrantPolicy`].
#[derive(Clone, Debug, Default)]
pub struct GrantState {
    policy: GrantPolicy,
    remaining: HashMap<RequestKey, u32>,
}

impl GrantState {
    /// Creates grant state for the given policy.
    pub fn new(policy: GrantPolicy) -> Self {
        Self {
            policy,
            remaining: HashMap::new(),
        }
    }

    /// The configured policy.
    pub fn policy(&self) -> GrantPolicy {
        self.policy
    }

    /// Decides one request; call once per request per cycle.
    pub fn grant(&mut self, addr: u32, do_read: bool, do_write: bool) -> bool {
        match self.policy {
            GrantPolicy::Ideal => true,
            GrantPolicy::FixedWait { wait_states } => {
                let left = self
                    .remaining
                    .entry((addr, do_read, do_write))
                    .or_insert(wait_states);
                if *left == 0 {
                    true
                } else {
                    *left -= 1;
                    false
                }
            }
        }
    }
}
