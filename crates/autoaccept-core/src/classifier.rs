//! Membership transition classification.

use crate::domain::{MemberStatus, MembershipTransition};

/// Returns true if a user who held some form of membership is now gone.
pub fn is_departure(prior: MemberStatus, new: MemberStatus) -> bool {
    let was_member = matches!(
        prior,
        MemberStatus::Member
            | MemberStatus::Administrator
            | MemberStatus::Owner
            | MemberStatus::Restricted
    );
    let is_gone = matches!(new, MemberStatus::Left | MemberStatus::Banned);
    was_member && is_gone
}

impl MembershipTransition {
    pub fn is_departure(&self) -> bool {
        is_departure(self.prior, self.new)
    }
}
