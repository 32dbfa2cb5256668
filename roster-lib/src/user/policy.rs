use crate::auth::Identity;
use roster_repo::user_repo::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    View,
    Edit,
    Delete,
}

/// Authorization rules for user records. Only evaluated for authenticated
/// requesters; a denial is reported to the caller exactly like a missing target.
pub fn is_granted(identity: &Identity, action: UserAction, target: UserId) -> bool {
    match action {
        UserAction::View | UserAction::Edit => identity.is_root() || identity.user_id == target,
        UserAction::Delete => identity.is_root(),
    }
}
