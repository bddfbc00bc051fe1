pub mod membership;
pub mod middleware;
pub mod principal;
pub mod resolver;

pub use membership::{GroupMembershipProvider, HostGroupMembershipProvider};
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use principal::Principal;
pub use resolver::{PrincipalResolver, TrustedHeaderResolver};
