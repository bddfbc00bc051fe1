use async_trait::async_trait;
use tokio::process::Command;

/// Answers "does this account belong to this group" against some directory of
/// accounts. The only authorization signal in the system.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupMembershipProvider: Send + Sync {
    /// Returns true iff `principal` is a member of `group` (case-insensitive
    /// group-name match). Lookup failures are logged and reported as
    /// non-membership; a directory outage never grants access.
    async fn is_member(&self, principal: &str, group: &str) -> bool;
}

/// Membership lookups against the host account database via `id -Gn`, which
/// goes through NSS and therefore covers local groups as well as
/// directory-backed ones (SSSD, LDAP, AD via winbind).
pub struct HostGroupMembershipProvider;

impl HostGroupMembershipProvider {
    pub fn new() -> Self {
        Self
    }

    async fn lookup_groups(&self, principal: &str) -> std::io::Result<Vec<String>> {
        let output = Command::new("id").arg("-Gn").arg(principal).output().await?;

        if !output.status.success() {
            return Err(std::io::Error::other(format!(
                "id exited with {} for account '{}'",
                output.status, principal
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }
}

impl Default for HostGroupMembershipProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupMembershipProvider for HostGroupMembershipProvider {
    async fn is_member(&self, principal: &str, group: &str) -> bool {
        match self.lookup_groups(principal).await {
            Ok(groups) => groups.iter().any(|g| g.eq_ignore_ascii_case(group)),
            Err(err) => {
                log::warn!(
                    "group lookup failed for '{}', treating as non-member: {}",
                    principal,
                    err
                );
                false
            }
        }
    }
}
