use roster_states::{State, state_assign_impl};
use std::any::Any;
use ustr::Ustr;

/// Endpoint serving the full member list as a JSON array.
pub const MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub members_url: Ustr,
}

impl BusinessConfig {
    pub fn new(members_url: impl AsRef<str>) -> Self {
        Self {
            members_url: Ustr::from(members_url.as_ref()),
        }
    }

    pub fn members_url(&self) -> &str {
        self.members_url.as_str()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(MEMBERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_members_endpoint() {
        let config = BusinessConfig::default();
        assert_eq!(config.members_url(), MEMBERS_URL);
    }

    #[test]
    fn new_overrides_endpoint() {
        let config = BusinessConfig::new("http://127.0.0.1:4000/members.json");
        assert_eq!(config.members_url(), "http://127.0.0.1:4000/members.json");
    }
}
