use serde::{Serialize, Deserialize};
use strum::{AsRefStr as StrumAsRefStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    StrumAsRefStr,
    Serialize, Deserialize
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Fellow,
    Host,
    Speaker,
}

impl Role {
    /// the one-time-code purpose tag this role's signup flow uses
    pub fn purpose(&self) -> Purpose {
        match self {
            Role::Fellow => Purpose::SignupFellow,
            Role::Host => Purpose::SignupHost,
            Role::Speaker => Purpose::SignupSpeaker,
        }
    }

    pub fn from_str(given: &str) -> Option<Role> {
        match given {
            "fellow" => Some(Role::Fellow),
            "host" => Some(Role::Host),
            "speaker" => Some(Role::Speaker),
            _ => None
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_ref(), f)
    }
}

/// distinguishes which flow an outstanding one-time-code challenge belongs
/// to. at most one active challenge per (contact, purpose) pair is
/// meaningful; resending invalidates the previous code
#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    StrumAsRefStr,
    Serialize, Deserialize
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    SignupFellow,
    SignupHost,
    SignupSpeaker,
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_ref(), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn purpose_tags() {
        assert_eq!(Role::Fellow.purpose().as_ref(), "signup_fellow");
        assert_eq!(Role::Host.purpose().as_ref(), "signup_host");
        assert_eq!(Role::Speaker.purpose().as_ref(), "signup_speaker");
    }

    #[test]
    fn role_strings() {
        assert_eq!(Role::from_str("host"), Some(Role::Host));
        assert_eq!(Role::from_str("admin"), None);
        assert_eq!(Role::Speaker.as_ref(), "speaker");
    }
}
