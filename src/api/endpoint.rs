/// Endpoint URLs for the two supported lookup kinds.
///
/// See <https://github.com/blackducksoftware/ohloh_api> for the upstream API.
use std::str::FromStr;

use super::errors::ApiError;

/// Fixed host for all OpenHub API requests.
const BASE_URL: &str = "https://www.openhub.net";

/// The two kinds of lookup the OpenHub API client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A tracked open-source codebase entry.
    Project,
    /// A tracked contributor/user entry.
    Account,
}

impl Kind {
    /// Path segment for this kind: `p` for projects, `accounts` for accounts.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Project => "p",
            Self::Account => "accounts",
        }
    }
}

impl FromStr for Kind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "account" => Ok(Self::Account),
            other => Err(ApiError::UnsupportedKind {
                kind: other.to_owned(),
            }),
        }
    }
}

/// Build the info URL for `kind` and `id`.
///
/// Plain substitution: `id` and `api_key` are not percent-encoded, so callers
/// must not pass values containing URL metacharacters.
#[must_use]
pub fn info_url(kind: Kind, id: &str, api_key: &str) -> String {
    format!("{BASE_URL}/{}/{id}.xml?api_key={api_key}", kind.path_segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url() {
        let url = info_url(Kind::Project, "my-project", "k3y");
        assert_eq!(url, "https://www.openhub.net/p/my-project.xml?api_key=k3y");
    }

    #[test]
    fn test_account_url() {
        let url = info_url(Kind::Account, "alice", "k3y");
        assert_eq!(url, "https://www.openhub.net/accounts/alice.xml?api_key=k3y");
    }

    #[test]
    fn test_url_carries_id_key_and_segment() {
        for (kind, segment) in [(Kind::Project, "/p/"), (Kind::Account, "/accounts/")] {
            let url = info_url(kind, "some-id", "secret");
            assert!(url.contains("some-id"));
            assert!(url.contains("api_key=secret"));
            assert!(url.contains(segment));
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("project".parse::<Kind>().unwrap(), Kind::Project);
        assert_eq!("account".parse::<Kind>().unwrap(), Kind::Account);
    }

    #[test]
    fn test_unsupported_kind_rejected() {
        let err = "organization".parse::<Kind>().unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedKind { kind } if kind == "organization"));
    }
}
