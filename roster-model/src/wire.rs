//! Response envelopes returned by the users backend

/// Body returned by the create endpoint: `{"Status": "true", "Message": "..."}`.
///
/// `Status` shows up both as a string and as a JSON boolean depending on the
/// backend build, so both are accepted. A missing `Status` reads as rejected.
/// Keys may also arrive lowercase; when both spellings are present the
/// capitalized one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawCreateUserResponse"))]
pub struct CreateUserResponse {
    pub accepted: bool,
    pub message: Option<String>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCreateUserResponse {
    #[serde(rename = "Status", default, deserialize_with = "status_flag::deserialize")]
    status: Option<bool>,
    #[serde(rename = "status", default, deserialize_with = "status_flag::deserialize")]
    status_lower: Option<bool>,
    #[serde(rename = "Message", default)]
    message: Option<String>,
    #[serde(rename = "message", default)]
    message_lower: Option<String>,
}

#[cfg(feature = "serde")]
impl From<RawCreateUserResponse> for CreateUserResponse {
    fn from(raw: RawCreateUserResponse) -> Self {
        Self {
            accepted: raw.status.or(raw.status_lower).unwrap_or(false),
            message: raw.message.or(raw.message_lower),
        }
    }
}

#[cfg(feature = "serde")]
mod status_flag {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Flag(bool),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Option::<RawStatus>::deserialize(deserializer)? {
            Some(RawStatus::Flag(flag)) => Some(flag),
            Some(RawStatus::Text(text)) => {
                Some(text.trim().eq_ignore_ascii_case("true"))
            }
            None => None,
        })
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn string_status_is_accepted() {
        let body: CreateUserResponse =
            serde_json::from_str(r#"{"Status":"true","Message":"User added"}"#)
                .unwrap();
        assert!(body.accepted);
        assert_eq!(body.message.as_deref(), Some("User added"));
    }

    #[test]
    fn boolean_and_lowercase_variants_are_accepted() {
        let body: CreateUserResponse =
            serde_json::from_str(r#"{"status":false,"message":"duplicate"}"#)
                .unwrap();
        assert!(!body.accepted);
        assert_eq!(body.message.as_deref(), Some("duplicate"));
    }

    #[test]
    fn missing_status_reads_as_rejected() {
        let body: CreateUserResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.accepted);
        assert!(body.message.is_none());
    }

    #[test]
    fn both_key_spellings_prefer_capitalized() {
        let body: CreateUserResponse = serde_json::from_str(
            r#"{"Status":"true","status":false,"Message":"User added","message":"ignored"}"#,
        )
        .unwrap();
        assert!(body.accepted);
        assert_eq!(body.message.as_deref(), Some("User added"));
    }
}
