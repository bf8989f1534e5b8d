/// Role a user holds in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Client,
    Admin,
    Courier,
    #[cfg_attr(feature = "serde", serde(rename = "CEO"))]
    Ceo,
    Operative,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Self::Client,
        Self::Admin,
        Self::Courier,
        Self::Ceo,
        Self::Operative,
    ];

    /// Parse an exact wire name
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// Name used on the wire and in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Admin => "Admin",
            Self::Courier => "Courier",
            Self::Ceo => "CEO",
            Self::Operative => "Operative",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role as stored on a user record.
///
/// Rows written by older clients may carry free text (often `""`) instead of
/// one of the [`Role`] names. Those are kept verbatim so the row still lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRole {
    Known(Role),
    Unrecognized(String),
}

impl UserRole {
    pub fn known(&self) -> Option<Role> {
        match self {
            Self::Known(role) => Some(*role),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(role) => role.as_str(),
            Self::Unrecognized(text) => text,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        Self::Known(role)
    }
}

impl From<String> for UserRole {
    fn from(name: String) -> Self {
        match Role::from_wire(&name) {
            Some(role) => Self::Known(role),
            None => Self::Unrecognized(name),
        }
    }
}

impl PartialEq<Role> for UserRole {
    fn eq(&self, other: &Role) -> bool {
        self.known() == Some(*other)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // null reads as an empty role
        let name = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(name.unwrap_or_default()))
    }
}
