use uuid::Uuid;

/// Longest id `short_id` can produce (a v4 UUID in simple form).
pub const MAX_ID_LENGTH: usize = 32;

/// Returns a random lowercase alphanumeric string of `len` characters.
///
/// Only unique within the lifetime of a single board; callers that need a
/// guarantee check against the ids they already hold.
pub(crate) fn short_id(len: usize) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    raw[..len.min(MAX_ID_LENGTH)].to_string()
}

/// Declares a string-backed identifier newtype.
///
/// Every constructor stores the string verbatim. An empty id is a placeholder
/// (the `Default`) that board validation rejects once it reaches the tree.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Default,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a random id of `len` characters
            pub fn generate(len: usize) -> Self {
                Self($crate::domain::id::short_id(len))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

pub(crate) use string_id;
