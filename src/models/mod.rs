/// Error returned when a string is outside an enumerated field's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value '{value}', expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Closed-vocabulary enum with its wire spelling, `FromStr` and `Display`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            pub const VOCABULARY: &'static [&'static str] = &[$($text),+];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::models::UnknownVariant {
                        value: value.to_string(),
                        expected: Self::VOCABULARY,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use vocabulary;

pub mod maintenance;
pub mod part;

pub use maintenance::{
    MaintenanceDraft, MaintenanceRecord, ServiceCategory, ServiceStatus, ServiceType,
};
pub use part::{Part, PartDraft, PartStatus};
