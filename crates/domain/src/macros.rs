//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Roles and other small enums travel as lowercase strings on the wire and in
//! configuration. This macro writes both directions once.
//!
//! # Example
//!
//! ```rust
//! use atrium_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum AccountState {
//!     Invited,
//!     Active,
//!     Suspended,
//! }
//!
//! impl_domain_enum_conversions!(AccountState {
//!     Invited => "invited",
//!     Active => "active",
//!     Suspended => "suspended",
//! });
//!
//! assert_eq!("ACTIVE".parse::<AccountState>(), Ok(AccountState::Active));
//! ```

/// Implements Display and FromStr for an enum with fixed string names
///
/// Parsing is case-insensitive and ignores surrounding whitespace; output is
/// always the lowercase form given in the mapping.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Theme {
        Light,
        Dark,
        System,
    }

    impl_domain_enum_conversions!(Theme {
        Light => "light",
        Dark => "dark",
        System => "system",
    });

    #[test]
    fn display_uses_mapped_names() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::System.to_string(), "system");
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(Theme::from_str("DARK").unwrap(), Theme::Dark);
        assert_eq!(Theme::from_str("  System ").unwrap(), Theme::System);
    }

    #[test]
    fn unknown_names_are_rejected_with_enum_name() {
        let err = Theme::from_str("sepia").unwrap_err();
        assert_eq!(err, "Invalid Theme: sepia");
        assert!(Theme::from_str("").is_err());
    }
}
