use std::fmt;

use log::debug;

use crate::errors::{EncodingError, LookupKey, Result};

/// Numeric code stored in simulation state arrays.
pub type Code = i32;

/// Closed set of environmental states with numeric codes and aliases.
///
/// Values and aliases are unique within each implementor. That is checked
/// while the crate compiles, so a lookup finds at most one member.
pub trait Encoding: Copy + Eq + fmt::Debug + 'static {
    /// Name of the enumeration, used in error messages.
    const ENCODING: &'static str;

    /// Members in declaration order.
    const MEMBERS: &'static [Self];

    fn value(self) -> Code;

    /// Symbolic identifier, e.g. `HOLM_OAK`.
    fn name(self) -> &'static str;

    /// Human-readable form used when serializing.
    fn alias(self) -> &'static str;

    fn members() -> impl Iterator<Item = Self> {
        Self::MEMBERS.iter().copied()
    }

    fn from_value(value: Code) -> Result<Self> {
        Self::members()
            .find(|member| member.value() == value)
            .ok_or_else(|| not_found::<Self>(LookupKey::Value(value)))
    }

    fn from_alias(alias: &str) -> Result<Self> {
        Self::members()
            .find(|member| member.alias() == alias)
            .ok_or_else(|| not_found::<Self>(LookupKey::Alias(alias.into())))
    }

    fn from_name(name: &str) -> Result<Self> {
        Self::members()
            .find(|member| member.name() == name)
            .ok_or_else(|| not_found::<Self>(LookupKey::Name(name.into())))
    }
}

fn not_found<E: Encoding>(key: LookupKey) -> EncodingError {
    debug!("no member in {} with {key}", E::ENCODING);
    EncodingError::NotFound {
        encoding: E::ENCODING,
        key,
    }
}

pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

/// Wire an enum with inherent `ALL`, `value`, `name` and `alias` items into
/// [`Encoding`] and the conversion, formatting and serde traits.
///
/// Fails constant evaluation if two members share a value, name or alias.
macro_rules! impl_encoding {
    ($ty:ident) => {
        impl $crate::encoding::Encoding for $ty {
            const ENCODING: &'static str = stringify!($ty);
            const MEMBERS: &'static [Self] = &$ty::ALL;

            fn value(self) -> $crate::encoding::Code {
                $ty::value(self)
            }

            fn name(self) -> &'static str {
                $ty::name(self)
            }

            fn alias(self) -> &'static str {
                $ty::alias(self)
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($ty::alias(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::errors::EncodingError;

            fn from_str(s: &str) -> $crate::errors::Result<Self> {
                <$ty as $crate::encoding::Encoding>::from_alias(s)
            }
        }

        impl ::std::convert::TryFrom<$crate::encoding::Code> for $ty {
            type Error = $crate::errors::EncodingError;

            fn try_from(value: $crate::encoding::Code) -> $crate::errors::Result<Self> {
                <$ty as $crate::encoding::Encoding>::from_value(value)
            }
        }

        impl ::std::convert::From<$ty> for $crate::encoding::Code {
            fn from(value: $ty) -> Self {
                $ty::value(value)
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($ty::alias(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let alias = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::encoding::Encoding>::from_alias(&alias)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }

        const _: () = {
            let members = $ty::ALL;
            let mut i = 0;
            while i < members.len() {
                let mut j = i + 1;
                while j < members.len() {
                    let (a, b) = (members[i], members[j]);
                    assert!(a.value() != b.value(), "duplicate encoding value");
                    assert!(
                        !$crate::encoding::str_eq(a.alias(), b.alias()),
                        "duplicate encoding alias"
                    );
                    assert!(
                        !$crate::encoding::str_eq(a.name(), b.name()),
                        "duplicate encoding name"
                    );
                    j += 1;
                }
                i += 1;
            }
        };
    };
}

pub(crate) use impl_encoding;
