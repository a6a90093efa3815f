use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Every selectable option, in display order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(format!(
                        "Unknown {}: {}",
                        stringify!($name),
                        s
                    )),
                }
            }
        }
    };
}

// Variant names equal their wire strings, so serde and as_str agree.

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(AlcoholUse {
    None => "None",
    Occasional => "Occasional",
    Moderate => "Moderate",
    Heavy => "Heavy",
});

/// `None` is a concrete answer, not an absence. Fresh forms start there.
impl Default for AlcoholUse {
    fn default() -> Self {
        AlcoholUse::None
    }
}
