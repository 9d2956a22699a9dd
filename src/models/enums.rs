use crate::db::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidValue {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SymptomState {
    Present => "present",
    Absent => "absent",
});

impl SymptomState {
    /// Observation from a binary input (checked / unchecked).
    pub fn from_observed(observed: bool) -> Self {
        if observed {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// 1 for present, 0 for absent. Used by the matrix view.
    pub fn as_bit(&self) -> u8 {
        match self {
            Self::Present => 1,
            Self::Absent => 0,
        }
    }
}

str_enum!(EntityKind {
    Disease => "diseases",
    Group => "symptom_groups",
    Symptom => "symptoms",
    Value => "disease_symptoms",
});
