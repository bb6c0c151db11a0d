//! Categorical crop form options.
//!
//! Each field of the crop recommendation form is a small closed set of labels.
//! Labels are what the backend expects on the wire, so every option serializes
//! to (and parses from) its label. Parsing is lenient: surrounding whitespace
//! and letter case are ignored.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

fn match_label<T: Copy>(input: &str, options: &[T], label: impl Fn(T) -> &'static str) -> Option<T> {
    let needle = input.trim().to_lowercase();
    options.iter().copied().find(|o| label(*o).to_lowercase() == needle)
}

macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, default = $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form label of this field.
            pub const FIELD: &'static str = $field;

            /// Wire/display label of this option.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Labels of every option, in display order.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|o| o.label()).collect()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match_label(s, Self::ALL, $name::label).ok_or_else(|| Error::InvalidOption {
                    field: $field,
                    value: s.to_string(),
                    allowed: Self::labels().join(", "),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

form_option! {
    /// Soil type.
    SoilType, "Soil Type", default = Loamy {
        Sandy => "Sandy",
        Loamy => "Loamy",
        Clay => "Clay",
        Black => "Black",
        Red => "Red",
    }
}

form_option! {
    /// Growing season.
    Season, "Season", default = Monsoon {
        Winter => "Winter",
        Summer => "Summer",
        Monsoon => "Monsoon",
    }
}

form_option! {
    /// Expected rainfall.
    RainfallLevel, "Rainfall Level", default = Medium {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

form_option! {
    /// Prevailing weather.
    Weather, "Weather", default = Warm {
        CoolAndDry => "Cool & Dry",
        Warm => "Warm",
        HotAndHumid => "Hot & Humid",
        Sunny => "Sunny",
    }
}

form_option! {
    /// Soil pH band.
    PhRange, "pH Range", default = Neutral {
        Acidic => "Acidic",
        Neutral => "Neutral",
        Alkaline => "Alkaline",
    }
}

/// The crop recommendation form.
///
/// Always fully populated; serializes to the `/api/predict-crop` request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropFormState {
    /// Soil type.
    pub soil_type: SoilType,
    /// Growing season.
    pub season: Season,
    /// Expected rainfall.
    pub rainfall_level: RainfallLevel,
    /// Prevailing weather.
    pub weather: Weather,
    /// Soil pH band.
    pub ph_range: PhRange,
}
