//! Option declarations and resolution for the PAYDAY 3 plugin.
//!
//! The host hands the plugin a JSON object keyed by option key. Missing
//! keys fall back to their declared defaults.
use crate::constants::{
    OPT_DLC_OWNED, OPT_INCLUDE_OVERKILL, OPT_LOUD_WEIGHT, OPT_STEALTH_WEIGHT, OPT_WEIGHTING,
    WEIGHT_DEFAULT, WEIGHT_RANGE_END, WEIGHT_RANGE_START,
};
use crate::dlc::{Dlc, DlcOwned};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving option values.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{key} must be between {min} and {max} (got {value})")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },
    #[error("{key} declares an empty range ({start} > {end})")]
    InvalidRange {
        key: &'static str,
        start: u32,
        end: u32,
    },
    #[error("unknown weighting mode {0:?} (expected \"configured\" or \"fixed\")")]
    UnknownWeighting(String),
}

/// How template weights are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Loud and stealth weights come from their range options.
    #[default]
    Configured,
    /// Loud 3, stealth 1; the range options are ignored.
    Fixed,
}

impl Weighting {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Configured => "configured",
            Self::Fixed => "fixed",
        }
    }

    /// Parse a weighting key.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownWeighting`] for anything other than
    /// `configured` or `fixed`.
    pub fn parse(raw: &str) -> Result<Self, OptionsError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "configured" => Ok(Self::Configured),
            "fixed" => Ok(Self::Fixed),
            _ => Err(OptionsError::UnknownWeighting(raw.to_string())),
        }
    }
}

/// Integer option bounded by an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeOption {
    #[serde(skip)]
    key: &'static str,
    range_start: u32,
    range_end: u32,
    value: u32,
}

impl RangeOption {
    /// Build a range option holding `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or `value` falls outside it.
    pub fn new(
        key: &'static str,
        range_start: u32,
        range_end: u32,
        value: i64,
    ) -> Result<Self, OptionsError> {
        if range_start > range_end {
            return Err(OptionsError::InvalidRange {
                key,
                start: range_start,
                end: range_end,
            });
        }
        let in_range = u32::try_from(value)
            .ok()
            .filter(|v| (range_start..=range_end).contains(v));
        let Some(value) = in_range else {
            return Err(OptionsError::OutOfRange {
                key,
                value,
                min: range_start,
                max: range_end,
            });
        };
        Ok(Self {
            key,
            range_start,
            range_end,
            value,
        })
    }

    fn weight(key: &'static str, value: i64) -> Result<Self, OptionsError> {
        Self::new(key, WEIGHT_RANGE_START, WEIGHT_RANGE_END, value)
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn bounds(&self) -> (u32, u32) {
        (self.range_start, self.range_end)
    }
}

/// Raw toggle input; hosts send either booleans or 0/1.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum ToggleValue {
    Bool(bool),
    Int(i64),
}

impl ToggleValue {
    const fn enabled(self) -> bool {
        match self {
            Self::Bool(flag) => flag,
            Self::Int(n) => n != 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawOptions {
    #[serde(default, rename = "payday_3_include_overkill")]
    include_overkill: Option<ToggleValue>,
    #[serde(default, rename = "payday_3_dlc_owned")]
    dlc_owned: Option<DlcOwned>,
    #[serde(default, rename = "payday_3_stealth_weight")]
    stealth_weight: Option<i64>,
    #[serde(default, rename = "payday_3_loud_weight")]
    loud_weight: Option<i64>,
    #[serde(default, rename = "payday_3_weighting")]
    weighting: Option<String>,
}

/// Resolved option values for one plugin instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payday3Options {
    #[serde(rename = "payday_3_include_overkill")]
    include_overkill: bool,
    #[serde(rename = "payday_3_dlc_owned")]
    dlc_owned: DlcOwned,
    #[serde(rename = "payday_3_stealth_weight", serialize_with = "serialize_range")]
    stealth_weight: RangeOption,
    #[serde(rename = "payday_3_loud_weight", serialize_with = "serialize_range")]
    loud_weight: RangeOption,
    #[serde(rename = "payday_3_weighting")]
    weighting: Weighting,
}

fn serialize_range<S: serde::Serializer>(
    range: &RangeOption,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(range.value())
}

impl Default for Payday3Options {
    fn default() -> Self {
        let weight = RangeOption {
            key: OPT_STEALTH_WEIGHT,
            range_start: WEIGHT_RANGE_START,
            range_end: WEIGHT_RANGE_END,
            value: WEIGHT_DEFAULT,
        };
        Self {
            include_overkill: false,
            dlc_owned: DlcOwned::all(),
            stealth_weight: weight,
            loud_weight: RangeOption {
                key: OPT_LOUD_WEIGHT,
                ..weight
            },
            weighting: Weighting::Configured,
        }
    }
}

impl Payday3Options {
    /// Resolve options from a JSON object keyed by option key.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a weight is out of range,
    /// or the weighting mode is unknown.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let raw: RawOptions = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Resolve options from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Payday3Options::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        let raw: RawOptions = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawOptions) -> Result<Self, OptionsError> {
        let defaults = Self::default();
        let stealth_weight = match raw.stealth_weight {
            Some(value) => RangeOption::weight(OPT_STEALTH_WEIGHT, value)?,
            None => defaults.stealth_weight,
        };
        let loud_weight = match raw.loud_weight {
            Some(value) => RangeOption::weight(OPT_LOUD_WEIGHT, value)?,
            None => defaults.loud_weight,
        };
        let weighting = match raw.weighting.as_deref() {
            Some(key) => Weighting::parse(key)?,
            None => defaults.weighting,
        };
        Ok(Self {
            include_overkill: raw
                .include_overkill
                .map_or(defaults.include_overkill, ToggleValue::enabled),
            dlc_owned: raw.dlc_owned.unwrap_or(defaults.dlc_owned),
            stealth_weight,
            loud_weight,
            weighting,
        })
    }

    #[must_use]
    pub const fn with_overkill(mut self, include_overkill: bool) -> Self {
        self.include_overkill = include_overkill;
        self
    }

    #[must_use]
    pub fn with_dlc_owned(mut self, dlc_owned: DlcOwned) -> Self {
        self.dlc_owned = dlc_owned;
        self
    }

    #[must_use]
    pub const fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Replace both configured weights.
    ///
    /// # Errors
    ///
    /// Returns an error if either weight is outside `0..=100`.
    pub fn with_weights(mut self, loud: u32, stealth: u32) -> Result<Self, OptionsError> {
        self.loud_weight = RangeOption::weight(OPT_LOUD_WEIGHT, i64::from(loud))?;
        self.stealth_weight = RangeOption::weight(OPT_STEALTH_WEIGHT, i64::from(stealth))?;
        Ok(self)
    }

    #[must_use]
    pub const fn include_overkill(&self) -> bool {
        self.include_overkill
    }

    #[must_use]
    pub const fn dlc_owned(&self) -> &DlcOwned {
        &self.dlc_owned
    }

    #[must_use]
    pub fn has_dlc(&self, dlc: Dlc) -> bool {
        self.dlc_owned.contains(dlc)
    }

    #[must_use]
    pub const fn stealth_weight(&self) -> u32 {
        self.stealth_weight.value()
    }

    #[must_use]
    pub const fn loud_weight(&self) -> u32 {
        self.loud_weight.value()
    }

    #[must_use]
    pub const fn weighting(&self) -> Weighting {
        self.weighting
    }
}

/// Shape of a declared option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionKind {
    Toggle {
        default: bool,
    },
    Range {
        range_start: u32,
        range_end: u32,
        default: u32,
    },
    Set {
        valid_keys: Vec<&'static str>,
        default: Vec<&'static str>,
    },
    Choice {
        choices: Vec<&'static str>,
        default: &'static str,
    },
}

/// One entry of the option schema the plugin publishes to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDef {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: OptionKind,
}

/// Declared options, in the order hosts should present them.
#[must_use]
pub fn option_schema() -> Vec<OptionDef> {
    let dlc_keys: Vec<&'static str> = Dlc::ALL.into_iter().map(Dlc::label).collect();
    let weight = OptionKind::Range {
        range_start: WEIGHT_RANGE_START,
        range_end: WEIGHT_RANGE_END,
        default: WEIGHT_DEFAULT,
    };
    vec![
        OptionDef {
            key: OPT_INCLUDE_OVERKILL,
            display_name: "PAYDAY 3 Include Overkill",
            description: "If toggled, will add Overkill to the Difficulty pool for Objectives",
            kind: OptionKind::Toggle { default: false },
        },
        OptionDef {
            key: OPT_DLC_OWNED,
            display_name: "PAYDAY 3 DLC Owned",
            description: "Adds DLC Heists into the Heist pool for Objectives",
            kind: OptionKind::Set {
                valid_keys: dlc_keys.clone(),
                default: dlc_keys,
            },
        },
        OptionDef {
            key: OPT_STEALTH_WEIGHT,
            display_name: "PAYDAY 3 Stealth Weight",
            description: "Determines the weight of Stealth objectives",
            kind: weight.clone(),
        },
        OptionDef {
            key: OPT_LOUD_WEIGHT,
            display_name: "PAYDAY 3 Loud Weight",
            description: "Determines the weight of Loud objectives",
            kind: weight,
        },
        OptionDef {
            key: OPT_WEIGHTING,
            display_name: "PAYDAY 3 Weighting",
            description: "configured uses the Stealth/Loud weights; fixed uses Loud 3, Stealth 1",
            kind: OptionKind::Choice {
                choices: vec![Weighting::Configured.key(), Weighting::Fixed.key()],
                default: Weighting::Configured.key(),
            },
        },
    ]
}
