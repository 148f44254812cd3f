use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of follow-up step labels. Stored and transmitted as the
/// labels the spreadsheet column already contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpStep {
    #[serde(rename = "Paso 1")]
    Step1,
    #[serde(rename = "Paso 2")]
    Step2,
    #[serde(rename = "Paso 3 y 4")]
    Step3And4,
    #[serde(rename = "Paso 5")]
    Step5,
    #[serde(rename = "Paso 6 y 7")]
    Step6And7,
    #[serde(rename = "Paso 8")]
    Step8,
    #[serde(rename = "Paso 9")]
    Step9,
    #[serde(rename = "Paso 10")]
    Step10,
    #[serde(rename = "Paso 11")]
    Step11,
    #[serde(rename = "Paso 12")]
    Step12,
}

impl FollowUpStep {
    pub const ALL: [FollowUpStep; 10] = [
        FollowUpStep::Step1,
        FollowUpStep::Step2,
        FollowUpStep::Step3And4,
        FollowUpStep::Step5,
        FollowUpStep::Step6And7,
        FollowUpStep::Step8,
        FollowUpStep::Step9,
        FollowUpStep::Step10,
        FollowUpStep::Step11,
        FollowUpStep::Step12,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FollowUpStep::Step1 => "Paso 1",
            FollowUpStep::Step2 => "Paso 2",
            FollowUpStep::Step3And4 => "Paso 3 y 4",
            FollowUpStep::Step5 => "Paso 5",
            FollowUpStep::Step6And7 => "Paso 6 y 7",
            FollowUpStep::Step8 => "Paso 8",
            FollowUpStep::Step9 => "Paso 9",
            FollowUpStep::Step10 => "Paso 10",
            FollowUpStep::Step11 => "Paso 11",
            FollowUpStep::Step12 => "Paso 12",
        }
    }
}

impl fmt::Display for FollowUpStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A partial update to a booked slot's follow-up fields. Absent fields are
/// left unchanged; for the step, `null` on the wire clears it while an
/// absent key leaves it alone, hence the doubled option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_reinforcement: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub follow_up_step: Option<Option<FollowUpStep>>,
}

mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
