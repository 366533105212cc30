//! Civil-registration roles
//!
//! A role is the relation of a person to an event. It comes from the
//! relation list of a record, not from the person list.

use serde::{Deserialize, Serialize};

use crate::vocab;

/// Role of a person in an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Mother,
    Father,
    Child,
    Partner,
    Deceased,
    Bride,
    Groom,
    FatherOfBride,
    MotherOfBride,
    FatherOfGroom,
    MotherOfGroom,
    Other,
}

impl Role {
    /// Parse a relation type with spaces already replaced by underscores
    pub fn from_relation_type(relation_type: &str) -> Self {
        match relation_type {
            "Moeder" => Self::Mother,
            "Vader" => Self::Father,
            "Kind" => Self::Child,
            "Partner" => Self::Partner,
            "Overledene" => Self::Deceased,
            "Bruid" => Self::Bride,
            "Bruidegom" => Self::Groom,
            "Vader_van_de_bruid" => Self::FatherOfBride,
            "Moeder_van_de_bruid" => Self::MotherOfBride,
            "Vader_van_de_bruidegom" => Self::FatherOfGroom,
            "Moeder_van_de_bruidegom" => Self::MotherOfGroom,
            _ => Self::Other,
        }
    }

    /// Property linking the event to a person in this role
    pub fn iri(&self) -> &'static str {
        match self {
            Self::Mother => vocab::CIV_MOTHER,
            Self::Father => vocab::CIV_FATHER,
            Self::Child => vocab::CIV_NEWBORN,
            Self::Partner => vocab::CIV_PARTNER,
            Self::Deceased => vocab::CIV_DECEASED,
            Self::Bride => vocab::CIV_BRIDE,
            Self::Groom => vocab::CIV_GROOM,
            Self::FatherOfBride => vocab::CIV_FATHER_BRIDE,
            Self::MotherOfBride => vocab::CIV_MOTHER_BRIDE,
            Self::FatherOfGroom => vocab::CIV_FATHER_GROOM,
            Self::MotherOfGroom => vocab::CIV_MOTHER_GROOM,
            Self::Other => vocab::CIV_PARTICIPANT,
        }
    }

    /// Gender implied by the role
    pub fn derived_gender(&self) -> Gender {
        match self {
            Self::Mother | Self::Bride | Self::MotherOfBride | Self::MotherOfGroom => {
                Gender::Female
            }
            Self::Father | Self::Groom | Self::FatherOfBride | Self::FatherOfGroom => Gender::Male,
            Self::Child | Self::Partner | Self::Deceased | Self::Other => Gender::Unknown,
        }
    }
}

/// Gender value as written to the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Gender stated explicitly in a record (`Man` / `Vrouw`)
    pub fn from_record(value: &str) -> Option<Self> {
        match value {
            "Man" => Some(Self::Male),
            "Vrouw" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
            Self::Unknown => "?",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
