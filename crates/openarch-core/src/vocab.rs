//! Vocabulary IRIs for civil-registration graphs
//!
//! `civ:` is the CLARIAH civil-registration vocabulary used by burgerLinker,
//! `schema:` is schema.org.

/// Civil-registration namespace
pub const CIV_NS: &str = "https://iisg.amsterdam/id/civ/";

/// schema.org namespace
pub const SCHEMA_NS: &str = "http://schema.org/";

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

// Event classes
pub const CIV_EVENT: &str = "https://iisg.amsterdam/id/civ/Event";
pub const CIV_BIRTH: &str = "https://iisg.amsterdam/id/civ/Birth";
pub const CIV_DEATH: &str = "https://iisg.amsterdam/id/civ/Death";
pub const CIV_MARRIAGE: &str = "https://iisg.amsterdam/id/civ/Marriage";

// Event properties
pub const CIV_EVENT_LOCATION: &str = "https://iisg.amsterdam/id/civ/eventLocation";
pub const CIV_REGISTRATION_ID: &str = "https://iisg.amsterdam/id/civ/registrationID";
pub const CIV_EVENT_DATE: &str = "https://iisg.amsterdam/id/civ/eventDate";

// Person properties
pub const CIV_PERSON_ID: &str = "https://iisg.amsterdam/id/civ/personID";
pub const CIV_PREFIX_FAMILY_NAME: &str = "https://iisg.amsterdam/id/civ/prefixFamilyName";

// Role properties (event -> person)
pub const CIV_MOTHER: &str = "https://iisg.amsterdam/id/civ/mother";
pub const CIV_FATHER: &str = "https://iisg.amsterdam/id/civ/father";
pub const CIV_NEWBORN: &str = "https://iisg.amsterdam/id/civ/newborn";
pub const CIV_PARTNER: &str = "https://iisg.amsterdam/id/civ/partner";
pub const CIV_DECEASED: &str = "https://iisg.amsterdam/id/civ/deceased";
pub const CIV_BRIDE: &str = "https://iisg.amsterdam/id/civ/bride";
pub const CIV_GROOM: &str = "https://iisg.amsterdam/id/civ/groom";
pub const CIV_FATHER_BRIDE: &str = "https://iisg.amsterdam/id/civ/fatherBride";
pub const CIV_MOTHER_BRIDE: &str = "https://iisg.amsterdam/id/civ/motherBride";
pub const CIV_FATHER_GROOM: &str = "https://iisg.amsterdam/id/civ/fatherGroom";
pub const CIV_MOTHER_GROOM: &str = "https://iisg.amsterdam/id/civ/motherGroom";
pub const CIV_PARTICIPANT: &str = "https://iisg.amsterdam/id/civ/participant";

// schema.org
pub const SCHEMA_PERSON: &str = "http://schema.org/Person";
pub const SCHEMA_GIVEN_NAME: &str = "http://schema.org/givenName";
pub const SCHEMA_FAMILY_NAME: &str = "http://schema.org/familyName";
pub const SCHEMA_GENDER: &str = "http://schema.org/gender";
pub const SCHEMA_HAS_OCCUPATION: &str = "http://schema.org/hasOccupation";

/// Event class for an A2A event type string (exact, case-sensitive)
pub fn event_class(event_type: &str) -> &'static str {
    match event_type {
        "Geboorte" => CIV_BIRTH,
        "Overlijden" => CIV_DEATH,
        "Huwelijk" => CIV_MARRIAGE,
        _ => CIV_EVENT,
    }
}
