//! Identity document data models.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::error::KycError;
use crate::kyc::rules::patterns::INDIVIDUAL_HOLDER_CODE;

/// Kind of identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// National identity card (Aadhaar).
    #[serde(alias = "aadhaar")]
    NationalId,
    /// Tax identity card (PAN).
    #[serde(alias = "pan")]
    TaxId,
    /// Driving license.
    #[serde(alias = "dl")]
    DrivingLicense,
    /// No known document markers.
    Unknown,
}

impl DocumentType {
    /// Document types that have an extractor and a manual validator.
    pub const SUPPORTED: [DocumentType; 3] = [
        DocumentType::NationalId,
        DocumentType::TaxId,
        DocumentType::DrivingLicense,
    ];

    /// Machine-readable name, as used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::TaxId => "tax_id",
            Self::DrivingLicense => "driving_license",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalId => "national ID",
            Self::TaxId => "tax ID",
            Self::DrivingLicense => "driving license",
            Self::Unknown => "document",
        }
    }

    /// Short hint describing the expected document number shape.
    pub fn number_hint(&self) -> &'static str {
        match self {
            Self::NationalId => "expected 12 digits",
            Self::TaxId => "expected e.g. ABCDE1234F",
            Self::DrivingLicense => "expected e.g. MH12 20110012345",
            Self::Unknown => "unsupported document type",
        }
    }

    /// Whether this type has an extractor and manual validator.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Fields the extractor for this type can populate.
    ///
    /// The key set is fixed: a national ID never yields a name or address key.
    pub fn extraction_fields(&self) -> &'static [Field] {
        match self {
            Self::NationalId => &[Field::DocumentNumber, Field::DateOfBirth, Field::Gender],
            Self::TaxId => &[Field::DocumentNumber, Field::Name, Field::DateOfBirth],
            Self::DrivingLicense => &[Field::DocumentNumber, Field::DateOfBirth],
            Self::Unknown => &[],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = KycError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "national_id" | "national-id" | "aadhaar" => Ok(Self::NationalId),
            "tax_id" | "tax-id" | "pan" => Ok(Self::TaxId),
            "driving_license" | "driving-license" | "driving_licence" | "dl" => {
                Ok(Self::DrivingLicense)
            }
            "unknown" => Ok(Self::Unknown),
            _ => Err(KycError::UnsupportedDocumentType(s.to_string())),
        }
    }
}

/// A field that can appear in extracted or manually entered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DocumentNumber,
    Name,
    DateOfBirth,
    Gender,
    Address,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentNumber => "document_number",
            Self::Name => "name",
            Self::DateOfBirth => "date_of_birth",
            Self::Gender => "gender",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values keyed by a fixed, type-specific set of field names.
///
/// Every key is present from construction (absent values serialize as `null`);
/// keys outside the set can never be added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedFields(BTreeMap<Field, Option<String>>);

impl ExtractedFields {
    /// Create an empty mapping with the given key set.
    pub fn with_keys(keys: &[Field]) -> Self {
        Self(keys.iter().map(|k| (*k, None)).collect())
    }

    /// Empty mapping with the key set of a document type's extractor.
    pub fn for_extraction(document_type: DocumentType) -> Self {
        Self::with_keys(document_type.extraction_fields())
    }

    /// Empty mapping with the key set used for manual entry.
    pub fn for_manual_entry() -> Self {
        Self::with_keys(&[
            Field::DocumentNumber,
            Field::Name,
            Field::DateOfBirth,
            Field::Address,
        ])
    }

    /// Set a value. Returns `false` (and changes nothing) if the key is not
    /// part of this mapping's key set.
    pub fn set(&mut self, field: Field, value: Option<String>) -> bool {
        match self.0.get_mut(&field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Value of a field, if present and found.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).and_then(|v| v.as_deref())
    }

    /// Whether the field belongs to this mapping's key set.
    pub fn contains_key(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Field names in this mapping's key set.
    pub fn keys(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Fields that carry a value.
    pub fn found(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
    }

    /// Number of fields that carry a value.
    pub fn found_count(&self) -> usize {
        self.found().count()
    }
}

/// Field values typed in by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualFields {
    /// Document number (required).
    #[serde(default)]
    pub document_number: String,

    /// Holder name.
    #[serde(default)]
    pub name: Option<String>,

    /// Date of birth, DD/MM/YYYY or DD-MM-YYYY.
    #[serde(default, alias = "dob")]
    pub date_of_birth: Option<String>,

    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

impl ManualFields {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = Some(date_of_birth.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The supplied values, echoed as-is into a manual-entry mapping.
    pub fn to_extracted_fields(&self) -> ExtractedFields {
        let mut fields = ExtractedFields::for_manual_entry();
        fields.set(Field::DocumentNumber, Some(self.document_number.clone()));
        fields.set(Field::Name, self.name.clone());
        fields.set(Field::DateOfBirth, self.date_of_birth.clone());
        fields.set(Field::Address, self.address.clone());
        fields
    }
}

/// Holder category encoded in the 4th character of a tax ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxHolderKind {
    Individual,
    Company,
    HinduUndividedFamily,
    Firm,
    AssociationOfPersons,
    Trust,
    BodyOfIndividuals,
    LocalAuthority,
    ArtificialJuridicalPerson,
    Government,
    Unknown(char),
}

impl TaxHolderKind {
    /// Decode the holder category character.
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            INDIVIDUAL_HOLDER_CODE => Self::Individual,
            'C' => Self::Company,
            'H' => Self::HinduUndividedFamily,
            'F' => Self::Firm,
            'A' => Self::AssociationOfPersons,
            'T' => Self::Trust,
            'B' => Self::BodyOfIndividuals,
            'L' => Self::LocalAuthority,
            'J' => Self::ArtificialJuridicalPerson,
            'G' => Self::Government,
            other => Self::Unknown(other),
        }
    }

    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Individual)
    }
}

impl fmt::Display for TaxHolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => f.write_str("individual"),
            Self::Company => f.write_str("company"),
            Self::HinduUndividedFamily => f.write_str("Hindu undivided family"),
            Self::Firm => f.write_str("firm"),
            Self::AssociationOfPersons => f.write_str("association of persons"),
            Self::Trust => f.write_str("trust"),
            Self::BodyOfIndividuals => f.write_str("body of individuals"),
            Self::LocalAuthority => f.write_str("local authority"),
            Self::ArtificialJuridicalPerson => f.write_str("artificial juridical person"),
            Self::Government => f.write_str("government"),
            Self::Unknown(code) => write!(f, "unrecognized holder code '{}'", code),
        }
    }
}

/// A missing or structurally invalid field.
///
/// Findings are collected into a [`ValidationResult`]; they never abort a call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} number not found or invalid format", .0.label())]
    DocumentNumberNotFound(DocumentType),

    #[error("date of birth not found")]
    DateOfBirthNotFound,

    #[error("name not clearly visible")]
    NameNotVisible,

    #[error("tax ID appears to belong to a non-individual entity ({0})")]
    NonIndividualTaxId(TaxHolderKind),

    #[error("invalid {} number format ({})", .0.label(), .0.number_hint())]
    InvalidDocumentNumber(DocumentType),

    #[error("invalid date of birth format (use DD/MM/YYYY or DD-MM-YYYY)")]
    InvalidDateOfBirth,

    /// Recognition produced no characters; extraction was never attempted.
    #[error("unable to extract text from image; ensure the image is clear and readable")]
    NoTextExtracted,
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Coarse quality signal derived from the number of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Medium => f.write_str("Medium"),
            Self::High => f.write_str("High"),
        }
    }
}

/// Outcome of one validation request.
///
/// Built only by the result assembler; `success` always equals
/// `validation_errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub(crate) success: bool,
    pub(crate) document_type: DocumentType,
    pub(crate) extracted_data: ExtractedFields,
    pub(crate) validation_errors: Vec<ValidationError>,
    pub(crate) confidence: ConfidenceLevel,
}

impl ValidationResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn extracted_data(&self) -> &ExtractedFields {
        &self.extracted_data
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }
}
