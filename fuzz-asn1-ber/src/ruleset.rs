//! Encoding ruleset selection
//!
//! Callers ask for "a random value of type X" through [`EncodingRuleset`]
//! without knowing which concrete ruleset is active. [`Ruleset`] is the closed
//! set of rulesets this crate ships, chosen by name at startup.

use crate::ber::{BerEncoding, BerOptions};
use crate::content::ContentGenerator;
use fuzz_asn1_core::{EncodedValue, FuzzError, FuzzResult, UniversalType};
use std::fmt;
use std::str::FromStr;

/// One random-value operation per supported ASN.1 universal type
///
/// Every call is independent: it consumes entropy and returns a fresh value.
pub trait EncodingRuleset: Send + Sync {
    /// Lower-case ruleset name
    fn name(&self) -> &'static str;

    fn random_boolean(&self) -> FuzzResult<EncodedValue>;
    fn random_integer(&self) -> FuzzResult<EncodedValue>;
    fn random_bit_string(&self) -> FuzzResult<EncodedValue>;
    fn random_octet_string(&self) -> FuzzResult<EncodedValue>;
    fn random_null(&self) -> FuzzResult<EncodedValue>;
    fn random_object_identifier(&self) -> FuzzResult<EncodedValue>;
    fn random_real(&self) -> FuzzResult<EncodedValue>;
    fn random_enumerated(&self) -> FuzzResult<EncodedValue>;
    fn random_numeric_string(&self) -> FuzzResult<EncodedValue>;
    fn random_printable_string(&self) -> FuzzResult<EncodedValue>;
    fn random_ia5_string(&self) -> FuzzResult<EncodedValue>;

    /// Generate a value of `ty` through the matching operation
    fn generate(&self, ty: UniversalType) -> FuzzResult<EncodedValue> {
        match ty {
            UniversalType::Boolean => self.random_boolean(),
            UniversalType::Integer => self.random_integer(),
            UniversalType::BitString => self.random_bit_string(),
            UniversalType::OctetString => self.random_octet_string(),
            UniversalType::Null => self.random_null(),
            UniversalType::ObjectIdentifier => self.random_object_identifier(),
            UniversalType::Real => self.random_real(),
            UniversalType::Enumerated => self.random_enumerated(),
            UniversalType::NumericString => self.random_numeric_string(),
            UniversalType::PrintableString => self.random_printable_string(),
            UniversalType::Ia5String => self.random_ia5_string(),
        }
    }
}

/// Names of the rulesets that can be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulesetKind {
    Ber,
}

impl RulesetKind {
    pub const ALL: [RulesetKind; 1] = [RulesetKind::Ber];

    pub fn as_str(self) -> &'static str {
        match self {
            RulesetKind::Ber => "ber",
        }
    }
}

impl fmt::Display for RulesetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RulesetKind {
    type Err = FuzzError;

    /// Case-insensitive; unknown names are an error, never a default.
    fn from_str(s: &str) -> FuzzResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FuzzError::UnknownRuleset(s.to_string()))
    }
}

/// A constructed ruleset, ready to generate values
#[derive(Debug, Clone)]
pub enum Ruleset {
    Ber(BerEncoding),
}

impl Ruleset {
    pub fn new(kind: RulesetKind, options: BerOptions, content: ContentGenerator) -> Self {
        match kind {
            RulesetKind::Ber => Ruleset::Ber(BerEncoding::new(content, options)),
        }
    }

    /// Select a ruleset by case-insensitive name
    ///
    /// # Errors
    /// `FuzzError::UnknownRuleset` if no ruleset has that name.
    pub fn from_name(name: &str, options: BerOptions, content: ContentGenerator) -> FuzzResult<Self> {
        let kind = name.parse::<RulesetKind>()?;
        Ok(Self::new(kind, options, content))
    }

    pub fn kind(&self) -> RulesetKind {
        match self {
            Ruleset::Ber(_) => RulesetKind::Ber,
        }
    }

    fn inner(&self) -> &dyn EncodingRuleset {
        match self {
            Ruleset::Ber(ber) => ber,
        }
    }
}

impl EncodingRuleset for Ruleset {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn random_boolean(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_boolean()
    }

    fn random_integer(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_integer()
    }

    fn random_bit_string(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_bit_string()
    }

    fn random_octet_string(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_octet_string()
    }

    fn random_null(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_null()
    }

    fn random_object_identifier(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_object_identifier()
    }

    fn random_real(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_real()
    }

    fn random_enumerated(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_enumerated()
    }

    fn random_numeric_string(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_numeric_string()
    }

    fn random_printable_string(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_printable_string()
    }

    fn random_ia5_string(&self) -> FuzzResult<EncodedValue> {
        self.inner().random_ia5_string()
    }
}
