/// A (partial) Brazilian postal address.
///
/// Every field is optional. A field that is present but empty
/// is treated the same way as a missing one.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// Street name (logradouro)
    pub street       : Option<String>,
    /// House number (numero), `S/N` if there is none
    pub number       : Option<String>,
    /// Neighborhood (bairro)
    pub neighborhood : Option<String>,
    pub city         : Option<String>,
    /// Federal unit (UF), e.g. `SP`
    pub state        : Option<String>,
    /// Postal code (CEP)
    pub zip          : Option<String>,
    pub country      : Option<String>,
}

/// Placeholder for addresses without a house number ("sem número").
pub const NO_NUMBER: &str = "S/N";

impl Address {
    /// A copy of this address without street and number.
    pub fn without_street_and_number(&self) -> Self {
        Self {
            street: None,
            number: None,
            ..self.clone()
        }
    }
}

/// Returns the field value unless it is missing or empty.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
