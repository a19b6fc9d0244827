use strum::{IntoStaticStr, VariantArray};

/// Fields of a contact form, in the order violations are reported.
#[derive(VariantArray, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|field| (*field).into()).collect()
    }
}
