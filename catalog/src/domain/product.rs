//! Rental listing model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listing size. Checklist code in parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    /// `S`
    Small,
    /// `M`
    Medium,
    /// `L`
    Large,
}

impl Size {
    /// All sizes in checklist order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Single-letter checklist value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    /// Parse a checklist value (`S`, `M` or `L`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Listing design style. The checklist value is the label itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Design {
    Modern,
    Classic,
    Minimalist,
}

impl Design {
    /// All designs in checklist order.
    pub const ALL: [Self; 3] = [Self::Modern, Self::Classic, Self::Minimalist];

    /// Display label and checklist value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Classic => "Classic",
            Self::Minimalist => "Minimalist",
        }
    }

    /// Parse a checklist value.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|design| design.label() == label)
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}


/// Brand checklist value; listings carry the label `Brand <code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandCode {
    A,
    B,
    C,
}

impl BrandCode {
    /// All brand codes in checklist order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Checklist value.
    pub fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Brand name as stored on listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "Brand A",
            Self::B => "Brand B",
            Self::C => "Brand C",
        }
    }

    /// Parse a checklist value (`A`, `B` or `C`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|brand| brand.code() == code)
    }
}

/// One rentable item.
///
/// Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub brand: String,
    pub size: Size,
    pub design: Design,
    pub location: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("S", Some(Size::Small))]
    #[case("M", Some(Size::Medium))]
    #[case("L", Some(Size::Large))]
    #[case("XL", None)]
    #[case("s", None)]
    fn size_codes(#[case] code: &str, #[case] expected: Option<Size>) {
        assert_eq!(Size::from_code(code), expected);
    }

    #[rstest]
    fn design_parses_its_label() {
        assert_eq!(Design::from_label("Classic"), Some(Design::Classic));
        assert_eq!(Design::from_label("classic"), None);
    }

    #[rstest]
    fn brand_codes_map_to_labels() {
        let labels: Vec<_> = BrandCode::ALL.iter().map(|brand| brand.label()).collect();
        assert_eq!(labels, ["Brand A", "Brand B", "Brand C"]);
        assert_eq!(BrandCode::from_code("D"), None);
    }
}
