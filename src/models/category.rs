use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::errors::VocabularyError;

/// Fixed expense vocabulary, exactly as it appears in the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Savings,
    Pakistan,
    Others,
    Misc,
    Food,
    Grocery,
    TaxiTransport,
    CarLease,
    HouseRent,
    TollParking,
    UtilitiesHousing,
    GeneralShopping,
    OnlineShopping,
    Fuel,
    TravelEntertainment,
    CreditCardRepayment
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Savings,
        Category::Pakistan,
        Category::Others,
        Category::Misc,
        Category::Food,
        Category::Grocery,
        Category::TaxiTransport,
        Category::CarLease,
        Category::HouseRent,
        Category::TollParking,
        Category::UtilitiesHousing,
        Category::GeneralShopping,
        Category::OnlineShopping,
        Category::Fuel,
        Category::TravelEntertainment,
        Category::CreditCardRepayment
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Savings => "Savings",
            Category::Pakistan => "Pakistan",
            Category::Others => "Others",
            Category::Misc => "Misc.",
            Category::Food => "Food",
            Category::Grocery => "Grocery",
            Category::TaxiTransport => "Taxi & Transport",
            Category::CarLease => "Car lease",
            Category::HouseRent => "House rent",
            Category::TollParking => "Toll & Parking",
            Category::UtilitiesHousing => "Utilities & Housing",
            Category::GeneralShopping => "General Shopping",
            Category::OnlineShopping => "Online shopping",
            Category::Fuel => "Fuel",
            Category::TravelEntertainment => "Travel & Entertainment",
            Category::CreditCardRepayment => "Credit Card Repayment"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabularyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| VocabularyError::Category(value.to_string()))
    }
}
