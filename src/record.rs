//! Service record types
//!
//! A service is one delivery job: a customer name, the address to pick up
//! from, the address to deliver to, a contact phone and the amount of money
//! to collect. Records live in the `productos` table; drafts are what the
//! operator has typed into the form so far.

use crate::{Error, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    PickupAddress,
    DeliveryAddress,
    Phone,
    Amount,
}

impl Field {
    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::PickupAddress => "Direccion recogida",
            Field::DeliveryAddress => "Direccion entrega",
            Field::Phone => "Celular",
            Field::Amount => "Dinero a recaudar",
        }
    }

    /// All fields in form order
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::PickupAddress,
            Field::DeliveryAddress,
            Field::Phone,
            Field::Amount,
        ]
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" | "nombre" => Ok(Field::Name),
            "pickup" | "recogida" | "direccion1" => Ok(Field::PickupAddress),
            "delivery" | "entrega" | "direccion2" => Ok(Field::DeliveryAddress),
            "phone" | "celular" => Ok(Field::Phone),
            "amount" | "dinero" => Ok(Field::Amount),
            _ => Err(Error::InvalidCommand(format!("Unknown field: {}", s))),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Amount as stored in `Dinero`.
///
/// New writes are always whole numbers. Files written by earlier releases
/// may hold anything the column affinity could not coerce (`"1.500.000"`,
/// `"$100"`, `12.5`); those are kept verbatim so the row still lists and
/// nothing is rounded on the way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Whole(i64),
    Raw(String),
}

impl Amount {
    pub fn as_whole(&self) -> Option<i64> {
        match self {
            Amount::Whole(n) => Some(*n),
            Amount::Raw(_) => None,
        }
    }
}

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Amount::Whole(n)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Whole(n) => write!(f, "{}", n),
            Amount::Raw(text) => write!(f, "{}", text),
        }
    }
}

/// A persisted service record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Engine-assigned primary key, stable for the record's lifetime
    pub id: i64,
    pub name: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub phone: String,
    pub amount: Amount,
}

impl ServiceRecord {
    /// Copy the editable fields back into a draft (used when a row is selected)
    pub fn to_draft(&self) -> ServiceDraft {
        ServiceDraft {
            name: self.name.clone(),
            pickup_address: self.pickup_address.clone(),
            delivery_address: self.delivery_address.clone(),
            phone: self.phone.clone(),
            amount: self.amount.to_string(),
        }
    }
}

/// Validated field values ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub phone: String,
    pub amount: i64,
}

impl NewService {
    pub fn new(
        name: impl Into<String>,
        pickup_address: impl Into<String>,
        delivery_address: impl Into<String>,
        phone: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            name: name.into(),
            pickup_address: pickup_address.into(),
            delivery_address: delivery_address.into(),
            phone: phone.into(),
            amount,
        }
    }
}

/// Raw text of the five inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDraft {
    pub name: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub phone: String,
    pub amount: String,
}

impl ServiceDraft {
    pub fn new(
        name: impl Into<String>,
        pickup_address: impl Into<String>,
        delivery_address: impl Into<String>,
        phone: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pickup_address: pickup_address.into(),
            delivery_address: delivery_address.into(),
            phone: phone.into(),
            amount: amount.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::PickupAddress => &self.pickup_address,
            Field::DeliveryAddress => &self.delivery_address,
            Field::Phone => &self.phone,
            Field::Amount => &self.amount,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::PickupAddress => &mut self.pickup_address,
            Field::DeliveryAddress => &mut self.delivery_address,
            Field::Phone => &mut self.phone,
            Field::Amount => &mut self.amount,
        };
        *slot = value.into();
    }

    /// True when every field holds something
    pub fn is_complete(&self) -> bool {
        Field::all().iter().all(|f| !self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check every field is filled and the amount parses as an integer.
    pub fn validate(&self) -> std::result::Result<NewService, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::MissingFields);
        }

        let amount = parse_amount(&self.amount)?;

        Ok(NewService {
            name: self.name.clone(),
            pickup_address: self.pickup_address.clone(),
            delivery_address: self.delivery_address.clone(),
            phone: self.phone.clone(),
            amount,
        })
    }
}

/// Parse the free-text amount input (surrounding whitespace allowed)
pub fn parse_amount(text: &str) -> std::result::Result<i64, ValidationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidAmount(text.to_string()))
}
