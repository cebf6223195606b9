//! Serde support (behind the `serde` feature).
//!
//! By default every quantity serializes as its bare count, in its own unit. The [`serde_with_unit`] helper keeps the
//! unit symbol next to the value for self-describing formats.

use crate::representation::Representation;
use crate::units::length::LengthUnit;
use crate::units::time::TimeUnit;
use crate::{Distance, Duration, Speed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<R: Representation + Serialize, U: LengthUnit> Serialize for Distance<R, U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.count().serialize(serializer)
    }
}

impl<'de, R: Representation + Deserialize<'de>, U: LengthUnit> Deserialize<'de> for Distance<R, U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Distance::new)
    }
}

impl<R: Representation + Serialize, T: TimeUnit> Serialize for Duration<R, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.count().serialize(serializer)
    }
}

impl<'de, R: Representation + Deserialize<'de>, T: TimeUnit> Deserialize<'de> for Duration<R, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Duration::new)
    }
}

impl<R, D, T> Serialize for Speed<R, D, T>
where
    R: Representation + Serialize,
    D: LengthUnit,
    T: TimeUnit,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.count().serialize(serializer)
    }
}

impl<'de, R, D, T> Deserialize<'de> for Speed<R, D, T>
where
    R: Representation + Deserialize<'de>,
    D: LengthUnit,
    T: TimeUnit,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Speed::new)
    }
}

/// Serializes a quantity as `{"value": .., "unit": ".."}`.
///
/// Use it on a field with `#[serde(with = "sipp::serde_with_unit")]`. Works for any [`Quantity`](crate::Quantity).
/// On input the `unit` entry is optional, but when present it must match the field's unit symbol exactly; no
/// conversion is attempted.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use sipp::{Feet, Knots};
///
/// #[derive(Serialize, Deserialize)]
/// struct Clearance {
///     #[serde(with = "sipp::serde_with_unit")]
///     altitude: Feet,
///     #[serde(with = "sipp::serde_with_unit")]
///     speed: Knots,
/// }
///
/// let json = r#"{"altitude":{"value":8000.0,"unit":"ft"},"speed":{"value":250.0,"unit":"NM/h"}}"#;
/// let clearance: Clearance = serde_json::from_str(json).unwrap();
/// assert_eq!(clearance.altitude.count(), 8000.0);
///
/// let wrong = r#"{"altitude":{"value":2438.4,"unit":"m"},"speed":{"value":250.0}}"#;
/// assert!(serde_json::from_str::<Clearance>(wrong).is_err());
/// ```
pub mod serde_with_unit {
    use crate::Quantity;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};

    /// Writes `quantity` as a struct with `value` and `unit` fields.
    pub fn serialize<Q, S>(quantity: &Q, serializer: S) -> Result<S::Ok, S::Error>
    where
        Q: Quantity,
        Q::Rep: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.count())?;
        state.serialize_field("unit", &Q::symbol())?;
        state.end()
    }

    /// Reads a quantity written by [`serialize`], rejecting a mismatching `unit`.
    pub fn deserialize<'de, Q, D>(deserializer: D) -> Result<Q, D::Error>
    where
        Q: Quantity,
        Q::Rep: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<Q>(PhantomData<Q>);

        impl<'de, Q> Visitor<'de> for QuantityVisitor<Q>
        where
            Q: Quantity,
            Q::Rep: Deserialize<'de>,
        {
            type Value = Q;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a quantity with `value` and `unit` fields in {}", Q::symbol())
            }

            fn visit_map<V>(self, mut map: V) -> Result<Q, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<Q::Rep> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                let expected = Q::symbol();
                if let Some(found) = unit {
                    if found != expected {
                        log::debug!("rejected `{}` quantity tagged `{}`", expected, found);
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Q::from_count(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
