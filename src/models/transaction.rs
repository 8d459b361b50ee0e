use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A single expense record. The snapshot on disk stores `amount` as a
/// numeric string; older snapshots may carry a bare JSON number instead,
/// and both are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    pub(crate) id: i64,
    #[serde(with = "amount_serde")]
    pub(crate) amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    pub(crate) description: String,
    pub(crate) category: Category,
}

pub(crate) mod amount_serde {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(amount: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&amount.to_string())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(d)? {
            Raw::Text(s) => Decimal::from_str(s.trim()).map_err(serde::de::Error::custom),
            Raw::Number(n) => Decimal::from_f64_retain(n)
                .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {n}"))),
        }
    }
}
