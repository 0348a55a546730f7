//! Integer operations: `sum`, `primes`, `isPrime`.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{UtilError, UtilResult};
use crate::math::{self as helpers, WrappingSum};
use crate::server::OpDefinition;

/// Integer width the `sum` operation accumulates in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    I8,
    I16,
    I32,
    #[default]
    I64,
}

#[derive(Debug, Deserialize)]
pub struct SumParams {
    pub values: Vec<i64>,
    #[serde(default)]
    pub width: Width,
}

#[derive(Debug, Deserialize)]
pub struct PrimesParams {
    pub limit: u64,
}

#[derive(Debug, Deserialize)]
pub struct IsPrimeParams {
    pub n: u64,
}

pub fn definitions() -> Vec<OpDefinition> {
    vec![
        OpDefinition {
            name: "sum".to_owned(),
            description: "Wrapping sum of integers in the given width (default i64).".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "values": { "type": "array", "items": { "type": "integer" } },
                    "width": {
                        "type": "string",
                        "enum": ["i8", "i16", "i32", "i64"],
                        "default": "i64"
                    }
                },
                "required": ["values"]
            }),
        },
        OpDefinition {
            name: "primes".to_owned(),
            description: "All primes up to and including limit.".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": { "type": "integer", "minimum": 0 }
                },
                "required": ["limit"]
            }),
        },
        OpDefinition {
            name: "isPrime".to_owned(),
            description: "Whether n is prime.".to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "n": { "type": "integer", "minimum": 0 }
                },
                "required": ["n"]
            }),
        },
    ]
}

fn invalid(message: String) -> UtilError {
    UtilError::InvalidParams(serde::de::Error::custom(message))
}

fn narrow_sum<T>(values: &[i64]) -> UtilResult<i64>
where
    T: WrappingSum + TryFrom<i64> + Into<i64>,
{
    let narrowed = values
        .iter()
        .map(|&v| {
            T::try_from(v).map_err(|_| {
                invalid(format!(
                    "value {v} out of range for {}",
                    std::any::type_name::<T>()
                ))
            })
        })
        .collect::<UtilResult<Vec<T>>>()?;
    Ok(helpers::sum(&narrowed).into())
}

pub fn sum(arguments: Value) -> UtilResult<Value> {
    let params: SumParams = serde_json::from_value(arguments)?;
    let total = match params.width {
        Width::I8 => narrow_sum::<i8>(&params.values)?,
        Width::I16 => narrow_sum::<i16>(&params.values)?,
        Width::I32 => narrow_sum::<i32>(&params.values)?,
        Width::I64 => helpers::sum(&params.values),
    };
    Ok(json!(total))
}

pub fn primes(max_limit: u64, arguments: Value) -> UtilResult<Value> {
    let params: PrimesParams = serde_json::from_value(arguments)?;
    if params.limit > max_limit {
        return Err(UtilError::LimitExceeded {
            what: "sieve limit",
            value: params.limit,
            max: max_limit,
        });
    }
    Ok(json!(helpers::prime_sieve(params.limit)))
}

pub fn is_prime(arguments: Value) -> UtilResult<Value> {
    let params: IsPrimeParams = serde_json::from_value(arguments)?;
    Ok(json!(helpers::is_prime(params.n)))
}
