//! Request/response types for the statistics API

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MathServerError;

/// The statistics supported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Mean,
    Median,
    Mode,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Mean => "mean",
            Operation::Median => "median",
            Operation::Mode => "mode",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = MathServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Operation::Mean),
            "median" => Ok(Operation::Median),
            "mode" => Ok(Operation::Mode),
            other => Err(MathServerError::InvalidOperation {
                name: other.to_string(),
            }),
        }
    }
}

/// Body of `POST /math/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathRequest {
    pub operation: String,
    pub values: Vec<f64>,
}

/// Body of successful `POST /math/` and `GET /math/{operation}` responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathResponse {
    pub operation: String,
    pub result: f64,
}
