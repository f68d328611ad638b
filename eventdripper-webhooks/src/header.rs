//! Signature header parsing

use crate::{HeaderError, SIGNING_VERSION};
use std::fmt;
use std::str::FromStr;

/// Parsed signature header (`t=<timestamp>,v1=<signature>,...`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeader {
    timestamp: i64,
    signatures: Vec<String>,
}

impl SignedHeader {
    /// Create a header from a timestamp and its signatures
    pub fn new(timestamp: i64, signatures: Vec<String>) -> Self {
        Self {
            timestamp,
            signatures,
        }
    }

    /// Parse a signature header.
    ///
    /// Pairs are `key=value` separated by `,`. The last `t` wins, every
    /// `v1` is kept in order, and unknown keys are ignored so that newer
    /// signature versions can be sent alongside the current one.
    pub fn parse(header: &str) -> Result<Self, HeaderError> {
        if header.is_empty() {
            return Err(HeaderError::Empty);
        }

        let mut timestamp = None;
        let mut signatures = Vec::new();

        for pair in header.split(',') {
            let (key, value) = pair.split_once('=').ok_or(HeaderError::InvalidFormat)?;

            match key {
                "t" => {
                    timestamp = Some(
                        value
                            .parse::<i64>()
                            .map_err(|_| HeaderError::InvalidTimestamp)?,
                    );
                }
                SIGNING_VERSION => signatures.push(value.to_string()),
                _ => {}
            }
        }

        match timestamp {
            Some(timestamp) if !signatures.is_empty() => Ok(Self {
                timestamp,
                signatures,
            }),
            _ => Err(HeaderError::MissingFields),
        }
    }

    /// Signed timestamp, in seconds since the Unix epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Candidate signatures, in header order
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }
}

impl FromStr for SignedHeader {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SignedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.timestamp)?;
        for signature in &self.signatures {
            write!(f, ",{}={}", SIGNING_VERSION, signature)?;
        }
        Ok(())
    }
}
