use crate::utils::error::LookupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub code: String,
}

impl LookupRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Canonical lookup result. Only adapters construct it; it is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    code: String,
    state: String,
    city: String,
    provider: String,
}

impl LookupRecord {
    pub fn new(
        code: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            state: state.into(),
            city: city.into(),
            provider: provider.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Provenance label of the provider that produced this record.
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: String,
    pub cause: LookupError,
}

#[derive(Debug)]
pub enum Outcome {
    Success(LookupRecord),
    /// A single adapter's failure; the coordinator never returns it.
    ProviderFailure(ProviderFailure),
    Timeout,
    Exhausted(Vec<ProviderFailure>),
}

impl Outcome {
    pub fn record(&self) -> Option<&LookupRecord> {
        match self {
            Outcome::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::ProviderFailure(_) | Outcome::Exhausted(_) => 1,
            Outcome::Timeout => 2,
        }
    }
}
