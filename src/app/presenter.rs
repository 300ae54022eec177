use crate::domain::model::Outcome;
use crate::domain::ports::Presenter;
use std::io::Write;

pub const TIMEOUT_MESSAGE: &str = "Request timeout";
pub const EXHAUSTED_MESSAGE: &str = "No provider returned a result for this CEP";

/// Renders one human-readable line per outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present<W: Write>(&self, outcome: &Outcome, out: &mut W) -> std::io::Result<()> {
        match outcome {
            Outcome::Success(record) => writeln!(
                out,
                "Fastest API response is: {}, city: {}, state: {}, CEP: {}",
                record.provider(),
                record.city(),
                record.state(),
                record.code()
            ),
            Outcome::Timeout => writeln!(out, "{}", TIMEOUT_MESSAGE),
            Outcome::Exhausted(_) => writeln!(out, "{}", EXHAUSTED_MESSAGE),
            Outcome::ProviderFailure(failure) => {
                writeln!(out, "{}", failure.cause.user_friendly_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LookupRecord, ProviderFailure};
    use crate::utils::error::LookupError;

    fn render(outcome: &Outcome) -> String {
        let mut buffer = Vec::new();
        ConsolePresenter.present(outcome, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_success_line_names_provider_and_fields() {
        let outcome = Outcome::Success(LookupRecord::new("01001000", "SP", "São Paulo", "BrasilCep"));
        assert_eq!(
            render(&outcome),
            "Fastest API response is: BrasilCep, city: São Paulo, state: SP, CEP: 01001000\n"
        );
    }

    #[test]
    fn test_timeout_and_exhausted_messages_differ() {
        let exhausted = Outcome::Exhausted(vec![ProviderFailure {
            provider: "ViaCep".to_string(),
            cause: LookupError::Status {
                provider: "ViaCep".to_string(),
                status: 502,
            },
        }]);

        assert_eq!(render(&Outcome::Timeout), "Request timeout\n");
        assert_eq!(render(&exhausted), format!("{}\n", EXHAUSTED_MESSAGE));
    }
}
