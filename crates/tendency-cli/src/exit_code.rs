//! Process exit codes.

use tendency_core::PipelineError;

/// Exit status of the `tendency` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Unexpected = 1,
    Input = 2,
    Schema = 3,
    JoinEmpty = 4,
    Config = 5,
    Output = 6,
}

impl CliExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Map a pipeline failure to its exit status.
///
/// Membership errors come from configured breakpoints, so they exit as
/// configuration errors.
pub fn exit_code_for_error(err: &PipelineError) -> CliExitCode {
    match err {
        PipelineError::Config(_) | PipelineError::Membership(_) => CliExitCode::Config,
        PipelineError::Input(_) => CliExitCode::Input,
        PipelineError::Schema(_) => CliExitCode::Schema,
        PipelineError::JoinEmpty { .. } => CliExitCode::JoinEmpty,
        PipelineError::Output(_) => CliExitCode::Output,
        PipelineError::Unexpected(_) => CliExitCode::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tendency_core::errors::{InputError, MembershipError, SchemaError};

    #[test]
    fn every_error_family_has_a_distinct_code() {
        let input = PipelineError::from(InputError::FileNotFound { path: "a.csv".into() });
        let schema = PipelineError::from(SchemaError::MissingColumn {
            column: "c".into(),
            table: "t".into(),
        });
        let membership = PipelineError::from(MembershipError::EmptyUniverse { min: 1.0, max: 0.0 });
        let empty = PipelineError::JoinEmpty {
            system: "a".into(),
            reference: "b".into(),
        };

        assert_eq!(exit_code_for_error(&input).code(), 2);
        assert_eq!(exit_code_for_error(&schema).code(), 3);
        assert_eq!(exit_code_for_error(&empty).code(), 4);
        assert_eq!(exit_code_for_error(&membership).code(), 5);
        assert_eq!(
            exit_code_for_error(&PipelineError::Unexpected("boom".into())),
            CliExitCode::Unexpected
        );
    }
}
