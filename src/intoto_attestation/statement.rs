use super::{models, predicate::Predicate, subject::Subject};

pub(crate) const STATEMENT_TYPE_URI: &str = "https://in-toto.io/Statement/v1";

/// An in-toto statement representing an attestation about software artifacts.
///
/// Contains one or more subjects (artifacts) and a predicate (claim) about them.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<P> {
    /// List of subjects (artifacts) this statement refers to
    pub subject: Vec<Subject>,
    /// The predicate (claim) being made about the subjects
    pub predicate: Predicate<P>,
}

impl<P> From<Statement<P>> for models::Statement<P> {
    fn from(statement: Statement<P>) -> Self {
        let Statement { subject, predicate } = statement;

        let subject = subject.into_iter().map(Into::into).collect();
        let predicate = predicate.into();

        Self {
            type_: STATEMENT_TYPE_URI.to_owned(),
            subject,
            predicate,
        }
    }
}
