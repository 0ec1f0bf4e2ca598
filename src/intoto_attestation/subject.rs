use std::collections::BTreeMap;

use super::{models, DIGEST_SHA256, SHA256_REFERENCE_MARKER};
use crate::error::{Result, VsaError};

/// A subject (artifact) that attestations are made about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Name or identifier of the artifact
    pub name: String,
    /// Map of digest algorithm names to their digest values
    pub digest: BTreeMap<String, String>,
}

impl Subject {
    /// Builds a subject from an image reference of the form
    /// `<name>@sha256:<digest>`.
    ///
    /// The reference must contain the marker exactly once and the digest must
    /// not be empty.
    ///
    /// # Arguments
    /// * `component` - name of the evaluated component, used in the error
    /// * `image_ref` - image reference to split
    ///
    /// # Returns
    /// * `Result<Self>` - Subject with a single sha256 digest, or error naming the component
    pub fn try_from_image_reference(component: &str, image_ref: &str) -> Result<Self> {
        let parts = image_ref.split(SHA256_REFERENCE_MARKER).collect::<Vec<_>>();

        let (name, digest) = match parts.as_slice() {
            [name, digest] if !digest.is_empty() => (*name, *digest),
            _ => {
                return Err(VsaError::Subject {
                    component: component.to_owned(),
                    reference: image_ref.to_owned(),
                })
            }
        };

        Ok(Self {
            name: name.to_owned(),
            digest: super::sha256_digest(digest),
        })
    }

    /// Canonical `name@sha256:digest` reference for this subject.
    ///
    /// A name that already carries an `@` is returned unchanged.
    pub fn resource_uri(&self) -> String {
        if self.name.contains('@') {
            return self.name.clone();
        }

        match self.digest.get(DIGEST_SHA256) {
            Some(digest) => format!("{}{SHA256_REFERENCE_MARKER}{digest}", self.name),
            None => self.name.clone(),
        }
    }
}

impl From<Subject> for models::Subject {
    fn from(subject: Subject) -> Self {
        let Subject { name, digest } = subject;

        Self { name, digest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "a1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456";

    #[test]
    fn image_reference_splits_into_name_and_digest() {
        let subject =
            Subject::try_from_image_reference("app", &format!("quay.io/test/app@sha256:{DIGEST}"))
                .unwrap();

        assert_eq!(subject.name, "quay.io/test/app");
        assert_eq!(subject.digest.get("sha256").map(String::as_str), Some(DIGEST));
        assert_eq!(subject.digest.len(), 1);
    }

    #[test]
    fn image_reference_without_digest_is_rejected() {
        let err = Subject::try_from_image_reference("app", "quay.io/test/app:latest").unwrap_err();
        assert!(matches!(
            err,
            VsaError::Subject { ref component, ref reference }
                if component == "app" && reference == "quay.io/test/app:latest"
        ));
    }

    #[test]
    fn image_reference_with_empty_digest_is_rejected() {
        let err = Subject::try_from_image_reference("app", "quay.io/test/app@sha256:").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to build subject for component app: \
             invalid image reference format: quay.io/test/app@sha256:"
        );
    }

    #[test]
    fn image_reference_with_repeated_marker_is_rejected() {
        assert!(Subject::try_from_image_reference("a", "a@sha256:b@sha256:c").is_err());
    }

    #[test]
    fn resource_uri_joins_name_and_digest() {
        let subject = Subject::try_from_image_reference("app", "quay.io/test/app@sha256:abc").unwrap();
        assert_eq!(subject.resource_uri(), "quay.io/test/app@sha256:abc");
    }

    #[test]
    fn resource_uri_keeps_names_that_already_carry_a_reference() {
        let subject = Subject {
            name: "registry.example.com/app@v1".to_owned(),
            digest: super::super::sha256_digest("abc"),
        };
        assert_eq!(subject.resource_uri(), "registry.example.com/app@v1");
    }
}
