use super::models::EvaluationReport;
use crate::{
    error::{Result, VsaError},
    intoto_attestation::SHA256_REFERENCE_MARKER,
};

/// Checks an evaluation report for completeness before conversion.
///
/// Reports the first problem found, in field order.
pub fn validate_report(report: &EvaluationReport) -> Result<()> {
    if report.effective_time.is_empty() {
        return Err(VsaError::validation("effective-time is required"));
    }

    if report.components.is_empty() {
        return Err(VsaError::validation("at least one component is required"));
    }

    for (i, component) in report.components.iter().enumerate() {
        if component.name.is_empty() {
            return Err(VsaError::validation(format!(
                "component[{i}]: name is required"
            )));
        }
        if component.image_reference.is_empty() {
            return Err(VsaError::validation(format!(
                "component[{i}]: containerImage is required"
            )));
        }
        if !component.image_reference.contains(SHA256_REFERENCE_MARKER) {
            return Err(VsaError::validation(format!(
                "component[{i}]: containerImage must include sha256 digest"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conforma::models::Component;

    fn component(name: &str, image: &str) -> Component {
        Component {
            name: name.to_owned(),
            image_reference: image.to_owned(),
            success: true,
            ..Default::default()
        }
    }

    fn report(components: Vec<Component>) -> EvaluationReport {
        EvaluationReport {
            success: true,
            components,
            effective_time: "2024-01-15T14:30:00Z".to_owned(),
            ..Default::default()
        }
    }

    fn message(report: &EvaluationReport) -> String {
        validate_report(report).unwrap_err().to_string()
    }

    #[test]
    fn complete_report_passes() {
        let r = report(vec![component("test-app", "quay.io/test/app@sha256:abc123")]);
        assert!(validate_report(&r).is_ok());
    }

    #[test]
    fn missing_effective_time() {
        let mut r = report(vec![component("test-app", "quay.io/test/app@sha256:abc123")]);
        r.effective_time.clear();

        assert_eq!(message(&r), "invalid Conforma input: effective-time is required");
    }

    #[test]
    fn no_components() {
        assert_eq!(
            message(&report(vec![])),
            "invalid Conforma input: at least one component is required"
        );
    }

    #[test]
    fn component_missing_name() {
        let r = report(vec![
            component("ok", "quay.io/test/ok@sha256:abc123"),
            component("", "quay.io/test/app@sha256:abc123"),
        ]);

        assert_eq!(
            message(&r),
            "invalid Conforma input: component[1]: name is required"
        );
    }

    #[test]
    fn component_missing_image() {
        let r = report(vec![component("test-app", "")]);

        assert_eq!(
            message(&r),
            "invalid Conforma input: component[0]: containerImage is required"
        );
    }

    #[test]
    fn component_image_without_digest() {
        let r = report(vec![component("test-app", "quay.io/test/app:latest")]);

        assert_eq!(
            message(&r),
            "invalid Conforma input: component[0]: containerImage must include sha256 digest"
        );
    }

    #[test]
    fn first_problem_wins() {
        let mut r = report(vec![component("", "")]);
        r.effective_time.clear();

        assert_eq!(message(&r), "invalid Conforma input: effective-time is required");
    }
}
