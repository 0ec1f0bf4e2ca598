use std::collections::BTreeMap;

use super::{
    levels::{determine_verified_levels, VerificationResult},
    models::{ResourceDescriptor, Verifier, VsaPredicate, VsaStatement},
    policy::{resolve_policy, PolicyMetadata},
    time::normalize_time,
};
use crate::{
    config::ConversionConfig,
    conforma::{Component, EvaluationReport},
    error::Result,
    intoto_attestation::{sha256_digest, Predicate, PredicateType, Statement, Subject},
};

/// Digest recorded for input attestation references.
///
/// The attestation bundle is not hashed; consumers must treat the entry as a
/// name pointer only.
pub const ATTESTATION_DIGEST_PLACEHOLDER: &str = "computed-from-attestations";

/// Converts a validated evaluation report into a VSA statement.
///
/// # Arguments
/// * `report` - evaluation report that already passed input validation
/// * `config` - normalized conversion options
/// * `policy_metadata` - outcome of loading the supplementary policy metadata, if
///   one was configured; an `Err` there is logged and dropped
///
/// # Returns
/// * `Result<VsaStatement>` - the VSA statement, or error naming the field that could not be derived
pub fn convert(
    report: &EvaluationReport,
    config: &ConversionConfig,
    policy_metadata: Option<Result<PolicyMetadata>>,
) -> Result<VsaStatement> {
    let time_verified = normalize_time(&report.effective_time)?;

    let subject = report
        .components
        .iter()
        .map(|component| {
            let image_ref = config
                .subject_override
                .as_deref()
                .unwrap_or(&component.image_reference);
            Subject::try_from_image_reference(&component.name, image_ref)
        })
        .collect::<Result<Vec<_>>>()?;

    let verification_result = VerificationResult::from_success(report.success);
    let verified_levels = determine_verified_levels(report)
        .iter()
        .map(ToString::to_string)
        .collect();

    let policy = resolve_policy(&report.policy, config, policy_metadata)?;

    // The first subject stands for the whole report.
    let resource_uri = subject
        .first()
        .map(Subject::resource_uri)
        .unwrap_or_default();

    let predicate = VsaPredicate {
        verifier: Verifier {
            id: config.verifier_id.clone(),
            version: verifier_version(report, config),
        },
        time_verified,
        resource_uri,
        policy,
        input_attestations: input_attestations(&report.components),
        verification_result: verification_result.to_string(),
        verified_levels,
        dependency_levels: BTreeMap::new(),
    };

    log::debug!(
        "converted {} component(s), result {verification_result}",
        subject.len()
    );

    let statement = Statement {
        subject,
        predicate: Predicate {
            predicate_type: PredicateType::VerificationSummary,
            predicate,
        },
    };

    Ok(statement.into())
}

fn input_attestations(components: &[Component]) -> Vec<ResourceDescriptor> {
    components
        .iter()
        .filter(|component| !component.attestations.is_empty())
        .map(|component| ResourceDescriptor {
            uri: format!("{}-attestations", component.name),
            digest: Some(sha256_digest(ATTESTATION_DIGEST_PLACEHOLDER)),
        })
        .collect()
}

fn verifier_version(report: &EvaluationReport, config: &ConversionConfig) -> String {
    report
        .tool_version
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(&config.verifier_version)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        conforma::{AttestationRef, Policy, PolicySource, Violation},
        error::VsaError,
    };

    const DIGEST: &str = "a1b2c3d4e5f6789012345678901234567890abcdef1234567890abcdef123456";

    fn component(name: &str) -> Component {
        Component {
            name: name.to_owned(),
            image_reference: format!("quay.io/test/{name}@sha256:{DIGEST}"),
            success: true,
            ..Default::default()
        }
    }

    fn report(components: Vec<Component>) -> EvaluationReport {
        EvaluationReport {
            success: true,
            components,
            policy: Policy {
                sources: vec![PolicySource {
                    policy: vec!["oci://registry.example.com/p@sha256:abc123".to_owned()],
                }],
                ..Default::default()
            },
            tool_version: Some("v0.4.1".to_owned()),
            effective_time: "2024-01-15T14:30:00-05:00".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn successful_conversion() {
        let vsa = convert(&report(vec![component("app")]), &ConversionConfig::default(), None)
            .unwrap();

        assert_eq!(vsa.type_, "https://in-toto.io/Statement/v1");
        assert_eq!(
            vsa.predicate.predicate_type,
            "https://slsa.dev/verification_summary/v1"
        );
        assert_eq!(vsa.subject.len(), 1);
        assert_eq!(vsa.subject[0].name, "quay.io/test/app");

        let p = &vsa.predicate.predicate;
        assert_eq!(p.verifier.id, ConversionConfig::DEFAULT_VERIFIER_ID);
        assert_eq!(p.verifier.version, "v0.4.1");
        assert_eq!(p.time_verified, "2024-01-15T19:30:00Z");
        assert_eq!(p.resource_uri, format!("quay.io/test/app@sha256:{DIGEST}"));
        assert_eq!(p.policy.uri, "oci://registry.example.com/p@sha256:abc123");
        assert_eq!(p.verification_result, "PASSED");
        assert_eq!(p.verified_levels, vec!["SLSA_BUILD_LEVEL_3".to_owned()]);
        assert!(p.input_attestations.is_empty());
        assert!(p.dependency_levels.is_empty());
    }

    #[test]
    fn failed_report_has_no_levels() {
        let mut r = report(vec![component("app")]);
        r.success = false;

        let vsa = convert(&r, &ConversionConfig::default(), None).unwrap();

        assert_eq!(vsa.predicate.predicate.verification_result, "FAILED");
        assert!(vsa.predicate.predicate.verified_levels.is_empty());
    }

    #[test]
    fn violations_keep_result_but_drop_levels() {
        let mut c = component("app");
        c.violations.push(Violation {
            rule: "tasks.required".to_owned(),
            message: "missing task".to_owned(),
        });

        let vsa = convert(&report(vec![c]), &ConversionConfig::default(), None).unwrap();

        assert_eq!(vsa.predicate.predicate.verification_result, "PASSED");
        assert!(vsa.predicate.predicate.verified_levels.is_empty());
    }

    #[test]
    fn invalid_time_aborts_conversion() {
        let mut r = report(vec![component("app")]);
        r.effective_time = "invalid-time".to_owned();

        let err = convert(&r, &ConversionConfig::default(), None).unwrap_err();
        assert!(matches!(err, VsaError::TimeFormat(_)));
        assert_eq!(
            err.to_string(),
            "failed to parse effective-time: unsupported time format: invalid-time"
        );
    }

    #[test]
    fn subject_override_replaces_every_component_reference() {
        let config = ConversionConfig {
            subject_override: Some(format!("quay.io/override/app@sha256:{DIGEST}")),
            ..Default::default()
        };

        let vsa = convert(&report(vec![component("a"), component("b")]), &config, None).unwrap();

        assert_eq!(vsa.subject.len(), 2);
        assert!(vsa.subject.iter().all(|s| s.name == "quay.io/override/app"));
        assert_eq!(
            vsa.predicate.predicate.resource_uri,
            format!("quay.io/override/app@sha256:{DIGEST}")
        );
    }

    #[test]
    fn malformed_override_aborts_whole_run() {
        let config = ConversionConfig {
            subject_override: Some("quay.io/override/app:latest".to_owned()),
            ..Default::default()
        };

        let err = convert(&report(vec![component("app")]), &config, None).unwrap_err();
        assert!(matches!(
            err,
            VsaError::Subject { ref reference, .. } if reference == "quay.io/override/app:latest"
        ));
    }

    #[test]
    fn empty_digest_in_any_component_aborts_whole_run() {
        let mut broken = component("b");
        broken.image_reference = "quay.io/test/b@sha256:".to_owned();

        let err = convert(
            &report(vec![component("a"), broken]),
            &ConversionConfig::default(),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to build subject for component b: \
             invalid image reference format: quay.io/test/b@sha256:"
        );
    }

    #[test]
    fn first_subject_is_the_resource() {
        let vsa = convert(
            &report(vec![component("first"), component("second")]),
            &ConversionConfig::default(),
            None,
        )
        .unwrap();

        assert_eq!(
            vsa.predicate.predicate.resource_uri,
            format!("quay.io/test/first@sha256:{DIGEST}")
        );
        assert_eq!(vsa.subject[1].name, "quay.io/test/second");
    }

    #[test]
    fn attestations_are_referenced_per_component() {
        let mut with = component("with");
        with.attestations.push(AttestationRef {
            type_: "https://in-toto.io/Statement/v0.1".to_owned(),
            predicate_type: "https://slsa.dev/provenance/v0.2".to_owned(),
        });

        let vsa = convert(
            &report(vec![with, component("without")]),
            &ConversionConfig::default(),
            None,
        )
        .unwrap();

        let refs = &vsa.predicate.predicate.input_attestations;
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].uri, "with-attestations");
        assert_eq!(
            refs[0].digest,
            Some(sha256_digest("computed-from-attestations"))
        );
    }

    #[test]
    fn config_version_is_the_fallback() {
        let mut r = report(vec![component("app")]);
        r.tool_version = Some("".to_owned());
        let config = ConversionConfig {
            verifier_version: "v9.9.9".to_owned(),
            ..Default::default()
        };

        let vsa = convert(&r, &config, None).unwrap();
        assert_eq!(vsa.predicate.predicate.verifier.version, "v9.9.9");

        r.tool_version = None;
        let vsa = convert(&r, &config, None).unwrap();
        assert_eq!(vsa.predicate.predicate.verifier.version, "v9.9.9");
    }

    #[test]
    fn missing_policy_aborts_conversion() {
        let mut r = report(vec![component("app")]);
        r.policy = Policy::default();

        let err = convert(&r, &ConversionConfig::default(), None).unwrap_err();
        assert!(matches!(err, VsaError::PolicyRequired));
    }

    #[test]
    fn conversion_is_deterministic() {
        let r = report(vec![component("a"), component("b")]);
        let config = ConversionConfig::default();

        assert_eq!(
            convert(&r, &config, None).unwrap(),
            convert(&r, &config, None).unwrap()
        );
    }
}
