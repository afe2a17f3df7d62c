use shared::{
    domain::{QueryTarget, SpaceField, Submission, SubmitValues},
    error::SubmitError,
};

/// Check the submitted form before any network call. Rules apply in order:
/// the address must be present, a textual space id must parse to a positive
/// integer, and at least one target must remain after parsing. A campaign id
/// wins over a space id when both are filled in.
pub fn validate(values: &SubmitValues) -> Result<Submission, SubmitError> {
    let user_address = values.address.trim();
    if user_address.is_empty() {
        return Err(SubmitError::MissingAddress);
    }

    let space_id = parse_space_id(&values.space_id)?;

    let campaign_id = values.campaign_id.trim();
    let target = if !campaign_id.is_empty() {
        QueryTarget::Campaign(campaign_id.to_string())
    } else if let Some(space_id) = space_id {
        QueryTarget::Space(space_id)
    } else {
        return Err(SubmitError::MissingTarget);
    };

    Ok(Submission {
        user_address: user_address.to_string(),
        target,
    })
}

/// `None` means the field was left empty (or zero, which hosts send for an
/// untouched numeric input); `Err` means it was filled in but unusable.
fn parse_space_id(field: &SpaceField) -> Result<Option<i64>, SubmitError> {
    match field {
        SpaceField::Text(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            match raw.parse::<i64>() {
                // An explicit zero is how an untouched numeric input arrives.
                Ok(0) => Ok(None),
                Ok(id) if id > 0 => Ok(Some(id)),
                _ => Err(SubmitError::MalformedTarget(raw.to_string())),
            }
        }
        SpaceField::Number(0) => Ok(None),
        SpaceField::Number(id) if *id > 0 => Ok(Some(*id)),
        SpaceField::Number(id) => Err(SubmitError::MalformedTarget(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(address: &str, campaign_id: &str, space_id: &str) -> SubmitValues {
        SubmitValues {
            address: address.to_string(),
            campaign_id: campaign_id.to_string(),
            space_id: SpaceField::Text(space_id.to_string()),
        }
    }

    #[test]
    fn missing_address_wins_over_everything_else() {
        let err = validate(&values("", "GC1", "40")).expect_err("should fail");
        assert_eq!(err, SubmitError::MissingAddress);

        let err = validate(&values("   ", "", "not-a-number")).expect_err("should fail");
        assert_eq!(err, SubmitError::MissingAddress);
    }

    #[test]
    fn both_targets_empty_is_missing_target() {
        let err = validate(&values("0xabc", "", "")).expect_err("should fail");
        assert_eq!(err, SubmitError::MissingTarget);
    }

    #[test]
    fn zero_space_id_counts_as_absent() {
        let err = validate(&values("0xabc", "", "0")).expect_err("should fail");
        assert_eq!(err, SubmitError::MissingTarget);

        let submission = validate(&SubmitValues {
            address: "0xabc".into(),
            campaign_id: "GC1".into(),
            space_id: SpaceField::Number(0),
        })
        .expect("valid");
        assert_eq!(submission.target, QueryTarget::Campaign("GC1".into()));
    }

    #[test]
    fn non_numeric_space_id_is_malformed() {
        let err = validate(&values("0xabc", "", "forty")).expect_err("should fail");
        assert_eq!(err, SubmitError::MalformedTarget("forty".into()));
    }

    #[test]
    fn negative_space_id_is_malformed() {
        let err = validate(&values("0xabc", "", "-3")).expect_err("should fail");
        assert_eq!(err, SubmitError::MalformedTarget("-3".into()));
    }

    #[test]
    fn malformed_space_id_rejects_even_with_valid_campaign() {
        let err = validate(&values("0xabc", "GC1", "forty")).expect_err("should fail");
        assert_eq!(err, SubmitError::MalformedTarget("forty".into()));
    }

    #[test]
    fn campaign_takes_precedence_when_both_supplied() {
        let submission = validate(&values("0xabc", "GC1", "40")).expect("valid");
        assert_eq!(submission.target, QueryTarget::Campaign("GC1".into()));
    }

    #[test]
    fn space_path_taken_when_campaign_empty() {
        let submission = validate(&values("0xabc", "", "40")).expect("valid");
        assert_eq!(submission.target, QueryTarget::Space(40));
        assert_eq!(submission.user_address, "0xabc");
    }

    #[test]
    fn numeric_space_field_is_accepted() {
        let submission = validate(&SubmitValues {
            address: "0xabc".into(),
            campaign_id: String::new(),
            space_id: SpaceField::Number(40),
        })
        .expect("valid");
        assert_eq!(submission.target, QueryTarget::Space(40));
    }
}
