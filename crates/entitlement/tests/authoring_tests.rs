use parlons_entitlement::{scope_for, scope_for_name};
use parlons_shared::{AuthoringError, CefrLevel, StaffRole, SubscriptionTier};

#[test]
fn scopes_widen_with_seniority() {
    let roles = StaffRole::catalog();
    for pair in roles.windows(2) {
        let junior = scope_for(pair[0]);
        let senior = scope_for(pair[1]);
        for level in &junior.allowed_levels {
            assert!(
                senior.allows_level(*level),
                "{} must cover every level {} can author",
                pair[1],
                pair[0]
            );
        }
        for tier in &junior.allowed_tiers {
            assert!(senior.allows_tier(*tier));
        }
        assert!(
            senior.allowed_levels.len() > junior.allowed_levels.len()
                || senior.allowed_tiers.len() > junior.allowed_tiers.len()
        );
    }
}

#[test]
fn unknown_role_resolves_to_contributor_scope() {
    let scope = scope_for_name("moderator");
    assert_eq!(scope, scope_for(StaffRole::Contributor));
    assert!(!scope.allowed_levels.is_empty());
    assert!(!scope.allowed_tiers.is_empty());
}

#[test]
fn role_names_are_case_insensitive() {
    assert_eq!(scope_for_name("ADMIN"), scope_for(StaffRole::Admin));
    assert_eq!(scope_for_name("Editor"), scope_for(StaffRole::Editor));
}

#[test]
fn publish_form_rejects_out_of_scope_selection() {
    let scope = scope_for_name("contributor");

    assert_eq!(
        scope.validate_selection(
            &[CefrLevel::A2, CefrLevel::B2],
            &[SubscriptionTier::Free]
        ),
        Err(AuthoringError::LevelOutOfScope(CefrLevel::B2))
    );

    assert_eq!(
        scope.validate_selection(&[CefrLevel::A2], &[SubscriptionTier::Premium]),
        Err(AuthoringError::TierOutOfScope(SubscriptionTier::Premium))
    );

    assert_eq!(
        scope.validate_selection(&[CefrLevel::A1, CefrLevel::B1], &[SubscriptionTier::Essential]),
        Ok(())
    );
}

#[test]
fn admin_can_publish_for_everything() {
    let scope = scope_for(StaffRole::Admin);
    assert_eq!(
        scope.validate_selection(CefrLevel::catalog(), SubscriptionTier::catalog()),
        Ok(())
    );
}
