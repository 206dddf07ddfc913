use parlons_entitlement::{can_access, decide, ContentRequirement, DenyReason, UserAccess};
use parlons_shared::{CefrLevel, SubscriptionTier};

fn user(tier: &str, points: f64) -> UserAccess {
    UserAccess {
        tier: tier.to_string(),
        points,
    }
}

#[test]
fn tier_hierarchy_is_reflexive_and_transitive() {
    for tier in SubscriptionTier::catalog() {
        assert!(can_access(tier.as_ref(), tier.as_ref()));
        assert!(can_access("pro", tier.as_ref()));
    }
    assert!(!can_access("free", "premium"));
}

#[test]
fn account_service_variants_are_absorbed() {
    assert!(can_access("pro", "premium"));
    assert!(can_access("PRO+", "pro"));
    assert!(!can_access("essential", "pro"));
}

#[test]
fn unknown_tier_fails_closed_everywhere() {
    assert!(!can_access("bogus", "FREE"));

    let decision = decide(
        &user("bogus", 1000.0),
        &ContentRequirement {
            required_tier: SubscriptionTier::Free,
            min_level: None,
        },
    );
    assert!(!decision.allowed);
    assert_eq!(decision.reason, Some(DenyReason::Tier));
}

#[test]
fn level_floor_denial_carries_level_reason() {
    let decision = decide(
        &user("free", 50.0),
        &ContentRequirement {
            required_tier: SubscriptionTier::Free,
            min_level: Some(CefrLevel::B1),
        },
    );
    assert!(!decision.allowed);
    assert_eq!(decision.reason, Some(DenyReason::Level));
}

#[test]
fn tier_axis_is_evaluated_before_level_axis() {
    let decision = decide(
        &user("free", 300.0),
        &ContentRequirement {
            required_tier: SubscriptionTier::Premium,
            min_level: None,
        },
    );
    assert!(!decision.allowed);
    assert_eq!(decision.reason, Some(DenyReason::Tier));
}

#[test]
fn decision_serializes_reason_codes_for_upsell_messages() {
    let denied = decide(
        &user("free", 0.0),
        &ContentRequirement {
            required_tier: SubscriptionTier::Pro,
            min_level: None,
        },
    );
    let json = serde_json::to_value(&denied).unwrap();
    assert_eq!(json["allowed"], false);
    assert_eq!(json["reason"], "TIER");

    let allowed = decide(
        &user("pro", 0.0),
        &ContentRequirement {
            required_tier: SubscriptionTier::Free,
            min_level: None,
        },
    );
    let json = serde_json::to_value(&allowed).unwrap();
    assert_eq!(json["allowed"], true);
    assert!(json.get("reason").is_none());
}

#[test]
fn requirement_deserializes_with_optional_min_level() {
    let requirement: ContentRequirement =
        serde_json::from_str(r#"{"requiredTier":"premium"}"#).unwrap();
    assert_eq!(requirement.required_tier, SubscriptionTier::Premium);
    assert_eq!(requirement.min_level, None);

    let requirement: ContentRequirement =
        serde_json::from_str(r#"{"requiredTier":"free","minLevel":"B2"}"#).unwrap();
    assert_eq!(requirement.min_level, Some(CefrLevel::B2));
}

#[test]
fn booking_slot_with_both_gates() {
    // Advanced one-on-one slots require a premium plan and a C1 floor.
    let slot = ContentRequirement {
        required_tier: SubscriptionTier::Premium,
        min_level: Some(CefrLevel::C1),
    };

    assert!(decide(&user("premium", 750.0), &slot).allowed);
    assert_eq!(
        decide(&user("premium", 500.0), &slot).reason,
        Some(DenyReason::Level)
    );
    assert_eq!(
        decide(&user("essential", 750.0), &slot).reason,
        Some(DenyReason::Tier)
    );
}
