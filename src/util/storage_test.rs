use super::*;

#[test]
fn memory_tier_set_get_remove() {
    let tier = MemoryTier::new();
    assert!(tier.is_empty());
    tier.set("k", "v1");
    tier.set("k", "v2");
    assert_eq!(tier.get("k").as_deref(), Some("v2"));
    assert_eq!(tier.get("other"), None);
    tier.remove("k");
    assert!(tier.is_empty());
    tier.remove("k");
}

#[test]
fn browser_tier_constructors_pick_area() {
    assert_eq!(BrowserTier::durable().area, BrowserArea::Local);
    assert_eq!(BrowserTier::ephemeral().area, BrowserArea::Session);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_tier_is_empty_off_browser() {
    let tier = BrowserTier::durable();
    tier.set("k", "v");
    assert_eq!(tier.get("k"), None);
    tier.remove("k");
}
