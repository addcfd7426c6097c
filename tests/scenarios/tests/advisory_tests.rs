use mandi_common::advisory::{
    fair_price_shield, reasoning, safe_minimum, MarketOutlook, PriceGuidance, Severity,
};
use mandi_common::commodity::Commodity;
use mandi_common::price::{FixtureError, PriceBook};
use mandi_scenarios::price_book;

#[test]
fn every_commodity_has_an_ordered_quote() {
    let book = price_book();
    for commodity in Commodity::ALL {
        let r = book.get(commodity);
        assert!(
            r.minimum <= r.modal && r.modal <= r.maximum,
            "{commodity}: {} / {} / {}",
            r.minimum,
            r.modal,
            r.maximum
        );
        assert!(r.change_percent.is_finite());
    }
}

#[test]
fn shield_boundaries_on_tomato() {
    let book = price_book();
    let tomato = book.get(Commodity::Tomato);
    assert_eq!(safe_minimum(tomato), 28);

    let at_floor = fair_price_shield(tomato, Some(28));
    assert!(!at_floor.show_warning());
    assert_eq!(at_floor.recommendation(), None);

    let just_below = fair_price_shield(tomato, Some(27));
    assert_eq!(just_below.severity(), Some(Severity::Medium));

    // Exactly three below the floor is still medium.
    let gap = fair_price_shield(tomato, Some(25));
    assert_eq!(gap.severity(), Some(Severity::Medium));

    let far_below = fair_price_shield(tomato, Some(24));
    assert_eq!(far_below.severity(), Some(Severity::High));
    assert_eq!(far_below.message(), "Buyer offer is below safe mandi rate.");
    assert_eq!(
        far_below.recommendation().as_deref(),
        Some("Recommended minimum: ₹28/kg.")
    );
}

#[test]
fn shield_without_offer_is_advice_only() {
    let book = price_book();
    let shield = fair_price_shield(book.get(Commodity::Tomato), None);
    assert!(!shield.show_warning());
    assert_eq!(shield.severity(), None);
    assert_eq!(
        shield.message(),
        "Never sell below ₹28/kg - AI protects your earnings."
    );
}

#[test]
fn shield_floor_uses_modal_margin_when_higher() {
    let book = price_book();
    let wheat = book.get(Commodity::Wheat);
    assert_eq!(safe_minimum(wheat), 2210);
    assert_eq!(
        fair_price_shield(wheat, Some(2207)).severity(),
        Some(Severity::Medium)
    );
    assert_eq!(
        fair_price_shield(wheat, Some(2206)).severity(),
        Some(Severity::High)
    );
    assert!(fair_price_shield(wheat, Some(2210)).message().contains("₹2210/quintal"));
}

#[test]
fn reasoning_branches_across_the_fixture() {
    let book = price_book();
    let text = |c| reasoning(book.get(c));

    let onion = text(Commodity::Onion);
    assert!(onion.contains("prices falling"), "{onion}");
    assert!(onion.contains("-3.2%"), "{onion}");

    let potato = text(Commodity::Potato);
    assert!(potato.contains("steady demand"), "{potato}");
    assert!(potato.contains("+0.8%"), "{potato}");

    let tomato = text(Commodity::Tomato);
    assert_eq!(
        tomato,
        "Market avg ₹32/kg, strong demand (+8.5%), good time to sell."
    );

    let wheat = text(Commodity::Wheat);
    assert!(wheat.contains("₹2215/quintal"), "{wheat}");
    assert!(wheat.contains("demand high"), "{wheat}");
    assert!(wheat.contains("trending up"), "{wheat}");

    assert!(matches!(
        MarketOutlook::classify(book.get(Commodity::Chillies)),
        MarketOutlook::Falling
    ));
    assert!(matches!(
        MarketOutlook::classify(book.get(Commodity::Banana)),
        MarketOutlook::Steady
    ));
    assert!(matches!(
        MarketOutlook::classify(book.get(Commodity::Bhindi)),
        MarketOutlook::StrongDemand
    ));
}

#[test]
fn guidance_brackets_the_modal_price() {
    let book = price_book();
    let guidance = PriceGuidance::for_record(book.get(Commodity::Tomato));
    assert_eq!((guidance.floor, guidance.opening), (30, 33));
}

#[test]
fn broken_fixtures_are_rejected() {
    assert!(matches!(PriceBook::from_json("{"), Err(FixtureError::Parse(_))));

    let mut doc: serde_json::Value =
        serde_json::from_str(include_str!("../../../common/fixtures/prices.json")).unwrap();
    let banana = doc.as_object_mut().unwrap().remove("banana").unwrap();
    assert!(matches!(
        PriceBook::from_json(&doc.to_string()),
        Err(FixtureError::Missing(Commodity::Banana))
    ));

    doc["banana"] = banana;
    doc["onion"]["modal"] = 40.into();
    assert!(matches!(
        PriceBook::from_json(&doc.to_string()),
        Err(FixtureError::PriceOrder {
            commodity: Commodity::Onion,
            ..
        })
    ));
}
