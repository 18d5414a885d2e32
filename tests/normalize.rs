use heritage_classifier::{normalize, percent, CraftLabel, RankedEntry, RawPrediction};

fn raw(class: CraftLabel, confidence: f32) -> RawPrediction {
    RawPrediction {
        class,
        confidence,
        top3: None,
    }
}

#[test]
fn normalization_is_pure_and_idempotent() {
    let input = raw(CraftLabel::Tapis, 0.66);
    let first = normalize(&input, &CraftLabel::ALL).expect("normalize");
    let second = normalize(&input, &CraftLabel::ALL).expect("normalize");
    assert_eq!(first, second);
}

#[test]
fn top1_is_preserved_when_ranking_is_absent() {
    for label in CraftLabel::ALL {
        let input = raw(label, 0.42);
        let result = normalize(&input, &CraftLabel::ALL).expect("normalize");
        assert_eq!(result.ranking[0], RankedEntry::new(label, 0.42));
        assert_eq!(result.top, result.ranking[0]);
    }
}

#[test]
fn synthesis_is_deterministic_with_fixed_multipliers() {
    let input = raw(CraftLabel::Bijoux, 0.80);
    let result = normalize(&input, &CraftLabel::ALL).expect("normalize");

    assert_eq!(result.ranking.len(), 3);
    assert_eq!(result.ranking[0].class, CraftLabel::Bijoux);
    assert_eq!(result.ranking[0].confidence, 0.80);
    // Others come from enumeration order with bijoux removed.
    assert_eq!(result.ranking[1].class, CraftLabel::Babouche);
    assert_eq!(result.ranking[1].confidence, 0.80 * 0.35);
    assert_eq!(result.ranking[2].class, CraftLabel::Poterie);
    assert_eq!(result.ranking[2].confidence, 0.80 * 0.15);

    assert!((result.ranking[1].confidence - 0.28).abs() < 1e-6);
    assert!((result.ranking[2].confidence - 0.12).abs() < 1e-6);
}

#[test]
fn server_ranking_is_passed_through_without_padding() {
    let top3 = vec![
        RankedEntry::new(CraftLabel::Zellige, 0.91),
        RankedEntry::new(CraftLabel::Tapis, 0.05),
    ];
    let input = RawPrediction {
        class: CraftLabel::Zellige,
        confidence: 0.91,
        top3: Some(top3.clone()),
    };
    let result = normalize(&input, &CraftLabel::ALL).expect("normalize");
    assert_eq!(result.ranking, top3);
    assert_eq!(result.top, top3[0]);
}

#[test]
fn server_ranking_wins_over_top_level_fields() {
    // top3[0] disagrees with class/confidence: the supplied ranking is
    // authoritative and the top-level fields are ignored.
    let input = RawPrediction {
        class: CraftLabel::Babouche,
        confidence: 0.99,
        top3: Some(vec![
            RankedEntry::new(CraftLabel::Poterie, 0.55),
            RankedEntry::new(CraftLabel::Babouche, 0.30),
            RankedEntry::new(CraftLabel::Tapis, 0.10),
        ]),
    };
    let result = normalize(&input, &CraftLabel::ALL).expect("normalize");
    assert_eq!(result.top, RankedEntry::new(CraftLabel::Poterie, 0.55));
    assert_eq!(result.ranking[0], result.top);
}

#[test]
fn empty_server_ranking_triggers_synthesis() {
    let input = RawPrediction {
        class: CraftLabel::Poterie,
        confidence: 0.5,
        top3: Some(vec![]),
    };
    let result = normalize(&input, &CraftLabel::ALL).expect("normalize");
    assert_eq!(result.ranking.len(), 3);
    assert_eq!(result.ranking[0], RankedEntry::new(CraftLabel::Poterie, 0.5));
}

#[test]
fn label_set_smaller_than_three_is_a_configuration_error() {
    let input = raw(CraftLabel::Tapis, 0.9);
    let err = normalize(&input, &[CraftLabel::Tapis, CraftLabel::Zellige]);
    assert!(err.is_err());
}

#[test]
fn confidence_renders_as_one_decimal_percent() {
    assert_eq!(percent(0.8), "80.0");
    assert_eq!(percent(0.123), "12.3");
    assert_eq!(percent(1.0), "100.0");
    assert_eq!(percent(0.0), "0.0");
}
