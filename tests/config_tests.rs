use locked_weasel::{
    Alphabet, Evolver, WeaselConfig, WeaselError,
    algorithms::locked::LockedWeasel,
    config::{DEFAULT_ALPHABET, DEFAULT_MUTATION_RATE, DEFAULT_OFFSPRING, DEFAULT_TARGET},
};

#[test]
fn test_defaults() {
    let config = WeaselConfig::default();
    assert_eq!(config.target, "METHINKS IT IS LIKE A WEASEL");
    assert_eq!(config.alphabet, "ABCDEFGHIJKLMNOPQRSTUVWXYZ ");
    assert_eq!(config.offspring, 50);
    assert_eq!(config.mutation_rate, 0.08);
    assert_eq!(config.seed, None);
    assert_eq!(config.max_generations, None);
    config.validate().unwrap();
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config: WeaselConfig = toml::from_str(
        r#"
        target = "CAT"
        seed = 42
        "#,
    )
    .unwrap();
    assert_eq!(config.target, "CAT");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.alphabet, DEFAULT_ALPHABET);
    assert_eq!(config.offspring, DEFAULT_OFFSPRING);
    assert_eq!(config.mutation_rate, DEFAULT_MUTATION_RATE);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("weasel-config-{}.toml", std::process::id()));
    std::fs::write(&path, "offspring = 10\nmutation_rate = 0.25\nmax_generations = 500\n").unwrap();

    let config = WeaselConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.target, DEFAULT_TARGET);
    assert_eq!(config.offspring, 10);
    assert_eq!(config.mutation_rate, 0.25);
    assert_eq!(config.max_generations, Some(500));
}

#[test]
fn test_load_missing_file() {
    let err = WeaselConfig::load("/nonexistent/weasel.toml").unwrap_err();
    assert!(matches!(err, WeaselError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let path = std::env::temp_dir().join(format!("weasel-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "offspring = \"many\"\n").unwrap();
    let err = WeaselConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, WeaselError::Toml(_)));
}

#[test]
fn test_rejects_empty_target() {
    let config = WeaselConfig {
        target: String::new(),
        ..WeaselConfig::default()
    };
    assert!(matches!(config.validate(), Err(WeaselError::EmptyTarget)));
}

#[test]
fn test_rejects_target_symbol_missing_from_alphabet() {
    let config = WeaselConfig {
        target: "METHINKS it".into(),
        ..WeaselConfig::default()
    };
    match config.validate() {
        Err(WeaselError::SymbolNotInAlphabet { symbol, position }) => {
            assert_eq!(symbol, 'i');
            assert_eq!(position, 9);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_rejects_bad_mutation_rates() {
    for rate in [-0.1, 1.5, f64::NAN] {
        let config = WeaselConfig {
            mutation_rate: rate,
            ..WeaselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WeaselError::InvalidMutationRate(_))
        ));
    }
    for rate in [0.0, 1.0] {
        let config = WeaselConfig {
            mutation_rate: rate,
            max_generations: Some(1_000),
            ..WeaselConfig::default()
        };
        config.validate().unwrap();
    }
}

#[test]
fn test_rejects_zero_rate_without_cap() {
    let config = WeaselConfig {
        mutation_rate: 0.0,
        ..WeaselConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(WeaselError::UnboundedZeroRate)
    ));

    // The engine itself still runs zero-rate generations.
    let mut weasel = LockedWeasel::new(&config, 1).unwrap();
    let report = weasel.step().unwrap();
    assert_eq!(report.stats.events, 0);
}

#[test]
fn test_rejects_zero_offspring() {
    let config = WeaselConfig {
        offspring: 0,
        ..WeaselConfig::default()
    };
    assert!(matches!(config.validate(), Err(WeaselError::NoOffspring)));
}

#[test]
fn test_rejects_alphabet_with_one_distinct_symbol() {
    assert!(matches!(
        Alphabet::new("   "),
        Err(WeaselError::AlphabetTooSmall { distinct: 1 })
    ));
    assert!(matches!(
        Alphabet::new(""),
        Err(WeaselError::AlphabetTooSmall { distinct: 0 })
    ));
}

#[test]
fn test_with_parent_rejects_wrong_length() {
    use locked_weasel::Sequence;
    let result = LockedWeasel::with_parent(&WeaselConfig::default(), Sequence::from("SHORT"), 0);
    assert!(matches!(
        result,
        Err(WeaselError::ParentLengthMismatch {
            expected: 28,
            actual: 5
        })
    ));
}
