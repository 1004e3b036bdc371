/// Seeded end-to-end tests for the generator.
///
/// Golden strings were produced once from fixed seeds. A change to the deck
/// construction order, the shuffle, the partition into seats or the notation
/// shows up here as a mismatch.
use handgen::{is_weak_deal, GeneratorConfig, Position, RandomHandGenerator};
use handgen_pbn::parse_deal;

fn check_boards(seed: u64, config: GeneratorConfig, expected: &[&str]) {
    let mut generator = RandomHandGenerator::with_seed(seed, config);

    for (i, expected) in expected.iter().enumerate() {
        let actual = generator.generate_board(i + 1).unwrap();
        assert_eq!(
            actual, *expected,
            "Mismatch at board #{} (seed={})\nExpected: {}\nActual:   {}",
            i + 1, seed, expected, actual
        );
    }
}

#[test]
fn test_seed_42_first_4_boards() {
    check_boards(
        42,
        GeneratorConfig::default(),
        &[
            "N:AT64.92.QJT.AT63 832.AK63.954.Q82 KQJ7.QT875.A873. 95.J4.K62.KJ9754",
            "E:9874.KQ.5.AQJ852 AJT52.53.A73.T93 Q6.42.QJT62.K764 K3.AJT9876.K984.",
            "S:6.A95.AKJ542.A52 A43.82.QT7.Q7643 KT982.KJT6.96.K8 QJ75.Q743.83.JT9",
            "W:AQ42.AJ93.KT.QT3 KT8.KQ742.73.AK2 9.T85.9654.J9864 J7653.6.AQJ82.75",
        ],
    );
}

#[test]
fn test_seed_42_same_boards_when_rejecting() {
    // Neither of the first two seed-42 deals is weak
    check_boards(
        42,
        GeneratorConfig::rejecting_weak(),
        &[
            "N:AT64.92.QJT.AT63 832.AK63.954.Q82 KQJ7.QT875.A873. 95.J4.K62.KJ9754",
            "E:9874.KQ.5.AQJ852 AJT52.53.A73.T93 Q6.42.QJT62.K764 K3.AJT9876.K984.",
        ],
    );
}

#[test]
fn test_seed_1_first_board() {
    let mut generator = RandomHandGenerator::with_seed(1, GeneratorConfig::default());
    assert_eq!(
        generator.generate(Position::North).unwrap(),
        "N:AK75.852.53.A976 42.AT9.AQJT97.KQ J83.QJ763.86.T52 QT96.K4.K42.J843"
    );
}

#[test]
fn test_seed_40_weak_board_kept_without_rejection() {
    let mut generator = RandomHandGenerator::with_seed(40, GeneratorConfig::default());
    let text = generator.generate(Position::North).unwrap();
    assert_eq!(
        text,
        "N:6.J8.K98754.AK97 KQ743.Q97.J2.Q62 AJ.K65.T63.JT543 T9852.AT432.AQ.8"
    );

    let (_, deal) = parse_deal(&text).unwrap();
    assert!(is_weak_deal(&deal));
}

#[test]
fn test_seed_40_weak_board_rejected() {
    let mut generator = RandomHandGenerator::with_seed(40, GeneratorConfig::rejecting_weak());
    assert_eq!(
        generator.generate(Position::East).unwrap(),
        "E:6543.KT5.JT5.975 KJ9.Q976.A43.K82 7.A843.9872.JT64 AQT82.J2.KQ6.AQ3"
    );
    assert_eq!(generator.generated_count(), 2);
}

#[test]
fn test_seed_272_two_weak_boards_rejected() {
    let mut generator = RandomHandGenerator::with_seed(272, GeneratorConfig::rejecting_weak());
    assert_eq!(
        generator.generate(Position::South).unwrap(),
        "S:98.A.AKQJ753.AQ5 K7.KJ7532.98.J63 A652.QT98.T42.K9 QJT43.64.6.T8742"
    );
    assert_eq!(generator.generated_count(), 3);
}

#[test]
fn test_rotation_of_one_deal() {
    let mut generator = RandomHandGenerator::with_seed(42, GeneratorConfig::default());
    let (_, deal) = parse_deal(&generator.generate(Position::North).unwrap()).unwrap();

    let north = "AT64.92.QJT.AT63";
    let east = "832.AK63.954.Q82";
    let south = "KQJ7.QT875.A873.";
    let west = "95.J4.K62.KJ9754";

    let expected = [
        (Position::North, format!("N:{} {} {} {}", north, east, south, west)),
        (Position::East, format!("E:{} {} {} {}", east, south, west, north)),
        (Position::South, format!("S:{} {} {} {}", south, west, north, east)),
        (Position::West, format!("W:{} {} {} {}", west, north, east, south)),
    ];
    for (dealer, text) in expected {
        assert_eq!(handgen_pbn::format_deal(dealer, &deal), text);
    }
}

#[test]
fn test_no_weak_boards_over_10000_trials() {
    let mut generator = RandomHandGenerator::with_seed(2024, GeneratorConfig::rejecting_weak());

    for board in 1..=10_000 {
        let deal = generator.next_deal().unwrap();
        assert!(deal.is_partition(), "Board {} is not a partition", board);
        assert!(!is_weak_deal(&deal), "Board {} is weak", board);
    }
    // Some boards were re-dealt along the way
    assert!(generator.generated_count() > 10_000);
}

#[test]
fn test_same_seed_same_output() {
    let mut gen1 = RandomHandGenerator::with_seed(999, GeneratorConfig::rejecting_weak());
    let mut gen2 = RandomHandGenerator::with_seed(999, GeneratorConfig::rejecting_weak());

    for board in 1..=50 {
        assert_eq!(
            gen1.generate_board(board).unwrap(),
            gen2.generate_board(board).unwrap(),
            "Inconsistent output at board #{} with seed=999",
            board
        );
    }
}
