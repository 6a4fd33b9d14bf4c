use pretty_assertions::assert_eq;
use qrmint::qrcode::{ErrorCorrectionLevel, ModuleGrid, QrModel};
use qrmint::version::Version;

fn render(qr: &impl ModuleGrid) -> Vec<String> {
    let n = qr.module_count();
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| if qr.is_dark(r, c).unwrap() { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_example_url_at_m() {
    let qr = QrModel::encode_text("https://example.com", ErrorCorrectionLevel::M).unwrap();
    assert_eq!(qr.version().value(), 2);
    assert_eq!(qr.module_count(), 25);
    assert_eq!(qr.mask().map(|m| m.value()), Some(5));
    let expected = [
        "#######...#.#.#...#######",
        "#.....#.###..##.#.#.....#",
        "#.###.#.##.#..#...#.###.#",
        "#.###.#.###..#..#.#.###.#",
        "#.###.#..##..#..#.#.###.#",
        "#.....#..#.#..#...#.....#",
        "#######.#.#.#.#.#.#######",
        "........##....###........",
        "#.....#.#...#....##..###.",
        ".###.#...#.#.#####.#####.",
        "#####.#.##...####..#.#.##",
        "##..##..####.#..#.##.#..#",
        "...######.#.##.##.##....#",
        "###.#...###....##..#...#.",
        "#.....##..###..#..####.##",
        "#.#.#..#####.....###.##.#",
        "#.#..##.####....#####.#..",
        "........#...###.#...#....",
        "#######...##....#.#.#...#",
        "#.....#.....##.##...#..#.",
        "#.###.#..##.#.#######.#.#",
        "#.###.#..##...#.###....##",
        "#.###.#..####..#.....##.#",
        "#.....#..#.#..####.##...#",
        "#######.###..##.#.#..#..#",
    ];
    assert_eq!(render(&qr), expected);
}

#[test]
fn test_hello_at_h() {
    let qr = QrModel::encode_text("HELLO", ErrorCorrectionLevel::H).unwrap();
    assert_eq!(qr.version().value(), 1);
    assert_eq!(qr.mask().map(|m| m.value()), Some(4));
    let expected = [
        "#######..#..#.#######",
        "#.....#.###...#.....#",
        "#.###.#..#.##.#.###.#",
        "#.###.#..###..#.###.#",
        "#.###.#..##.#.#.###.#",
        "#.....#.###...#.....#",
        "#######.#.#.#.#######",
        "........###.#........",
        "....####.#..#.##...#.",
        "#.###..###...###.####",
        "##..####.##.#..##..#.",
        ".###.#..#.###.#.#....",
        "####..######......##.",
        "........###......#.##",
        "#######.#...###..#.#.",
        "#.....#.####.###...#.",
        "#.###.#.#..#...##.#.#",
        "#.###.#..#.#..#..#.##",
        "#.###.#..#.#.#.###...",
        "#.....#....#.##......",
        "#######..#.##..##.#.#",
    ];
    assert_eq!(render(&qr), expected);
}

#[test]
fn test_hand_built_model_matches_encode_text() {
    let auto = QrModel::encode_text("HELLO", ErrorCorrectionLevel::H).unwrap();
    let mut manual = QrModel::new(Version::new(1), ErrorCorrectionLevel::H);
    manual.add_data("HELLO");
    manual.make().unwrap();
    assert_eq!(render(&manual), render(&auto));
}

#[test]
fn test_version_one_h_boundary() {
    let mut fits = QrModel::new(Version::new(1), ErrorCorrectionLevel::H);
    fits.add_data("abcdefg");
    assert!(fits.make().is_ok());

    let mut too_long = QrModel::new(Version::new(1), ErrorCorrectionLevel::H);
    too_long.add_data("abcdefgh");
    let err = too_long.make().unwrap_err();
    assert!(err.is_capacity_exceeded());
    assert!(!too_long.is_built());
}

#[test]
fn test_render_is_stable_across_makes() {
    let mut qr = QrModel::new(Version::new(5), ErrorCorrectionLevel::Q);
    qr.add_data("stable output");
    qr.make().unwrap();
    let first = render(&qr);
    qr.make().unwrap();
    assert_eq!(render(&qr), first);
}
