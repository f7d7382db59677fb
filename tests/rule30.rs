use rowca::{Driver, GenerationEngine, Glyphs, RowCodec, RuleTable, Seed, TextRenderer};

const WIDTH: usize = 80;

/// Centre column of Rule 30 from a single seed, generations 0 to 39
const CENTER_COLUMN: &str = "1101110011000101100100111010111001110101";

/// Generation 1000 of an 80 cell ring seeded at index 40
const GENERATION_1000: &str =
    ".#.##.###..#...#.....#....########..#..##.####.#.....##..#..#.#.##.###...###...#";

fn rule30() -> GenerationEngine {
    let seed = Seed::Single.create_row(WIDTH);
    GenerationEngine::new(WIDTH, &seed, RuleTable::from_rule_number(30).unwrap()).unwrap()
}

fn live_cells(row: &[u8]) -> Vec<usize> {
    row.iter()
        .enumerate()
        .filter(|&(_, &c)| c == 1)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn first_generation_spreads_from_seed() {
    let mut game = rule30();
    assert_eq!(live_cells(game.current_row()), vec![40]);

    game.advance();
    assert_eq!(live_cells(game.current_row()), vec![39, 40, 41]);
}

#[test]
fn opening_rows_form_the_triangle() {
    let mut game = rule30();
    let glyphs = Glyphs::default();
    let expected = [
        "......#......",
        ".....###.....",
        "....##..#....",
        "...##.####...",
        "..##..#...#..",
        ".##.####.###.",
    ];
    for line in expected {
        assert_eq!(glyphs.encode(&game.current_row()[34..47]), line);
        game.advance();
    }
}

#[test]
fn centre_column_is_known_sequence() {
    let mut game = rule30();
    let mut column = String::new();
    for _ in 0..CENTER_COLUMN.len() {
        column.push(char::from(b'0' + game.current_row()[40]));
        game.advance();
    }

    assert_eq!(column, CENTER_COLUMN);
}

#[test]
fn thousandth_generation_matches() {
    let mut game = rule30();
    game.advance_by(1000);

    assert_eq!(game.generation(), 1000);
    assert_eq!(Glyphs::default().encode(game.current_row()), GENERATION_1000);
}

#[test]
fn explicit_table_drives_the_same_pattern() {
    let table = RuleTable::from_explicit_table(&[0, 1, 1, 1, 1, 0, 0, 0]).unwrap();
    let seed = Seed::Single.create_row(WIDTH);
    let mut by_table = GenerationEngine::new(WIDTH, &seed, table).unwrap();
    let mut by_number = rule30();
    for _ in 0..200 {
        by_table.advance();
        by_number.advance();
        assert_eq!(by_table.current_row(), by_number.current_row());
    }
}

#[test]
fn driver_prints_one_line_per_generation() {
    let mut driver = Driver::new(rule30(), TextRenderer::new(Vec::new())).set_limit(Some(1001));
    driver.run().unwrap();

    let (_, renderer) = driver.into_parts();
    let out = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 1001);
    assert!(lines.iter().all(|line| line.len() == WIDTH));
    assert_eq!(lines[1000], GENERATION_1000);
}
