use artii::{
    encode_hex_text, encode_image, render, ArtGrid, Color, ColorMap, Session, DEFAULT_COLOR,
};
use pretty_assertions::assert_eq;

#[test]
fn two_mapped_chars_and_a_ragged_row() {
    let grid = ArtGrid::load("AB\nC");
    let map = ColorMap::load("A,#FF0000\nB,#00FF00\n");
    assert_eq!((grid.height(), grid.width()), (2, 2));

    let (pixels, hex) = render(&grid, &map).unwrap();
    assert_eq!(
        pixels.row(0).unwrap(),
        &[Color::rgb(0xff, 0, 0), Color::rgb(0, 0xff, 0)]
    );
    assert_eq!(pixels.row(1).unwrap(), &[Color::WHITE, Color::WHITE]);
    assert_eq!(hex.get(1, 0), Some(DEFAULT_COLOR));
    assert_eq!(hex.get(1, 1), Some(DEFAULT_COLOR));
}

#[test]
fn empty_mapping_colors_everything_white() {
    let grid = ArtGrid::load("some art\n  with (ragged) rows\n~~");
    let (pixels, hex) = render(&grid, &ColorMap::load("")).unwrap();
    assert!(pixels.pixels().iter().all(|&p| p == Color::WHITE));
    assert!(hex.rows().iter().flatten().all(|code| code == DEFAULT_COLOR));
    assert_eq!(pixels.pixels().len(), grid.width() * grid.height());
}

#[test]
fn single_repeated_char() {
    let grid = ArtGrid::load("XX\nXX");
    let map = ColorMap::load("X,#123456");
    assert_eq!(grid.unique_chars().iter().copied().collect::<Vec<_>>(), vec!['X']);
    assert_eq!(grid.num_chars(), 4);

    let (pixels, hex) = render(&grid, &map).unwrap();
    assert!(pixels.pixels().iter().all(|&p| p == Color::rgb(0x12, 0x34, 0x56)));
    assert_eq!(encode_hex_text(&hex), "#123456 #123456\n#123456 #123456\n");
}

#[test]
fn hex_text_has_one_line_per_row_and_one_token_per_column() {
    let map = ColorMap::load("/,#0000FF\n\\,#00ffff\n_,#FF8800\n");
    for text in ["a", "AB\nC", "x\n\n  yz\n", artii::DEFAULT_ART] {
        let grid = ArtGrid::load(text);
        let (_, hex) = render(&grid, &map).unwrap();
        let out = encode_hex_text(&hex);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), grid.height(), "{:?}", text);
        for line in lines {
            let tokens: Vec<&str> = line.split(' ').collect();
            assert_eq!(tokens.len(), grid.width(), "{:?}", text);
            for token in tokens {
                assert_eq!(token.len(), 7);
                assert!(token.starts_with('#'));
                assert!(token[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let session = Session::default();
    let first = session.convert().unwrap();
    let second = session.convert().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_png().unwrap(), second.to_png().unwrap());
    assert_eq!(first.to_hex_text(), second.to_hex_text());
}

#[test]
fn default_art_with_empty_map() {
    let session = Session::default();
    let art = session.art();
    for &ch in art.unique_chars() {
        assert_eq!(session.color_map().color_for(ch), DEFAULT_COLOR);
    }
    let conversion = session.convert().unwrap();
    assert_eq!(conversion.pixels.width(), art.width());
    assert_eq!(conversion.pixels.height(), art.height());
}

#[test]
fn empty_art_still_encodes() {
    let (pixels, hex) = render(&ArtGrid::load(""), &ColorMap::new()).unwrap();
    assert_eq!(encode_hex_text(&hex), "");
    assert!(!encode_image(&pixels).unwrap().is_empty());
}
