use crate::error::Error;
use crate::geometry::{Anchor, Direction, Vec3};
use crate::material::{Item, Items, Profile};
use crate::shapes::{get_direction, normalize, offsets, validate};
use serde_json::json;
use test_case::test_case;

fn corners() -> Profile {
    vec![
        vec![Item::RED_CONCRETE, Item::AIR, Item::GREEN_CONCRETE],
        vec![Item::AIR, Item::AIR, Item::AIR],
        vec![Item::BLUE_CONCRETE, Item::AIR, Item::YELLOW_CONCRETE],
    ]
}

#[test_case(Direction::North, Anchor::TopLeft, [(0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0), (0.0,-1.0,0.0), (1.0,-1.0,0.0), (2.0,-1.0,0.0), (0.0,-2.0,0.0), (1.0,-2.0,0.0), (2.0,-2.0,0.0)] ; "north_top_left")]
#[test_case(Direction::North, Anchor::TopRight, [(-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (-2.0,-1.0,0.0), (-1.0,-1.0,0.0), (0.0,-1.0,0.0), (-2.0,-2.0,0.0), (-1.0,-2.0,0.0), (0.0,-2.0,0.0)] ; "north_top_right")]
#[test_case(Direction::North, Anchor::BottomLeft, [(0.0,2.0,0.0), (1.0,2.0,0.0), (2.0,2.0,0.0), (0.0,1.0,0.0), (1.0,1.0,0.0), (2.0,1.0,0.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0)] ; "north_bottom_left")]
#[test_case(Direction::North, Anchor::BottomRight, [(-2.0,2.0,0.0), (-1.0,2.0,0.0), (0.0,2.0,0.0), (-2.0,1.0,0.0), (-1.0,1.0,0.0), (0.0,1.0,0.0), (-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0)] ; "north_bottom_right")]
#[test_case(Direction::North, Anchor::Middle, [(-1.0,1.0,0.0), (0.0,1.0,0.0), (1.0,1.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (-1.0,-1.0,0.0), (0.0,-1.0,0.0), (1.0,-1.0,0.0)] ; "north_middle")]
#[test_case(Direction::South, Anchor::TopLeft, [(0.0,0.0,0.0), (-1.0,0.0,0.0), (-2.0,0.0,0.0), (0.0,-1.0,0.0), (-1.0,-1.0,0.0), (-2.0,-1.0,0.0), (0.0,-2.0,0.0), (-1.0,-2.0,0.0), (-2.0,-2.0,0.0)] ; "south_top_left")]
#[test_case(Direction::South, Anchor::TopRight, [(2.0,0.0,0.0), (1.0,0.0,0.0), (0.0,0.0,0.0), (2.0,-1.0,0.0), (1.0,-1.0,0.0), (0.0,-1.0,0.0), (2.0,-2.0,0.0), (1.0,-2.0,0.0), (0.0,-2.0,0.0)] ; "south_top_right")]
#[test_case(Direction::South, Anchor::BottomLeft, [(0.0,2.0,0.0), (-1.0,2.0,0.0), (-2.0,2.0,0.0), (0.0,1.0,0.0), (-1.0,1.0,0.0), (-2.0,1.0,0.0), (0.0,0.0,0.0), (-1.0,0.0,0.0), (-2.0,0.0,0.0)] ; "south_bottom_left")]
#[test_case(Direction::South, Anchor::BottomRight, [(2.0,2.0,0.0), (1.0,2.0,0.0), (0.0,2.0,0.0), (2.0,1.0,0.0), (1.0,1.0,0.0), (0.0,1.0,0.0), (2.0,0.0,0.0), (1.0,0.0,0.0), (0.0,0.0,0.0)] ; "south_bottom_right")]
#[test_case(Direction::South, Anchor::Middle, [(1.0,1.0,0.0), (0.0,1.0,0.0), (-1.0,1.0,0.0), (1.0,0.0,0.0), (0.0,0.0,0.0), (-1.0,0.0,0.0), (1.0,-1.0,0.0), (0.0,-1.0,0.0), (-1.0,-1.0,0.0)] ; "south_middle")]
#[test_case(Direction::East, Anchor::TopLeft, [(0.0,0.0,0.0), (0.0,0.0,1.0), (0.0,0.0,2.0), (0.0,-1.0,0.0), (0.0,-1.0,1.0), (0.0,-1.0,2.0), (0.0,-2.0,0.0), (0.0,-2.0,1.0), (0.0,-2.0,2.0)] ; "east_top_left")]
#[test_case(Direction::East, Anchor::TopRight, [(0.0,0.0,-2.0), (0.0,0.0,-1.0), (0.0,0.0,0.0), (0.0,-1.0,-2.0), (0.0,-1.0,-1.0), (0.0,-1.0,0.0), (0.0,-2.0,-2.0), (0.0,-2.0,-1.0), (0.0,-2.0,0.0)] ; "east_top_right")]
#[test_case(Direction::East, Anchor::BottomLeft, [(0.0,2.0,0.0), (0.0,2.0,1.0), (0.0,2.0,2.0), (0.0,1.0,0.0), (0.0,1.0,1.0), (0.0,1.0,2.0), (0.0,0.0,0.0), (0.0,0.0,1.0), (0.0,0.0,2.0)] ; "east_bottom_left")]
#[test_case(Direction::East, Anchor::BottomRight, [(0.0,2.0,-2.0), (0.0,2.0,-1.0), (0.0,2.0,0.0), (0.0,1.0,-2.0), (0.0,1.0,-1.0), (0.0,1.0,0.0), (0.0,0.0,-2.0), (0.0,0.0,-1.0), (0.0,0.0,0.0)] ; "east_bottom_right")]
#[test_case(Direction::East, Anchor::Middle, [(0.0,1.0,-1.0), (0.0,1.0,0.0), (0.0,1.0,1.0), (0.0,0.0,-1.0), (0.0,0.0,0.0), (0.0,0.0,1.0), (0.0,-1.0,-1.0), (0.0,-1.0,0.0), (0.0,-1.0,1.0)] ; "east_middle")]
#[test_case(Direction::West, Anchor::TopLeft, [(0.0,0.0,0.0), (0.0,0.0,-1.0), (0.0,0.0,-2.0), (0.0,-1.0,0.0), (0.0,-1.0,-1.0), (0.0,-1.0,-2.0), (0.0,-2.0,0.0), (0.0,-2.0,-1.0), (0.0,-2.0,-2.0)] ; "west_top_left")]
#[test_case(Direction::West, Anchor::TopRight, [(0.0,0.0,2.0), (0.0,0.0,1.0), (0.0,0.0,0.0), (0.0,-1.0,2.0), (0.0,-1.0,1.0), (0.0,-1.0,0.0), (0.0,-2.0,2.0), (0.0,-2.0,1.0), (0.0,-2.0,0.0)] ; "west_top_right")]
#[test_case(Direction::West, Anchor::BottomLeft, [(0.0,2.0,0.0), (0.0,2.0,-1.0), (0.0,2.0,-2.0), (0.0,1.0,0.0), (0.0,1.0,-1.0), (0.0,1.0,-2.0), (0.0,0.0,0.0), (0.0,0.0,-1.0), (0.0,0.0,-2.0)] ; "west_bottom_left")]
#[test_case(Direction::West, Anchor::BottomRight, [(0.0,2.0,2.0), (0.0,2.0,1.0), (0.0,2.0,0.0), (0.0,1.0,2.0), (0.0,1.0,1.0), (0.0,1.0,0.0), (0.0,0.0,2.0), (0.0,0.0,1.0), (0.0,0.0,0.0)] ; "west_bottom_right")]
#[test_case(Direction::West, Anchor::Middle, [(0.0,1.0,1.0), (0.0,1.0,0.0), (0.0,1.0,-1.0), (0.0,0.0,1.0), (0.0,0.0,0.0), (0.0,0.0,-1.0), (0.0,-1.0,1.0), (0.0,-1.0,0.0), (0.0,-1.0,-1.0)] ; "west_middle")]
#[test_case(Direction::Up, Anchor::TopLeft, [(0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0), (0.0,0.0,-1.0), (1.0,0.0,-1.0), (2.0,0.0,-1.0), (0.0,0.0,-2.0), (1.0,0.0,-2.0), (2.0,0.0,-2.0)] ; "up_top_left")]
#[test_case(Direction::Up, Anchor::TopRight, [(-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (-2.0,0.0,-1.0), (-1.0,0.0,-1.0), (0.0,0.0,-1.0), (-2.0,0.0,-2.0), (-1.0,0.0,-2.0), (0.0,0.0,-2.0)] ; "up_top_right")]
#[test_case(Direction::Up, Anchor::BottomLeft, [(0.0,0.0,2.0), (1.0,0.0,2.0), (2.0,0.0,2.0), (0.0,0.0,1.0), (1.0,0.0,1.0), (2.0,0.0,1.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0)] ; "up_bottom_left")]
#[test_case(Direction::Up, Anchor::BottomRight, [(-2.0,0.0,2.0), (-1.0,0.0,2.0), (0.0,0.0,2.0), (-2.0,0.0,1.0), (-1.0,0.0,1.0), (0.0,0.0,1.0), (-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0)] ; "up_bottom_right")]
#[test_case(Direction::Up, Anchor::Middle, [(-1.0,0.0,1.0), (0.0,0.0,1.0), (1.0,0.0,1.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (-1.0,0.0,-1.0), (0.0,0.0,-1.0), (1.0,0.0,-1.0)] ; "up_middle")]
#[test_case(Direction::Down, Anchor::TopLeft, [(0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0), (0.0,0.0,1.0), (1.0,0.0,1.0), (2.0,0.0,1.0), (0.0,0.0,2.0), (1.0,0.0,2.0), (2.0,0.0,2.0)] ; "down_top_left")]
#[test_case(Direction::Down, Anchor::TopRight, [(-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (-2.0,0.0,1.0), (-1.0,0.0,1.0), (0.0,0.0,1.0), (-2.0,0.0,2.0), (-1.0,0.0,2.0), (0.0,0.0,2.0)] ; "down_top_right")]
#[test_case(Direction::Down, Anchor::BottomLeft, [(0.0,0.0,-2.0), (1.0,0.0,-2.0), (2.0,0.0,-2.0), (0.0,0.0,-1.0), (1.0,0.0,-1.0), (2.0,0.0,-1.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (2.0,0.0,0.0)] ; "down_bottom_left")]
#[test_case(Direction::Down, Anchor::BottomRight, [(-2.0,0.0,-2.0), (-1.0,0.0,-2.0), (0.0,0.0,-2.0), (-2.0,0.0,-1.0), (-1.0,0.0,-1.0), (0.0,0.0,-1.0), (-2.0,0.0,0.0), (-1.0,0.0,0.0), (0.0,0.0,0.0)] ; "down_bottom_right")]
#[test_case(Direction::Down, Anchor::Middle, [(-1.0,0.0,-1.0), (0.0,0.0,-1.0), (1.0,0.0,-1.0), (-1.0,0.0,0.0), (0.0,0.0,0.0), (1.0,0.0,0.0), (-1.0,0.0,1.0), (0.0,0.0,1.0), (1.0,0.0,1.0)] ; "down_middle")]
fn test_offsets(direction: Direction, anchor: Anchor, expected: [(f64, f64, f64); 9]) {
    let profile = corners();
    let result: Vec<_> = offsets(&profile, direction, anchor).unwrap().collect();

    let expected: Vec<_> = profile
        .iter()
        .flatten()
        .cloned()
        .zip(expected.iter().map(|&(x, y, z)| Vec3::new(x, y, z)))
        .collect();
    assert_eq!(result, expected);
}

#[test]
fn test_offsets_are_distinct() {
    let profile = corners();
    for direction in Direction::ALL {
        for anchor in Anchor::ALL {
            let vectors: Vec<_> = offsets(&profile, direction, anchor)
                .unwrap()
                .map(|(_, v)| v.block())
                .collect();
            let mut unique = vectors.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 9, "{direction} {anchor}");
        }
    }
}

#[test]
fn test_offsets_accept_long_vectors() {
    let profile = corners();
    let unit: Vec<_> = offsets(&profile, Direction::East, Anchor::Middle).unwrap().collect();
    let long: Vec<_> = offsets(&profile, Vec3::new(12.0, 0.0, 0.0), Anchor::Middle)
        .unwrap()
        .collect();
    assert_eq!(unit, long);
}

#[test]
fn test_offsets_zero_direction() {
    let profile = corners();
    let result = offsets(&profile, Vec3::ZERO, Anchor::Middle);
    assert!(matches!(result, Err(Error::UnknownDirection(_))));
}

#[test]
fn test_get_direction() {
    let start = Vec3::new(10.0, -9.0, 3.0);

    let cases = [
        (Vec3::new(91.0, -9.0, 3.0), Vec3::new(81.0, 0.0, 0.0)),
        (Vec3::new(10.0, 200.0, 3.0), Vec3::new(0.0, 209.0, 0.0)),
        (Vec3::new(10.0, -9.0, -5.0), Vec3::new(0.0, 0.0, -8.0)),
    ];
    for (end, direction) in cases {
        assert_eq!(get_direction(start, end).unwrap(), direction);
    }
}

#[test_case(Vec3::new(1.0, 2.0, -3.0), Vec3::new(-4.0, -5.0, 6.0) ; "all differ")]
#[test_case(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 5.0, 6.0) ; "two differ")]
#[test_case(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0) ; "none differ")]
fn test_get_direction_not_a_line(start: Vec3, end: Vec3) {
    assert!(matches!(get_direction(start, end), Err(Error::NotALine { .. })));
}

#[test]
fn test_normalize() {
    let template = vec![
        vec![Some(Item::RED_CONCRETE), None, Some(Item::GREEN_CONCRETE)],
        vec![None, None, None],
        vec![Some(Item::BLUE_CONCRETE), None, Some(Item::YELLOW_CONCRETE)],
    ];

    let normalized: Vec<_> = normalize(&template, &Item::AIR).collect();
    assert_eq!(normalized, corners());
}

#[test]
fn test_normalize_default() {
    let template = vec![vec![None, Some(Item::GLASS)]];
    let normalized: Vec<_> = normalize(&template, &Item::STONE).collect();
    assert_eq!(normalized, vec![vec![Item::STONE, Item::GLASS]]);
}

#[test]
fn test_validate_ranks() {
    let row = vec![Item::STONE, Item::AIR];
    let profile = corners();
    let cuboid = vec![corners(), corners()];

    assert_eq!(validate(&row), 1);
    assert_eq!(validate(&profile), 2);
    assert_eq!(validate(&cuboid), 3);
    assert_eq!(validate(&Items::from(cuboid)), 3);
}

#[test]
fn test_validate_ragged() {
    let profile = vec![vec![Item::STONE, Item::AIR], vec![Item::STONE]];
    assert_eq!(validate(&profile), 0);

    let cuboid = vec![corners(), vec![vec![Item::STONE]]];
    assert_eq!(validate(&cuboid), 0);

    let empty: Vec<Vec<Item>> = Vec::new();
    assert_eq!(validate(&empty), 0);

    let empty_rows: Vec<Vec<Item>> = vec![vec![], vec![]];
    assert_eq!(validate(&empty_rows), 0);
}

#[test]
fn test_validate_json() {
    let stone = json!({"__Item__": "stone"});

    assert_eq!(validate(&json!([stone, stone])), 1);
    assert_eq!(validate(&json!([[stone], [stone]])), 2);
    assert_eq!(validate(&json!([[[stone, stone]], [[stone, stone]]])), 3);

    assert_eq!(validate(&json!([[stone], [stone, stone]])), 0);
    assert_eq!(validate(&json!([[stone], stone])), 0);
    assert_eq!(validate(&json!([1, 2, 3])), 0);
    assert_eq!(validate(&json!([[[[stone]]]])), 0);
    assert_eq!(validate(&stone), 0);
}
