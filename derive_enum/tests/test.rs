use derive_enum::{EnumCount, EnumFrom, EnumName};

#[derive(Copy, Clone, EnumCount, EnumFrom, EnumName)]
enum Empty {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumFrom, EnumName)]
enum Heading {
    Up,
    Right,
    NorthEast,
}

#[test]
fn test_count() {
    assert_eq!(Empty::COUNT, 0);
    assert_eq!(Heading::COUNT, 3);
}

#[test]
fn test_from_index() {
    assert_eq!(Heading::from_index(0), Some(Heading::Up));
    assert_eq!(Heading::from_index(2), Some(Heading::NorthEast));
    assert_eq!(Heading::from_index(3), None);
    assert!(Empty::from_index(0).is_none());
    assert_eq!(Heading::Right.index(), 1);
}

#[test]
fn test_all_in_declaration_order() {
    assert_eq!(
        Heading::all().collect::<Vec<_>>(),
        vec![Heading::Up, Heading::Right, Heading::NorthEast]
    );
    assert_eq!(Empty::all().count(), 0);
}

#[test]
fn test_name() {
    assert_eq!(Heading::Up.name(), "up");
    assert_eq!(Heading::NorthEast.name(), "north-east");
}
