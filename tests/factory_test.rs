//! Tests for parsing buildings from text

use rstest::rstest;

use skyline::domain::{parse_building, Building, DomainError};

#[rstest]
#[case("[1,2,3]", Building::new(1.0, 2.0, 3.0))]
#[case("[0,10,0.5]", Building::new(0.0, 10.0, 0.5))]
#[case("[1.25,2.5,3.75]", Building::new(1.25, 2.5, 3.75))]
#[case("[007,8,9]", Building::new(7.0, 8.0, 9.0))]
fn given_valid_text_when_parsing_then_building(#[case] input: &str, #[case] expected: Building) {
    assert_eq!(parse_building(input).unwrap(), expected);
}

#[test]
fn given_equal_start_and_end_when_parsing_then_empty_building() {
    let building = parse_building("[4,4,2]").unwrap();

    assert!(building.is_empty());
}

#[rstest]
#[case("", DomainError::BlankInput)]
#[case("   ", DomainError::BlankInput)]
#[case("[-1,2,3]", DomainError::NegativeValues("[-1,2,3]".into()))]
#[case("[1,2,-3]", DomainError::NegativeValues("[1,2,-3]".into()))]
#[case("[1,2]", DomainError::Unparseable("[1,2]".into()))]
#[case("1,2,3", DomainError::Unparseable("1,2,3".into()))]
#[case("[1, 2, 3]", DomainError::Unparseable("[1, 2, 3]".into()))]
#[case("[a,b,c]", DomainError::Unparseable("[a,b,c]".into()))]
#[case("[1.,2,3]", DomainError::Unparseable("[1.,2,3]".into()))]
#[case("[1,2,0]", DomainError::FlatBuilding { height: 0.0 })]
#[case("[3,2,1]", DomainError::StartAfterEnd { start: 3.0, end: 2.0 })]
fn given_invalid_text_when_parsing_then_rejected(#[case] input: &str, #[case] expected: DomainError) {
    let err = parse_building(input).unwrap_err();

    assert_eq!(err, expected);
    assert!(err.is_invalid_building());
}

#[test]
fn given_text_when_using_from_str_then_same_as_factory() {
    let building: Building = "[2,5,1.5]".parse().unwrap();

    assert_eq!(building, Building::new(2.0, 5.0, 1.5));
}
