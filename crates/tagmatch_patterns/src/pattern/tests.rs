use super::*;
use pretty_assertions::assert_eq;

struct ParseInt;

impl Decoder<str> for ParseInt {
    type Output = i64;
    type Decoded = Result<i64, std::num::ParseIntError>;

    fn decode(&self, input: &str) -> Self::Decoded {
        input.trim().parse()
    }
}

#[test]
fn predicate_extracts_input() {
    let even: Pattern<'_, i64, i64> = Pattern::predicate(|x| x % 2 == 0);
    assert_eq!(even.kind(), PatternKind::Predicate);
    assert_eq!(even.test(&4), Some(4));
    assert_eq!(even.test(&3), None);
}

#[test]
fn predicate_converts_into_wider_output() {
    #[derive(Debug, PartialEq)]
    enum Token {
        Word(String),
    }

    impl From<String> for Token {
        fn from(s: String) -> Self {
            Token::Word(s)
        }
    }

    let word: Pattern<'_, String, Token> =
        Pattern::predicate(|s: &String| s.chars().all(char::is_alphabetic));
    assert_eq!(
        word.test(&"abc".to_string()),
        Some(Token::Word("abc".to_string()))
    );
}

#[test]
fn predicate_equivalent_to_extract_of_input() {
    let pred: Pattern<'_, i64, i64> = Pattern::predicate(|x| *x > 0);
    let extract: Pattern<'_, i64, i64> = Pattern::extract(|x| (*x > 0).then_some(*x));
    for x in [-2, 0, 7] {
        assert_eq!(pred.test(&x), extract.test(&x));
    }
}

#[test]
fn decoder_result_is_normalised() {
    let int: Pattern<'_, str, i64> = Pattern::decode(ParseInt);
    assert_eq!(int.kind(), PatternKind::Decode);
    assert_eq!(int.test(" 42 "), Some(42));
    assert_eq!(int.test("forty-two"), None);
}

#[test]
fn maybe_and_either_decoders_agree() {
    let maybe: Pattern<'_, i64, i64> = Pattern::decode_fn(|_| Some(5));
    let either: Pattern<'_, i64, i64> = Pattern::decode_fn(|_| Ok::<_, ()>(5));
    assert_eq!(maybe.test(&0), either.test(&0));

    let empty: Pattern<'_, i64, i64> = Pattern::decode_fn(|_| None);
    let failure: Pattern<'_, i64, i64> = Pattern::decode_fn(|_| Err::<i64, _>("bad"));
    assert_eq!(empty.test(&0), failure.test(&0));
}

#[test]
fn table_keeps_insertion_order() {
    let table: PatternTable<'_, i64, i64> = PatternTable::new()
        .with("isEven", Pattern::predicate(|x: &i64| x % 2 == 0))
        .with("isPositive", Pattern::predicate(|x: &i64| *x > 0));
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["isEven", "isPositive"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn replacing_a_pattern_keeps_its_position() {
    let table: PatternTable<'_, i64, i64> = PatternTable::new()
        .with("a", Pattern::predicate(|_| false))
        .with("b", Pattern::predicate(|_| true))
        .with("a", Pattern::extract(|x: &i64| Some(x * 10)));

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
    let a = table.get("a").unwrap();
    assert_eq!(a.kind(), PatternKind::Extract);
    assert_eq!(a.test(&2), Some(20));
}

#[test]
fn debug_shows_names_and_kinds() {
    let table: PatternTable<'_, str, i64> = PatternTable::new().with("int", Pattern::decode(ParseInt));
    assert_eq!(format!("{table:?}"), r#"{"int": Decode}"#);
}
