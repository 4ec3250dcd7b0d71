use super::{ErrorKind, IStr, Nl, Ws};

fn input(data: &'static str) -> IStr {
    IStr::new("inputs/test.txt", data.as_bytes())
}

#[test]
fn test_integer_pairs() {
    let mut input = input("3   4\n4   3\n-2 5\n");

    let values = input
        .iter::<(i64, i64)>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(values, [(3, 4), (4, 3), (-2, 5)]);
    assert!(input.is_empty());
}

#[test]
fn test_lines() {
    let mut input = input("7 6 4\n\n1 2 7 8 9");
    let lines = input.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].as_data(), b"7 6 4");
    assert!(lines[1].is_blank());
    assert_eq!(lines[2].index(), 7);

    let mut last = lines[2];
    assert_eq!(last.next::<Vec<u32>>().unwrap(), [1, 2, 7, 8, 9]);
}

#[test]
fn test_try_line() {
    let mut input = input("1 2 3\n4 5\n");

    assert_eq!(input.try_line::<Vec<u8>>().unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(input.line::<(u8, u8)>().unwrap(), (4, 5));
    assert_eq!(input.try_line::<(u8, u8)>().unwrap(), None);
    assert_eq!(
        input.line::<(u8, u8)>().unwrap_err().kind(),
        ErrorKind::ExpectedLine
    );
}

#[test]
fn test_not_integer_position() {
    let mut input = input("1 2\n3 x4\n");
    input.line::<(u32, u32)>().unwrap();

    let error = input.line::<(u32, u32)>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotInteger("x4"));
    assert_eq!(error.span(), 6..8);
    assert_eq!(error.pos().to_string(), "2:3");
    assert_eq!(error.to_string(), "inputs/test.txt:2:3: not an integer or integer overflow `x4`");
}

#[test]
fn test_missing_tuple_element() {
    let mut line = input("42").next_line().unwrap();
    let error = line.next::<(u32, u32)>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExpectedTuple(2));
}

#[test]
fn test_overflow() {
    let mut input = input("256");
    let error = input.next::<u8>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotInteger("256"));
}

#[test]
fn test_array_capacity() {
    let mut input = input("1 2 3");
    let error = input.next::<arrayvec::ArrayVec<u8, 2>>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ArrayCapacity(2));
}

#[test]
fn test_ws_and_nl() {
    let mut input = input("1 2\n\n\nhello");

    let Nl((a, b)) = input.next::<Nl<(u8, u8)>>().unwrap();
    assert_eq!((a, b), (1, 2));

    let Ws(lines) = input.next::<Ws>().unwrap();
    assert_eq!(lines, 2);
    assert!(input.eat(b"hell"));
    assert!(!input.eat(b"x"));
    assert_eq!(input.next::<&str>().unwrap(), "o");
    assert_eq!(input.pos().to_string(), "4:6");
}
