use calctk::{
    SENTINEL,
    history::History,
    keypad::{INITIAL_ENTRY, Key, Keypad, KeypadError, MAX_ENTRY_LEN, Operator},
};

fn typed(keys: &str) -> Keypad {
    let mut keypad = Keypad::new();
    keypad.press_all(keys)
          .unwrap_or_else(|e| panic!("Failed to press {keys:?}: {e}"));
    keypad
}

#[test]
fn starts_at_zero_and_first_digit_replaces_it() {
    assert_eq!(Keypad::new().entry(), INITIAL_ENTRY);
    assert_eq!(typed("7").entry(), "7");
    assert_eq!(typed("00").entry(), "0");
    assert_eq!(typed("305").entry(), "305");
}

#[test]
fn operators_are_never_doubled() {
    assert_eq!(typed("5+*").entry(), "5+");
    assert_eq!(typed("5*/-").entry(), "5*");
    assert_eq!(typed("2^-").entry(), "2**");
    assert_eq!(typed("2^3").entry(), "2**3");
    assert_eq!(typed("0+").entry(), "0+");
}

#[test]
fn dot_follows_digits_only() {
    assert_eq!(typed(".").entry(), "0.");
    assert_eq!(typed("1..").entry(), "1.");
    assert_eq!(typed("1+.").entry(), "1+");
    assert_eq!(typed("1.5").entry(), "1.5");
}

#[test]
fn parentheses_open_after_operators_and_close_when_balanced() {
    assert_eq!(typed("(").entry(), "(");
    assert_eq!(typed("5(").entry(), "5");
    assert_eq!(typed("5*(").entry(), "5*(");
    assert_eq!(typed("(2").entry(), "(2");
    assert_eq!(typed("()").entry(), "(");
    assert_eq!(typed("(2))").entry(), "(2)");
    assert_eq!(typed("2)").entry(), "2");
    assert_eq!(typed("(1+)").entry(), "(1+");
}

#[test]
fn entry_stops_growing_at_the_limit() {
    let keypad = typed(&"1".repeat(MAX_ENTRY_LEN + 5));
    assert_eq!(keypad.entry(), "1".repeat(MAX_ENTRY_LEN));

    let mut keypad = keypad;
    keypad.press(Key::Operator(Operator::Add));
    keypad.press(Key::Dot);
    assert_eq!(keypad.entry().len(), MAX_ENTRY_LEN);
}

#[test]
fn backspace_and_clear() {
    assert_eq!(typed("12<").entry(), "1");
    assert_eq!(typed("12<<").entry(), "0");
    assert_eq!(typed("<").entry(), "0");
    assert_eq!(typed("2^<").entry(), "2*");
    assert_eq!(typed("12+3c").entry(), INITIAL_ENTRY);
}

#[test]
fn equals_shows_the_formatted_result() {
    assert_eq!(typed("12+3*(4-1)=").entry(), "21");
    assert_eq!(typed("4/2=").entry(), "2.0");
    assert_eq!(typed("9r=").entry(), "3.0");
    assert_eq!(typed("2^100=").entry(), "1.26765E+30");
    assert_eq!(typed("1+1=+3=").entry(), "5");
}

#[test]
fn failed_evaluation_locks_the_entry_until_a_digit_or_clear() {
    let mut keypad = typed("1/0=");
    assert!(keypad.is_error());
    assert_eq!(keypad.entry(), SENTINEL);

    keypad.press_all("+.()<=").unwrap();
    assert_eq!(keypad.entry(), SENTINEL);

    keypad.press(Key::Digit(4));
    assert_eq!(keypad.entry(), "4");
    assert!(!keypad.is_error());

    keypad.press_all("1.=c").unwrap();
    assert_eq!(keypad.entry(), INITIAL_ENTRY);
    assert!(typed("(1+=").is_error());
}

#[test]
fn successful_calculations_are_recorded() {
    let keypad = typed("1+1= c 2^3= c 1/0=");
    let recorded: Vec<_> = keypad.history()
                                 .iter()
                                 .map(|e| (e.expression.as_str(), e.result.as_str()))
                                 .collect();

    assert_eq!(recorded, vec![("1+1", "2"), ("2**3", "8")]);
}

#[test]
fn recall_puts_an_old_expression_back() {
    let mut keypad = typed("6*7= c 1+2=");

    assert!(keypad.recall(0));
    assert_eq!(keypad.entry(), "6*7");
    keypad.press_all("+1=").unwrap();
    assert_eq!(keypad.entry(), "43");

    assert!(!keypad.recall(10));
    assert_eq!(keypad.entry(), "43");
}

#[test]
fn shared_history_is_bounded() {
    let mut keypad = Keypad::with_history(History::with_limit(2));
    keypad.press_all("1= c 2= c 3=").unwrap();

    assert_eq!(keypad.history().len(), 2);
    assert_eq!(keypad.history().get(0).unwrap().expression, "2");

    keypad.history_mut().clear();
    assert!(keypad.history().is_empty());
}

#[test]
fn out_of_range_digits_are_ignored() {
    let mut keypad = Keypad::new();
    keypad.press(Key::Digit(42));
    assert_eq!(keypad.entry(), INITIAL_ENTRY);

    keypad.press_all("7").unwrap();
    keypad.press(Key::Digit(10));
    assert_eq!(keypad.entry(), "7");

    let mut keypad = typed("1/0=");
    keypad.press(Key::Digit(200));
    assert_eq!(keypad.entry(), SENTINEL);
}

#[test]
fn unknown_keys_stop_the_input() {
    let mut keypad = Keypad::new();
    let result = keypad.press_all("12x3");

    assert_eq!(result, Err(KeypadError::UnknownKey('x')));
    assert_eq!(keypad.entry(), "12");
    assert_eq!(Key::try_from('%'), Err(KeypadError::UnknownKey('%')));
    assert_eq!(Key::try_from('r'), Ok(Key::Operator(Operator::SquareRoot)));
}
