//! The calculator's transition function.

use super::arithmetic::{calculate, parse_number};
use crate::core::{EngineState, EntryKey, OperatorKind, UiEvent, CAN_CHAIN};

/// Compute the state that follows `event`.
///
/// Pure and total: every event has a defined successor, and malformed
/// entry is coerced to `0` instead of failing.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{EngineState, OperatorKind, UiEvent};
/// use chaincalc::engine::process;
///
/// let events = [
///     UiEvent::digit(7).unwrap(),
///     UiEvent::Operator(OperatorKind::Add),
///     UiEvent::digit(3).unwrap(),
///     UiEvent::Operator(OperatorKind::Mul),
///     UiEvent::digit(2).unwrap(),
///     UiEvent::Equals,
/// ];
/// let state = events
///     .iter()
///     .fold(EngineState::default(), |state, event| process(&state, *event));
/// assert_eq!(state.result, 20.0);
/// ```
pub fn process(state: &EngineState, event: UiEvent) -> EngineState {
    match event {
        UiEvent::DigitOrDot(key) => enter(state, key),
        UiEvent::Backspace => {
            let mut next = state.clone();
            next.input_buffer.pop();
            next
        }
        UiEvent::ToggleSign => toggle_sign(state),
        UiEvent::Operator(op) => apply_operator(state, op),
        UiEvent::Equals => evaluate(state),
        UiEvent::ClearEntry => EngineState {
            input_buffer: String::new(),
            ..state.clone()
        },
        UiEvent::AllClear => EngineState::default(),
    }
}

fn enter(state: &EngineState, key: EntryKey) -> EngineState {
    let mut next = state.clone();
    if next.just_calculated {
        next.input_buffer.clear();
        next.just_calculated = false;
    }
    if key == EntryKey::Dot && next.input_buffer.contains('.') {
        return next;
    }
    next.input_buffer.push(key.as_char());
    next
}

fn toggle_sign(state: &EngineState) -> EngineState {
    let buffer = &state.input_buffer;
    let input_buffer = if let Some(unsigned) = buffer.strip_prefix('-') {
        unsigned.to_string()
    } else if buffer.is_empty() {
        return state.clone();
    } else {
        format!("-{buffer}")
    };
    EngineState {
        input_buffer,
        ..state.clone()
    }
}

fn apply_operator(state: &EngineState, op: OperatorKind) -> EngineState {
    let current = parse_number(&state.input_buffer);
    let mut next = state.clone();

    match (state.first_value, state.pending_op) {
        (None, _) => {
            next.first_value = Some(current);
            next.result = current;
        }
        (Some(first), Some(pending)) if CAN_CHAIN.check(state) => {
            let folded = calculate(first, pending, current);
            next.first_value = Some(folded);
            next.result = folded;
        }
        _ => {}
    }

    next.pending_op = Some(op);
    next.input_buffer.clear();
    next.just_calculated = false;
    next
}

fn evaluate(state: &EngineState) -> EngineState {
    let (Some(first), Some(op)) = (state.first_value, state.pending_op) else {
        return state.clone();
    };

    let value = calculate(first, op, parse_number(&state.input_buffer));
    EngineState {
        input_buffer: String::new(),
        first_value: Some(value),
        pending_op: None,
        result: value,
        just_calculated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_number, NumberFormat};

    fn run(events: &[UiEvent]) -> EngineState {
        events
            .iter()
            .fold(EngineState::default(), |state, event| process(&state, *event))
    }

    fn keys(text: &str) -> Vec<UiEvent> {
        text.chars()
            .filter_map(EntryKey::from_char)
            .map(UiEvent::DigitOrDot)
            .collect()
    }

    fn op(kind: OperatorKind) -> UiEvent {
        UiEvent::Operator(kind)
    }

    fn shown(state: &EngineState) -> String {
        format_number(state.result, &NumberFormat::default())
    }

    #[test]
    fn digits_append_to_buffer() {
        let state = run(&keys("12.5"));
        assert_eq!(state.input_buffer, "12.5");
        assert_eq!(state.result, 0.0);
    }

    #[test]
    fn second_dot_is_ignored() {
        let state = run(&keys("1.2.3"));
        assert_eq!(state.input_buffer, "1.23");
    }

    #[test]
    fn chained_operators_fold_left_to_right() {
        let mut events = keys("7");
        events.push(op(OperatorKind::Add));
        events.extend(keys("3"));
        events.push(op(OperatorKind::Mul));
        events.extend(keys("2"));
        events.push(UiEvent::Equals);

        let state = run(&events);
        assert_eq!(shown(&state), "20");
        assert!(state.just_calculated);
        assert!(state.pending_op.is_none());
    }

    #[test]
    fn chaining_updates_result_before_equals() {
        let mut events = keys("7");
        events.push(op(OperatorKind::Add));
        events.extend(keys("3"));
        events.push(op(OperatorKind::Mul));

        let state = run(&events);
        assert_eq!(state.result, 10.0);
        assert_eq!(state.first_value, Some(10.0));
        assert_eq!(state.pending_op, Some(OperatorKind::Mul));
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn division_by_zero_shows_error() {
        let mut events = keys("8");
        events.push(op(OperatorKind::Div));
        events.extend(keys("0"));
        events.push(UiEvent::Equals);

        let state = run(&events);
        assert_eq!(shown(&state), "Error");
        assert!(state.result.is_infinite());
    }

    #[test]
    fn equals_without_operator_is_noop() {
        let before = run(&keys("5"));
        let after = process(&before, UiEvent::Equals);
        assert_eq!(after, before);
        assert_eq!(after.result, 0.0);
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let state = EngineState::default();
        assert_eq!(process(&state, UiEvent::Backspace), state);
    }

    #[test]
    fn backspace_removes_last_character() {
        let state = process(&run(&keys("123")), UiEvent::Backspace);
        assert_eq!(state.input_buffer, "12");
    }

    #[test]
    fn toggle_sign_twice_restores_buffer() {
        let typed = run(&keys("4.2"));
        let negated = process(&typed, UiEvent::ToggleSign);
        assert_eq!(negated.input_buffer, "-4.2");
        assert_eq!(process(&negated, UiEvent::ToggleSign), typed);
    }

    #[test]
    fn toggle_sign_on_empty_buffer_is_noop() {
        let state = EngineState::default();
        assert_eq!(process(&state, UiEvent::ToggleSign), state);
    }

    #[test]
    fn digit_after_equals_starts_fresh_entry() {
        let mut events = keys("2");
        events.push(op(OperatorKind::Add));
        events.extend(keys("2"));
        events.push(UiEvent::Equals);
        let calculated = run(&events);
        assert!(calculated.just_calculated);

        let next = process(&calculated, UiEvent::digit(9).unwrap());
        assert_eq!(next.input_buffer, "9");
        assert!(!next.just_calculated);
        assert_eq!(next.result, 4.0);
    }

    #[test]
    fn operator_after_equals_continues_from_result() {
        let mut events = keys("6");
        events.push(op(OperatorKind::Mul));
        events.extend(keys("7"));
        events.push(UiEvent::Equals);
        events.push(op(OperatorKind::Sub));
        events.extend(keys("2"));
        events.push(UiEvent::Equals);

        assert_eq!(run(&events).result, 40.0);
    }

    #[test]
    fn operator_with_empty_buffer_uses_zero() {
        let state = run(&[op(OperatorKind::Add)]);
        assert_eq!(state.first_value, Some(0.0));
        assert_eq!(state.pending_op, Some(OperatorKind::Add));
    }

    #[test]
    fn repeated_operator_folds_in_zero() {
        let mut events = keys("5");
        events.push(op(OperatorKind::Mul));
        events.push(op(OperatorKind::Add));

        let state = run(&events);
        assert_eq!(state.result, 0.0);
        assert_eq!(state.pending_op, Some(OperatorKind::Add));
    }

    #[test]
    fn clear_entry_keeps_accumulator() {
        let mut events = keys("9");
        events.push(op(OperatorKind::Sub));
        events.extend(keys("4"));
        let typed = run(&events);

        let cleared = process(&typed, UiEvent::ClearEntry);
        assert!(cleared.input_buffer.is_empty());
        assert_eq!(cleared.first_value, typed.first_value);
        assert_eq!(cleared.pending_op, typed.pending_op);
        assert_eq!(cleared.result, typed.result);
    }

    #[test]
    fn all_clear_resets_everything() {
        let mut events = keys("8");
        events.push(op(OperatorKind::Div));
        events.extend(keys("0"));
        events.push(UiEvent::Equals);
        events.push(UiEvent::AllClear);

        let state = run(&events);
        assert_eq!(state, EngineState::default());
        assert!(state.is_initial());
    }

    #[test]
    fn error_propagates_until_all_clear() {
        let mut events = keys("1");
        events.push(op(OperatorKind::Div));
        events.extend(keys("0"));
        events.push(op(OperatorKind::Add));
        events.extend(keys("5"));
        events.push(UiEvent::Equals);

        assert_eq!(shown(&run(&events)), "Error");
    }

    #[test]
    fn decimal_sum_is_rounded_for_display() {
        let mut events = keys("0.1");
        events.push(op(OperatorKind::Add));
        events.extend(keys("0.2"));
        events.push(UiEvent::Equals);

        assert_eq!(shown(&run(&events)), "0.3");
    }
}
