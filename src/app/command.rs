use super::action::Action;
use std::time::Duration;

/// Side effects the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Send the action back into the loop once the duration has elapsed.
    Delay(Duration, Box<Action>),
}
