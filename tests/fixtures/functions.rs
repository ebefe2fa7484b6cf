//! LED control functions exposed to the telecommand dispatcher
use super::*;

/// Parses the arguments for turn_led
pub fn pre_turn_led(args: &Vec<u8>) -> Result<(), Error> {
    if args.len() != 1 {
        return Err(Error::InvalidArg);
    }
    turn_led(args[0] != 0)
}

/// FuncId = "turn_led"
/// Input = bool
pub fn turn_led(turn: bool) -> Result<(), Error> {
    set_pin("{user1_1}", turn)
}

/// Parses the arguments for set_led
pub fn pre_set_led(args: &Vec<u8>) -> Result<(), Error> {
    set_led(args[0], args[1] != 0)
}
/// FuncId = "set_led"
/// Input   =  u8,bool
#[inline]
pub fn set_led(led_no: u8, turn: bool) -> Result<(), Error> {
    match led_no {
        0 => set_pin("user1_1", turn),
        _ => Err(Error::InvalidArg),
    }
}

fn set_pin(name: &str, turn: bool) -> Result<(), Error> {
    Ok(())
}

pub fn reset_all() {
}
