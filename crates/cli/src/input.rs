//! Raw-terminal keyboard handling for the interactive mode.
//!
//! Raw mode is unix-only (termios via libc); elsewhere the terminal stays
//! line-buffered and each key needs a trailing Enter.

use tessera_core::Direction;

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    /// Hand the next move to the engine.
    AutoPick,
    Quit,
    None,
}

pub fn parse_input(bytes: &[u8]) -> Key {
    match bytes {
        // Arrow keys arrive as three-byte escape sequences
        [27, 91, 65] => Key::Move(Direction::Up),
        [27, 91, 66] => Key::Move(Direction::Down),
        [27, 91, 67] => Key::Move(Direction::Right),
        [27, 91, 68] => Key::Move(Direction::Left),

        [b'w'] | [b'W'] => Key::Move(Direction::Up),
        [b's'] | [b'S'] => Key::Move(Direction::Down),
        [b'a'] | [b'A'] => Key::Move(Direction::Left),
        [b'd'] | [b'D'] => Key::Move(Direction::Right),

        [b'p'] | [b'P'] => Key::AutoPick,

        // q, Ctrl+C, Esc
        [b'q'] | [b'Q'] | [3] | [27] => Key::Quit,

        _ => Key::None,
    }
}

/// The wasd letter for a direction, used in the hint line.
pub fn key_for(direction: Direction) -> char {
    match direction {
        Direction::Up => 'w',
        Direction::Left => 'a',
        Direction::Down => 's',
        Direction::Right => 'd',
    }
}

/// Keeps stdin in raw mode until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Self {
        enable_raw_mode();
        RawModeGuard
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        disable_raw_mode();
    }
}

#[cfg(unix)]
fn enable_raw_mode() {
    use std::os::unix::io::AsRawFd;
    unsafe {
        let fd = std::io::stdin().as_raw_fd();
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios.c_lflag &= !(libc::ICANON | libc::ECHO);
        termios.c_cc[libc::VMIN] = 1;
        termios.c_cc[libc::VTIME] = 0;
        libc::tcsetattr(fd, libc::TCSANOW, &termios);
    }
}

#[cfg(unix)]
fn disable_raw_mode() {
    use std::os::unix::io::AsRawFd;
    unsafe {
        let fd = std::io::stdin().as_raw_fd();
        let mut termios: libc::termios = std::mem::zeroed();
        libc::tcgetattr(fd, &mut termios);
        termios.c_lflag |= libc::ICANON | libc::ECHO;
        libc::tcsetattr(fd, libc::TCSANOW, &termios);
    }
}

#[cfg(not(unix))]
fn enable_raw_mode() {}

#[cfg(not(unix))]
fn disable_raw_mode() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_maps_to_directions() {
        assert_eq!(parse_input(b"w"), Key::Move(Direction::Up));
        assert_eq!(parse_input(b"a"), Key::Move(Direction::Left));
        assert_eq!(parse_input(b"s"), Key::Move(Direction::Down));
        assert_eq!(parse_input(b"d"), Key::Move(Direction::Right));
        assert_eq!(parse_input(b"D"), Key::Move(Direction::Right));
    }

    #[test]
    fn test_arrow_escape_sequences() {
        assert_eq!(parse_input(&[27, 91, 65]), Key::Move(Direction::Up));
        assert_eq!(parse_input(&[27, 91, 66]), Key::Move(Direction::Down));
        assert_eq!(parse_input(&[27, 91, 67]), Key::Move(Direction::Right));
        assert_eq!(parse_input(&[27, 91, 68]), Key::Move(Direction::Left));
    }

    #[test]
    fn test_quit_and_autopick_keys() {
        assert_eq!(parse_input(b"q"), Key::Quit);
        assert_eq!(parse_input(b"Q"), Key::Quit);
        assert_eq!(parse_input(&[3]), Key::Quit);
        assert_eq!(parse_input(&[27]), Key::Quit);
        assert_eq!(parse_input(b"p"), Key::AutoPick);
    }

    #[test]
    fn test_unknown_bytes_ignored() {
        assert_eq!(parse_input(b"x"), Key::None);
        assert_eq!(parse_input(&[]), Key::None);
        assert_eq!(parse_input(&[27, 91, 70]), Key::None);
    }

    #[test]
    fn test_key_for_round_trips_through_parse() {
        for direction in Direction::ALL {
            let byte = [key_for(direction) as u8];
            assert_eq!(parse_input(&byte), Key::Move(direction));
        }
    }
}
