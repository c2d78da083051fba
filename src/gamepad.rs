//! Gamepad interface
//!
//! Button layout of the controller used to trigger lighting cues, edge
//! detection over polled button states and a bounded queue that hands
//! presses from the polling thread to the script thread. Polling the device
//! itself is left to the caller.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;
use log::warn;

/// How often the device should be polled
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Number of named buttons
pub const BUTTON_COUNT: usize = 11;

/// Highest raw button index tracked by [`PressDetector`]
pub const MAX_BUTTONS: usize = 32;

const BUTTON_NAME_A: &str = "a";
const BUTTON_NAME_B: &str = "b";
const BUTTON_NAME_X: &str = "x";
const BUTTON_NAME_Y: &str = "y";
const BUTTON_NAME_LB: &str = "lb";
const BUTTON_NAME_RB: &str = "rb";
const BUTTON_NAME_BACK: &str = "back";
const BUTTON_NAME_START: &str = "start";
const BUTTON_NAME_LOGITECH: &str = "logitech";
const BUTTON_NAME_LSTICK: &str = "lstick";
const BUTTON_NAME_RSTICK: &str = "rstick";

/// Buttons by raw index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Button {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    Lb = 4,
    Rb = 5,
    Back = 6,
    Start = 7,
    Logitech = 8,
    LStick = 9,
    RStick = 10,
}

impl Button {
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::Lb,
        Self::Rb,
        Self::Back,
        Self::Start,
        Self::Logitech,
        Self::LStick,
        Self::RStick,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BUTTON_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => BUTTON_NAME_A,
            Self::B => BUTTON_NAME_B,
            Self::X => BUTTON_NAME_X,
            Self::Y => BUTTON_NAME_Y,
            Self::Lb => BUTTON_NAME_LB,
            Self::Rb => BUTTON_NAME_RB,
            Self::Back => BUTTON_NAME_BACK,
            Self::Start => BUTTON_NAME_START,
            Self::Logitech => BUTTON_NAME_LOGITECH,
            Self::LStick => BUTTON_NAME_LSTICK,
            Self::RStick => BUTTON_NAME_RSTICK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.as_str() == s)
    }
}

/// D-pad direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hat {
    Up,
    Down,
    Left,
    Right,
}

impl Hat {
    /// Map a hat position reported as `(x, y)`; diagonals and center map to
    /// nothing.
    pub const fn from_position(x: i8, y: i8) -> Option<Self> {
        match (x, y) {
            (0, 1) => Some(Self::Up),
            (0, -1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Bounded queue of pressed button indices
///
/// Safe to share between the polling thread and consumers. When full, new
/// presses are dropped.
pub struct ButtonQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<usize, SIZE>>>,
}

impl<const SIZE: usize> ButtonQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue a press. Returns `false` if the queue was full.
    pub fn push(&self, index: usize) -> bool {
        let pushed = critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().push_back(index).is_ok()
        });
        if !pushed {
            warn!("button queue full, dropping press of button {index}");
        }
        pushed
    }

    /// Take the oldest press
    pub fn pop(&self) -> Option<usize> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }
}

impl<const SIZE: usize> Default for ButtonQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge-triggered press detection
///
/// Feed it the full button state on every poll; each button is reported
/// once when it goes down and again only after it was released.
#[derive(Debug, Clone)]
pub struct PressDetector {
    down: [bool; MAX_BUTTONS],
}

impl PressDetector {
    pub const fn new() -> Self {
        Self {
            down: [false; MAX_BUTTONS],
        }
    }

    /// Update one button, returns `true` on a new press
    pub fn update(&mut self, index: usize, pressed: bool) -> bool {
        let Some(down) = self.down.get_mut(index) else {
            return false;
        };
        let is_new = pressed && !*down;
        *down = pressed;
        is_new
    }

    /// Update all buttons from one poll and queue new presses in index order
    ///
    /// Returns the number of new presses.
    pub fn poll<const SIZE: usize>(&mut self, states: &[bool], queue: &ButtonQueue<SIZE>) -> usize {
        let mut presses = 0;
        for (index, &pressed) in states.iter().enumerate() {
            if self.update(index, pressed) && queue.push(index) {
                presses += 1;
            }
        }
        presses
    }
}

impl Default for PressDetector {
    fn default() -> Self {
        Self::new()
    }
}
