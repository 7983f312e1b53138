//! Mouse payload decoding and resize hit-zones

/// Button that produced a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// Positive deltas scroll up; zero and negative deltas scroll down
    pub fn from_delta(delta: i16) -> Self {
        if delta > 0 { WheelDirection::Up } else { WheelDirection::Down }
    }
}

/// Splits a packed message parameter into its low and high unsigned words
pub fn split_coords(packed: isize) -> (i32, i32) {
    let packed = packed as usize;
    let low = (packed & 0xffff) as u16;
    let high = ((packed >> 16) & 0xffff) as u16;
    (low as i32, high as i32)
}

/// High word of a packed parameter as a signed value (wheel delta)
pub fn high_word_signed(packed: usize) -> i16 {
    ((packed >> 16) & 0xffff) as u16 as i16
}

const HT_BOTTOM: isize = 15;
const HT_BOTTOM_LEFT: isize = 16;
const HT_BOTTOM_RIGHT: isize = 17;

/// Non-client hit-test result, reduced to the zones resizing cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Bottom,
    BottomLeft,
    BottomRight,
    Other(isize),
}

impl HitZone {
    pub fn from_code(code: isize) -> Self {
        match code {
            HT_BOTTOM => HitZone::Bottom,
            HT_BOTTOM_LEFT => HitZone::BottomLeft,
            HT_BOTTOM_RIGHT => HitZone::BottomRight,
            other => HitZone::Other(other),
        }
    }

    pub fn code(self) -> isize {
        match self {
            HitZone::Bottom => HT_BOTTOM,
            HitZone::BottomLeft => HT_BOTTOM_LEFT,
            HitZone::BottomRight => HT_BOTTOM_RIGHT,
            HitZone::Other(code) => code,
        }
    }

    /// Collapses the bottom corners onto the bottom edge so only a plain
    /// vertical drag resizes from below
    pub fn restrict_to_bottom_edge(self) -> Self {
        match self {
            HitZone::Bottom | HitZone::BottomLeft | HitZone::BottomRight => HitZone::Bottom,
            other => other,
        }
    }
}
