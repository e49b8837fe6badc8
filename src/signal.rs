use errors::MonitorError;
use std::fmt;

pub const COLOR_GOOD: u32 = 0x00FF00;
pub const COLOR_BAD: u32 = 0xFF0000;

pub const SIGNAL_LENGTH: usize = 5;
pub const MAX_PARAM: u8 = 100;

/// Animation the tree plays. The codes are what the firmware expects, and
/// they are not in declaration order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pattern {
    Run = 1,      // Pulse
    Progress = 2, // Progress bar fill
    Done = 3,     // Spin
}

impl Pattern {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Pattern> {
        match code {
            1 => Some(Pattern::Run),
            2 => Some(Pattern::Progress),
            3 => Some(Pattern::Done),
            _ => None,
        }
    }
}

/// What the tree is currently told to show. Carried from one poll cycle to
/// the next, so a failed poll keeps the tree as it was.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignalState {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub pattern: Pattern,
    pub param: u8,
}

impl Default for SignalState {
    fn default() -> SignalState {
        SignalState {
            red: 0,
            green: 0,
            blue: 0,
            pattern: Pattern::Done,
            param: 0,
        }
    }
}

impl SignalState {
    /// Replaces the color with the channels of a 0xRRGGBB value.
    pub fn with_color(self, color: u32) -> SignalState {
        SignalState {
            red: ((color >> 16) & 0xFF) as u8,
            green: ((color >> 8) & 0xFF) as u8,
            blue: (color & 0xFF) as u8,
            ..self
        }
    }

    pub fn with_pattern(self, pattern: Pattern, param: u8) -> SignalState {
        SignalState {
            pattern: pattern,
            param: param.min(MAX_PARAM),
            ..self
        }
    }

    pub fn encode(&self) -> [u8; SIGNAL_LENGTH] {
        [
            self.red,
            self.green,
            self.blue,
            self.pattern.code(),
            self.param.min(MAX_PARAM),
        ]
    }

    pub fn decode(bytes: &[u8]) -> Result<SignalState, MonitorError> {
        if bytes.len() != SIGNAL_LENGTH {
            return Err(MonitorError::MalformedSignal {
                message: format!("expected {} bytes, got {}", SIGNAL_LENGTH, bytes.len()),
            });
        }
        let pattern = Pattern::from_code(bytes[3]).ok_or_else(|| MonitorError::MalformedSignal {
            message: format!("unknown pattern code {}", bytes[3]),
        })?;
        if bytes[4] > MAX_PARAM {
            return Err(MonitorError::MalformedSignal {
                message: format!("param {} is above {}", bytes[4], MAX_PARAM),
            });
        }
        Ok(SignalState {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
            pattern: pattern,
            param: bytes[4],
        })
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Red: {} Green: {} Blue: {} Pattern: {} Param: {}",
            self.red,
            self.green,
            self.blue,
            self.pattern.code(),
            self.param
        )
    }
}
