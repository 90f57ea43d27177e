//! Note durations and their conversion to absolute time
//!
//! A duration is a note value (whole, half, ... sixty-fourth) with an optional
//! dot and tuplet. Absolute time is measured in ticks with a quarter note
//! worth [`QUARTER_TIME`] ticks.

use serde::{Deserialize, Serialize};

/// Ticks in a quarter note
pub const QUARTER_TIME: u32 = 960;

pub const WHOLE: u8 = 1;
pub const HALF: u8 = 2;
pub const QUARTER: u8 = 4;
pub const EIGHTH: u8 = 8;
pub const SIXTEENTH: u8 = 16;
pub const THIRTY_SECOND: u8 = 32;
pub const SIXTY_FOURTH: u8 = 64;

/// Tuplet ratio: `enters` notes are played in the time of `times`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuplet {
    pub enters: u32,
    pub times: u32,
}

impl Tuplet {
    pub const NONE: Tuplet = Tuplet { enters: 1, times: 1 };
    pub const TRIPLET: Tuplet = Tuplet { enters: 3, times: 2 };

    /// Scale a plain duration time by this tuplet ratio
    pub fn convert_time(&self, time: u32) -> u32 {
        time * self.times / self.enters
    }
}

impl Default for Tuplet {
    fn default() -> Self {
        Tuplet::NONE
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Duration {
    /// Note value as a divisor of the whole note (1, 2, 4, ... 64)
    pub value: u8,
    #[serde(default)]
    pub dotted: bool,
    #[serde(default)]
    pub tuplet: Tuplet,
}

impl Default for Duration {
    fn default() -> Self {
        Self::new(QUARTER)
    }
}

impl Duration {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            dotted: false,
            tuplet: Tuplet::NONE,
        }
    }

    pub fn dotted(value: u8) -> Self {
        Self {
            dotted: true,
            ..Self::new(value)
        }
    }

    /// Shortest representable duration; never rounded below
    pub fn shortest() -> Self {
        Self::new(SIXTY_FOURTH)
    }

    /// Whether this is a note value from whole to sixty-fourth with a usable
    /// tuplet ratio
    pub fn is_valid(&self) -> bool {
        self.value.is_power_of_two() && self.value <= SIXTY_FOURTH && self.tuplet.enters > 0
    }

    /// Duration length in ticks
    ///
    /// Only meaningful for durations where [`Duration::is_valid`] holds.
    pub fn time(&self) -> u32 {
        let mut time = QUARTER_TIME * 4 / self.value as u32;
        if self.dotted {
            time += time / 2;
        }
        self.tuplet.convert_time(time)
    }

    /// Find the duration whose time best matches `time` without exceeding it
    ///
    /// Candidates run from a dotted whole down to a sixty-fourth; for every
    /// note value the dotted, plain and triplet forms are tried. If no
    /// candidate fits, `minimum` is returned. A fitting candidate shorter than
    /// `minimum` still wins when it is closer to `time`, so a triplet
    /// sixty-fourth can come back for times just under a plain one.
    ///
    /// ```
    /// use gptab_tools::models::duration::{Duration, HALF};
    ///
    /// assert_eq!(Duration::from_time(1920, Duration::shortest()), Duration::new(HALF));
    /// ```
    pub fn from_time(time: u32, minimum: Duration) -> Duration {
        let mut best = minimum;
        let mut candidate = Duration::dotted(WHOLE);

        loop {
            let candidate_time = candidate.time();
            if candidate_time <= time
                && candidate_time.abs_diff(time) < best.time().abs_diff(time)
            {
                best = candidate;
            }

            if candidate.dotted {
                candidate.dotted = false;
            } else if candidate.tuplet == Tuplet::NONE {
                candidate.tuplet = Tuplet::TRIPLET;
            } else {
                candidate = Duration::dotted(candidate.value * 2);
            }

            if candidate.value > SIXTY_FOURTH {
                break;
            }
        }

        best
    }
}
