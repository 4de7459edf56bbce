//! Scripted driving.
//!
//! A script is a list of segments, each holding one input for a number of
//! ticks. Playback loops once the last segment runs out.

use kart::KartInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub ticks: u32,
    #[serde(default)]
    pub input: KartInput,
}

impl Segment {
    #[must_use]
    pub const fn new(ticks: u32, input: KartInput) -> Self {
        Self { ticks, input }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriveScript {
    segments: Vec<Segment>,
}

impl DriveScript {
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Accelerate, hop, use the air jump, carve a turn, then coast.
    #[must_use]
    pub fn demo() -> Self {
        let drive = KartInput::throttle(1.0);
        Self::new(vec![
            Segment::new(50, drive),
            Segment::new(1, drive.with_jump(true)),
            Segment::new(10, drive),
            Segment::new(1, drive.with_jump(true)),
            Segment::new(60, drive.with_steering(0.5)),
            Segment::new(100, KartInput::default()),
        ])
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Ticks in one pass of the script.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Input held on `tick`. An empty script idles.
    #[must_use]
    pub fn input_at(&self, tick: u64) -> KartInput {
        let len = self.len();
        if len == 0 {
            return KartInput::default();
        }
        let mut offset = tick % len;
        for segment in &self.segments {
            let ticks = u64::from(segment.ticks);
            if offset < ticks {
                return segment.input;
            }
            offset -= ticks;
        }
        KartInput::default()
    }
}
