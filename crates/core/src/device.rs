//! Device annotator.
//!
//! Repeated awards of one decoration are shown as small icons ("devices")
//! on the ribbon. A [`DevicePolicy`] decides which icons appear for a given
//! award count and where, as horizontal offsets expressed as a fraction of
//! the ribbon width with 0 at the center.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::iter;

/// The closed set of device icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// A single star.
    Star,
    /// A star inside a laurel wreath, worth five stars.
    StarLaurel,
    Crown,
    FleetE,
    Wreath,
}

impl IconKind {
    pub const ALL: [IconKind; 5] = [
        IconKind::Star,
        IconKind::StarLaurel,
        IconKind::Crown,
        IconKind::FleetE,
        IconKind::Wreath,
    ];

    /// Id of the SVG symbol drawing this icon.
    pub fn symbol_id(self) -> &'static str {
        match self {
            IconKind::Star => "star",
            IconKind::StarLaurel => "star_laurel",
            IconKind::Crown => "crown",
            IconKind::FleetE => "fleet_e",
            IconKind::Wreath => "wreath",
        }
    }
}

/// A half-open range of award counts, `[start, end)`, optionally unbounded
/// above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    start: u32,
    end: Option<u32>,
}

impl CountRange {
    /// `[start, end)`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// `[start, ∞)`.
    pub const fn at_least(start: u32) -> Self {
        Self { start, end: None }
    }

    /// Exactly `n`.
    pub const fn single(n: u32) -> Self {
        Self::new(n, n + 1)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn contains(&self, n: u32) -> bool {
        n >= self.start && self.end.is_none_or(|end| n < end)
    }
}

/// One icon to draw on a ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DevicePlacement {
    pub icon: IconKind,
    /// Horizontal offset from the ribbon center, as a fraction of its width.
    pub x_offset: f64,
}

impl DevicePlacement {
    fn centered(icon: IconKind) -> Self {
        Self { icon, x_offset: 0.0 }
    }
}

struct Tier {
    range: CountRange,
    icon: IconKind,
    offsets: &'static [f64],
}

const NARROW: f64 = 1.0 / 6.0;
const WIDE: f64 = 1.0 / 3.25;

/// Stars alone on the ribbon.
const STANDARD_TIERS: &[Tier] = &[
    Tier {
        range: CountRange::single(2),
        icon: IconKind::Star,
        offsets: &[0.0],
    },
    Tier {
        range: CountRange::single(3),
        icon: IconKind::Star,
        offsets: &[-NARROW, NARROW],
    },
    Tier {
        range: CountRange::single(4),
        icon: IconKind::Star,
        offsets: &[-WIDE, 0.0, WIDE],
    },
    Tier {
        range: CountRange::new(5, 10),
        icon: IconKind::StarLaurel,
        offsets: &[0.0],
    },
    Tier {
        range: CountRange::new(10, 15),
        icon: IconKind::StarLaurel,
        offsets: &[-NARROW, NARROW],
    },
    Tier {
        range: CountRange::at_least(15),
        icon: IconKind::StarLaurel,
        offsets: &[-WIDE, 0.0, WIDE],
    },
];

/// Stars flanking a special icon that occupies the center.
const FLANKING_TIERS: &[Tier] = &[
    Tier {
        range: CountRange::single(2),
        icon: IconKind::Star,
        offsets: &[WIDE],
    },
    Tier {
        range: CountRange::new(3, 5),
        icon: IconKind::Star,
        offsets: &[-WIDE, WIDE],
    },
    Tier {
        range: CountRange::new(5, 10),
        icon: IconKind::StarLaurel,
        offsets: &[WIDE],
    },
    Tier {
        range: CountRange::at_least(10),
        icon: IconKind::StarLaurel,
        offsets: &[-WIDE, WIDE],
    },
];

/// Which devices a ribbon shows for repeated awards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevicePolicy {
    /// Never shows devices.
    None,
    /// Stars, then star-in-laurel groups.
    #[default]
    Standard,
    /// A fixed icon at the center with stars beside it.
    SpecialWithStars(IconKind),
    /// Exactly one fixed icon, whatever the count.
    One(IconKind),
    /// A fixed frame icon, then whatever the inner policy places.
    Frame {
        icon: IconKind,
        inner: Box<DevicePolicy>,
    },
}

impl DevicePolicy {
    /// Icons to draw for `count` awards, in drawing order.
    pub fn placements(&self, count: u32) -> Vec<DevicePlacement> {
        let mut out = Vec::new();
        self.place_into(count, &mut out);
        out
    }

    fn place_into(&self, count: u32, out: &mut Vec<DevicePlacement>) {
        match self {
            DevicePolicy::None => DevicePolicy::Standard.place_into(0, out),
            DevicePolicy::Standard => out.extend(tier_placements(STANDARD_TIERS, count)),
            DevicePolicy::SpecialWithStars(icon) => {
                out.push(DevicePlacement::centered(*icon));
                out.extend(tier_placements(FLANKING_TIERS, count));
            }
            DevicePolicy::One(icon) => DevicePolicy::SpecialWithStars(*icon).place_into(0, out),
            DevicePolicy::Frame { icon, inner } => {
                out.push(DevicePlacement::centered(*icon));
                inner.place_into(count, out);
            }
        }
    }

    /// Award counts in `1..=max` whose renderings differ from each other,
    /// ascending. Every other count in range looks like the nearest listed
    /// count below it.
    pub fn distinguishable_counts(&self, max: u32) -> Vec<u32> {
        match self {
            DevicePolicy::None | DevicePolicy::One(_) => tier_starts(&[], max),
            DevicePolicy::Standard => tier_starts(STANDARD_TIERS, max),
            DevicePolicy::SpecialWithStars(_) => tier_starts(FLANKING_TIERS, max),
            DevicePolicy::Frame { inner, .. } => inner.distinguishable_counts(max),
        }
    }
}

fn tier_placements(tiers: &'static [Tier], count: u32) -> impl Iterator<Item = DevicePlacement> {
    tiers
        .iter()
        .find(|tier| tier.range.contains(count))
        .into_iter()
        .flat_map(|tier| {
            tier.offsets.iter().map(move |&x_offset| DevicePlacement {
                icon: tier.icon,
                x_offset,
            })
        })
}

fn tier_starts(tiers: &[Tier], max: u32) -> Vec<u32> {
    iter::once(1)
        .chain(tiers.iter().map(|tier| tier.range.start()))
        .filter(|&n| (1..=max).contains(&n))
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .collect()
}
