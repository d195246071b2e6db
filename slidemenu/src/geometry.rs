use serde::{Deserialize, Serialize};

/// Location in logical points relative to the host's leading/top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Host bounds in logical points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape only when strictly wider than tall.
    pub fn of(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Size class of one display axis.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum SizeClass {
    #[default]
    Unspecified,
    Compact,
    Regular,
}

/// Horizontal and vertical size classes reported by the host.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct TraitCollection {
    pub horizontal: SizeClass,
    pub vertical: SizeClass,
}

impl TraitCollection {
    pub const fn new(horizontal: SizeClass, vertical: SizeClass) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Bucket used to pick panel width and trigger offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Phone,
    LargePhone,
    Tablet,
}

impl DeviceClass {
    pub fn classify(traits: TraitCollection) -> Self {
        use SizeClass::{Compact, Regular};

        match (traits.horizontal, traits.vertical) {
            (Compact, Regular) | (Regular, Compact) => Self::LargePhone,
            (Regular, Regular) => Self::Tablet,
            _ => Self::Phone,
        }
    }
}

/// Open width of the panel for the given device class and host bounds.
pub fn panel_width(device: DeviceClass, bounds: Size) -> f32 {
    let width = bounds.width.max(0.0);
    match (device, bounds.orientation()) {
        (DeviceClass::Phone, Orientation::Portrait) => width / 2.5,
        (DeviceClass::Phone, Orientation::Landscape) => width / 3.5,
        (_, Orientation::Portrait) => width * 0.75,
        (_, Orientation::Landscape) => width * 0.45,
    }
}

/// Offsets of a floating trigger from the host's top-leading corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerOffsets {
    pub leading: f32,
    pub top: f32,
}

impl TriggerOffsets {
    pub const DEFAULT: Self = Self {
        leading: 6.0,
        top: 20.0,
    };

    pub fn for_device(device: DeviceClass, bounds: Size) -> Self {
        match (device, bounds.orientation()) {
            (DeviceClass::Phone, Orientation::Landscape) => Self {
                leading: 10.0,
                top: 16.0,
            },
            (DeviceClass::LargePhone, Orientation::Landscape) => Self {
                leading: 10.0,
                top: -1.0,
            },
            _ => Self::DEFAULT,
        }
    }
}
