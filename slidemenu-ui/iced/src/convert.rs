use iced::{Color, Shadow, Vector};
use slidemenu::{PanelShadow, Point, Size, SizeClass, Tint, TraitCollection};

/// Window extent at which an axis is treated as a regular size class.
pub const REGULAR_SIZE_CLASS_MIN: f32 = 600.0;

pub fn tint_to_color(tint: Tint) -> Color {
    Color::from_rgba(tint.r, tint.g, tint.b, tint.a)
}

pub fn shadow_to_iced(shadow: PanelShadow) -> Shadow {
    Shadow {
        color: Color {
            a: shadow.opacity,
            ..Color::BLACK
        },
        offset: Vector::new(shadow.offset_x, shadow.offset_y),
        blur_radius: shadow.radius,
    }
}

pub fn point_from_iced(point: iced::Point) -> Point {
    Point::new(point.x, point.y)
}

pub fn size_from_iced(size: iced::Size) -> Size {
    Size::new(size.width, size.height)
}

/// Derive size classes from a window size, per axis.
pub fn traits_for_window(size: iced::Size) -> TraitCollection {
    let class_of = |extent: f32| {
        if extent >= REGULAR_SIZE_CLASS_MIN {
            SizeClass::Regular
        } else {
            SizeClass::Compact
        }
    };
    TraitCollection::new(class_of(size.width), class_of(size.height))
}
