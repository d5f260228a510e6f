//! Pointer feedback and drag actions for hit-test zones.

use winit::window::{CursorIcon, ResizeDirection, Window};

use mullion_core::hit_test::HitZone;

/// The winit resize direction for a resize zone, `None` for anything else.
pub fn resize_direction(zone: HitZone) -> Option<ResizeDirection> {
    match zone {
        HitZone::TopLeft => Some(ResizeDirection::NorthWest),
        HitZone::Top => Some(ResizeDirection::North),
        HitZone::TopRight => Some(ResizeDirection::NorthEast),
        HitZone::Left => Some(ResizeDirection::West),
        HitZone::Right => Some(ResizeDirection::East),
        HitZone::BottomLeft => Some(ResizeDirection::SouthWest),
        HitZone::Bottom => Some(ResizeDirection::South),
        HitZone::BottomRight => Some(ResizeDirection::SouthEast),
        HitZone::Caption | HitZone::Client | HitZone::Transparent => None,
    }
}

/// The cursor to display while hovering a zone.
pub fn cursor_for_zone(zone: HitZone) -> CursorIcon {
    match zone {
        HitZone::Top | HitZone::Bottom => CursorIcon::NsResize,
        HitZone::Left | HitZone::Right => CursorIcon::EwResize,
        HitZone::TopLeft | HitZone::BottomRight => CursorIcon::NwseResize,
        HitZone::TopRight | HitZone::BottomLeft => CursorIcon::NeswResize,
        HitZone::Caption | HitZone::Client | HitZone::Transparent => CursorIcon::Default,
    }
}

/// Start the window interaction a pressed zone implies: a move drag for the
/// caption, a resize drag for border zones, nothing for the rest.
///
/// Returns `true` if a drag was started. Drag failures (some platforms
/// reject drags outside a mouse-button press) are logged and reported as
/// `false`; the window stays responsive either way.
pub fn perform_zone_action(window: &Window, zone: HitZone) -> bool {
    let result = if let Some(direction) = resize_direction(zone) {
        window.drag_resize_window(direction)
    } else if zone.is_draggable() {
        window.drag_window()
    } else {
        return false;
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(?zone, %err, "window drag rejected by the platform");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_directions() {
        assert_eq!(
            resize_direction(HitZone::TopLeft),
            Some(ResizeDirection::NorthWest)
        );
        assert_eq!(
            resize_direction(HitZone::Bottom),
            Some(ResizeDirection::South)
        );
        assert_eq!(resize_direction(HitZone::Caption), None);
        assert_eq!(resize_direction(HitZone::Client), None);
    }

    #[test]
    fn test_cursor_shapes() {
        assert_eq!(cursor_for_zone(HitZone::Top), CursorIcon::NsResize);
        assert_eq!(cursor_for_zone(HitZone::Left), CursorIcon::EwResize);
        assert_eq!(cursor_for_zone(HitZone::TopLeft), CursorIcon::NwseResize);
        assert_eq!(cursor_for_zone(HitZone::BottomLeft), CursorIcon::NeswResize);
        assert_eq!(cursor_for_zone(HitZone::Caption), CursorIcon::Default);
    }
}
