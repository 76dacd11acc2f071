use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Top-left corner that centres a window on a monitor.
///
/// `window_size` is the outer size, frame included. A window larger than the
/// monitor is pinned to the monitor's origin.
#[must_use]
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let spare_width = monitor_size.width.saturating_sub(window_size.width);
    let spare_height = monitor_size.height.saturating_sub(window_size.height);

    PhysicalPosition::new(
        monitor_position.x + (spare_width / 2) as i32,
        monitor_position.y + (spare_height / 2) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_window_on_monitor_at_origin() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(250, 175),
        );

        assert_eq!(position, PhysicalPosition::new(835, 452));
    }

    #[test]
    fn respects_monitor_offset() {
        let position = centered_position(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(500, 350),
        );

        assert_eq!(position, PhysicalPosition::new(2310, 137));
    }

    #[test]
    fn oversized_window_is_pinned_to_monitor_origin() {
        let position = centered_position(
            PhysicalPosition::new(10, 20),
            PhysicalSize::new(200, 100),
            PhysicalSize::new(250, 175),
        );

        assert_eq!(position, PhysicalPosition::new(10, 20));
    }

    #[test]
    fn frame_decorations_move_origin_up_and_left() {
        let monitor_position = PhysicalPosition::new(0, 0);
        let monitor_size = PhysicalSize::new(1920, 1080);

        let content_only = centered_position(monitor_position, monitor_size, PhysicalSize::new(250, 175));
        let with_frame = centered_position(monitor_position, monitor_size, PhysicalSize::new(266, 214));

        assert_eq!(with_frame, PhysicalPosition::new(827, 433));
        assert!(with_frame.x < content_only.x);
        assert!(with_frame.y < content_only.y);
    }
}
