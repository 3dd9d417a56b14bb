/// Frame-coalescing scroll sampler.
///
/// Scroll events can fire many times per frame. The sampler lets the first
/// one schedule an animation frame and drops the rest; when the frame runs,
/// whatever the live offset is at that moment gets published.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSampler {
    offset_y: f64,
    frame_pending: bool,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register scroll activity.
    ///
    /// Returns `true` when the caller has to schedule a frame, `false` when a
    /// frame is already pending and this event is coalesced into it.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Frame callback: store the live offset and clear the pending frame.
    pub fn publish(&mut self, live_offset: f64) -> f64 {
        self.frame_pending = false;
        // overscroll bounce reports negative offsets
        self.offset_y = if live_offset.is_finite() && live_offset > 0.0 {
            live_offset
        } else {
            0.0
        };
        self.offset_y
    }

    /// Drop a pending frame. Returns `true` if there was one to cancel.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sampler = ScrollSampler::new();
        assert_eq!(sampler.offset_y(), 0.0);
        assert!(!sampler.is_frame_pending());
    }

    #[test]
    fn test_events_coalesce_into_one_frame() {
        let mut sampler = ScrollSampler::new();

        let scheduled = (0..25).filter(|_| sampler.request_frame()).count();
        assert_eq!(scheduled, 1);
        assert!(sampler.is_frame_pending());

        // Only the value read when the frame fires is published
        assert_eq!(sampler.publish(480.0), 480.0);
        assert_eq!(sampler.offset_y(), 480.0);
        assert!(!sampler.is_frame_pending());

        // Next burst schedules a fresh frame
        assert!(sampler.request_frame());
        assert!(!sampler.request_frame());
        sampler.publish(512.5);
        assert_eq!(sampler.offset_y(), 512.5);
    }

    #[test]
    fn test_publish_clamps_invalid_offsets() {
        let mut sampler = ScrollSampler::new();
        sampler.request_frame();
        assert_eq!(sampler.publish(-35.0), 0.0);

        sampler.publish(120.0);
        sampler.publish(f64::NAN);
        assert_eq!(sampler.offset_y(), 0.0);
    }

    #[test]
    fn test_cancel_clears_pending_frame() {
        let mut sampler = ScrollSampler::new();
        assert!(!sampler.cancel());

        sampler.request_frame();
        sampler.publish(64.0);
        sampler.request_frame();
        assert!(sampler.cancel());
        assert!(!sampler.is_frame_pending());
        // Cancelling keeps the last published value
        assert_eq!(sampler.offset_y(), 64.0);
        assert!(sampler.request_frame());
    }
}
