/// Snap behaviour requested for an interactive point pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectSnapTypes {
    /// Accept the raw viewport intersection unmodified.
    #[default]
    None,
    /// Snap to the nearest element endpoint within the snap radius.
    Endpoints,
}

/// Endpoint snap capture radius in internal units (decimal feet).
pub const ENDPOINT_SNAP_RADIUS: f32 = 1.0;
