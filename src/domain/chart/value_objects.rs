use derive_more::Display;

/// Outer margins around the plot area, in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20.0, right: 30.0, bottom: 30.0, left: 40.0 }
    }
}

/// Value Object - RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Direction of a candle body, carrying the chart's fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CandleDirection {
    #[display(fmt = "down")]
    Down,
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "flat")]
    Flat,
}

impl CandleDirection {
    pub fn of(open: f64, close: f64) -> Self {
        if open > close {
            Self::Down
        } else if close > open {
            Self::Up
        } else {
            Self::Flat
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Down => Color::from_hex(0xe41a1c),
            Self::Up => Color::from_hex(0x4daf4a),
            Self::Flat => Color::from_hex(0x999999),
        }
    }
}

/// Lifecycle of the chart surface. Drawing is allowed only in
/// `MountedLoadedWithData`; every transition is idempotent so repeated
/// lifecycle callbacks are harmless no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ChartPhase {
    #[default]
    #[display(fmt = "unmounted")]
    Unmounted,
    #[display(fmt = "mounted-unloaded")]
    MountedUnloaded,
    #[display(fmt = "mounted-loaded")]
    MountedLoaded,
    #[display(fmt = "mounted-loaded-with-data")]
    MountedLoadedWithData,
}

impl ChartPhase {
    /// The drawing surface exists in the view.
    pub fn mounted(self) -> Self {
        match self {
            Self::Unmounted => Self::MountedUnloaded,
            other => other,
        }
    }

    /// Renderer bootstrap finished. Further calls keep the current phase,
    /// which is the guard against duplicate library loading.
    pub fn loaded(self) -> Self {
        match self {
            Self::Unmounted | Self::MountedUnloaded => Self::MountedLoaded,
            other => other,
        }
    }

    /// A non-empty series is stored. Without a finished bootstrap the phase
    /// stays put; `loaded()` followed by `data_ready()` catches up later.
    pub fn data_ready(self) -> Self {
        match self {
            Self::MountedLoaded | Self::MountedLoadedWithData => Self::MountedLoadedWithData,
            other => other,
        }
    }

    pub fn can_draw(self) -> bool {
        self == Self::MountedLoadedWithData
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_reaches_drawable_in_either_order() {
        let via_load_first = ChartPhase::Unmounted.mounted().loaded().data_ready();
        assert!(via_load_first.can_draw());

        // Data before bootstrap: phase waits, then catches up.
        let early_data = ChartPhase::Unmounted.mounted().data_ready();
        assert_eq!(early_data, ChartPhase::MountedUnloaded);
        assert!(early_data.loaded().data_ready().can_draw());
    }

    #[test]
    fn loaded_is_idempotent() {
        let phase = ChartPhase::Unmounted.mounted().loaded();
        assert_eq!(phase.loaded(), phase);
        assert_eq!(phase.loaded().loaded(), phase);
    }

    #[test]
    fn only_full_phase_draws() {
        assert!(!ChartPhase::Unmounted.can_draw());
        assert!(!ChartPhase::MountedUnloaded.can_draw());
        assert!(!ChartPhase::MountedLoaded.can_draw());
        assert!(ChartPhase::MountedLoadedWithData.can_draw());
    }
}
