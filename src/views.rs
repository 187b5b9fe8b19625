//! Dashboard view selection, kept apart from forecast data.
//!
//! A front end holds a [`ViewState`], feeds it [`NavigationEvent`]s and asks the
//! current view's [`ViewDescriptor`] which locations to preselect, whether to keep
//! refreshing and which hour to present.

use crate::error::WindChillError;
use crate::locations::registry::LocationRegistry;
use crate::types::forecast_config::ReferenceHour;
use crate::types::location::Location;
use serde::Serialize;

/// Locations the home view starts with.
pub const HOME_DEFAULT_SELECTION: &[&str] = &["Oslo", "Stavanger"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum View {
    #[default]
    Home,
    Leaderboard,
    Heatmap,
    ColdMeter,
    CityMap,
    ForecastTables,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Leaderboard,
        View::Heatmap,
        View::ColdMeter,
        View::CityMap,
        View::ForecastTables,
    ];

    pub fn descriptor(self) -> ViewDescriptor {
        match self {
            View::Home => ViewDescriptor {
                view: self,
                title: "Multi-City Comparison",
                default_selection: DefaultSelection::Named(HOME_DEFAULT_SELECTION),
                auto_refresh: true,
                ranking_reference: ReferenceHour::First,
            },
            View::Leaderboard => ViewDescriptor {
                view: self,
                title: "Coldest Cities Leaderboard",
                default_selection: DefaultSelection::All,
                auto_refresh: true,
                ranking_reference: ReferenceHour::Last,
            },
            View::Heatmap => ViewDescriptor {
                view: self,
                title: "Wind Chill Heatmap",
                default_selection: DefaultSelection::All,
                auto_refresh: true,
                ranking_reference: ReferenceHour::First,
            },
            View::ColdMeter => ViewDescriptor {
                view: self,
                title: "Cold Meter",
                default_selection: DefaultSelection::All,
                auto_refresh: true,
                ranking_reference: ReferenceHour::Last,
            },
            // The map is interactive; refreshing would reset pan and zoom.
            View::CityMap => ViewDescriptor {
                view: self,
                title: "City Map",
                default_selection: DefaultSelection::All,
                auto_refresh: false,
                ranking_reference: ReferenceHour::Last,
            },
            View::ForecastTables => ViewDescriptor {
                view: self,
                title: "Forecast Tables",
                default_selection: DefaultSelection::All,
                auto_refresh: true,
                ranking_reference: ReferenceHour::First,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultSelection {
    Named(&'static [&'static str]),
    All,
}

/// Static presentation settings of a [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub view: View,
    pub title: &'static str,
    pub default_selection: DefaultSelection,
    pub auto_refresh: bool,
    pub ranking_reference: ReferenceHour,
}

impl ViewDescriptor {
    /// Resolves the default selection against `registry`, in registry order for
    /// [`DefaultSelection::All`].
    ///
    /// # Errors
    ///
    /// [`WindChillError::UnknownLocation`] if a named default is missing from `registry`.
    pub fn default_locations(
        &self,
        registry: &LocationRegistry,
    ) -> Result<Vec<Location>, WindChillError> {
        match self.default_selection {
            DefaultSelection::Named(names) => registry.select(names),
            DefaultSelection::All => Ok(registry.locations().to_vec()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Open(View),
    Back,
}

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current: View,
}

impl ViewState {
    pub fn new(current: View) -> Self {
        Self { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn descriptor(&self) -> ViewDescriptor {
        self.current.descriptor()
    }

    /// `Open(v)` moves to `v`; `Back` returns home.
    pub fn apply(self, event: NavigationEvent) -> Self {
        match event {
            NavigationEvent::Open(view) => Self { current: view },
            NavigationEvent::Back => Self { current: View::Home },
        }
    }
}
