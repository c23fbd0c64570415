use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TourPage {
    Home,
    Events,
    Restaurants,
    SpotDetail,
    Info,
}

impl TourPage {
    fn steps(self) -> &'static [TourStep] {
        match self {
            TourPage::Home => HOME_STEPS,
            TourPage::Events => EVENTS_STEPS,
            TourPage::Restaurants => RESTAURANTS_STEPS,
            TourPage::SpotDetail => SPOT_DETAIL_STEPS,
            TourPage::Info => INFO_STEPS,
        }
    }
}

impl FromStr for TourPage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(TourPage::Home),
            "events" => Ok(TourPage::Events),
            "restaurants" => Ok(TourPage::Restaurants),
            "spot-detail" => Ok(TourPage::SpotDetail),
            "info" => Ok(TourPage::Info),
            _ => Err(format!("Unknown tour page '{}'", s)),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PopoverSide {
    Top,
    Bottom,
}

#[derive(Debug)]
pub struct TourStep {
    pub global_step: u32,
    pub element: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: PopoverSide,
    pub navigate_to: Option<&'static str>,
    pub is_last: bool,
}

const WELCOME_STEP: u32 = 0;
const FIRST_SPOT_STEP: u32 = 5;

static HOME_STEPS: &[TourStep] = &[
    TourStep { global_step: 0, element: "[data-tour=\"welcome\"]", title: "Welcome!", description: "Let us show you around the app.", side: PopoverSide::Bottom, navigate_to: None, is_last: false },
    TourStep { global_step: 1, element: "[data-tour=\"wifi\"]", title: "Your WiFi Details", description: "Tap the password to copy it instantly!", side: PopoverSide::Bottom, navigate_to: None, is_last: false },
    TourStep { global_step: 2, element: "[data-tour=\"nav-events\"]", title: "Events", description: "Let's check out what's happening...", side: PopoverSide::Top, navigate_to: Some("/events"), is_last: false },
];

static EVENTS_STEPS: &[TourStep] = &[
    TourStep { global_step: 3, element: "[data-tour=\"events-list\"]", title: "Daily Events", description: "See activities planned for the week!", side: PopoverSide::Bottom, navigate_to: None, is_last: false },
    TourStep { global_step: 4, element: "[data-tour=\"nav-explore\"]", title: "Explore", description: "Now let's find some good food...", side: PopoverSide::Top, navigate_to: Some("/restaurants"), is_last: false },
];

static RESTAURANTS_STEPS: &[TourStep] = &[
    // Navigation target is the first spot, filled in per request
    TourStep { global_step: 5, element: "[data-tour=\"first-spot\"]", title: "Local Spots", description: "Tap any spot to see details...", side: PopoverSide::Bottom, navigate_to: None, is_last: false },
];

static SPOT_DETAIL_STEPS: &[TourStep] = &[
    TourStep { global_step: 6, element: "[data-tour=\"directions-btn\"]", title: "Get Directions", description: "Open in Maps with one tap!", side: PopoverSide::Top, navigate_to: Some("/info"), is_last: false },
];

static INFO_STEPS: &[TourStep] = &[
    TourStep { global_step: 7, element: "[data-tour=\"house-rules\"]", title: "House Rules", description: "One last thing! Please read our house rules. Enjoy your stay!", side: PopoverSide::Bottom, navigate_to: None, is_last: true },
];

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourOptions {
    pub hostel_name: Option<String>,
    pub first_spot_url: Option<String>,
}

/// A step ready to hand to the popover driver.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedStep {
    pub global_step: u32,
    pub element: String,
    pub title: String,
    pub description: String,
    pub side: PopoverSide,
    pub navigate_to: Option<String>,
    pub is_last: bool,
    pub first_on_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourTransition {
    MoveNext,
    MovePrevious,
    Navigate(String),
    HistoryBack,
    Finish,
}

/// Persisted onboarding progress of one visitor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourProgress {
    pub current_step: u32,
    pub completed: bool,
}

impl TourProgress {
    /// Steps to show on `page`, starting at the current one, or `None` when the tour is not on this page.
    pub fn steps_for_page(&self, page: TourPage, options: &TourOptions) -> Option<Vec<PlannedStep>> {
        if self.completed {
            return None;
        }

        let steps = page.steps();
        let (first, last) = (steps.first()?, steps.last()?);
        if self.current_step < first.global_step || self.current_step > last.global_step {
            return None;
        }

        let start = steps.iter().position(|s| s.global_step == self.current_step)?;

        let planned = steps[start..].iter()
            .enumerate()
            .map(|(offset, step)| {
                let title = match (&options.hostel_name, step.global_step) {
                    (Some(name), WELCOME_STEP) => format!("Welcome to {}!", name),
                    _ => step.title.to_string(),
                };
                let navigate_to = match (&options.first_spot_url, step.global_step) {
                    (Some(url), FIRST_SPOT_STEP) if page == TourPage::Restaurants => Some(url.clone()),
                    _ => step.navigate_to.map(str::to_string),
                };
                PlannedStep {
                    global_step: step.global_step,
                    element: step.element.to_string(),
                    title,
                    description: step.description.to_string(),
                    side: step.side,
                    navigate_to,
                    is_last: step.is_last,
                    first_on_page: start + offset == 0,
                }
            })
            .collect();

        Some(planned)
    }

    pub fn next(&mut self, step: &PlannedStep) -> TourTransition {
        self.current_step = step.global_step + 1;

        if step.is_last {
            self.mark_completed();
            TourTransition::Finish
        } else if let Some(url) = &step.navigate_to {
            TourTransition::Navigate(url.clone())
        } else {
            TourTransition::MoveNext
        }
    }

    pub fn previous(&mut self, step: &PlannedStep) -> Option<TourTransition> {
        if step.global_step == 0 {
            return None;
        }
        self.current_step = step.global_step - 1;

        if step.first_on_page {
            Some(TourTransition::HistoryBack)
        } else {
            Some(TourTransition::MovePrevious)
        }
    }

    pub fn skip(&mut self) {
        self.mark_completed();
    }

    pub fn reset(&mut self) {
        *self = TourProgress::default();
    }

    fn mark_completed(&mut self) {
        self.completed = true;
        self.current_step = 0;
    }
}
