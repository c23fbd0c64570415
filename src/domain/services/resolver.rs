use chrono::Datelike;
use crate::domain::models::{
    activity::Activity, event_ref::EventRef, schedule::{TimeRange, WeeklySchedule},
    scheduled_event::ScheduledEvent, special_event::SpecialEvent,
};

/// Rebuilds the feed entry behind a display id without generating the whole feed.
///
/// An id ending in `-YYYY-MM-DD` whose prefix names an activity resolves to that activity on that
/// date, timed by the first slot for it on that weekday, or all day when the weekday has no such slot.
/// Anything else is looked up verbatim among the special events.
pub fn resolve_event(
    display_id: &str,
    activities: &[Activity],
    schedule: &WeeklySchedule,
    special_events: &[SpecialEvent],
) -> Option<ScheduledEvent> {
    if let EventRef::Recurring { activity_id, date } = EventRef::parse(display_id)
        && let Some(activity) = activities.iter().find(|a| a.id == activity_id) {
        let times = schedule.slots_for(date.weekday())
            .iter()
            .find(|s| s.activity_id == activity_id)
            .map(|s| s.times)
            .unwrap_or(TimeRange::AllDay);
        return Some(ScheduledEvent::occurrence(activity, date, times));
    }

    special_events.iter()
        .find(|e| e.id == display_id)
        .map(ScheduledEvent::special)
}
