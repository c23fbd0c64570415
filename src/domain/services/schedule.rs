use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use tracing::warn;
use crate::domain::models::{
    activity::Activity, schedule::WeeklySchedule,
    scheduled_event::ScheduledEvent, special_event::SpecialEvent,
};

/// Projects the weekly schedule onto `window_days` calendar days starting at `today`, merges in the
/// special events of those days and returns the feed ordered by date, then all-day entries, then
/// start time. Entries that tie keep their generation order (recurring before special).
pub fn build_schedule(
    activities: &[Activity],
    schedule: &WeeklySchedule,
    special_events: &[SpecialEvent],
    window_days: u32,
    today: NaiveDate,
) -> Vec<ScheduledEvent> {
    let mut activity_map: HashMap<&str, &Activity> = HashMap::with_capacity(activities.len());
    for activity in activities {
        activity_map.entry(activity.id.as_str()).or_insert(activity);
    }

    let mut events = Vec::new();

    for date in today.iter_days().take(window_days as usize) {
        for slot in schedule.slots_for(date.weekday()) {
            match activity_map.get(slot.activity_id.as_str()) {
                Some(activity) => events.push(ScheduledEvent::occurrence(activity, date, slot.times)),
                None => warn!("Schedule slot on {} references unknown activity '{}'", date, slot.activity_id),
            }
        }

        events.extend(
            special_events.iter()
                .filter(|e| e.date == date)
                .map(ScheduledEvent::special)
        );
    }

    // Vec::sort_by is stable; None (all day) orders before any start time.
    events.sort_by(|a, b| {
        a.date.cmp(&b.date)
            .then_with(|| a.times.start().cmp(&b.times.start()))
    });
    events
}
