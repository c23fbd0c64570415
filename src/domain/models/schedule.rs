use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

const TIME_FORMAT: &str = "%H:%M";

/// Start and end of an occurrence. Both ends are set or neither is.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "TimeFields", into = "TimeFields")]
pub enum TimeRange {
    AllDay,
    Timed { start: NaiveTime, end: NaiveTime },
}

impl TimeRange {
    pub fn start(&self) -> Option<NaiveTime> {
        match self {
            TimeRange::AllDay => None,
            TimeRange::Timed { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveTime> {
        match self {
            TimeRange::AllDay => None,
            TimeRange::Timed { end, .. } => Some(*end),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, TimeRange::AllDay)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::AllDay => write!(f, "all day"),
            TimeRange::Timed { start, end } => {
                write!(f, "{}-{}", start.format(TIME_FORMAT), end.format(TIME_FORMAT))
            }
        }
    }
}

// Wire shape of a time range: two nullable "HH:MM" strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
struct TimeFields {
    start_time: Option<String>,
    end_time: Option<String>,
}

impl TryFrom<TimeFields> for TimeRange {
    type Error = String;

    fn try_from(fields: TimeFields) -> Result<Self, Self::Error> {
        match (fields.start_time, fields.end_time) {
            (None, None) => Ok(TimeRange::AllDay),
            (Some(start), Some(end)) => {
                let start = NaiveTime::parse_from_str(&start, TIME_FORMAT)
                    .map_err(|_| format!("invalid startTime '{}', expected HH:MM", start))?;
                let end = NaiveTime::parse_from_str(&end, TIME_FORMAT)
                    .map_err(|_| format!("invalid endTime '{}', expected HH:MM", end))?;
                Ok(TimeRange::Timed { start, end })
            }
            _ => Err("startTime and endTime must both be set or both be null".to_string()),
        }
    }
}

impl From<TimeRange> for TimeFields {
    fn from(range: TimeRange) -> Self {
        Self {
            start_time: range.start().map(|t| t.format(TIME_FORMAT).to_string()),
            end_time: range.end().map(|t| t.format(TIME_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub activity_id: String,
    #[serde(flatten)]
    pub times: TimeRange,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct WeeklySchedule {
    pub sunday: Option<Vec<ScheduleSlot>>,
    pub monday: Option<Vec<ScheduleSlot>>,
    pub tuesday: Option<Vec<ScheduleSlot>>,
    pub wednesday: Option<Vec<ScheduleSlot>>,
    pub thursday: Option<Vec<ScheduleSlot>>,
    pub friday: Option<Vec<ScheduleSlot>>,
    pub saturday: Option<Vec<ScheduleSlot>>,
}

impl WeeklySchedule {
    /// Slots for a weekday in display order.
    pub fn slots_for(&self, weekday: Weekday) -> &[ScheduleSlot] {
        let slots = match weekday {
            Weekday::Sun => &self.sunday,
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
        };
        slots.as_deref().unwrap_or(&[])
    }

    /// First activity listed twice on the same weekday. Occurrence ids are only unique per
    /// activity and date, so such a schedule cannot be rendered.
    pub fn repeated_slot(&self) -> Option<(Weekday, &str)> {
        const WEEK: [Weekday; 7] = [
            Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
            Weekday::Thu, Weekday::Fri, Weekday::Sat,
        ];
        WEEK.into_iter().find_map(|weekday| {
            let slots = self.slots_for(weekday);
            slots.iter()
                .enumerate()
                .find(|(i, slot)| slots[..*i].iter().any(|s| s.activity_id == slot.activity_id))
                .map(|(_, slot)| (weekday, slot.activity_id.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slot_parses_timed_and_all_day() {
        let timed: ScheduleSlot = serde_json::from_value(json!({
            "activityId": "yoga", "startTime": "07:30", "endTime": "08:15"
        })).unwrap();
        assert_eq!(timed.times.start(), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(timed.times.end(), NaiveTime::from_hms_opt(8, 15, 0));

        let all_day: ScheduleSlot = serde_json::from_value(json!({
            "activityId": "market", "startTime": null, "endTime": null
        })).unwrap();
        assert!(all_day.times.is_all_day());
    }

    #[test]
    fn test_half_specified_times_are_rejected() {
        let res = serde_json::from_value::<ScheduleSlot>(json!({
            "activityId": "yoga", "startTime": "07:30", "endTime": null
        }));
        assert!(res.is_err());

        let res = serde_json::from_value::<ScheduleSlot>(json!({
            "activityId": "yoga", "startTime": "7.30pm", "endTime": "20:00"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_unknown_day_key_is_rejected() {
        let res = serde_json::from_value::<WeeklySchedule>(json!({
            "monday": [],
            "funday": [{"activityId": "yoga", "startTime": null, "endTime": null}]
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_times_serialize_back_to_wire_format() {
        let slot = ScheduleSlot {
            activity_id: "yoga".into(),
            times: TimeRange::Timed {
                start: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
                end: NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
            },
        };
        let value = serde_json::to_value(&slot).unwrap();
        assert_eq!(value, json!({"activityId": "yoga", "startTime": "07:30", "endTime": "08:15"}));
    }

    #[test]
    fn test_repeated_activity_on_a_weekday_is_detected() {
        let schedule: WeeklySchedule = serde_json::from_value(json!({
            "monday": [{"activityId": "yoga", "startTime": "07:30", "endTime": "08:15"}],
            "friday": [
                {"activityId": "yoga", "startTime": "07:30", "endTime": "08:15"},
                {"activityId": "quiz", "startTime": null, "endTime": null},
                {"activityId": "yoga", "startTime": "18:00", "endTime": "18:45"}
            ]
        })).unwrap();
        assert_eq!(schedule.repeated_slot(), Some((Weekday::Fri, "yoga")));

        let weekly: WeeklySchedule = serde_json::from_value(json!({
            "monday": [{"activityId": "yoga", "startTime": null, "endTime": null}],
            "tuesday": [{"activityId": "yoga", "startTime": null, "endTime": null}]
        })).unwrap();
        assert_eq!(weekly.repeated_slot(), None);
    }

    #[test]
    fn test_missing_day_has_no_slots() {
        let schedule: WeeklySchedule = serde_json::from_value(json!({"monday": null})).unwrap();
        assert!(schedule.slots_for(Weekday::Mon).is_empty());
        assert!(schedule.slots_for(Weekday::Sun).is_empty());
    }
}
