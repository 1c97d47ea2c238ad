// Attendance status values
//
// The explicit log is a sequence of transitions between these four states.
// COME and AWAKE both mean "actively present"; AWAY means "on shift but
// idle"; LEAVE means "off shift". COME opens a workday, AWAKE resumes after
// an AWAY period.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Attendance status of an employee at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Present, workday started via explicit clock-in
    Come,
    /// Present, resumed after an AWAY period
    Awake,
    /// On shift but idle (stepped away)
    Away,
    /// Off shift
    Leave,
}

impl Status {
    /// Actively present (an "open" state the corrector does not need to
    /// re-open).
    pub fn is_present(self) -> bool {
        matches!(self, Status::Come | Status::Awake)
    }

    /// Still on shift, including idle AWAY periods.
    pub fn is_on_shift(self) -> bool {
        !matches!(self, Status::Leave)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Come => "come",
            Status::Awake => "awake",
            Status::Away => "away",
            Status::Leave => "leave",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "come" => Ok(Status::Come),
            "awake" => Ok(Status::Awake),
            "away" => Ok(Status::Away),
            "leave" => Ok(Status::Leave),
            other => Err(crate::error::AttendanceError::invalid_status(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_predicates() {
        assert!(Status::Come.is_present());
        assert!(Status::Awake.is_present());
        assert!(!Status::Away.is_present());
        assert!(!Status::Leave.is_present());

        assert!(Status::Away.is_on_shift());
        assert!(!Status::Leave.is_on_shift());
    }

    #[test]
    fn round_trips_through_str() {
        for status in [Status::Come, Status::Awake, Status::Away, Status::Leave] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("asleep".parse::<Status>().is_err());
    }
}
