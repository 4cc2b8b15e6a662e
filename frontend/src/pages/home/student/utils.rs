use crate::api::AttendanceStatus;

pub const WEEKEND_MESSAGE: &str = "🌟 Coooolll ! Mais désolé, vous ne pouvez pas marquer votre présence ni votre absence le week-end. Rejoignez-nous dès lundi ! 😊";
pub const STATUS_REQUIRED_MESSAGE: &str = "Veuillez sélectionner au moins un statut.";
pub const REASON_REQUIRED_MESSAGE: &str = "Le motif est requis en cas d'absence.";

/// Single source of truth for the two check-in toggles. Mutual exclusion is
/// structural: the enum cannot hold both states at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttendanceChoice {
    #[default]
    Unselected,
    Present,
    Absent,
}

pub fn toggle_present(current: AttendanceChoice) -> AttendanceChoice {
    if current == AttendanceChoice::Present {
        AttendanceChoice::Unselected
    } else {
        AttendanceChoice::Present
    }
}

pub fn toggle_absent(current: AttendanceChoice) -> AttendanceChoice {
    if current == AttendanceChoice::Absent {
        AttendanceChoice::Unselected
    } else {
        AttendanceChoice::Absent
    }
}

pub fn can_submit(choice: AttendanceChoice, reason: &str) -> bool {
    match choice {
        AttendanceChoice::Unselected => false,
        AttendanceChoice::Present => true,
        AttendanceChoice::Absent => !reason.trim().is_empty(),
    }
}

/// Maps the form state to the submittable status and reason.
pub fn validate(
    choice: AttendanceChoice,
    reason: &str,
) -> Result<(AttendanceStatus, Option<String>), String> {
    match choice {
        AttendanceChoice::Unselected => Err(STATUS_REQUIRED_MESSAGE.to_string()),
        AttendanceChoice::Present => Ok((AttendanceStatus::Present, None)),
        AttendanceChoice::Absent => {
            let reason = reason.trim();
            if reason.is_empty() {
                Err(REASON_REQUIRED_MESSAGE.to_string())
            } else {
                Ok((AttendanceStatus::Absent, Some(reason.to_string())))
            }
        }
    }
}
