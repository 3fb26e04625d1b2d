use crate::models::candidate::InterviewStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot move back from {from} to {to}")]
    BackwardTransition {
        from: InterviewStatus,
        to: InterviewStatus,
    },
    #[error("cannot move from {from} to {to}: a hired candidate cannot be rejected or blacklisted, a rejected one cannot be hired")]
    InvalidTerminalTransition {
        from: InterviewStatus,
        to: InterviewStatus,
    },
}

/// Decides whether a candidate may move from `current` to `requested`.
///
/// `Hired` never becomes `Rejected` or `Blacklisted` and `Rejected` never
/// becomes `Hired`; that rule is checked first so `Rejected -> Hired` reports
/// the terminal conflict rather than a regression. Otherwise statuses only
/// move forward along [`InterviewStatus::ALL`] (staying put is allowed).
pub fn check_transition(
    current: InterviewStatus,
    requested: InterviewStatus,
) -> Result<(), TransitionError> {
    let terminal_conflict = matches!(
        (current, requested),
        (
            InterviewStatus::Hired,
            InterviewStatus::Rejected | InterviewStatus::Blacklisted
        ) | (InterviewStatus::Rejected, InterviewStatus::Hired)
    );
    if terminal_conflict {
        return Err(TransitionError::InvalidTerminalTransition {
            from: current,
            to: requested,
        });
    }

    if requested.index() < current.index() {
        return Err(TransitionError::BackwardTransition {
            from: current,
            to: requested,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use InterviewStatus::*;

    #[test]
    fn documented_examples() {
        assert!(check_transition(Shortlisted, SecondInterviewComplete).is_ok());
        assert_eq!(
            check_transition(SecondInterviewComplete, Shortlisted),
            Err(TransitionError::BackwardTransition {
                from: SecondInterviewComplete,
                to: Shortlisted
            })
        );
        assert_eq!(
            check_transition(Hired, Rejected),
            Err(TransitionError::InvalidTerminalTransition {
                from: Hired,
                to: Rejected
            })
        );
        assert!(check_transition(Rejected, Blacklisted).is_ok());
    }

    #[test]
    fn rejected_to_hired_reports_terminal_conflict() {
        assert_eq!(
            check_transition(Rejected, Hired),
            Err(TransitionError::InvalidTerminalTransition {
                from: Rejected,
                to: Hired
            })
        );
    }

    #[test]
    fn full_table() {
        for current in InterviewStatus::ALL {
            for requested in InterviewStatus::ALL {
                let outcome = check_transition(current, requested);
                let terminal = (current == Hired && matches!(requested, Rejected | Blacklisted))
                    || (current == Rejected && requested == Hired);
                if terminal {
                    assert!(
                        matches!(outcome, Err(TransitionError::InvalidTerminalTransition { .. })),
                        "{current} -> {requested}"
                    );
                } else if requested.index() < current.index() {
                    assert!(
                        matches!(outcome, Err(TransitionError::BackwardTransition { .. })),
                        "{current} -> {requested}"
                    );
                } else {
                    assert!(outcome.is_ok(), "{current} -> {requested}");
                }
            }
        }
    }
}
